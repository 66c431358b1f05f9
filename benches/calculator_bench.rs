// ABOUTME: Criterion benchmarks for the nutrition calculation pipeline
// ABOUTME: Measures the full calculation, individual components, and result serialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Criterion benchmarks for the nutrition calculator.
//!
//! Measures `calculate_all` end to end, the individual calculation
//! components, and JSON serialization of the result bundle.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use caloriewise::calculator::{
    calculate_all, calculate_bmr, calculate_macros, generate_meal_plan, ActivityLevel, Gender,
    Goal, HeightMeasurement, MacroRatios, NutritionParams, WeightUnit,
};
use caloriewise::responses::ApiResponse;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn metric_params() -> NutritionParams {
    NutritionParams {
        age: 25,
        gender: Gender::Male,
        weight: 70.0,
        weight_unit: WeightUnit::Kilograms,
        height: HeightMeasurement::Centimeters(175.0),
        activity: ActivityLevel::Moderate,
        goal: Goal::Lose,
    }
}

fn imperial_params() -> NutritionParams {
    NutritionParams {
        age: 32,
        gender: Gender::Female,
        weight: 154.324,
        weight_unit: WeightUnit::Pounds,
        height: HeightMeasurement::FeetInches {
            feet: 5.0,
            inches: 10.0,
        },
        activity: ActivityLevel::Active,
        goal: Goal::Gain,
    }
}

/// Benchmark the full calculation pipeline
fn bench_full_calculation(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_all");

    let metric = metric_params();
    group.bench_function("metric_units", |b| {
        b.iter(|| calculate_all(black_box(&metric)).unwrap());
    });

    let imperial = imperial_params();
    group.bench_function("imperial_units", |b| {
        b.iter(|| calculate_all(black_box(&imperial)).unwrap());
    });

    group.finish();
}

/// Benchmark the individual calculation components
fn bench_components(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculator_components");

    group.bench_function("bmr", |b| {
        b.iter(|| calculate_bmr(black_box(70.0), black_box(175.0), 25, Gender::Male));
    });

    group.bench_function("macros_default", |b| {
        b.iter(|| calculate_macros(black_box(2000.0), None));
    });

    let ratios = MacroRatios {
        protein: 0.40,
        carbs: 0.30,
        fats: 0.30,
    };
    group.bench_function("macros_custom", |b| {
        b.iter(|| calculate_macros(black_box(2500.0), Some(ratios)));
    });

    group.bench_function("meal_plan_4", |b| {
        b.iter(|| generate_meal_plan(black_box(2000.0), 4));
    });

    group.bench_function("meal_plan_5", |b| {
        b.iter(|| generate_meal_plan(black_box(2000.0), 5));
    });

    group.finish();
}

/// Benchmark JSON serialization of the result bundle and envelope
fn bench_result_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_result");

    let result = calculate_all(&metric_params()).unwrap();
    let serialized = serde_json::to_vec(&result).unwrap();

    group.throughput(Throughput::Bytes(serialized.len() as u64));
    group.bench_function("bundle", |b| {
        b.iter(|| serde_json::to_vec(black_box(&result)));
    });

    let envelope = ApiResponse::success(result.clone());
    group.bench_function("envelope", |b| {
        b.iter(|| serde_json::to_vec(black_box(&envelope)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_full_calculation,
    bench_components,
    bench_result_serialization,
);
criterion_main!(benches);
