// ABOUTME: Nutrition calculation engine with pure stateless formulas
// ABOUTME: Orchestrates unit normalization, BMR/TDEE, BMI, macros, and meal planning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Nutrition Calculation Engine
//!
//! Every public operation is an independent pure function over its inputs:
//! no shared state, no I/O, no retries. [`calculate_all`] sequences the
//! individual calculations into the full metric bundle served by the API.

/// BMI calculation and WHO category classification
pub mod bmi;
/// Mifflin-St Jeor BMR and activity-scaled TDEE
pub mod energy;
/// Macronutrient distribution of a calorie target
pub mod macronutrients;
/// Meal-by-meal calorie distribution tables
pub mod meal_plan;
/// Unit tags and normalization into kg/cm
pub mod units;

pub use bmi::{calculate_bmi, BmiCategory};
pub use energy::{calculate_bmr, calculate_tdee, ActivityLevel, Gender};
pub use macronutrients::{calculate_macros, MacroAmount, MacroBreakdown, MacroRatios};
pub use meal_plan::generate_meal_plan;
pub use units::{convert_height, convert_weight, HeightMeasurement, HeightUnit, WeightUnit};

use crate::constants::{DAYS_PER_WEEK, DEFAULT_MEAL_COUNT, KCAL_PER_KG_BODY_MASS};
use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Weight management goal, each mapping to a fixed daily calorie adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Aggressive loss: -1000 kcal/day
    LoseFast,
    /// Steady loss: -500 kcal/day
    Lose,
    /// Hold current weight (default)
    #[default]
    Maintain,
    /// Steady gain: +500 kcal/day
    Gain,
    /// Aggressive gain: +1000 kcal/day
    GainFast,
}

impl Goal {
    /// Parse a goal tag, defaulting to maintain for anything unrecognized
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "lose_fast" => Self::LoseFast,
            "lose" => Self::Lose,
            "gain" => Self::Gain,
            "gain_fast" => Self::GainFast,
            _ => Self::Maintain,
        }
    }

    /// Daily calorie delta applied to TDEE
    #[must_use]
    pub const fn daily_adjustment(self) -> i64 {
        match self {
            Self::LoseFast => -1000,
            Self::Lose => -500,
            Self::Maintain => 0,
            Self::Gain => 500,
            Self::GainFast => 1000,
        }
    }
}

/// Input parameters for a full nutrition calculation
///
/// Weight and height arrive in whatever unit the client used; normalization
/// into kg/cm happens inside [`calculate_all`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutritionParams {
    /// Age in years
    pub age: u32,
    /// Gender for the BMR constant set
    pub gender: Gender,
    /// Weight value in `weight_unit`
    pub weight: f64,
    /// Unit of `weight`
    pub weight_unit: WeightUnit,
    /// Height in either representation
    pub height: HeightMeasurement,
    /// Activity level scaling BMR to TDEE
    pub activity: ActivityLevel,
    /// Weight management goal
    pub goal: Goal,
}

/// Complete bundle of derived nutrition metrics
///
/// Field order matches the serialized wire layout; `weekly_deficit_surplus`
/// carries the daily goal adjustment under its historical wire name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionResult {
    /// Basal metabolic rate, rounded to whole kcal
    pub bmr: i64,
    /// Total daily energy expenditure, rounded to whole kcal
    pub tdee: i64,
    /// Daily calorie target after the goal adjustment
    pub daily_calories: i64,
    /// Body mass index, one decimal
    pub bmi: f64,
    /// BMI classification label
    pub bmi_category: BmiCategory,
    /// Macro split of the daily target (default ratios)
    pub macros: MacroBreakdown,
    /// Meal distribution of the daily target (default meal count)
    pub meal_plan: BTreeMap<String, i64>,
    /// Daily goal adjustment in kcal
    pub weekly_deficit_surplus: i64,
    /// Projected body-mass change per week in kg, two decimals
    pub projected_weekly_change_kg: f64,
    /// Normalized weight in kg, one decimal
    pub weight_kg: f64,
    /// Normalized height in cm, one decimal
    pub height_cm: f64,
}

/// Round to a fixed number of decimal places, ties away from zero
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Run the full calculation sequence for one set of parameters
///
/// Normalizes units, derives BMR/TDEE/BMI, applies the goal adjustment to
/// produce the daily calorie target, then distributes that target across
/// macros and meals. The only failure mode is a zero height reaching the
/// BMI division; everything else is pure arithmetic. Identical inputs
/// always produce identical output.
pub fn calculate_all(params: &NutritionParams) -> AppResult<NutritionResult> {
    let weight_kg = convert_weight(params.weight, params.weight_unit);
    let height_cm = convert_height(params.height);

    let bmr = calculate_bmr(weight_kg, height_cm, params.age, params.gender);
    let tdee = calculate_tdee(bmr, params.activity);
    let bmi_value = calculate_bmi(weight_kg, height_cm)?;
    let category = BmiCategory::from_bmi(bmi_value);

    let adjustment = params.goal.daily_adjustment();
    let daily_calories = (tdee + adjustment as f64).round() as i64;

    let macros = calculate_macros(daily_calories as f64, None);
    let plan = generate_meal_plan(daily_calories as f64, DEFAULT_MEAL_COUNT);

    let weekly_change = (adjustment as f64 * DAYS_PER_WEEK) / KCAL_PER_KG_BODY_MASS;

    Ok(NutritionResult {
        bmr: bmr.round() as i64,
        tdee: tdee.round() as i64,
        daily_calories,
        bmi: round_to(bmi_value, 1),
        bmi_category: category,
        macros,
        meal_plan: plan,
        weekly_deficit_surplus: adjustment,
        projected_weekly_change_kg: round_to(weekly_change, 2),
        weight_kg: round_to(weight_kg, 1),
        height_cm: round_to(height_cm, 1),
    })
}
