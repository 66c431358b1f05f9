// ABOUTME: Distributes a daily calorie target across named meals
// ABOUTME: Fixed split tables for 3 and 5 meals, with a 4-slot default for every other count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use std::collections::BTreeMap;

/// Three square meals
const THREE_MEAL_SPLIT: &[(&str, f64)] = &[
    ("breakfast", 0.30),
    ("lunch", 0.40),
    ("dinner", 0.30),
];

/// Three meals with two snacks between them
const FIVE_MEAL_SPLIT: &[(&str, f64)] = &[
    ("breakfast", 0.25),
    ("snack1", 0.10),
    ("lunch", 0.30),
    ("snack2", 0.10),
    ("dinner", 0.25),
];

/// Fallback split used for any meal count other than 3 or 5
const DEFAULT_SPLIT: &[(&str, f64)] = &[
    ("breakfast", 0.25),
    ("lunch", 0.35),
    ("dinner", 0.30),
    ("snacks", 0.10),
];

const fn distribution_for(meals: u32) -> &'static [(&'static str, f64)] {
    match meals {
        3 => THREE_MEAL_SPLIT,
        5 => FIVE_MEAL_SPLIT,
        _ => DEFAULT_SPLIT,
    }
}

/// Distribute a calorie target across meals using the fixed split tables
///
/// Each portion is rounded independently, so the portions can sum to a
/// kcal or two more or less than the target. That drift is accepted, not
/// corrected.
#[must_use]
pub fn generate_meal_plan(calories: f64, meals: u32) -> BTreeMap<String, i64> {
    distribution_for(meals)
        .iter()
        .map(|&(name, fraction)| (name.to_owned(), (calories * fraction).round() as i64))
        .collect()
}
