// ABOUTME: Named unit-conversion and energy constants used by the nutrition calculator
// ABOUTME: Provides documented constants to eliminate magic numbers in calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Kilograms per pound conversion factor
pub const KG_PER_LB: f64 = 0.453592;

/// Centimeters per foot conversion factor
pub const CM_PER_FOOT: f64 = 30.48;

/// Centimeters per inch conversion factor
pub const CM_PER_INCH: f64 = 2.54;

/// Centimeters per meter
pub const CM_PER_METER: f64 = 100.0;

/// Energy density of protein (kcal per gram)
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

/// Energy density of carbohydrate (kcal per gram)
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;

/// Energy density of fat (kcal per gram)
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Energy equivalent of one kilogram of body mass (kcal)
///
/// The conventional 7700 kcal/kg figure used to project weight change
/// from a sustained daily calorie deficit or surplus.
pub const KCAL_PER_KG_BODY_MASS: f64 = 7700.0;

/// Days per week
pub const DAYS_PER_WEEK: f64 = 7.0;

/// Meal count assumed when a request does not specify one
pub const DEFAULT_MEAL_COUNT: u32 = 4;
