// ABOUTME: Basal metabolic rate and total daily energy expenditure calculations
// ABOUTME: Implements the Mifflin-St Jeor equation and fixed activity multipliers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use serde::{Deserialize, Serialize};

/// Gender for BMR calculation purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male constant set (+5)
    Male,
    /// Female constant set (-161), also applied to unspecified genders
    Female,
}

impl Gender {
    /// Parse a gender tag; anything other than `male` uses the female constants
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "male" => Self::Male,
            _ => Self::Female,
        }
    }
}

/// Self-reported activity level scaling BMR into TDEE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise (default)
    #[default]
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise and a physical job
    ExtraActive,
}

impl ActivityLevel {
    /// Parse an activity tag, defaulting to sedentary for anything unrecognized
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "light" => Self::Light,
            "moderate" => Self::Moderate,
            "active" => Self::Active,
            "extra_active" => Self::ExtraActive,
            _ => Self::Sedentary,
        }
    }

    /// TDEE multiplier applied to BMR
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::Light => 1.375,
            Self::Moderate => 1.55,
            Self::Active => 1.725,
            Self::ExtraActive => 1.9,
        }
    }
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Formula:
/// - Male: BMR = 10 × weight(kg) + 6.25 × height(cm) − 5 × age + 5
/// - Female: BMR = 10 × weight(kg) + 6.25 × height(cm) − 5 × age − 161
///
/// The raw formula value is returned unclamped; implausible inputs produce
/// implausible (possibly negative) output rather than an error.
#[must_use]
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Calculate Total Daily Energy Expenditure from BMR and activity level
#[must_use]
pub fn calculate_tdee(bmr: f64, activity: ActivityLevel) -> f64 {
    bmr * activity.multiplier()
}
