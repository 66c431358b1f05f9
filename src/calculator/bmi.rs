// ABOUTME: Body Mass Index calculation and WHO category classification
// ABOUTME: Zero height is reported as a division-by-zero error, never as inf/NaN
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::constants::CM_PER_METER;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// WHO BMI classification buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI from 18.5 up to but excluding 25
    Normal,
    /// BMI from 25 up to but excluding 30
    Overweight,
    /// BMI of 30 or above
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value; boundary values land in the higher bucket
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Category label as it appears in API responses
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calculate Body Mass Index: weight(kg) / height(m)²
///
/// Returns a `DivisionByZero` error for a zero height instead of letting the
/// quotient run to infinity.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> AppResult<f64> {
    if height_cm.abs() < f64::EPSILON {
        return Err(AppError::division_by_zero(
            "Cannot calculate BMI with a height of zero",
        ));
    }
    let height_m = height_cm / CM_PER_METER;
    Ok(weight_kg / (height_m * height_m))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_bmi_reference_case() {
        let bmi = calculate_bmi(70.0, 175.0).unwrap();
        assert!((bmi - 22.857).abs() < 0.001);
        assert_eq!(BmiCategory::from_bmi(bmi), BmiCategory::Normal);
    }

    #[test]
    fn test_zero_height_is_an_error_not_infinity() {
        let err = calculate_bmi(70.0, 0.0).unwrap_err();
        assert_eq!(err.code, ErrorCode::DivisionByZero);
    }

    #[test]
    fn test_category_boundaries() {
        assert_eq!(BmiCategory::from_bmi(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(24.99), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(29.99), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(BmiCategory::Underweight.to_string(), "Underweight");
        assert_eq!(BmiCategory::Obese.as_str(), "Obese");
    }

    #[test]
    fn test_category_serializes_as_label() {
        let json = serde_json::to_string(&BmiCategory::Overweight).unwrap();
        assert_eq!(json, "\"Overweight\"");
    }

    #[test]
    fn test_negative_height_still_produces_a_number() {
        // Nonsensical but well-defined: the square makes the denominator positive
        let bmi = calculate_bmi(70.0, -175.0).unwrap();
        assert!(bmi.is_finite());
        assert!(bmi > 0.0);
    }
}
