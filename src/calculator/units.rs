// ABOUTME: Weight and height unit tags with conversion into metric base units
// ABOUTME: All calculator math runs on kilograms and centimeters after normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::constants::{CM_PER_FOOT, CM_PER_INCH, KG_PER_LB};

/// Unit of a weight value supplied by a client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeightUnit {
    /// Kilograms (default)
    #[default]
    Kilograms,
    /// Pounds, converted at 0.453592 kg/lb
    Pounds,
}

impl WeightUnit {
    /// Parse a unit tag, defaulting to kilograms for anything unrecognized
    ///
    /// Matches the lenient wire behavior: only `lbs` selects pounds, any
    /// other tag passes the value through as kilograms.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "lbs" => Self::Pounds,
            _ => Self::Kilograms,
        }
    }
}

/// Unit of a height value supplied by a client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeightUnit {
    /// Centimeters (default)
    #[default]
    Centimeters,
    /// Feet and inches
    Feet,
}

impl HeightUnit {
    /// Parse a unit tag, defaulting to centimeters for anything unrecognized
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "ft" => Self::Feet,
            _ => Self::Centimeters,
        }
    }
}

/// A height in one of the two supported representations
///
/// Imperial height is carried exclusively as feet plus inches; there is no
/// single "height in feet" number, so the two representations cannot be
/// mixed up downstream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeightMeasurement {
    /// Height already in centimeters
    Centimeters(f64),
    /// Height as feet and inches
    FeetInches {
        /// Whole feet component
        feet: f64,
        /// Inches component
        inches: f64,
    },
}

impl HeightMeasurement {
    /// Build a measurement from the raw request fields
    ///
    /// When the unit is feet, only `feet` and `inches` are consulted and the
    /// primary `value` is ignored; both default to zero when the client sends
    /// neither, which yields a zero height and a division-by-zero error once
    /// BMI is computed.
    #[must_use]
    pub fn from_parts(unit: HeightUnit, value: f64, feet: f64, inches: f64) -> Self {
        match unit {
            HeightUnit::Centimeters => Self::Centimeters(value),
            HeightUnit::Feet => Self::FeetInches { feet, inches },
        }
    }
}

/// Normalize a weight value to kilograms
#[must_use]
pub fn convert_weight(value: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Kilograms => value,
        WeightUnit::Pounds => value * KG_PER_LB,
    }
}

/// Normalize a height measurement to centimeters
#[must_use]
pub fn convert_height(height: HeightMeasurement) -> f64 {
    match height {
        HeightMeasurement::Centimeters(value) => value,
        HeightMeasurement::FeetInches { feet, inches } => {
            feet * CM_PER_FOOT + inches * CM_PER_INCH
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_unit_parsing() {
        assert_eq!(WeightUnit::from_str_lossy("lbs"), WeightUnit::Pounds);
        assert_eq!(WeightUnit::from_str_lossy("LBS"), WeightUnit::Pounds);
        assert_eq!(WeightUnit::from_str_lossy("kg"), WeightUnit::Kilograms);
        // Unrecognized tags fall back to kilograms rather than erroring
        assert_eq!(WeightUnit::from_str_lossy("stone"), WeightUnit::Kilograms);
        assert_eq!(WeightUnit::from_str_lossy(""), WeightUnit::Kilograms);
    }

    #[test]
    fn test_height_unit_parsing() {
        assert_eq!(HeightUnit::from_str_lossy("ft"), HeightUnit::Feet);
        assert_eq!(HeightUnit::from_str_lossy("FT"), HeightUnit::Feet);
        assert_eq!(HeightUnit::from_str_lossy("cm"), HeightUnit::Centimeters);
        assert_eq!(HeightUnit::from_str_lossy("meters"), HeightUnit::Centimeters);
    }

    #[test]
    fn test_pounds_to_kilograms() {
        let kg = convert_weight(154.324, WeightUnit::Pounds);
        assert!((kg - 70.0).abs() < 0.01);
    }

    #[test]
    fn test_kilograms_pass_through() {
        let kg = convert_weight(70.0, WeightUnit::Kilograms);
        assert!((kg - 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_feet_inches_to_centimeters() {
        let cm = convert_height(HeightMeasurement::FeetInches {
            feet: 5.0,
            inches: 10.0,
        });
        assert!((cm - 177.8).abs() < 1e-9);
    }

    #[test]
    fn test_centimeters_pass_through() {
        let cm = convert_height(HeightMeasurement::Centimeters(175.0));
        assert!((cm - 175.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_parts_ignores_primary_value_for_feet() {
        let height = HeightMeasurement::from_parts(HeightUnit::Feet, 175.0, 6.0, 0.0);
        assert_eq!(
            height,
            HeightMeasurement::FeetInches {
                feet: 6.0,
                inches: 0.0
            }
        );
        assert!((convert_height(height) - 182.88).abs() < 1e-9);
    }

    #[test]
    fn test_feet_with_no_components_yields_zero_height() {
        let height = HeightMeasurement::from_parts(HeightUnit::Feet, 180.0, 0.0, 0.0);
        assert!(convert_height(height).abs() < f64::EPSILON);
    }
}
