// ABOUTME: Macronutrient breakdown of a daily calorie target into gram amounts
// ABOUTME: Uses 4 kcal/g for protein and carbs, 9 kcal/g for fat
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::constants::{KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN};
use serde::{Deserialize, Serialize};

/// Fractional calorie split across the three macronutrients
///
/// The fractions are used as-is; nothing checks that they sum to 1.0, so a
/// client asking for 50/50/50 gets exactly that.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRatios {
    /// Fraction of calories from protein
    pub protein: f64,
    /// Fraction of calories from carbohydrates
    pub carbs: f64,
    /// Fraction of calories from fat
    pub fats: f64,
}

impl Default for MacroRatios {
    fn default() -> Self {
        Self {
            protein: 0.30,
            carbs: 0.40,
            fats: 0.30,
        }
    }
}

/// One macronutrient's share of the daily target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroAmount {
    /// Grams per day, rounded to the nearest whole gram
    pub grams: i64,
    /// Share of total calories as a whole percentage
    pub percent: i64,
}

/// Complete macronutrient breakdown for a calorie target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroBreakdown {
    /// Protein share
    pub protein: MacroAmount,
    /// Carbohydrate share
    pub carbs: MacroAmount,
    /// Fat share
    pub fats: MacroAmount,
}

fn macro_amount(calories: f64, ratio: f64, kcal_per_gram: f64) -> MacroAmount {
    MacroAmount {
        grams: (calories * ratio / kcal_per_gram).round() as i64,
        percent: (ratio * 100.0).round() as i64,
    }
}

/// Split a calorie target into per-macro gram amounts and percentages
///
/// Each macro is rounded independently; the gram-implied calories therefore
/// drift slightly from the input target and the percentages are not
/// renormalized to sum to 100.
#[must_use]
pub fn calculate_macros(calories: f64, ratios: Option<MacroRatios>) -> MacroBreakdown {
    let ratios = ratios.unwrap_or_default();
    MacroBreakdown {
        protein: macro_amount(calories, ratios.protein, KCAL_PER_GRAM_PROTEIN),
        carbs: macro_amount(calories, ratios.carbs, KCAL_PER_GRAM_CARBS),
        fats: macro_amount(calories, ratios.fats, KCAL_PER_GRAM_FAT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ratios_sum_to_one() {
        let ratios = MacroRatios::default();
        assert!((ratios.protein + ratios.carbs + ratios.fats - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_default_split_of_2000_kcal() {
        let macros = calculate_macros(2000.0, None);
        assert_eq!(macros.protein, MacroAmount { grams: 150, percent: 30 });
        assert_eq!(macros.carbs, MacroAmount { grams: 200, percent: 40 });
        assert_eq!(macros.fats, MacroAmount { grams: 67, percent: 30 });
    }

    #[test]
    fn test_custom_ratios() {
        let ratios = MacroRatios {
            protein: 0.40,
            carbs: 0.30,
            fats: 0.30,
        };
        let macros = calculate_macros(2500.0, Some(ratios));
        assert_eq!(macros.protein.grams, 250);
        assert_eq!(macros.carbs.grams, 188);
        assert_eq!(macros.fats.grams, 83);
        assert_eq!(macros.protein.percent, 40);
        assert_eq!(macros.carbs.percent, 30);
        assert_eq!(macros.fats.percent, 30);
    }

    #[test]
    fn test_ratios_are_not_normalized() {
        let ratios = MacroRatios {
            protein: 0.5,
            carbs: 0.5,
            fats: 0.5,
        };
        let macros = calculate_macros(1000.0, Some(ratios));
        assert_eq!(macros.protein.percent, 50);
        assert_eq!(macros.carbs.percent, 50);
        assert_eq!(macros.fats.percent, 50);
        assert_eq!(macros.protein.grams, 125);
        assert_eq!(macros.fats.grams, 56);
    }

    #[test]
    fn test_negative_calorie_target_yields_negative_grams() {
        let macros = calculate_macros(-500.0, None);
        assert_eq!(macros.protein.grams, -38);
        assert_eq!(macros.carbs.grams, -50);
        assert!(macros.fats.grams < 0);
    }

    #[test]
    fn test_breakdown_serializes_with_grams_and_percent() {
        let macros = calculate_macros(2000.0, None);
        let value = serde_json::to_value(macros).unwrap();
        assert_eq!(value["protein"]["grams"], 150);
        assert_eq!(value["protein"]["percent"], 30);
        assert_eq!(value["fats"]["grams"], 67);
    }
}
