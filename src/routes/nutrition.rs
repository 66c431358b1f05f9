// ABOUTME: Nutrition calculation route handlers for the public JSON API
// ABOUTME: Extracts request fields, delegates to the calculator core, wraps results in the envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Nutrition calculation routes
//!
//! Three POST endpoints cover the calculator surface: `/calculate` for the
//! full metric bundle, `/macros` for a standalone macro split, and
//! `/meal-plan` for a standalone meal distribution. Required fields are
//! pulled from the JSON body by hand so a missing or mistyped field produces
//! a 400 naming exactly that field.

use crate::calculator::{
    calculate_all, calculate_macros, generate_meal_plan, ActivityLevel, Gender, Goal,
    HeightMeasurement, HeightUnit, MacroRatios, NutritionParams, WeightUnit,
};
use crate::constants::DEFAULT_MEAL_COUNT;
use crate::errors::{AppError, AppResult};
use crate::responses::ApiResponse;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::Value;

/// Nutrition calculation routes
pub struct NutritionRoutes;

impl NutritionRoutes {
    /// Create all nutrition calculation routes
    pub fn routes() -> Router {
        Router::new()
            .route("/calculate", post(Self::handle_calculate))
            .route("/macros", post(Self::handle_macros))
            .route("/meal-plan", post(Self::handle_meal_plan))
    }

    /// Handle a full nutrition calculation request
    async fn handle_calculate(
        body: Result<Json<Value>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let data = extract_body(body)?;
        let params = parse_calculate_params(&data)?;
        let result = calculate_all(&params)?;
        Ok((StatusCode::OK, Json(ApiResponse::success(result))).into_response())
    }

    /// Handle a standalone macro distribution request
    async fn handle_macros(body: Result<Json<Value>, JsonRejection>) -> Result<Response, AppError> {
        let data = extract_body(body)?;
        let calories = require_f64(&data, "calories")?;
        let ratios = parse_ratios(&data)?;
        let macros = calculate_macros(calories, ratios);
        Ok((StatusCode::OK, Json(ApiResponse::success(macros))).into_response())
    }

    /// Handle a standalone meal plan request
    async fn handle_meal_plan(
        body: Result<Json<Value>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let data = extract_body(body)?;
        let calories = require_f64(&data, "calories")?;
        let meals = data
            .get("meals")
            .and_then(Value::as_u64)
            .map_or(DEFAULT_MEAL_COUNT, |m| m as u32);
        let plan = generate_meal_plan(calories, meals);
        Ok((StatusCode::OK, Json(ApiResponse::success(plan))).into_response())
    }
}

/// Unwrap the JSON body extractor, mapping rejections into the envelope
fn extract_body(body: Result<Json<Value>, JsonRejection>) -> AppResult<Value> {
    body.map(|Json(data)| data)
        .map_err(|e| AppError::invalid_format(format!("Request body must be valid JSON: {e}")))
}

/// Required numeric field lookup
fn require_f64(data: &Value, field: &str) -> AppResult<f64> {
    data.get(field)
        .and_then(Value::as_f64)
        .ok_or_else(|| AppError::missing_field(field))
}

/// Required string field lookup
fn require_str<'a>(data: &'a Value, field: &str) -> AppResult<&'a str> {
    data.get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::missing_field(field))
}

/// Build calculation parameters from a request body
///
/// Unit tags and enum keys parse leniently (unknown values fall back to
/// their defaults); only absent or mistyped required fields are errors.
fn parse_calculate_params(data: &Value) -> AppResult<NutritionParams> {
    let age = data
        .get("age")
        .and_then(Value::as_u64)
        .ok_or_else(|| AppError::missing_field("age"))? as u32;
    let gender = Gender::from_str_lossy(require_str(data, "gender")?);
    let weight = require_f64(data, "weight")?;
    let height = require_f64(data, "height")?;
    let activity = ActivityLevel::from_str_lossy(require_str(data, "activity")?);
    let goal = Goal::from_str_lossy(require_str(data, "goal")?);

    let weight_unit = WeightUnit::from_str_lossy(
        data.get("weight_unit").and_then(Value::as_str).unwrap_or("kg"),
    );
    let height_unit = HeightUnit::from_str_lossy(
        data.get("height_unit").and_then(Value::as_str).unwrap_or("cm"),
    );
    let feet = data.get("feet").and_then(Value::as_f64).unwrap_or(0.0);
    let inches = data.get("inches").and_then(Value::as_f64).unwrap_or(0.0);

    Ok(NutritionParams {
        age,
        gender,
        weight,
        weight_unit,
        height: HeightMeasurement::from_parts(height_unit, height, feet, inches),
        activity,
        goal,
    })
}

/// Optional custom ratios; when present, all three fields are required
fn parse_ratios(data: &Value) -> AppResult<Option<MacroRatios>> {
    match data.get("ratios") {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|e| AppError::invalid_input(format!("Invalid ratios: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use serde_json::json;

    #[test]
    fn test_parse_calculate_params_happy_path() {
        let body = json!({
            "age": 25,
            "gender": "male",
            "weight": 70.0,
            "height": 175.0,
            "activity": "sedentary",
            "goal": "maintain"
        });
        let params = parse_calculate_params(&body).unwrap();
        assert_eq!(params.age, 25);
        assert_eq!(params.gender, Gender::Male);
        assert_eq!(params.weight_unit, WeightUnit::Kilograms);
        assert_eq!(params.height, HeightMeasurement::Centimeters(175.0));
    }

    #[test]
    fn test_parse_calculate_params_missing_field() {
        let body = json!({"age": 25, "gender": "male"});
        let err = parse_calculate_params(&body).unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingRequiredField);
        assert!(err.message.contains("weight"));
    }

    #[test]
    fn test_parse_calculate_params_mistyped_field_is_missing() {
        let body = json!({
            "age": "twenty-five",
            "gender": "male",
            "weight": 70.0,
            "height": 175.0,
            "activity": "sedentary",
            "goal": "maintain"
        });
        let err = parse_calculate_params(&body).unwrap_err();
        assert!(err.message.contains("age"));
    }

    #[test]
    fn test_parse_calculate_params_imperial_units() {
        let body = json!({
            "age": 25,
            "gender": "male",
            "weight": 154.0,
            "height": 0,
            "activity": "moderate",
            "goal": "lose",
            "weight_unit": "lbs",
            "height_unit": "ft",
            "feet": 5,
            "inches": 10
        });
        let params = parse_calculate_params(&body).unwrap();
        assert_eq!(params.weight_unit, WeightUnit::Pounds);
        assert_eq!(
            params.height,
            HeightMeasurement::FeetInches {
                feet: 5.0,
                inches: 10.0
            }
        );
    }

    #[test]
    fn test_parse_ratios_absent_gives_defaults() {
        let body = json!({"calories": 2000});
        assert!(parse_ratios(&body).unwrap().is_none());
    }

    #[test]
    fn test_parse_ratios_partial_object_is_rejected() {
        let body = json!({"calories": 2000, "ratios": {"protein": 0.5}});
        let err = parse_ratios(&body).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert!(err.message.contains("carbs") || err.message.contains("fats"));
    }

    #[test]
    fn test_parse_ratios_complete_object() {
        let body = json!({"ratios": {"protein": 0.4, "carbs": 0.3, "fats": 0.3}});
        let ratios = parse_ratios(&body).unwrap().unwrap();
        assert!((ratios.protein - 0.4).abs() < f64::EPSILON);
    }
}
