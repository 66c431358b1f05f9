// ABOUTME: Route module organization for CalorieWise HTTP endpoints
// ABOUTME: Each domain module contains route definitions and thin handler functions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Route modules for the CalorieWise API
//!
//! Handlers stay thin: they extract request fields, delegate to the
//! calculator core, and wrap the outcome in the response envelope.

/// Health check and readiness routes
pub mod health;
/// Nutrition calculation routes
pub mod nutrition;

/// Health check route handlers
pub use health::HealthRoutes;
/// Nutrition calculation route handlers
pub use nutrition::NutritionRoutes;
