// ABOUTME: Main library entry point for the CalorieWise nutrition API
// ABOUTME: Exposes the calculator core plus the HTTP server glue around it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # CalorieWise
//!
//! A nutrition calculation service: BMR, TDEE, BMI, macronutrient breakdown,
//! meal distribution, and projected weekly weight change, served over a small
//! JSON HTTP API.
//!
//! The calculator core is a set of pure, stateless functions; the HTTP layer
//! is thin glue that extracts request fields, runs the calculation, and wraps
//! the outcome in a `{success, data | error}` envelope.
//!
//! ## Example
//!
//! ```rust
//! use caloriewise::calculator::{calculate_bmr, calculate_tdee, ActivityLevel, Gender};
//!
//! let bmr = calculate_bmr(70.0, 175.0, 25, Gender::Male);
//! assert!((bmr - 1673.75).abs() < 1e-9);
//!
//! let tdee = calculate_tdee(bmr, ActivityLevel::Sedentary);
//! assert!((tdee - 2008.5).abs() < 1e-9);
//! ```

/// Nutrition calculation engine (pure, stateless)
pub mod calculator;

/// Environment-based configuration
pub mod config;

/// Unit-conversion and energy constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (CORS)
pub mod middleware;

/// JSON response envelope
pub mod responses;

/// HTTP route handlers
pub mod routes;

/// HTTP server assembly
pub mod server;
