// ABOUTME: HTTP middleware for cross-origin access control
// ABOUTME: Request tracing is layered directly in the server assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// CORS configuration
pub mod cors;

pub use cors::setup_cors;
