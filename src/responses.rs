// ABOUTME: JSON response envelope shared by every HTTP endpoint
// ABOUTME: Wraps payloads as {success, data} and failures as {success, error}
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Uniform envelope for API responses
///
/// Successful responses carry `data` and omit `error`; failures carry `error`
/// and omit `data`. Consumers can branch on `success` alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was processed successfully
    pub success: bool,
    /// Response payload, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error message, present on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Response generation time (UTC)
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    /// Wrap a payload in a success envelope
    #[must_use]
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: Utc::now(),
        }
    }

    /// Wrap an error message in a failure envelope
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_success_envelope_omits_error() {
        let response = ApiResponse::success(serde_json::json!({"bmr": 1674}));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["success"], Value::Bool(true));
        assert_eq!(value["data"]["bmr"], 1674);
        assert!(value.get("error").is_none());
        assert!(value.get("timestamp").is_some());
    }

    #[test]
    fn test_error_envelope_omits_data() {
        let response = ApiResponse::<Value>::error("Missing or invalid required parameter: age");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["success"], Value::Bool(false));
        assert!(value.get("data").is_none());
        assert_eq!(
            value["error"],
            Value::String("Missing or invalid required parameter: age".into())
        );
    }
}
