// ABOUTME: CORS middleware configuration for HTTP API endpoints
// ABOUTME: Provides Cross-Origin Resource Sharing setup for web client access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::config::ServerConfig;
use http::{header::HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Configure CORS settings for the API server
///
/// Cross-origin behavior follows the `CORS_ORIGINS` environment variable:
/// wildcard ("*") for development, a comma-separated origin list for
/// production. Origins that fail to parse as header values are skipped; if
/// none survive, the layer falls back to allowing any origin.
///
/// # Examples
///
/// ```bash
/// # Allow all origins (development)
/// export CORS_ORIGINS="*"
///
/// # Allow specific origins (production)
/// export CORS_ORIGINS="https://app.example.com,https://admin.example.com"
/// ```
#[must_use]
pub fn setup_cors(config: &ServerConfig) -> CorsLayer {
    let allow_origin = if config.cors_origins.is_empty()
        || config.cors_origins.iter().any(|origin| origin == "*")
    {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|origin| {
                let trimmed = origin.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    HeaderValue::from_str(trimmed).ok()
                }
            })
            .collect();

        if origins.is_empty() {
            // Fallback to any if parsing failed
            AllowOrigin::any()
        } else {
            AllowOrigin::list(origins)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static("access-control-request-method"),
            HeaderName::from_static("access-control-request-headers"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_config_builds_a_layer() {
        let config = ServerConfig::default();
        let _layer = setup_cors(&config);
    }

    #[test]
    fn test_origin_list_config_builds_a_layer() {
        let config = ServerConfig {
            cors_origins: vec!["https://app.example.com".into()],
            ..ServerConfig::default()
        };
        let _layer = setup_cors(&config);
    }
}
