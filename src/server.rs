// ABOUTME: HTTP server assembly binding routes, middleware, and the listener
// ABOUTME: Stateless router; any number of requests can run concurrently without coordination
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::config::ServerConfig;
use crate::middleware::setup_cors;
use crate::routes::{HealthRoutes, NutritionRoutes};
use anyhow::{Context, Result};
use axum::Router;
use std::future;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// The CalorieWise HTTP server
pub struct NutritionServer {
    config: ServerConfig,
}

impl NutritionServer {
    /// Create a server for the given configuration
    #[must_use]
    pub const fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Assemble the full application router with middleware layers
    #[must_use]
    pub fn router(&self) -> Router {
        Router::new()
            .merge(HealthRoutes::routes())
            .merge(NutritionRoutes::routes())
            .layer(setup_cors(&self.config))
            .layer(TraceLayer::new_for_http())
    }

    /// Bind the listener and serve until shutdown
    ///
    /// # Errors
    ///
    /// Returns an error when the bind address is unavailable or the server
    /// terminates abnormally.
    pub async fn run(self) -> Result<()> {
        let addr = format!("{}:{}", self.config.host, self.config.http_port);
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        info!("CalorieWise API listening on {addr}");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server terminated abnormally")?;

        info!("Server stopped");
        Ok(())
    }
}

/// Resolve when the process receives a shutdown signal
async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received, stopping server"),
        Err(e) => {
            error!("Failed to install shutdown signal handler: {e}");
            // Without a handler there is nothing to wait for; keep serving
            future::pending::<()>().await;
        }
    }
}
