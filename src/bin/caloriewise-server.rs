// ABOUTME: Binary entrypoint for the CalorieWise nutrition calculation server
// ABOUTME: Loads configuration, initializes logging, and runs the HTTP server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # CalorieWise Server Binary
//!
//! This binary starts the CalorieWise HTTP API: BMR/TDEE/BMI calculations,
//! macronutrient breakdowns, and meal plan distribution over JSON.

use anyhow::Result;
use caloriewise::{config::ServerConfig, logging, server::NutritionServer};
use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[command(name = "caloriewise-server")]
#[command(about = "CalorieWise - Nutrition calculation API for calorie and macro planning")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Handle Docker environment where clap may not work properly
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Argument parsing failed: {e}");
            eprintln!("Using default configuration");
            Args { http_port: None }
        }
    };

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    // Override port if specified
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting CalorieWise nutrition API");
    info!("{}", config.summary());

    display_available_endpoints(&config);

    info!("Ready to serve nutrition calculations!");

    NutritionServer::new(config).run().await
}

/// Display all available API endpoints with the bound host and port
fn display_available_endpoints(config: &ServerConfig) {
    let host = if config.host == "0.0.0.0" {
        "127.0.0.1"
    } else {
        &config.host
    };
    let port = config.http_port;

    info!("=== Available API Endpoints ===");
    info!("Health:");
    info!("   Liveness:   GET  http://{host}:{port}/health");
    info!("   Readiness:  GET  http://{host}:{port}/ready");
    info!("Nutrition:");
    info!("   Full calculation:  POST http://{host}:{port}/calculate");
    info!("   Macro breakdown:   POST http://{host}:{port}/macros");
    info!("   Meal plan:         POST http://{host}:{port}/meal-plan");
    info!("=== End of Endpoint List ===");
}
