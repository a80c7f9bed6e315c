// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five card stud server entry point.
use anyhow::{Result, anyhow};
use axum::{
    Router,
    routing::{get, post},
};
use log::info;
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;

use crate::api::{self, AppState};

/// Networking config.
#[derive(Debug, Clone)]
pub struct Config {
    /// The server listening address.
    pub address: String,
    /// The server listening port.
    pub port: u16,
    /// The maximum number of players in a round.
    pub max_players: usize,
}

/// Creates the server routes.
pub fn router(config: &Config) -> Router {
    let state = AppState {
        max_players: config.max_players,
    };

    Router::new()
        .route("/health", get(api::health))
        .route("/api/round", post(api::play_round))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Server entry point.
pub async fn run(config: Config) -> Result<()> {
    let addr = format!("{}:{}", config.address, config.port);
    info!("Starting server listening on {}", addr);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow!("Tcp listener bind error: {e}"))?;

    axum::serve(listener, router(&config))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow!("Server error: {e}"))?;

    info!("Server stopped");

    Ok(())
}

/// Resolves when the process receives a ctrl-c.
async fn shutdown_signal() {
    if signal::ctrl_c().await.is_ok() {
        info!("Received shutdown signal...");
    }
}
