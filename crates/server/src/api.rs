// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! HTTP handlers.
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::{error, info, warn};

use fivestud_core::{
    FiveCardStud, RoundError,
    message::{ErrorResponse, RoundRequest, RoundResponse},
};

/// State shared by the handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The maximum number of players in a round.
    pub max_players: usize,
}

/// Handler errors.
#[derive(Debug)]
pub enum ApiError {
    /// The request body is not a valid round request.
    BadRequest(String),
    /// The round failed.
    Round(RoundError),
}

impl From<RoundError> for ApiError {
    fn from(err: RoundError) -> Self {
        ApiError::Round(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Round(err @ RoundError::EvaluationFailure(_)) => {
                error!("Round failed: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            ApiError::Round(err) => (StatusCode::BAD_REQUEST, err.to_string()),
        };

        if status.is_client_error() {
            warn!("Rejected round request: {msg}");
        }

        (status, Json(ErrorResponse::new(msg))).into_response()
    }
}

/// Health check.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ok": true }))
}

/// Plays a round for the players in the request.
pub async fn play_round(
    State(state): State<AppState>,
    payload: Result<Json<RoundRequest>, JsonRejection>,
) -> Result<Json<RoundResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let game = FiveCardStud::new(&req.players)?;

    // Rounds the deck cannot deal fail above as InsufficientCards.
    let players = game.players().len();
    if state.max_players < FiveCardStud::MAX_PLAYERS && players > state.max_players {
        return Err(RoundError::InvalidInput(format!(
            "at most {} players can play a round",
            state.max_players
        ))
        .into());
    }

    let result = game.play()?;
    info!(
        "Played round for {} players, winners {:?}",
        result.hands.len(),
        result.winners
    );

    Ok(Json(RoundResponse::from(&result)))
}
