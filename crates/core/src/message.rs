// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Type definitions for messages between the client and server.
use serde::{Deserialize, Serialize};

use crate::{
    poker::PlayerHand,
    round::RoundResult,
    summary::{card_codes, describe, round_summary},
};

/// Request to play a round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundRequest {
    /// The players names in dealing order.
    pub players: Vec<String>,
}

/// A player hand as shown to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerHandView {
    /// The player name.
    pub name: String,
    /// The cards codes in dealing order, like `AC` or `10D`.
    pub cards: Vec<String>,
    /// The hand category name.
    pub category: String,
    /// The hand category strength.
    pub strength: u8,
    /// The hand tie breakers.
    pub tie_breakers: Vec<u8>,
    /// Human readable hand description.
    pub description: String,
    /// True if this player won the round.
    pub winner: bool,
}

impl From<&PlayerHand> for PlayerHandView {
    fn from(hand: &PlayerHand) -> Self {
        Self {
            name: hand.name.clone(),
            cards: card_codes(hand.cards()),
            category: hand.rank.category().name().to_string(),
            strength: hand.rank.strength(),
            tie_breakers: hand.rank.tie_breakers().to_vec(),
            description: describe(&hand.rank),
            winner: hand.winner,
        }
    }
}

/// Response to a [RoundRequest].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResponse {
    /// The players hands in dealing order.
    pub players: Vec<PlayerHandView>,
    /// The winners names.
    pub winners: Vec<String>,
    /// The winning hand category.
    pub reason: String,
    /// Human readable round summary.
    pub summary: String,
}

impl From<&RoundResult> for RoundResponse {
    fn from(result: &RoundResult) -> Self {
        Self {
            players: result.hands.iter().map(PlayerHandView::from).collect(),
            winners: result.winners.clone(),
            reason: result.reason.clone(),
            summary: round_summary(result),
        }
    }
}

/// An error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// The error message.
    pub error: String,
}

impl ErrorResponse {
    /// Creates an error response with the given message.
    pub fn new(error: impl ToString) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}
