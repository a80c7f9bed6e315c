// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Types used in a Poker round.
use serde::{Deserialize, Serialize};

pub use fivestud_eval::{
    Card, Deck, EvalError, HAND_SIZE, HandCategory, HandRank, Rank, Suit, classify, compare,
    max_with_ties,
};

/// A player hand at the end of a round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerHand {
    /// The player name.
    pub name: String,
    /// The rank of the player cards, the cards are in dealing order.
    pub rank: HandRank,
    /// True if this player is one of the round winners.
    pub winner: bool,
}

impl PlayerHand {
    /// The player cards.
    pub fn cards(&self) -> &[Card] {
        self.rank.cards()
    }
}
