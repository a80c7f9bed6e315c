// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand rank types.
use serde::{Deserialize, Serialize};
use std::fmt;

use fivestud_cards::Card;

/// A poker hand category.
///
/// The discriminant is the category strength, from 1 for a high card hand up
/// to 10 for a royal flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// No other category matches.
    HighCard = 1,
    /// Two cards of the same rank.
    OnePair,
    /// Two different pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five cards in sequence.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// Five cards in sequence of the same suit.
    StraightFlush,
    /// Ten to ace of the same suit.
    RoyalFlush,
}

impl HandCategory {
    /// Returns all categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }

    /// The category strength, higher is stronger.
    pub fn strength(self) -> u8 {
        self as u8
    }

    /// The category display name.
    pub fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The rank of a five cards hand.
///
/// Two ranks are compared using the category strength and the tie breakers
/// only, see [compare](super::compare).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandRank {
    category: HandCategory,
    tie_breakers: Vec<u8>,
    cards: Vec<Card>,
}

impl HandRank {
    /// Creates a new hand rank.
    pub fn new(category: HandCategory, tie_breakers: Vec<u8>, cards: Vec<Card>) -> Self {
        Self {
            category,
            tie_breakers,
            cards,
        }
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The hand category strength.
    pub fn strength(&self) -> u8 {
        self.category.strength()
    }

    /// The rank values used to break ties, most significant first.
    pub fn tie_breakers(&self) -> &[u8] {
        &self.tie_breakers
    }

    /// The cards that produced this rank in the order they were dealt.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.category, self.tie_breakers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_strength() {
        let strengths = HandCategory::categories()
            .map(HandCategory::strength)
            .collect::<Vec<_>>();
        assert_eq!(strengths, (1..=10).collect::<Vec<_>>());
        assert_eq!(HandCategory::FullHouse.to_string(), "Full House");
    }
}
