// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five card stud round.
//!
//! A round deals five cards to each player from a freshly shuffled deck,
//! classifies each hand and finds all the players with the best hand.
use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::poker::{Deck, EvalError, HAND_SIZE, PlayerHand, classify, compare, max_with_ties};

/// Round errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The players list is invalid.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// There are not enough cards in the deck for all the players.
    #[error("not enough cards for {players} players, {needed} cards needed")]
    InsufficientCards {
        /// The number of players in the round.
        players: usize,
        /// The number of cards needed.
        needed: usize,
    },
    /// A hand could not be evaluated.
    #[error("hand evaluation failed: {0}")]
    EvaluationFailure(#[from] EvalError),
}

/// The result of a round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundResult {
    /// The players hands in the players order.
    pub hands: Vec<PlayerHand>,
    /// The names of the players with the best hand.
    pub winners: Vec<String>,
    /// The winning hand category name.
    pub reason: String,
}

impl RoundResult {
    /// The hands of the winning players.
    pub fn winning_hands(&self) -> impl Iterator<Item = &PlayerHand> {
        self.hands.iter().filter(|h| h.winner)
    }
}

/// A five card stud game for a fixed list of players.
#[derive(Debug, Clone)]
pub struct FiveCardStud {
    players: Vec<String>,
}

impl FiveCardStud {
    /// The name of the player added when there is only one player.
    pub const CPU_PLAYER: &'static str = "CPU";

    /// The maximum number of players a deck can deal to.
    pub const MAX_PLAYERS: usize = Deck::SIZE / HAND_SIZE;

    /// Creates a game for the given players names.
    ///
    /// Names are trimmed, fails if there are no names or if a name is blank,
    /// and if there are more players than the deck can deal to. A single
    /// player plays against the [Self::CPU_PLAYER].
    pub fn new<S: AsRef<str>>(names: &[S]) -> Result<Self, RoundError> {
        if names.is_empty() {
            return Err(RoundError::InvalidInput(
                "at least one player name is required".to_string(),
            ));
        }

        let mut players = names
            .iter()
            .map(|n| n.as_ref().trim().to_string())
            .collect::<Vec<_>>();

        if let Some(pos) = players.iter().position(|n| n.is_empty()) {
            return Err(RoundError::InvalidInput(format!(
                "player name at position {pos} is blank"
            )));
        }

        if players.len() == 1 {
            players.push(Self::CPU_PLAYER.to_string());
        }

        let needed = players.len() * HAND_SIZE;
        if needed > Deck::SIZE {
            return Err(RoundError::InsufficientCards {
                players: players.len(),
                needed,
            });
        }

        Ok(Self { players })
    }

    /// The players in dealing order.
    pub fn players(&self) -> &[String] {
        &self.players
    }

    /// Plays a round with a thread local random generator.
    pub fn play(&self) -> Result<RoundResult, RoundError> {
        self.play_with_rng(&mut rand::rng())
    }

    /// Plays a round shuffling the deck with the given random generator.
    pub fn play_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<RoundResult, RoundError> {
        self.play_with_deck(Deck::new_and_shuffled(rng))
    }

    /// Plays a round dealing from the given deck.
    ///
    /// Each player gets five cards from the top of the deck in the players
    /// order. Any dealing or evaluation error fails the whole round.
    pub fn play_with_deck(&self, mut deck: Deck) -> Result<RoundResult, RoundError> {
        let mut hands = Vec::with_capacity(self.players.len());

        for name in &self.players {
            let (cards, remaining) = deck.deal(HAND_SIZE).map_err(|e| {
                debug!("Dealing to {name} failed: {e}");
                RoundError::InsufficientCards {
                    players: self.players.len(),
                    needed: self.players.len() * HAND_SIZE,
                }
            })?;
            deck = remaining;

            let rank = classify(&cards)?;
            debug!("Dealt {cards:?} to {name}: {rank}");

            hands.push(PlayerHand {
                name: name.clone(),
                rank,
                winner: false,
            });
        }

        let best = max_with_ties(&hands, |a, b| compare(&a.rank, &b.rank));
        for &idx in &best {
            hands[idx].winner = true;
        }

        let winners = best
            .iter()
            .map(|&idx| hands[idx].name.clone())
            .collect::<Vec<_>>();

        let reason = best
            .first()
            .map(|&idx| hands[idx].rank.category().name().to_string())
            .unwrap_or_default();

        info!("Round winners {winners:?} with {reason}");

        Ok(RoundResult {
            hands,
            winners,
            reason,
        })
    }
}

/// Plays a five card stud round for the given players.
pub fn play_round<S: AsRef<str>>(names: &[S]) -> Result<RoundResult, RoundError> {
    FiveCardStud::new(names)?.play()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poker::{Card, HandCategory};
    use ahash::HashSet;
    use rand::{SeedableRng, rngs::StdRng};

    fn cards(codes: &str) -> Vec<Card> {
        codes
            .split_whitespace()
            .map(|c| c.parse().unwrap())
            .collect()
    }

    #[test]
    fn empty_players() {
        let err = play_round::<&str>(&[]).unwrap_err();
        assert!(matches!(err, RoundError::InvalidInput(_)));
    }

    #[test]
    fn blank_player_name() {
        let err = play_round(&["Alice", "  "]).unwrap_err();
        assert!(matches!(err, RoundError::InvalidInput(_)));
    }

    #[test]
    fn single_player_plays_cpu() {
        let game = FiveCardStud::new(&["Alice"]).unwrap();
        assert_eq!(game.players(), &["Alice", FiveCardStud::CPU_PLAYER]);

        let res = game.play().unwrap();
        assert_eq!(res.hands.len(), 2);
        assert_eq!(res.hands[0].name, "Alice");
        assert_eq!(res.hands[1].name, "CPU");
    }

    #[test]
    fn names_are_trimmed() {
        let game = FiveCardStud::new(&[" Alice ", "Bob\n"]).unwrap();
        assert_eq!(game.players(), &["Alice", "Bob"]);
    }

    #[test]
    fn insufficient_cards() {
        let names = (0..11).map(|i| format!("P{i}")).collect::<Vec<_>>();
        let err = play_round(&names).unwrap_err();
        assert_eq!(
            err,
            RoundError::InsufficientCards {
                players: 11,
                needed: 55
            }
        );

        let names = &names[..FiveCardStud::MAX_PLAYERS];
        let res = play_round(names).unwrap();
        assert_eq!(res.hands.len(), 10);
    }

    #[test]
    fn dealt_hands_are_disjoint() {
        let mut rng = StdRng::seed_from_u64(13);

        for players in 2..=FiveCardStud::MAX_PLAYERS {
            let names = (0..players).map(|i| format!("P{i}")).collect::<Vec<_>>();
            let res = FiveCardStud::new(&names)
                .unwrap()
                .play_with_rng(&mut rng)
                .unwrap();

            assert_eq!(res.hands.len(), players);

            let mut seen = HashSet::default();
            for (hand, name) in res.hands.iter().zip(&names) {
                assert_eq!(&hand.name, name);
                assert_eq!(hand.cards().len(), HAND_SIZE);
                for card in hand.cards() {
                    assert!(seen.insert(*card), "{card} dealt twice");
                }
            }

            assert_eq!(seen.len(), players * HAND_SIZE);
            assert!(!res.winners.is_empty());
        }
    }

    #[test]
    fn seeded_rounds_are_deterministic() {
        let game = FiveCardStud::new(&["Alice", "Bob", "Carol"]).unwrap();
        let r1 = game.play_with_rng(&mut StdRng::seed_from_u64(42)).unwrap();
        let r2 = game.play_with_rng(&mut StdRng::seed_from_u64(42)).unwrap();

        for (h1, h2) in r1.hands.iter().zip(&r2.hands) {
            assert_eq!(h1.cards(), h2.cards());
        }
        assert_eq!(r1.winners, r2.winners);
        assert_eq!(r1.reason, r2.reason);
    }

    #[test]
    fn single_winner() {
        let deck = Deck::from_cards(cards("KH KD KC 10S 10D 2H 7D 9C JS 4D AH AD 3C 9S 8D")).unwrap();
        let game = FiveCardStud::new(&["Alice", "Bob", "Carol"]).unwrap();
        let res = game.play_with_deck(deck).unwrap();

        assert_eq!(res.winners, vec!["Alice"]);
        assert_eq!(res.reason, "Full House");
        assert_eq!(res.hands[0].rank.category(), HandCategory::FullHouse);
        assert_eq!(res.hands[1].rank.category(), HandCategory::HighCard);
        assert_eq!(res.hands[2].rank.category(), HandCategory::OnePair);
        assert!(res.hands[0].winner);
        assert!(!res.hands[1].winner && !res.hands[2].winner);
    }

    #[test]
    fn tied_winners() {
        let deck = Deck::from_cards(cards("AH AD 9C 7S 4D 2H 3D 5C 8S JD AC AS 9D 7H 4C")).unwrap();
        let game = FiveCardStud::new(&["Alice", "Bob", "Carol"]).unwrap();
        let res = game.play_with_deck(deck).unwrap();

        assert_eq!(res.winners, vec!["Alice", "Carol"]);
        assert_eq!(res.reason, "One Pair");
        assert_eq!(res.winning_hands().count(), 2);
    }

    #[test]
    fn kicker_breaks_tie() {
        let deck = Deck::from_cards(cards("KC KS 3D 3H 5D KH KD 3C 3S 8D")).unwrap();
        let res = FiveCardStud::new(&["Alice", "Bob"])
            .unwrap()
            .play_with_deck(deck)
            .unwrap();

        assert_eq!(res.winners, vec!["Bob"]);
        assert_eq!(res.reason, "Two Pair");
    }

    #[test]
    fn short_deck_fails_round() {
        let deck = Deck::from_cards(cards("KC KS 3D 3H 5D KH KD")).unwrap();
        let err = FiveCardStud::new(&["Alice", "Bob"])
            .unwrap()
            .play_with_deck(deck)
            .unwrap_err();

        assert_eq!(
            err,
            RoundError::InsufficientCards {
                players: 2,
                needed: 10
            }
        );
    }
}
