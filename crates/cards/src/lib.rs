// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five card stud cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use fivestud_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td: Card = "10D".parse().unwrap();
//! assert_eq!(td.rank().value(), 10);
//! assert_eq!(ah.to_string(), "AH");
//! ```
//!
//! and a [Deck] type for shuffling and dealing cards. A deck is never mutated
//! after it has been shuffled, dealing consumes the deck and returns the dealt
//! cards together with the remaining deck:
//!
//! ```
//! # use fivestud_cards::Deck;
//! let deck = Deck::new_and_shuffled(&mut rand::rng());
//! let (hand, deck) = deck.deal(5).unwrap();
//! assert_eq!(hand.len(), 5);
//! assert_eq!(deck.count(), Deck::SIZE - 5);
//! ```
//!
//! To iterate through all 5 cards hands:
//!
//! ```no_run
//! # use fivestud_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each_hand(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, DeckError, ParseCardError, Rank, Suit};
