// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five card stud hand evaluator.
//!
//! The evaluator classifies a five cards hand into one of the poker hand
//! categories and computes the tie breakers used to compare hands of the same
//! category. Hands are compared with the [compare] function:
//!
//! ```
//! # use fivestud_eval::*;
//! let cards = |codes: &str| -> Vec<Card> {
//!     codes.split_whitespace().map(|c| c.parse().unwrap()).collect()
//! };
//!
//! let r1 = classify(&cards("KH KD 3C 3S 8D")).unwrap();
//! let r2 = classify(&cards("KC KS 3D 3H 5D")).unwrap();
//! assert_eq!(r1.category(), HandCategory::TwoPair);
//! assert_eq!(r1.tie_breakers(), &[13, 3, 8]);
//! assert!(compare(&r1, &r2).is_gt());
//! ```
//!
//! Aces only play high, the 5-4-3-2-A wheel is not a straight.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{EvalError, HAND_SIZE, HandCategory, HandRank, classify, compare, max_with_ties};

// Reexport cards types.
pub use fivestud_cards::{Card, Deck, Rank, Suit};
