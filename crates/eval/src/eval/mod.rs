// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! It provides a [classify] function that computes the [HandRank] of a five
//! cards hand, and a [compare] function that orders two ranks by category
//! strength first and by tie breakers after that. The [max_with_ties] function
//! uses a comparator to find all the best hands in a list, useful to find the
//! winners of a round where more than one player may share the best hand.

mod classify;
mod compare;
mod rank;

pub use classify::{EvalError, HAND_SIZE, classify};
pub use compare::{compare, max_with_ties};
pub use rank::{HandCategory, HandRank};
