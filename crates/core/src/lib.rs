// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five card stud rounds and types shared by the server and clients.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod message;
pub mod poker;
pub mod round;
pub use round::{FiveCardStud, RoundError, RoundResult, play_round};
pub mod summary;
