// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five card stud HTTP server.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod api;
pub mod server;
pub use server::{Config, router, run};
