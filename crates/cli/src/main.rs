// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five card stud CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use rand::{SeedableRng, rngs::StdRng};
use std::io;

use fivestud_core::FiveCardStud;

pub mod terminal;

#[derive(Debug, Parser)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play rounds for the given players.
    Play {
        /// The players names, a single player plays against the CPU.
        #[clap(required = true)]
        players: Vec<String>,
        /// Number of rounds to play.
        #[clap(long, short, default_value_t = 1)]
        rounds: u32,
        /// Seed for repeatable deals.
        #[clap(long, short)]
        seed: Option<u64>,
    },
    /// Classify all the five cards hands and print the categories counts.
    Census,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let mut stdout = io::stdout();

    match cli.command {
        Command::Play {
            players,
            rounds,
            seed,
        } => {
            let game = FiveCardStud::new(&players)?;
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };

            for round in 1..=rounds {
                let result = game.play_with_rng(&mut rng)?;
                terminal::print_round(&mut stdout, round, &result)?;
            }
        }
        Command::Census => {
            info!("Classifying all hands...");
            let counts = terminal::census()?;
            terminal::print_census(&mut stdout, &counts)?;
        }
    }

    Ok(())
}
