// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal output.
use anyhow::Result;
use crossterm::style::Stylize;
use std::io::{self, Write};

use fivestud_core::{
    RoundResult,
    poker::{Deck, HAND_SIZE, HandCategory, classify},
    summary::{card_codes, describe, round_summary},
};

/// Prints a round result.
pub fn print_round<W: Write>(w: &mut W, round: u32, result: &RoundResult) -> io::Result<()> {
    writeln!(w, "{}", format!("Round {round}").bold())?;

    let width = result
        .hands
        .iter()
        .map(|h| h.name.chars().count())
        .max()
        .unwrap_or_default();

    for hand in &result.hands {
        let cards = card_codes(hand.cards())
            .iter()
            .map(|c| format!("{c:>3}"))
            .collect::<Vec<_>>()
            .join(" ");

        let line = format!(
            "  {:<width$}  {cards}  {}",
            hand.name,
            describe(&hand.rank)
        );

        if hand.winner {
            writeln!(w, "{}", line.green())?;
        } else {
            writeln!(w, "{line}")?;
        }
    }

    writeln!(w, "  {}", round_summary(result).bold())?;
    writeln!(w)
}

/// Classifies all the five cards hands and returns the count for each
/// category from the strongest to the weakest.
pub fn census() -> Result<Vec<(HandCategory, usize)>> {
    let mut counts = [0usize; HandCategory::RoyalFlush as usize + 1];
    let mut failure = None;

    Deck::default().for_each_hand(HAND_SIZE, |cards| match classify(cards) {
        Ok(rank) => counts[rank.strength() as usize] += 1,
        Err(e) => failure = Some(e),
    });

    if let Some(e) = failure {
        return Err(e.into());
    }

    Ok(HandCategory::categories()
        .rev()
        .map(|c| (c, counts[c.strength() as usize]))
        .collect())
}

/// Prints the census counts and frequencies.
pub fn print_census<W: Write>(w: &mut W, counts: &[(HandCategory, usize)]) -> io::Result<()> {
    let total = counts.iter().map(|(_, n)| n).sum::<usize>();

    for (category, count) in counts {
        let freq = if total > 0 {
            *count as f64 * 100.0 / total as f64
        } else {
            0.0
        };

        writeln!(w, "{:<16} {count:>10} {freq:>9.4}%", category.name())?;
    }

    writeln!(w, "{} {total:>10}", format!("{:<16}", "Total").bold())
}
