// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Human readable hands and rounds descriptions.
use crate::{
    poker::{Card, HandCategory, HandRank, Rank},
    round::RoundResult,
};

/// Returns the singular and plural names for a rank value.
fn rank_names(value: u8) -> Option<(&'static str, &'static str)> {
    let names = match Rank::from_value(value)? {
        Rank::Deuce => ("Two", "Twos"),
        Rank::Trey => ("Three", "Threes"),
        Rank::Four => ("Four", "Fours"),
        Rank::Five => ("Five", "Fives"),
        Rank::Six => ("Six", "Sixes"),
        Rank::Seven => ("Seven", "Sevens"),
        Rank::Eight => ("Eight", "Eights"),
        Rank::Nine => ("Nine", "Nines"),
        Rank::Ten => ("Ten", "Tens"),
        Rank::Jack => ("Jack", "Jacks"),
        Rank::Queen => ("Queen", "Queens"),
        Rank::King => ("King", "Kings"),
        Rank::Ace => ("Ace", "Aces"),
    };

    Some(names)
}

fn singular(value: u8) -> Option<&'static str> {
    rank_names(value).map(|(s, _)| s)
}

fn plural(value: u8) -> Option<&'static str> {
    rank_names(value).map(|(_, p)| p)
}

/// Returns the cards codes, like `AC` or `10D`.
pub fn card_codes(cards: &[Card]) -> Vec<String> {
    cards.iter().map(Card::to_string).collect()
}

/// Describes a hand rank, for example `Full House: Kings over Tens`.
///
/// Falls back to the category name if the tie breakers don't fit the
/// category.
pub fn describe(rank: &HandRank) -> String {
    use HandCategory::*;

    let category = rank.category();
    let detail = match (category, rank.tie_breakers()) {
        (RoyalFlush, _) => None,
        (StraightFlush | Flush | Straight, [high, ..]) => {
            singular(*high).map(|r| format!("{r} high"))
        }
        (FourOfAKind | ThreeOfAKind | OnePair, [r, ..]) => plural(*r).map(str::to_string),
        (FullHouse, [three, two, ..]) => {
            plural(*three).zip(plural(*two)).map(|(t, p)| format!("{t} over {p}"))
        }
        (TwoPair, [high, low, ..]) => {
            plural(*high).zip(plural(*low)).map(|(h, l)| format!("{h} and {l}"))
        }
        (HighCard, [high, ..]) => singular(*high).map(str::to_string),
        _ => None,
    };

    match detail {
        Some(detail) => format!("{category}: {detail}"),
        None => category.to_string(),
    }
}

/// Summarizes a round result, for example `Alice wins with One Pair: Aces` or
/// `Alice and Bob split with One Pair: Aces`.
pub fn round_summary(result: &RoundResult) -> String {
    let Some(best) = result.winning_hands().next() else {
        return "No winners".to_string();
    };

    let hand = describe(&best.rank);
    match result.winners.as_slice() {
        [winner] => format!("{winner} wins with {hand}"),
        [rest @ .., last] => format!("{} and {last} split with {hand}", rest.join(", ")),
        [] => format!("No winners with {hand}"),
    }
}
