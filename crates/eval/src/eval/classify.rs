// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand classifier.
use thiserror::Error;

use fivestud_cards::{Card, Rank};

use super::{HandCategory, HandRank};

/// The number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// Evaluation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The hand doesn't have exactly five cards.
    #[error("a hand must have 5 cards, got {0}")]
    InvalidHand(usize),
}

/// Cards with the same rank.
#[derive(Debug, Clone, Copy)]
struct RankGroup {
    count: u8,
    rank: u8,
}

/// Groups cards by rank sorted by count and then by rank, both descending.
///
/// With two pairs the higher pair comes first.
fn rank_groups(cards: &[Card]) -> Vec<RankGroup> {
    let mut counts = [0u8; Rank::Ace as usize + 1];
    for card in cards {
        counts[card.rank().value() as usize] += 1;
    }

    let mut groups = counts
        .iter()
        .enumerate()
        .filter(|(_, count)| **count > 0)
        .map(|(rank, &count)| RankGroup {
            count,
            rank: rank as u8,
        })
        .collect::<Vec<_>>();

    groups.sort_by(|a, b| b.count.cmp(&a.count).then(b.rank.cmp(&a.rank)));
    groups
}

/// Classifies a five cards hand.
///
/// Returns [EvalError::InvalidHand] if the hand doesn't have exactly five
/// cards, hands are never truncated or padded.
pub fn classify(cards: &[Card]) -> Result<HandRank, EvalError> {
    if cards.len() != HAND_SIZE {
        return Err(EvalError::InvalidHand(cards.len()));
    }

    let is_flush = cards.iter().all(|c| c.suit() == cards[0].suit());
    let groups = rank_groups(cards);

    // Five distinct ranks with the highest four above the lowest, aces only
    // play high so A-2-3-4-5 is not a straight.
    let is_straight = groups.len() == HAND_SIZE && groups[0].rank - groups[4].rank == 4;

    let category = if is_flush && is_straight && groups[4].rank == Rank::Ten.value() {
        HandCategory::RoyalFlush
    } else if is_flush && is_straight {
        HandCategory::StraightFlush
    } else if groups[0].count == 4 {
        HandCategory::FourOfAKind
    } else if groups[0].count == 3 && groups[1].count == 2 {
        HandCategory::FullHouse
    } else if is_flush {
        HandCategory::Flush
    } else if is_straight {
        HandCategory::Straight
    } else if groups[0].count == 3 {
        HandCategory::ThreeOfAKind
    } else if groups[0].count == 2 && groups[1].count == 2 {
        HandCategory::TwoPair
    } else if groups[0].count == 2 {
        HandCategory::OnePair
    } else {
        HandCategory::HighCard
    };

    // Straights only need the top card, for all other categories the groups
    // order is the tie breakers order.
    let tie_breakers = match category {
        HandCategory::RoyalFlush | HandCategory::StraightFlush | HandCategory::Straight => {
            vec![groups[0].rank]
        }
        _ => groups.iter().map(|g| g.rank).collect(),
    };

    Ok(HandRank::new(category, tie_breakers, cards.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::AHashMap;
    use fivestud_cards::Deck;

    fn hand(codes: &str) -> Vec<Card> {
        codes
            .split_whitespace()
            .map(|c| c.parse().unwrap())
            .collect()
    }

    fn check(codes: &str, category: HandCategory, tie_breakers: &[u8]) {
        let rank = classify(&hand(codes)).unwrap();
        assert_eq!(rank.category(), category, "{codes}");
        assert_eq!(rank.tie_breakers(), tie_breakers, "{codes}");
    }

    #[test]
    fn royal_flush() {
        check("10S JS QS KS AS", HandCategory::RoyalFlush, &[14]);
        check("AH KH QH JH 10H", HandCategory::RoyalFlush, &[14]);
    }

    #[test]
    fn straight_flush() {
        check("9C KC QC JC 10C", HandCategory::StraightFlush, &[13]);
        check("2D 3D 4D 5D 6D", HandCategory::StraightFlush, &[6]);
    }

    #[test]
    fn four_of_a_kind() {
        check("9C 9D 9H 9S 2D", HandCategory::FourOfAKind, &[9, 2]);
        check("3C AD AH AS AC", HandCategory::FourOfAKind, &[14, 3]);
    }

    #[test]
    fn full_house() {
        check("KC KD KH 10S 10D", HandCategory::FullHouse, &[13, 10]);
        check("2C AD 2H AS 2D", HandCategory::FullHouse, &[2, 14]);
    }

    #[test]
    fn flush() {
        check("2H 5H 7H 9H KH", HandCategory::Flush, &[13, 9, 7, 5, 2]);
        check("AS 2S 3S 4S 5S", HandCategory::Flush, &[14, 5, 4, 3, 2]);
    }

    #[test]
    fn straight() {
        check("10S JD QH KC AS", HandCategory::Straight, &[14]);
        check("6C 2D 4H 3S 5S", HandCategory::Straight, &[6]);
    }

    #[test]
    fn wheel_is_not_a_straight() {
        check("AC 2D 3H 4S 5S", HandCategory::HighCard, &[14, 5, 4, 3, 2]);
        check("AC 2D 3H 4S 4C", HandCategory::OnePair, &[4, 14, 3, 2]);
        check("JS QS KS AS 2S", HandCategory::Flush, &[14, 13, 12, 11, 2]);
    }

    #[test]
    fn three_of_a_kind() {
        check("7C 7D 7H KS 2D", HandCategory::ThreeOfAKind, &[7, 13, 2]);
        check("3C QD 3H 3S AD", HandCategory::ThreeOfAKind, &[3, 14, 12]);
    }

    #[test]
    fn two_pair() {
        check("KH KD 3C 3S 8D", HandCategory::TwoPair, &[13, 3, 8]);
        check("3H 8D 3C KS KD", HandCategory::TwoPair, &[13, 3, 8]);
        check("2H AD 2C 5S 5D", HandCategory::TwoPair, &[5, 2, 14]);
    }

    #[test]
    fn one_pair() {
        check("AH AD 3C 9S 8D", HandCategory::OnePair, &[14, 9, 8, 3]);
        check("4H JD 10C 4S QD", HandCategory::OnePair, &[4, 12, 11, 10]);
    }

    #[test]
    fn high_card() {
        check("2H 7D 9C JS 4D", HandCategory::HighCard, &[11, 9, 7, 4, 2]);
        check("KH QD JC 10S 8D", HandCategory::HighCard, &[13, 12, 11, 10, 8]);
    }

    #[test]
    fn cards_order_is_preserved() {
        let cards = hand("3H 8D 3C KS KD");
        let rank = classify(&cards).unwrap();
        assert_eq!(rank.cards(), cards.as_slice());
    }

    #[test]
    fn invalid_hand_size() {
        assert_eq!(classify(&[]).unwrap_err(), EvalError::InvalidHand(0));

        let cards = hand("2H 7D 9C JS");
        assert_eq!(classify(&cards).unwrap_err(), EvalError::InvalidHand(4));

        let cards = hand("2H 7D 9C JS 4D 5S");
        assert_eq!(classify(&cards).unwrap_err(), EvalError::InvalidHand(6));
    }

    #[test]
    fn census_all_hands() {
        let mut counts = AHashMap::new();
        Deck::default().for_each_hand(HAND_SIZE, |cards| {
            let rank = classify(cards).unwrap();
            *counts.entry(rank.category()).or_insert(0usize) += 1;
        });

        // Standard counts with the wheel straights and straight flushes moved
        // to high card and flush.
        let expected = [
            (HandCategory::RoyalFlush, 4),
            (HandCategory::StraightFlush, 32),
            (HandCategory::FourOfAKind, 624),
            (HandCategory::FullHouse, 3_744),
            (HandCategory::Flush, 5_112),
            (HandCategory::Straight, 9_180),
            (HandCategory::ThreeOfAKind, 54_912),
            (HandCategory::TwoPair, 123_552),
            (HandCategory::OnePair, 1_098_240),
            (HandCategory::HighCard, 1_303_560),
        ];

        for (category, count) in expected {
            assert_eq!(counts.get(&category), Some(&count), "{category}");
        }

        assert_eq!(counts.values().sum::<usize>(), 2_598_960);
    }
}
