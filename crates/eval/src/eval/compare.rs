// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand ranks ordering.
use std::cmp::Ordering;

use super::HandRank;

/// Compares two hand ranks.
///
/// The stronger category wins, for ranks with the same category the tie
/// breakers are compared position by position up to the shorter sequence and
/// the first higher value wins. The category name and the cards are ignored.
pub fn compare(a: &HandRank, b: &HandRank) -> Ordering {
    a.strength().cmp(&b.strength()).then_with(|| {
        a.tie_breakers()
            .iter()
            .zip(b.tie_breakers())
            .map(|(x, y)| x.cmp(y))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    })
}

/// Returns the indices of all the items that are equal to the maximum item.
///
/// The indices are in the items order, returns an empty vector if there are no
/// items.
pub fn max_with_ties<T, F>(items: &[T], mut cmp: F) -> Vec<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut best: Vec<usize> = Vec::new();

    for (idx, item) in items.iter().enumerate() {
        match best.first().map(|&b| cmp(item, &items[b])) {
            None | Some(Ordering::Equal) => best.push(idx),
            Some(Ordering::Greater) => {
                best.clear();
                best.push(idx);
            }
            Some(Ordering::Less) => {}
        }
    }

    best
}
