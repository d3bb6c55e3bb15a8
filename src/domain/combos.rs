//! Combination finders for client-side play assistance.
//!
//! These helpers suggest candidate plays from a hand; they do not affect
//! rule legality. The pair finder deliberately returns only the first two
//! cards of each point group rather than every combination.

use std::collections::BTreeMap;

use super::cards::Card;

/// Group a hand's cards by point, in ascending point order.
pub fn group_by_point(hand: &[Card]) -> BTreeMap<u8, Vec<Card>> {
    let mut groups: BTreeMap<u8, Vec<Card>> = BTreeMap::new();
    for &card in hand {
        groups.entry(card.point()).or_default().push(card);
    }
    for cards in groups.values_mut() {
        cards.sort_unstable();
    }
    groups
}

/// One pair per point group that holds at least two cards.
pub fn find_pairs(hand: &[Card]) -> Vec<[Card; 2]> {
    group_by_point(hand)
        .values()
        .filter(|g| g.len() >= 2)
        .map(|g| [g[0], g[1]])
        .collect()
}

/// Every full house formed by crossing a triple-capable point group with a
/// pair-capable group of a different point.
pub fn find_full_houses(hand: &[Card]) -> Vec<Vec<Card>> {
    let groups = group_by_point(hand);
    let mut results = Vec::new();
    for (&triple_pt, triple) in groups.iter().filter(|(_, g)| g.len() >= 3) {
        for (_, pair) in groups.iter().filter(|(&pt, g)| pt != triple_pt && g.len() >= 2) {
            let mut combo: Vec<Card> = triple[..3].to_vec();
            combo.extend_from_slice(&pair[..2]);
            results.push(combo);
        }
    }
    results
}
