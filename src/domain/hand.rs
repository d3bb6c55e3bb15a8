//! Hand classification: mapping a played card set to a hand type and
//! comparison key.

use serde::{Deserialize, Serialize};

use super::cards::Card;

/// Legal hand shapes. Only sizes 1, 2 and 5 classify; everything else is
/// rejected.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandType {
    Single,
    Pair,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

impl HandType {
    /// Category ordering among the five-card shapes
    /// (straight < flush < full house < four of a kind < straight flush).
    /// Singles and pairs never compare by category, only by type equality.
    pub fn category_rank(self) -> Option<u8> {
        match self {
            HandType::Single | HandType::Pair => None,
            HandType::Straight => Some(1),
            HandType::Flush => Some(2),
            HandType::FullHouse => Some(3),
            HandType::FourOfAKind => Some(4),
            HandType::StraightFlush => Some(5),
        }
    }

    /// Human label used in room log lines.
    pub fn label(self) -> &'static str {
        match self {
            HandType::Single => "single",
            HandType::Pair => "pair",
            HandType::Straight => "straight",
            HandType::Flush => "flush",
            HandType::FullHouse => "full house",
            HandType::FourOfAKind => "four of a kind",
            HandType::StraightFlush => "straight flush",
        }
    }
}

/// Classification result: the shape, the single card used as the ordering
/// key, and the play size.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandInfo {
    pub hand_type: HandType,
    pub power: Card,
    pub size: usize,
}

/// Classify a card set into a hand type, or `None` for an illegal shape.
///
/// Input order does not matter. Duplicate ids are illegal: a hand is a set
/// of physical cards. Straights are runs of five consecutive points with no
/// wraparound; a run through A,2 never counts.
pub fn classify(cards: &[Card]) -> Option<HandInfo> {
    let mut sorted = cards.to_vec();
    sorted.sort_unstable();
    if sorted.windows(2).any(|w| w[0] == w[1]) {
        return None;
    }

    match sorted.as_slice() {
        [] => None,
        [card] => Some(HandInfo {
            hand_type: HandType::Single,
            power: *card,
            size: 1,
        }),
        [low, high] => (low.point() == high.point()).then_some(HandInfo {
            hand_type: HandType::Pair,
            power: *high,
            size: 2,
        }),
        five @ [_, _, _, _, _] => classify_five(five),
        _ => None,
    }
}

/// Five-card shapes, checked strongest pattern first. `sorted` is ascending
/// by id, so points are non-decreasing and the highest card is last.
fn classify_five(sorted: &[Card]) -> Option<HandInfo> {
    let pts: Vec<u8> = sorted.iter().map(|c| c.point()).collect();
    let highest = sorted[4];

    let is_flush = sorted.iter().all(|c| c.suit() == sorted[0].suit());
    let is_straight = pts.windows(2).all(|w| w[1] == w[0] + 1);

    let info = |hand_type: HandType, power: Card| {
        Some(HandInfo {
            hand_type,
            power,
            size: 5,
        })
    };

    if is_flush && is_straight {
        return info(HandType::StraightFlush, highest);
    }
    // AAAAB or ABBBB; the middle card always belongs to the quad.
    if pts[0] == pts[3] || pts[1] == pts[4] {
        return info(HandType::FourOfAKind, sorted[2]);
    }
    // AAABB or AABBB; the middle card always belongs to the triple.
    if (pts[0] == pts[2] && pts[3] == pts[4]) || (pts[0] == pts[1] && pts[2] == pts[4]) {
        return info(HandType::FullHouse, sorted[2]);
    }
    if is_flush {
        return info(HandType::Flush, highest);
    }
    if is_straight {
        return info(HandType::Straight, highest);
    }
    None
}
