//! Core card type: a 52-id deck with Big Two rank and suit ordering.
//!
//! A card is an integer id in `0..52`. `point = id / 4` indexes the Big Two
//! rank sequence 3,4,5,6,7,8,9,T,J,Q,K,A,2 (3 lowest, 2 highest) and
//! `suit = id % 4` indexes clubs, diamonds, hearts, spades (weakest to
//! strongest). Because `id = point * 4 + suit`, comparing raw ids compares
//! by point first and suit second; that is the game's sole tie-break.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Number of cards in a physical deck.
pub const DECK_SIZE: usize = 52;

/// Rank labels in point order (3 lowest, 2 highest).
const RANKS: [char; 13] = [
    '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A', '2',
];

/// Suit labels in strength order (clubs weakest, spades strongest).
const SUITS: [char; 4] = ['C', 'D', 'H', 'S'];

/// A single card, identified by its deck id.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
#[serde(transparent)]
pub struct Card(u8);

impl Card {
    /// The card that must be included in the first play of a round
    /// (lowest point, lowest suit: the 3 of clubs).
    pub const OPENING: Card = Card(0);

    /// Build a card from a raw deck id, rejecting out-of-range values.
    pub fn from_id(id: u8) -> Option<Card> {
        (id < DECK_SIZE as u8).then_some(Card(id))
    }

    pub const fn id(self) -> u8 {
        self.0
    }

    /// Rank index in `0..13`; 0 is the 3, 12 is the 2.
    pub const fn point(self) -> u8 {
        self.0 / 4
    }

    /// Suit index in `0..4`; 0 is clubs, 3 is spades.
    pub const fn suit(self) -> u8 {
        self.0 % 4
    }
}

// Wire form is the raw id; deserialization range-checks it.
impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = u8::deserialize(deserializer)?;
        Card::from_id(id)
            .ok_or_else(|| serde::de::Error::custom(format!("card id out of range: {id}")))
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{}{}",
            RANKS[self.point() as usize],
            SUITS[self.suit() as usize]
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized card token: {0}")]
pub struct ParseCardError(String);

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parse a two-char token such as "3C", "TD" or "2S".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(rank_ch), Some(suit_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(ParseCardError(s.to_string()));
        };
        let point = RANKS
            .iter()
            .position(|&r| r == rank_ch)
            .ok_or_else(|| ParseCardError(s.to_string()))?;
        let suit = SUITS
            .iter()
            .position(|&c| c == suit_ch)
            .ok_or_else(|| ParseCardError(s.to_string()))?;
        Ok(Card((point * 4 + suit) as u8))
    }
}

/// Generate the full 52-card deck in id order.
pub fn full_deck() -> Vec<Card> {
    (0..DECK_SIZE as u8).map(Card).collect()
}
