//! Deck shuffling and dealing.

use rand::seq::SliceRandom;
use rand::Rng;

use super::cards::{full_deck, Card, DECK_SIZE};
use super::rules::{MAX_PLAYERS, MIN_PLAYERS};
use crate::errors::GameError;

/// Result of dealing a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    /// One sorted hand per player, in roster order.
    pub hands: Vec<Vec<Card>>,
    /// Roster index of the player holding the opening card.
    pub opener: usize,
}

/// Shuffle a full deck and deal `52 / player_count` cards to each player.
///
/// Remainder cards are discarded for the round. The opening card is always
/// dealt: if the shuffle leaves it in the discarded tail it is swapped with
/// a uniformly chosen dealt position, so exactly one hand holds it and the
/// round has a well-defined first player.
pub fn deal<R: Rng + ?Sized>(player_count: usize, rng: &mut R) -> Result<Deal, GameError> {
    if player_count < MIN_PLAYERS {
        return Err(GameError::InsufficientPlayers);
    }
    if player_count > MAX_PLAYERS {
        return Err(GameError::RoomFull);
    }

    let per_player = DECK_SIZE / player_count;
    let dealt = per_player * player_count;

    let mut deck = full_deck();
    deck.shuffle(rng);

    let opening_pos = deck
        .iter()
        .position(|&c| c == Card::OPENING)
        .unwrap_or_default();
    if opening_pos >= dealt {
        let target = rng.random_range(0..dealt);
        deck.swap(opening_pos, target);
    }

    let hands: Vec<Vec<Card>> = deck[..dealt]
        .chunks(per_player)
        .map(|chunk| {
            let mut hand = chunk.to_vec();
            hand.sort_unstable();
            hand
        })
        .collect();

    let opener = deck[..dealt]
        .iter()
        .position(|&c| c == Card::OPENING)
        .unwrap_or_default()
        / per_player;

    Ok(Deal { hands, opener })
}
