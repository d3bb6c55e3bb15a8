//! Game constants and the play comparison rule.

use super::cards::Card;
use super::hand::{classify, HandInfo};
use crate::errors::GameError;

/// Seats in a full table.
pub const MAX_PLAYERS: usize = 4;
/// Smallest roster a round can start with.
pub const MIN_PLAYERS: usize = 2;

/// Decide whether `candidate` may be played over `reference`.
///
/// Returns the candidate's classification on acceptance. `reference` is the
/// hand currently on the table; `None` (or empty) means the trick is open
/// and any legal shape starts it. On the round's first turn the candidate
/// must include the opening card.
pub fn beats(
    candidate: &[Card],
    reference: Option<&[Card]>,
    first_turn: bool,
) -> Result<HandInfo, GameError> {
    let info = classify(candidate).ok_or(GameError::InvalidHandShape)?;

    if first_turn && !candidate.contains(&Card::OPENING) {
        return Err(GameError::MustLeadOpeningCard);
    }

    let reference = match reference {
        Some(cards) if !cards.is_empty() => cards,
        _ => return Ok(info),
    };

    if candidate.len() != reference.len() {
        return Err(GameError::SizeMismatch);
    }

    // The table hand was validated when it was accepted, so this cannot fail
    // for state produced by the room transitions.
    let last = classify(reference).ok_or(GameError::InvalidHandShape)?;

    if info.hand_type == last.hand_type {
        return if info.power > last.power {
            Ok(info)
        } else {
            Err(GameError::DoesNotBeat)
        };
    }

    // Differing types only compare among the five-card categories.
    if let (Some(rank), Some(last_rank)) = (
        info.hand_type.category_rank(),
        last.hand_type.category_rank(),
    ) {
        if rank > last_rank || (rank == last_rank && info.power > last.power) {
            return Ok(info);
        }
    }

    Err(GameError::DoesNotBeat)
}
