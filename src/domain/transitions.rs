//! Room command handlers.
//!
//! Each handler takes the prior room state by reference and, on success,
//! returns the next state plus an outcome describing what happened. A
//! rejected command returns an error and produces no next state, so the
//! caller's copy is never left half-mutated.

use rand::Rng;

use super::cards::Card;
use super::dealing::deal;
use super::rules::{beats, MAX_PLAYERS, MIN_PLAYERS};
use super::scoring::settle_scores;
use super::state::{Player, PlayerId, Room, RoomStatus, AVATARS};
use crate::errors::GameError;

/// A player was appended to the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinOutcome {
    pub display_name: String,
}

/// A round was dealt; carries each player's private hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartOutcome {
    pub hands: Vec<(PlayerId, Vec<Card>)>,
}

/// A play was accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    pub hand_name: &'static str,
    /// The play emptied the acting player's hand and ended the round.
    pub ended: bool,
}

/// A pass was recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassOutcome {
    /// Everyone but one player passed; the table was cleared and a fresh
    /// trick starts.
    pub trick_reset: bool,
}

/// A leave/disconnect was processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveOutcome {
    /// False when the player was not a member; the room is unchanged.
    pub removed: bool,
    /// The roster became empty and the room should be dropped.
    pub destroyed: bool,
    /// Ownership moved to this player.
    pub new_owner: Option<PlayerId>,
}

/// Append a player to the roster.
///
/// Joining an in-progress game is allowed while seats remain; the newcomer
/// simply waits for the next deal.
pub fn join(
    room: &Room,
    player_id: &str,
    display_name: &str,
    password: Option<&str>,
) -> Result<(Room, JoinOutcome), GameError> {
    if room.status == RoomStatus::Playing && room.players.len() >= MAX_PLAYERS {
        return Err(GameError::RoomFull);
    }
    if let Some(expected) = room.password.as_deref() {
        if password != Some(expected) {
            return Err(GameError::WrongPassword);
        }
    }

    let display_name = if display_name.trim().is_empty() {
        let short: String = player_id.chars().take(4).collect();
        format!("Player_{short}")
    } else {
        display_name.to_string()
    };

    let mut next = room.clone();
    next.players.push(Player {
        id: player_id.to_string(),
        display_name: display_name.clone(),
        avatar: AVATARS[room.players.len() % AVATARS.len()].to_string(),
        hand_size: 0,
        has_passed: false,
        score: 0,
        is_owner: player_id == room.owner_id,
    });
    next.push_log(format!("{display_name} joined the room"));

    Ok((next, JoinOutcome { display_name }))
}

/// Deal a fresh round. Owner-only; also serves as the restart path from an
/// ENDED (or any other) state, reusing the roster and score ledger.
pub fn start_game<R: Rng + ?Sized>(
    room: &Room,
    requester_id: &str,
    rng: &mut R,
) -> Result<(Room, StartOutcome), GameError> {
    if requester_id != room.owner_id {
        return Err(GameError::NotOwner);
    }
    if room.players.len() < MIN_PLAYERS {
        return Err(GameError::InsufficientPlayers);
    }

    let dealt = deal(room.players.len(), rng)?;

    let mut next = room.clone();
    next.status = RoomStatus::Playing;
    next.last_play = None;
    next.pass_count = 0;
    next.first_turn = true;
    next.turn_index = dealt.opener;

    let mut hands = Vec::with_capacity(next.players.len());
    for (player, hand) in next.players.iter_mut().zip(&dealt.hands) {
        player.hand_size = hand.len() as u8;
        player.has_passed = false;
        hands.push((player.id.clone(), hand.clone()));
    }

    let leader = next.players[dealt.opener].display_name.clone();
    next.push_log(format!("Round started, {leader} leads with the {}", Card::OPENING));

    Ok((next, StartOutcome { hands }))
}

/// Play a set of cards onto the table.
pub fn play(room: &Room, player_id: &str, cards: &[Card]) -> Result<(Room, PlayOutcome), GameError> {
    let acting = require_turn(room, player_id)?;

    let info = beats(cards, room.last_play.as_deref(), room.first_turn)?;

    let mut played = cards.to_vec();
    played.sort_unstable();

    let mut next = room.clone();
    next.last_play = Some(played);
    next.pass_count = 0;
    next.first_turn = false;
    for player in &mut next.players {
        player.has_passed = false;
    }

    let player = &mut next.players[acting];
    player.hand_size = player.hand_size.saturating_sub(cards.len() as u8);
    let name = player.display_name.clone();
    let emptied = player.hand_size == 0;
    next.push_log(format!("{name} played a {}", info.hand_type.label()));

    if emptied {
        next.status = RoomStatus::Ended;
        settle_scores(&mut next.players, acting);
        next.push_log(format!("{name} wins the round"));
    } else {
        next.turn_index = (acting + 1) % next.players.len();
    }

    Ok((
        next,
        PlayOutcome {
            hand_name: info.hand_type.label(),
            ended: emptied,
        },
    ))
}

/// Pass the turn. When everyone but the last player to act has passed, the
/// table clears and that player leads a fresh trick.
pub fn pass_turn(room: &Room, player_id: &str) -> Result<(Room, PassOutcome), GameError> {
    let acting = require_turn(room, player_id)?;

    let mut next = room.clone();
    next.players[acting].has_passed = true;
    next.push_log(format!("{} passed", room.players[acting].display_name));
    next.pass_count += 1;
    next.turn_index = (acting + 1) % next.players.len();

    let trick_reset = next.pass_count >= next.players.len() - 1;
    if trick_reset {
        next.last_play = None;
        next.pass_count = 0;
        for player in &mut next.players {
            player.has_passed = false;
        }
        let leader = next.players[next.turn_index].display_name.clone();
        next.push_log(format!("New trick, {leader} leads"));
    }

    Ok((next, PassOutcome { trick_reset }))
}

/// Remove a player from the roster, transferring ownership if needed.
/// Total: a non-member leave returns the room unchanged.
pub fn leave(room: &Room, player_id: &str) -> (Room, LeaveOutcome) {
    let Some(index) = room.player_index(player_id) else {
        return (
            room.clone(),
            LeaveOutcome {
                removed: false,
                destroyed: false,
                new_owner: None,
            },
        );
    };

    let mut next = room.clone();
    let leaver = next.players.remove(index);
    next.push_log(format!("{} left the room", leaver.display_name));

    if next.players.is_empty() {
        return (
            next,
            LeaveOutcome {
                removed: true,
                destroyed: true,
                new_owner: None,
            },
        );
    }

    // turn_index must stay a valid roster index after the shrink.
    next.turn_index %= next.players.len();

    let mut new_owner = None;
    if leaver.id == next.owner_id {
        next.players[0].is_owner = true;
        next.owner_id = next.players[0].id.clone();
        let heir_name = next.players[0].display_name.clone();
        next.push_log(format!("{heir_name} is the new room owner"));
        new_owner = Some(next.owner_id.clone());
    }

    (
        next,
        LeaveOutcome {
            removed: true,
            destroyed: false,
            new_owner,
        },
    )
}

/// Shared gate for turn-consuming commands: the room must be mid-round and
/// the requester must hold the turn. Losing either check is a silent drop.
fn require_turn(room: &Room, player_id: &str) -> Result<usize, GameError> {
    if room.status != RoomStatus::Playing {
        return Err(GameError::NotYourTurn);
    }
    match room.current_player() {
        Some(player) if player.id == player_id => Ok(room.turn_index),
        _ => Err(GameError::NotYourTurn),
    }
}
