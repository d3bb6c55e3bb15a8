//! Room and player state for the turn state machine.

use serde::{Deserialize, Serialize};

use super::cards::Card;

/// Opaque session identifier supplied by the transport collaborator.
/// Stable for the lifetime of a player's membership in a room.
pub type PlayerId = String;

/// Avatars handed out by roster position (mod 8).
pub const AVATARS: [&str; 8] = ["👑", "🛡️", "⚔️", "💎", "🔥", "🌀", "🎭", "🃏"];

/// Room lifecycle status.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    Waiting,
    Playing,
    Ended,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub display_name: String,
    pub avatar: String,
    /// Cards remaining; the room tracks counts, not the cards themselves.
    pub hand_size: u8,
    pub has_passed: bool,
    /// Cumulative score ledger across rounds.
    pub score: i32,
    pub is_owner: bool,
}

/// All mutable state of one room. Mutated only through the transition
/// functions in [`super::transitions`], which take the prior state by
/// reference and produce the next state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub room_id: String,
    pub players: Vec<Player>,
    pub status: RoomStatus,
    /// The hand currently on the table; `None` means the trick is open.
    pub last_play: Option<Vec<Card>>,
    /// Index into `players` of whoever acts next. Valid whenever the roster
    /// is non-empty and the status is Playing.
    pub turn_index: usize,
    /// Consecutive passes since the last accepted play.
    pub pass_count: usize,
    /// True until the first play of a round is accepted.
    pub first_turn: bool,
    pub owner_id: PlayerId,
    pub password: Option<String>,
    /// Append-only human-readable event log.
    pub log: Vec<String>,
}

impl Room {
    /// Fresh empty room owned by its creator. The creator still joins
    /// through the ordinary join transition.
    pub fn create(room_id: &str, owner_id: &str, password: Option<String>) -> Self {
        Self {
            room_id: room_id.to_string(),
            players: Vec::new(),
            status: RoomStatus::Waiting,
            last_play: None,
            turn_index: 0,
            pass_count: 0,
            first_turn: true,
            owner_id: owner_id.to_string(),
            password,
            log: vec![format!("Room {room_id} created")],
        }
    }

    pub fn player_index(&self, player_id: &str) -> Option<usize> {
        self.players.iter().position(|p| p.id == player_id)
    }

    /// The player whose turn it is, if the roster is non-empty.
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.turn_index)
    }

    pub fn push_log(&mut self, line: impl Into<String>) {
        self.log.push(line.into());
    }

    /// Return the room to a fresh WAITING state reusing the roster.
    /// Score ledgers survive; per-round fields reset.
    pub fn reset_for_restart(&mut self) {
        self.status = RoomStatus::Waiting;
        self.last_play = None;
        self.turn_index = 0;
        self.pass_count = 0;
        self.first_turn = true;
        for player in &mut self.players {
            player.hand_size = 0;
            player.has_passed = false;
        }
    }
}
