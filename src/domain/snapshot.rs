//! Public snapshot types for observing room state without exposing
//! internals (the password never leaves the room).

use serde::{Deserialize, Serialize};

use super::cards::Card;
use super::state::{Player, PlayerId, Room, RoomStatus};

/// Public info about a single seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPublic {
    pub id: PlayerId,
    pub display_name: String,
    pub avatar: String,
    pub hand_size: u8,
    pub has_passed: bool,
    pub score: i32,
    pub is_owner: bool,
}

impl From<&Player> for PlayerPublic {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id.clone(),
            display_name: player.display_name.clone(),
            avatar: player.avatar.clone(),
            hand_size: player.hand_size,
            has_passed: player.has_passed,
            score: player.score,
            is_owner: player.is_owner,
        }
    }
}

/// Broadcastable view of a room.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSnapshot {
    pub room_id: String,
    pub status: RoomStatus,
    pub players: Vec<PlayerPublic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_play: Option<Vec<Card>>,
    pub turn_index: usize,
    pub pass_count: usize,
    pub first_turn: bool,
    pub owner_id: PlayerId,
    pub log: Vec<String>,
}

/// Produce a snapshot of the current room state.
pub fn snapshot(room: &Room) -> RoomSnapshot {
    RoomSnapshot {
        room_id: room.room_id.clone(),
        status: room.status,
        players: room.players.iter().map(PlayerPublic::from).collect(),
        last_play: room.last_play.clone(),
        turn_index: room.turn_index,
        pass_count: room.pass_count,
        first_turn: room.first_turn,
        owner_id: room.owner_id.clone(),
        log: room.log.clone(),
    }
}
