//! Wire-level intent and event types.
//!
//! The transport collaborator decodes inbound frames into [`ClientIntent`]
//! and delivers [`ServerMsg`] values to connected clients. Both sides are
//! tagged enums so the service dispatch is exhaustive by construction.

use serde::{Deserialize, Serialize};

use crate::domain::{Card, RoomSnapshot};
use crate::errors::GameError;

/// Inbound player intents, each tagged with the transport's stable session
/// identifier out-of-band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientIntent {
    JoinRoom {
        room_id: String,
        display_name: String,
        #[serde(default)]
        password: Option<String>,
        mode: JoinMode,
    },
    StartGame {
        room_id: String,
    },
    PlayCards {
        room_id: String,
        cards: Vec<Card>,
    },
    Pass {
        room_id: String,
    },
    Leave {
        room_id: String,
    },
}

/// Whether a join intends to create the room or enter an existing one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinMode {
    Create,
    Join,
}

/// Outbound events. `RoomState` accompanies roster/ownership changes,
/// `GameState` accompanies play/pass/start/score changes; `PrivateHand` and
/// `Error` go to a single player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMsg {
    RoomState { room: RoomSnapshot },
    GameState { room: RoomSnapshot },
    PrivateHand { cards: Vec<Card> },
    Error { code: String, message: String },
}

impl ServerMsg {
    pub fn error(err: &GameError) -> Self {
        ServerMsg::Error {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}
