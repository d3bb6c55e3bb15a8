//! Game-level error type used across the domain and service layers.
//!
//! Every rejection in the taxonomy is recoverable by the requester: the
//! acting player receives the reason and may retry with a different intent.
//! A rejected intent never mutates room state.

use thiserror::Error;

/// Central game error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("room not found, check the room id")]
    RoomNotFound,
    #[error("room id already taken, pick another")]
    RoomAlreadyExists,
    #[error("the game is in progress and the room is full")]
    RoomFull,
    #[error("wrong password")]
    WrongPassword,
    #[error("only the room owner can do that")]
    NotOwner,
    #[error("at least 2 players are required to start")]
    InsufficientPlayers,
    #[error("not your turn")]
    NotYourTurn,
    #[error("not a valid hand")]
    InvalidHandShape,
    #[error("the first play must include the opening card")]
    MustLeadOpeningCard,
    #[error("the play must match the size of the previous play")]
    SizeMismatch,
    #[error("does not beat the previous play")]
    DoesNotBeat,
}

impl GameError {
    /// Stable snake_case code carried in outbound error messages.
    pub fn code(&self) -> &'static str {
        match self {
            GameError::RoomNotFound => "room_not_found",
            GameError::RoomAlreadyExists => "room_already_exists",
            GameError::RoomFull => "room_full",
            GameError::WrongPassword => "wrong_password",
            GameError::NotOwner => "not_owner",
            GameError::InsufficientPlayers => "insufficient_players",
            GameError::NotYourTurn => "not_your_turn",
            GameError::InvalidHandShape => "invalid_hand_shape",
            GameError::MustLeadOpeningCard => "must_lead_opening_card",
            GameError::SizeMismatch => "size_mismatch",
            GameError::DoesNotBeat => "does_not_beat",
        }
    }

    /// Rejections that are dropped without a reply to the requester.
    ///
    /// Racing play/pass intents that lose the per-room serialization and
    /// start requests from non-owners are silently ignored; everything else
    /// is answered with an error message.
    pub fn is_silent(&self) -> bool {
        matches!(self, GameError::NotYourTurn | GameError::NotOwner)
    }
}
