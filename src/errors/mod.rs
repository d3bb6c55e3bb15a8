//! Error handling for the Big Two game core.

pub mod game;

pub use game::GameError;
