//! Service layer: intent dispatch over the room store.

pub mod room_service;

pub use room_service::{Broadcast, RoomService};
