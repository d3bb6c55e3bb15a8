//! Shared in-process state.

pub mod room_store;

pub use room_store::RoomStore;
