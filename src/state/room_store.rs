//! In-memory room registry.
//!
//! An explicit store value owned by the service layer, never ambient
//! process state. Each room sits behind its own mutex: intents for one room
//! are serialized in arrival order while distinct rooms proceed in
//! parallel. Nothing is persisted; a restart loses all rooms.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::Mutex;

use crate::domain::Room;
use crate::errors::GameError;

pub type SharedRoom = Arc<Mutex<Room>>;

#[derive(Default)]
pub struct RoomStore {
    rooms: DashMap<String, SharedRoom>,
}

impl RoomStore {
    pub fn new() -> Self {
        Self {
            rooms: DashMap::new(),
        }
    }

    /// Register a freshly created room. Fails if the id is taken; the
    /// entry API makes the existence check and insert atomic.
    pub fn insert(&self, room: Room) -> Result<SharedRoom, GameError> {
        match self.rooms.entry(room.room_id.clone()) {
            Entry::Occupied(_) => Err(GameError::RoomAlreadyExists),
            Entry::Vacant(slot) => {
                let shared = Arc::new(Mutex::new(room));
                slot.insert(shared.clone());
                Ok(shared)
            }
        }
    }

    pub fn get(&self, room_id: &str) -> Option<SharedRoom> {
        self.rooms.get(room_id).map(|entry| entry.value().clone())
    }

    pub fn remove(&self, room_id: &str) {
        self.rooms.remove(room_id);
    }

    /// Ids of every room whose roster contains the player. Used for the
    /// disconnect sweep.
    pub fn rooms_with_player(&self, player_id: &str) -> Vec<String> {
        self.rooms
            .iter()
            .filter(|entry| entry.value().lock().player_index(player_id).is_some())
            .map(|entry| entry.key().clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
