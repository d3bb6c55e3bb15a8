//! Room service: consumes player intents, drives the domain transitions and
//! publishes the resulting snapshots.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{snapshot, transitions, Card, Room};
use crate::errors::GameError;
use crate::protocol::{ClientIntent, JoinMode, ServerMsg};
use crate::state::RoomStore;

/// Delivery seam to the transport collaborator. The core addresses every
/// message to a session id; room fan-out is resolved here from the roster,
/// so the transport needs no notion of room membership.
pub trait Broadcast {
    fn send(&self, player_id: &str, msg: ServerMsg);
}

pub struct RoomService<B: Broadcast> {
    store: Arc<RoomStore>,
    out: B,
}

impl<B: Broadcast> RoomService<B> {
    pub fn new(store: Arc<RoomStore>, out: B) -> Self {
        Self { store, out }
    }

    pub fn store(&self) -> &RoomStore {
        &self.store
    }

    /// Process one inbound intent from the session identified by
    /// `session_id`. Rejections are reported to the requester only, except
    /// the silently dropped ones (out-of-turn, non-owner start).
    pub fn handle(&self, session_id: &str, intent: ClientIntent) {
        let result = match intent {
            ClientIntent::JoinRoom {
                room_id,
                display_name,
                password,
                mode,
            } => self.join(session_id, &room_id, &display_name, password, mode),
            ClientIntent::StartGame { room_id } => self.start(session_id, &room_id),
            ClientIntent::PlayCards { room_id, cards } => self.play(session_id, &room_id, &cards),
            ClientIntent::Pass { room_id } => self.pass(session_id, &room_id),
            ClientIntent::Leave { room_id } => {
                self.remove_from_room(session_id, &room_id);
                Ok(())
            }
        };

        if let Err(err) = result {
            if err.is_silent() {
                debug!(session_id, %err, "intent dropped");
            } else {
                debug!(session_id, %err, "intent rejected");
                self.out.send(session_id, ServerMsg::error(&err));
            }
        }
    }

    /// Transport-level disconnect: leave every room the session is in.
    pub fn disconnect(&self, session_id: &str) {
        for room_id in self.store.rooms_with_player(session_id) {
            self.remove_from_room(session_id, &room_id);
        }
    }

    fn join(
        &self,
        session_id: &str,
        room_id: &str,
        display_name: &str,
        password: Option<String>,
        mode: JoinMode,
    ) -> Result<(), GameError> {
        match mode {
            JoinMode::Create => {
                let fresh = Room::create(room_id, session_id, password.clone());
                let (room, outcome) =
                    transitions::join(&fresh, session_id, display_name, password.as_deref())?;
                let shared = self.store.insert(room)?;
                let guard = shared.lock();
                info!(room_id, player = %outcome.display_name, "room created");
                self.broadcast(
                    &guard,
                    ServerMsg::RoomState {
                        room: snapshot(&guard),
                    },
                );
            }
            JoinMode::Join => {
                let shared = self.store.get(room_id).ok_or(GameError::RoomNotFound)?;
                let mut guard = shared.lock();
                let (next, outcome) =
                    transitions::join(&guard, session_id, display_name, password.as_deref())?;
                *guard = next;
                debug!(room_id, player = %outcome.display_name, "player joined");
                self.broadcast(
                    &guard,
                    ServerMsg::RoomState {
                        room: snapshot(&guard),
                    },
                );
            }
        }
        Ok(())
    }

    fn start(&self, session_id: &str, room_id: &str) -> Result<(), GameError> {
        let shared = self.store.get(room_id).ok_or(GameError::RoomNotFound)?;
        let mut guard = shared.lock();
        let (next, outcome) = transitions::start_game(&guard, session_id, &mut rand::rng())?;
        *guard = next;
        info!(room_id, players = guard.players.len(), "round started");

        for (player_id, cards) in outcome.hands {
            self.out.send(&player_id, ServerMsg::PrivateHand { cards });
        }
        self.broadcast(
            &guard,
            ServerMsg::GameState {
                room: snapshot(&guard),
            },
        );
        Ok(())
    }

    fn play(&self, session_id: &str, room_id: &str, cards: &[Card]) -> Result<(), GameError> {
        let shared = self.store.get(room_id).ok_or(GameError::RoomNotFound)?;
        let mut guard = shared.lock();
        let (next, outcome) = transitions::play(&guard, session_id, cards)?;
        *guard = next;
        debug!(room_id, session_id, hand = outcome.hand_name, "play accepted");
        if outcome.ended {
            info!(room_id, winner = session_id, "round ended");
        }

        self.broadcast(
            &guard,
            ServerMsg::GameState {
                room: snapshot(&guard),
            },
        );
        Ok(())
    }

    fn pass(&self, session_id: &str, room_id: &str) -> Result<(), GameError> {
        let shared = self.store.get(room_id).ok_or(GameError::RoomNotFound)?;
        let mut guard = shared.lock();
        let (next, outcome) = transitions::pass_turn(&guard, session_id)?;
        *guard = next;
        debug!(
            room_id,
            session_id,
            trick_reset = outcome.trick_reset,
            "pass accepted"
        );

        self.broadcast(
            &guard,
            ServerMsg::GameState {
                room: snapshot(&guard),
            },
        );
        Ok(())
    }

    fn remove_from_room(&self, session_id: &str, room_id: &str) {
        let Some(shared) = self.store.get(room_id) else {
            return;
        };
        let mut guard = shared.lock();
        let (next, outcome) = transitions::leave(&guard, session_id);
        if !outcome.removed {
            return;
        }
        *guard = next;
        debug!(room_id, session_id, "player left");

        if outcome.destroyed {
            drop(guard);
            self.store.remove(room_id);
            info!(room_id, "room destroyed");
            return;
        }
        if let Some(new_owner) = &outcome.new_owner {
            info!(room_id, %new_owner, "ownership transferred");
        }
        self.broadcast(
            &guard,
            ServerMsg::RoomState {
                room: snapshot(&guard),
            },
        );
    }

    fn broadcast(&self, room: &Room, msg: ServerMsg) {
        for player in &room.players {
            self.out.send(&player.id, msg.clone());
        }
    }
}
