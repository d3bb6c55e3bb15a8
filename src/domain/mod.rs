//! Domain layer: pure game logic, no I/O.

pub mod cards;
pub mod combos;
pub mod dealing;
pub mod hand;
pub mod rules;
pub mod scoring;
pub mod snapshot;
pub mod state;
pub mod transitions;

#[cfg(test)]
mod tests_rules;
#[cfg(test)]
mod tests_transitions;

// Re-exports for ergonomics
pub use cards::{full_deck, Card, DECK_SIZE};
pub use dealing::{deal, Deal};
pub use hand::{classify, HandInfo, HandType};
pub use rules::{beats, MAX_PLAYERS, MIN_PLAYERS};
pub use snapshot::{snapshot, PlayerPublic, RoomSnapshot};
pub use state::{Player, PlayerId, Room, RoomStatus};
