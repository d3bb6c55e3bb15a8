#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod domain;
pub mod errors;
pub mod protocol;
pub mod services;
pub mod state;
pub mod telemetry;

// Re-exports for public API
pub use domain::{beats, classify, snapshot, Card, HandInfo, HandType, Room, RoomStatus};
pub use errors::GameError;
pub use protocol::{ClientIntent, JoinMode, ServerMsg};
pub use services::{Broadcast, RoomService};
pub use state::RoomStore;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_test_writer())
        .try_init();
}
