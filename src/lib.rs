//! Dorm Dash - a single-screen maze chase game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (collision, enemy AI, placement, levels)
//! - `config`: Immutable game configuration
//! - `session`: In-memory session statistics
//!
//! Rendering and input polling live with the host. It feeds a `TickInput`
//! per tick and reads `GameState::snapshot` between ticks.

pub mod config;
pub mod error;
pub mod session;
pub mod sim;

pub use config::GameConfig;
pub use error::{SimError, SimResult};
pub use session::SessionRecord;

/// Game loop constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum ticks per host frame; extra backlog is dropped
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Longest host frame the clock will account for (seconds)
    pub const MAX_FRAME_DT: f32 = 0.25;
}
