//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (entity lists keep insertion order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod entity;
pub mod layout;
pub mod placement;
pub mod rect;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use autopilot::autopilot_input;
pub use collision::{intersects, intersects_any, move_and_slide, resolve_axis_push};
pub use entity::{
    DriftState, Enemy, EnemyBehavior, Player, StepOutcome, Token, WanderState, update_enemy,
};
pub use layout::{MazeVariant, frame_walls, generate_walls, generate_walls_named};
pub use placement::{EntityKind, PlacementConstraints, place_entities};
pub use rect::{Axis, Rect};
pub use snapshot::WorldSnapshot;
pub use state::{
    GameEvent, GamePhase, GameState, LevelState, enemy_count, speed_multiplier, token_count,
};
pub use tick::{FixedStep, TickInput, tick};
