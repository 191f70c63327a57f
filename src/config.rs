//! Game configuration
//!
//! One immutable `GameConfig` is threaded into the game state at construction.
//! Every section has defaults, so a JSON file only needs the keys it changes.

use std::path::Path;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};
use crate::sim::layout::MazeVariant;
use crate::sim::rect::Rect;

/// Screen and frame dimensions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub width: i32,
    pub height: i32,
    /// Thickness of the four boundary frame walls
    pub frame_thickness: i32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            frame_thickness: 15,
        }
    }
}

impl ArenaConfig {
    /// The region inside the boundary frame
    pub fn play_area(&self) -> SimResult<Rect> {
        let t = self.frame_thickness;
        Rect::new(t, t, self.width - 2 * t, self.height - 2 * t)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Top-left spawn corner
    pub spawn: IVec2,
    pub size: IVec2,
    /// Pixels per tick on each axis
    pub speed: i32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            spawn: IVec2::new(55, 505),
            size: IVec2::new(40, 40),
            speed: 4,
        }
    }
}

impl PlayerConfig {
    pub fn spawn_rect(&self) -> SimResult<Rect> {
        Rect::from_pos_size(self.spawn, self.size)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalConfig {
    pub pos: IVec2,
    pub size: IVec2,
}

impl Default for GoalConfig {
    fn default() -> Self {
        Self {
            pos: IVec2::new(700, 40),
            size: IVec2::new(60, 60),
        }
    }
}

/// Level-driven difficulty curve
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyConfig {
    pub base_enemies: u32,
    pub max_enemies: u32,
    pub base_tokens: u32,
    pub max_tokens: u32,
    /// Enemy speed multiplier added per level
    pub speed_step: f32,
    pub max_speed_multiplier: f32,
    pub max_level: u32,
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self {
            base_enemies: 3,
            max_enemies: 8,
            base_tokens: 3,
            max_tokens: 7,
            speed_step: 0.05,
            max_speed_multiplier: 1.4,
            max_level: 10,
        }
    }
}

/// Which behavior level setup gives new enemies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyStyle {
    #[default]
    Wander,
    Drift,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub size: IVec2,
    /// Values each direction component is drawn from
    pub direction_set: Vec<i32>,
    /// Per-enemy speed boost range (before level scaling)
    pub boost_range: (f32, f32),
    pub aggressiveness_range: (f32, f32),
    /// Ticks between direction changes, divided by aggressiveness
    pub turn_interval: (u32, u32),
    pub style: EnemyStyle,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            size: IVec2::new(40, 40),
            direction_set: vec![-2, -1, 1, 2],
            boost_range: (0.8, 1.2),
            aggressiveness_range: (0.5, 1.5),
            turn_interval: (60, 120),
            style: EnemyStyle::Wander,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    pub size: IVec2,
    /// Minimum center distance between tokens of one level
    pub min_separation: f32,
    /// Max offset applied to each preferred spot
    pub jitter: i32,
    /// Uniform-sampling attempts per token once preferred spots run out
    pub fallback_attempts: u32,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            size: IVec2::new(20, 20),
            min_separation: 60.0,
            jitter: 30,
            fallback_attempts: 100,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Enemy sampling grid, outer ring of sectors is skipped
    pub grid_cols: u32,
    pub grid_rows: u32,
    /// Minimum center distance between an enemy and the player spawn
    pub min_spawn_distance: f32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            grid_cols: 8,
            grid_rows: 6,
            min_spawn_distance: 200.0,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub arena: ArenaConfig,
    pub player: PlayerConfig,
    pub goal: GoalConfig,
    pub difficulty: DifficultyConfig,
    pub enemy: EnemyConfig,
    pub token: TokenConfig,
    pub placement: PlacementConfig,
    /// Pin every level to one maze; random per level when unset
    pub variant: Option<MazeVariant>,
}

impl GameConfig {
    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> SimResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn goal_rect(&self) -> SimResult<Rect> {
        Rect::from_pos_size(self.goal.pos, self.goal.size)
    }

    /// Reject configurations that would break simulation invariants
    pub fn validate(&self) -> SimResult<()> {
        let invalid = |msg: String| Err(SimError::InvalidConfig(msg));

        let arena = &self.arena;
        if arena.frame_thickness <= 0 {
            return invalid("frame thickness must be positive".into());
        }
        let play = arena.play_area()?;
        let spawn = self.player.spawn_rect()?;
        let goal = self.goal_rect()?;
        Rect::from_pos_size(IVec2::ZERO, self.enemy.size)?;
        Rect::from_pos_size(IVec2::ZERO, self.token.size)?;

        if !play.contains_rect(&spawn) {
            return invalid(format!("player spawn {:?} is outside the play area", spawn));
        }
        if !play.contains_rect(&goal) {
            return invalid(format!("goal {:?} is outside the play area", goal));
        }
        if self.player.speed <= 0 {
            return invalid("player speed must be positive".into());
        }

        let d = &self.difficulty;
        if d.max_level == 0 {
            return invalid("max_level must be at least 1".into());
        }
        if d.max_enemies < d.base_enemies || d.max_tokens < d.base_tokens {
            return invalid("difficulty caps must not be below their base values".into());
        }
        if d.speed_step < 0.0 || d.max_speed_multiplier < 1.0 {
            return invalid("speed curve must be non-decreasing from 1.0".into());
        }

        let e = &self.enemy;
        if e.direction_set.is_empty() || e.direction_set.contains(&0) {
            return invalid("enemy direction set must be non-empty and exclude 0".into());
        }
        if e.boost_range.0 <= 0.0 || e.boost_range.0 > e.boost_range.1 {
            return invalid("enemy boost range must be positive and ordered".into());
        }
        if e.aggressiveness_range.0 <= 0.0 || e.aggressiveness_range.0 > e.aggressiveness_range.1 {
            return invalid("enemy aggressiveness range must be positive and ordered".into());
        }
        if e.turn_interval.0 == 0 || e.turn_interval.0 > e.turn_interval.1 {
            return invalid("enemy turn interval must be positive and ordered".into());
        }

        let t = &self.token;
        if t.jitter < 0 || t.min_separation < 0.0 {
            return invalid("token jitter and separation must be non-negative".into());
        }

        let p = &self.placement;
        if p.grid_cols < 3 || p.grid_rows < 3 {
            return invalid("placement grid needs at least 3x3 sectors".into());
        }

        Ok(())
    }
}
