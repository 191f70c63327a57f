//! Entities and their per-tick behaviors
//!
//! The player slides along walls; enemies revert and bounce. Enemy behavior
//! is a tagged enum so each kind carries only the state it uses.

use glam::IVec2;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;

use super::collision::{intersects_any, move_and_slide};
use super::rect::Rect;
use crate::config::{EnemyConfig, EnemyStyle};

/// The player's avatar
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub rect: Rect,
    /// Pixels per tick on each axis
    pub speed: i32,
}

impl Player {
    pub fn new(rect: Rect, speed: i32) -> Self {
        Self { rect, speed }
    }

    /// Move by `intent` (each component in -1..=1) scaled by speed, x then y
    pub fn step(&mut self, intent: IVec2, walls: &[Rect]) {
        let delta = intent.clamp(IVec2::NEG_ONE, IVec2::ONE) * self.speed;
        self.rect = move_and_slide(self.rect, walls, delta);
    }
}

/// Wandering enemy state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WanderState {
    pub direction: IVec2,
    /// Per-enemy multiplier, already scaled by level difficulty
    pub speed_boost: f32,
    /// Higher values re-randomize direction more often
    pub aggressiveness: f32,
    pub move_timer: u32,
    /// Timer value past which the direction is redrawn
    pub turn_after: u32,
}

/// Straight-line enemy state (never re-randomizes)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriftState {
    pub direction: IVec2,
    pub speed_boost: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EnemyBehavior {
    Wander(WanderState),
    Drift(DriftState),
}

/// What happened to an enemy on its step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Moved,
    /// Tentative move was blocked; position kept and direction inverted
    Bounced,
}

#[derive(Debug, Clone, Serialize)]
pub struct Enemy {
    pub rect: Rect,
    pub behavior: EnemyBehavior,
}

impl Enemy {
    /// Spawn an enemy of the configured style with randomized traits
    pub fn spawn<R: Rng + ?Sized>(
        rect: Rect,
        rules: &EnemyConfig,
        level_multiplier: f32,
        rng: &mut R,
    ) -> Self {
        let direction = random_direction(&rules.direction_set, rng);
        let (lo, hi) = rules.boost_range;
        let speed_boost = rng.random_range(lo..=hi) * level_multiplier;

        let behavior = match rules.style {
            EnemyStyle::Wander => {
                let (lo, hi) = rules.aggressiveness_range;
                let aggressiveness = rng.random_range(lo..=hi);
                EnemyBehavior::Wander(WanderState {
                    direction,
                    speed_boost,
                    aggressiveness,
                    move_timer: 0,
                    turn_after: turn_threshold(rules, aggressiveness, rng),
                })
            }
            EnemyStyle::Drift => EnemyBehavior::Drift(DriftState {
                direction,
                speed_boost,
            }),
        };
        Self { rect, behavior }
    }

    pub fn direction(&self) -> IVec2 {
        match &self.behavior {
            EnemyBehavior::Wander(w) => w.direction,
            EnemyBehavior::Drift(d) => d.direction,
        }
    }
}

/// Advance one enemy by a tick.
///
/// The tentative move is rejected outright if it would touch a wall or leave
/// `bounds`; the enemy then stays put with its direction negated.
pub fn update_enemy<R: Rng + ?Sized>(
    enemy: &mut Enemy,
    walls: &[Rect],
    bounds: &Rect,
    rules: &EnemyConfig,
    rng: &mut R,
) -> StepOutcome {
    let (direction, speed_boost) = match &mut enemy.behavior {
        EnemyBehavior::Wander(w) => {
            w.move_timer += 1;
            if w.move_timer > w.turn_after {
                w.direction = random_direction(&rules.direction_set, rng);
                w.move_timer = 0;
                w.turn_after = turn_threshold(rules, w.aggressiveness, rng);
            }
            (&mut w.direction, w.speed_boost)
        }
        EnemyBehavior::Drift(d) => (&mut d.direction, d.speed_boost),
    };

    let delta = IVec2::new(
        (direction.x as f32 * speed_boost).trunc() as i32,
        (direction.y as f32 * speed_boost).trunc() as i32,
    );
    let tentative = enemy.rect.translated(delta);

    if intersects_any(&tentative, walls) || !bounds.contains_rect(&tentative) {
        *direction = -*direction;
        StepOutcome::Bounced
    } else {
        enemy.rect = tentative;
        StepOutcome::Moved
    }
}

fn random_direction<R: Rng + ?Sized>(set: &[i32], rng: &mut R) -> IVec2 {
    let mut pick = || *set.choose(&mut *rng).unwrap_or(&1);
    IVec2::new(pick(), pick())
}

/// Ticks until the next direction change, shrunk by aggressiveness
fn turn_threshold<R: Rng + ?Sized>(rules: &EnemyConfig, aggressiveness: f32, rng: &mut R) -> u32 {
    let (lo, hi) = rules.turn_interval;
    let base = rng.random_range(lo..=hi) as f32;
    ((base / aggressiveness.max(f32::EPSILON)).round() as u32).max(1)
}

/// A collectible token
#[derive(Debug, Clone, Serialize)]
pub struct Token {
    pub rect: Rect,
    /// Cosmetic animation phase in [0, TAU)
    pub phase: f32,
}

impl Token {
    pub fn new(rect: Rect, phase: f32) -> Self {
        Self { rect, phase }
    }

    pub fn animate(&mut self, dt: f32) {
        self.phase = (self.phase + dt * 4.0).rem_euclid(std::f32::consts::TAU);
    }
}
