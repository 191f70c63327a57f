//! Fixed timestep simulation tick
//!
//! Per tick: player movement, enemy steps, then contact checks in order
//! enemy → tokens → goal. A tick either runs to completion or does not run.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::intersects;
use super::entity::update_enemy;
use super::snapshot::WorldSnapshot;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::error::SimResult;

/// Input for a single tick.
/// Opposing keys may both be down; they cancel out on that axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Restart after a catch, or advance after a win
    pub restart: bool,
}

impl TickInput {
    /// Net direction, each component in -1..=1
    pub fn direction(&self) -> IVec2 {
        IVec2::new(
            self.right as i32 - self.left as i32,
            self.down as i32 - self.up as i32,
        )
    }
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> SimResult<()> {
    state.events.clear();

    if state.level.phase != GamePhase::Playing {
        if input.restart {
            state.reset()?;
        }
        return Ok(());
    }

    state.time_ticks += 1;

    state.player.step(input.direction(), &state.walls);

    for enemy in &mut state.enemies {
        update_enemy(
            enemy,
            &state.walls,
            &state.play_area,
            &state.config.enemy,
            &mut state.rng,
        );
    }

    for token in &mut state.tokens {
        token.animate(dt);
    }

    let player = state.player.rect;

    if state.enemies.iter().any(|e| intersects(&e.rect, &player)) {
        state.level.phase = GamePhase::Caught;
        state.events.push(GameEvent::Caught);
        state.session.record_catch();
        log::info!(
            "Caught on level {} with {} tokens",
            state.level.level_number,
            state.level.tokens_collected
        );
        return Ok(());
    }

    let mut index = 0;
    let events = &mut state.events;
    let level = &mut state.level;
    let session = &mut state.session;
    state.tokens.retain(|token| {
        let hit = intersects(&token.rect, &player);
        if hit {
            level.tokens_collected += 1;
            session.record_token();
            events.push(GameEvent::TokenCollected { index });
            log::debug!("Token {} collected ({} total)", index, level.tokens_collected);
        }
        index += 1;
        !hit
    });

    if state.tokens.is_empty() && intersects(&player, &state.goal) {
        state.level.phase = GamePhase::Won;
        state.events.push(GameEvent::Won);
        state.session.record_win();
        log::info!("Level {} cleared", state.level.level_number);
    }

    Ok(())
}

impl GameState {
    /// Per-frame entry point for hosts running at the tick rate
    pub fn update(&mut self, input: &TickInput, dt: f32) -> SimResult<()> {
        tick(self, input, dt)
    }

    /// Read-only view for renderers, valid between ticks
    pub fn snapshot(&self) -> WorldSnapshot<'_> {
        WorldSnapshot::capture(self)
    }
}

/// Turns variable host frame times into whole fixed ticks
#[derive(Debug, Clone, Default)]
pub struct FixedStep {
    accumulator: f32,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a host frame and return how many ticks to run.
    /// Non-finite frame times count as zero. Backlog past `MAX_SUBSTEPS` is dropped, never run as a partial tick.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        let frame_dt = if frame_dt.is_finite() { frame_dt } else { 0.0 };
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut ticks = 0;
        while self.accumulator >= SIM_DT && ticks < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            ticks += 1;
        }
        if self.accumulator >= SIM_DT {
            self.accumulator %= SIM_DT;
        }
        ticks
    }
}
