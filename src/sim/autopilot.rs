//! Demo autopilot
//!
//! Greedy steering for attract/demo runs: head for the nearest token, then the
//! goal, sidestep enemies that get close, and restart once a level ends. It
//! reads the state only and produces ordinary input.

use glam::Vec2;

use super::state::{GamePhase, GameState};
use super::tick::TickInput;

/// Enemies closer than this (center to center) push the autopilot away
const FLEE_RADIUS: f32 = 90.0;

pub fn autopilot_input(state: &GameState) -> TickInput {
    if state.level.phase != GamePhase::Playing {
        return TickInput {
            restart: true,
            ..Default::default()
        };
    }

    let me = state.player.rect.center();
    let target = state
        .tokens
        .iter()
        .map(|t| t.rect.center())
        .min_by(|a, b| {
            a.distance(me)
                .partial_cmp(&b.distance(me))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .unwrap_or_else(|| state.goal.center());

    let mut steer = target - me;
    for enemy in &state.enemies {
        let away = me - enemy.rect.center();
        let dist = away.length();
        if dist < FLEE_RADIUS {
            steer += away.normalize_or_zero() * (FLEE_RADIUS - dist) * 4.0;
        }
    }

    let dead_zone = state.player.speed as f32 / 2.0;
    axis_input(steer, dead_zone)
}

fn axis_input(steer: Vec2, dead_zone: f32) -> TickInput {
    TickInput {
        left: steer.x < -dead_zone,
        right: steer.x > dead_zone,
        up: steer.y < -dead_zone,
        down: steer.y > dead_zone,
        restart: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::entity::Token;
    use crate::sim::rect::Rect;

    #[test]
    fn test_restarts_finished_level() {
        let mut state = GameState::new(GameConfig::default(), 3).unwrap();
        state.level.phase = GamePhase::Won;
        assert!(autopilot_input(&state).restart);
    }

    #[test]
    fn test_heads_for_nearest_token() {
        let mut state = GameState::new(GameConfig::default(), 3).unwrap();
        state.enemies.clear();
        state.tokens = vec![
            Token::new(Rect::new(60, 300, 20, 20).unwrap(), 0.0),
            Token::new(Rect::new(700, 520, 20, 20).unwrap(), 0.0),
        ];
        let input = autopilot_input(&state);
        assert!(input.up);
        assert!(!input.down);
        assert!(!input.restart);
    }

    #[test]
    fn test_heads_for_goal_when_tokens_gone() {
        let mut state = GameState::new(GameConfig::default(), 3).unwrap();
        state.enemies.clear();
        state.tokens.clear();
        let input = autopilot_input(&state);
        assert!(input.right && input.up);
    }
}
