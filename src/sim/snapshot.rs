//! Read-only world view handed to renderers between ticks

use serde::Serialize;

use super::layout::MazeVariant;
use super::rect::Rect;
use super::state::{GamePhase, GameState};

#[derive(Debug, Clone, Serialize)]
pub struct WorldSnapshot<'a> {
    pub player: Rect,
    /// In enemy list order
    pub enemies: Vec<Rect>,
    /// Remaining tokens, in list order
    pub tokens: Vec<Rect>,
    pub walls: &'a [Rect],
    pub goal: Rect,
    pub tokens_collected: u32,
    pub level_number: u32,
    pub phase: GamePhase,
    pub variant: MazeVariant,
}

impl<'a> WorldSnapshot<'a> {
    pub fn capture(state: &'a GameState) -> Self {
        Self {
            player: state.player.rect,
            enemies: state.enemies.iter().map(|e| e.rect).collect(),
            tokens: state.tokens.iter().map(|t| t.rect).collect(),
            walls: &state.walls,
            goal: state.goal,
            tokens_collected: state.level.tokens_collected,
            level_number: state.level.level_number,
            phase: state.level.phase,
            variant: state.variant,
        }
    }

    pub fn remaining_tokens(&self) -> usize {
        self.tokens.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn test_snapshot_mirrors_state() {
        let state = GameState::new(GameConfig::default(), 99).unwrap();
        let snap = state.snapshot();
        assert_eq!(snap.player, state.player.rect);
        assert_eq!(snap.enemies.len(), state.enemies.len());
        assert_eq!(snap.remaining_tokens(), state.remaining_tokens());
        assert_eq!(snap.walls, state.walls.as_slice());
        assert_eq!(snap.phase, GamePhase::Playing);
        assert_eq!(snap.level_number, 1);
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(GameConfig::default(), 99).unwrap();
        let json = serde_json::to_value(state.snapshot()).unwrap();
        assert_eq!(json["phase"], "Playing");
        assert_eq!(json["player"]["x"], 55);
        assert!(json["walls"].as_array().map(|w| w.len() > 4).unwrap_or(false));
    }
}
