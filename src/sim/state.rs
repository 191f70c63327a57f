//! Game state, level progression and difficulty curve
//!
//! `GameState` owns every entity, the level counters and the single seeded
//! RNG. Level setup rebuilds the world wholesale; walls are never mutated
//! while a level is running.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Enemy, Player, Token};
use super::layout::{MazeVariant, generate_walls};
use super::placement::{EntityKind, PlacementConstraints, place_entities};
use super::rect::Rect;
use crate::config::{DifficultyConfig, GameConfig};
use crate::error::SimResult;
use crate::session::SessionRecord;

/// Current phase of a level. Movement and AI only run while `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    /// Reached the goal with every token collected
    Won,
    /// Touched an enemy
    Caught,
}

/// Things that happened during the last tick
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    LevelStarted { level: u32, variant: MazeVariant },
    /// Index into the token list as it was before removal
    TokenCollected { index: usize },
    Caught,
    Won,
}

/// Enemy count for a level, capped
pub fn enemy_count(difficulty: &DifficultyConfig, level: u32) -> u32 {
    let steps = clamp_level(difficulty, level) - 1;
    (difficulty.base_enemies + steps).min(difficulty.max_enemies)
}

/// Token count for a level: one extra every two levels, capped
pub fn token_count(difficulty: &DifficultyConfig, level: u32) -> u32 {
    let steps = clamp_level(difficulty, level) - 1;
    (difficulty.base_tokens + steps / 2).min(difficulty.max_tokens)
}

/// Enemy speed multiplier for a level, capped
pub fn speed_multiplier(difficulty: &DifficultyConfig, level: u32) -> f32 {
    let steps = (clamp_level(difficulty, level) - 1) as f32;
    (1.0 + steps * difficulty.speed_step).min(difficulty.max_speed_multiplier)
}

fn clamp_level(difficulty: &DifficultyConfig, level: u32) -> u32 {
    level.clamp(1, difficulty.max_level.max(1))
}

/// Level counters. Remaining tokens are derived from the token list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelState {
    pub level_number: u32,
    pub tokens_collected: u32,
    pub phase: GamePhase,
}

impl Default for LevelState {
    fn default() -> Self {
        Self {
            level_number: 1,
            tokens_collected: 0,
            phase: GamePhase::Playing,
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub level: LevelState,
    pub variant: MazeVariant,
    /// Boundary frame plus interior obstacles
    pub walls: Vec<Rect>,
    /// Inner play boundary enemies must stay within
    pub play_area: Rect,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub tokens: Vec<Token>,
    pub goal: Rect,
    /// Simulation tick counter (across levels)
    pub time_ticks: u64,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
    pub session: SessionRecord,
}

impl GameState {
    /// Validate `config` and set up level 1
    pub fn new(config: GameConfig, seed: u64) -> SimResult<Self> {
        config.validate()?;

        let play_area = config.arena.play_area()?;
        let goal = config.goal_rect()?;
        let player = Player::new(config.player.spawn_rect()?, config.player.speed);

        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            level: LevelState::default(),
            variant: config.variant.unwrap_or(MazeVariant::Classic),
            walls: Vec::new(),
            play_area,
            player,
            enemies: Vec::new(),
            tokens: Vec::new(),
            goal,
            time_ticks: 0,
            events: Vec::new(),
            session: SessionRecord::default(),
            config,
        };
        state.setup_level()?;
        Ok(state)
    }

    pub fn remaining_tokens(&self) -> usize {
        self.tokens.len()
    }

    /// Enemy and token counts the current level asks for
    pub fn nominal_counts(&self) -> (u32, u32) {
        let d = &self.config.difficulty;
        (
            enemy_count(d, self.level.level_number),
            token_count(d, self.level.level_number),
        )
    }

    /// Rebuild walls and populations for the current level number
    pub fn setup_level(&mut self) -> SimResult<()> {
        let variant = match self.config.variant {
            Some(v) => v,
            None => MazeVariant::random(&mut self.rng),
        };
        self.variant = variant;
        self.walls = generate_walls(variant, &self.config.arena)?;

        let spawn = self.config.player.spawn_rect()?;
        self.player = Player::new(spawn, self.config.player.speed);
        self.level.tokens_collected = 0;
        self.level.phase = GamePhase::Playing;

        let level = self.level.level_number;
        let (want_enemies, want_tokens) = self.nominal_counts();
        let multiplier = speed_multiplier(&self.config.difficulty, level);

        // Keep enemies off the goal and tokens off the spawn and goal
        let enemy_rules = PlacementConstraints::for_enemies(&self.config)?;
        let enemy_spots = place_entities(
            EntityKind::Enemy,
            want_enemies as usize,
            &self.walls,
            &[self.goal],
            &enemy_rules,
            &mut self.rng,
        );
        self.enemies = Vec::with_capacity(enemy_spots.len());
        for pos in enemy_spots {
            let rect = Rect::from_pos_size(pos, self.config.enemy.size)?;
            self.enemies
                .push(Enemy::spawn(rect, &self.config.enemy, multiplier, &mut self.rng));
        }

        let token_rules = PlacementConstraints::for_tokens(&self.config, variant)?;
        let token_spots = place_entities(
            EntityKind::Token,
            want_tokens as usize,
            &self.walls,
            &[spawn, self.goal],
            &token_rules,
            &mut self.rng,
        );
        self.tokens = Vec::with_capacity(token_spots.len());
        for (i, pos) in token_spots.into_iter().enumerate() {
            let rect = Rect::from_pos_size(pos, self.config.token.size)?;
            self.tokens.push(Token::new(rect, i as f32 * 0.7));
        }

        if self.enemies.len() < want_enemies as usize || self.tokens.len() < want_tokens as usize {
            log::warn!(
                "Level {} placement short: enemies {}/{}, tokens {}/{}",
                level,
                self.enemies.len(),
                want_enemies,
                self.tokens.len(),
                want_tokens
            );
        }
        log::info!(
            "Level {} ({}): {} enemies at x{:.2} speed, {} tokens",
            level,
            variant,
            self.enemies.len(),
            multiplier,
            self.tokens.len()
        );

        self.session.record_level(level);
        self.events.push(GameEvent::LevelStarted { level, variant });
        Ok(())
    }

    /// Restart after a finished level: advance on a win, back to 1 when caught.
    /// Does nothing while the level is still being played.
    pub fn reset(&mut self) -> SimResult<()> {
        let max_level = self.config.difficulty.max_level;
        self.level.level_number = match self.level.phase {
            GamePhase::Playing => return Ok(()),
            GamePhase::Won => (self.level.level_number + 1).min(max_level),
            GamePhase::Caught => 1,
        };
        log::info!(
            "Reset after {:?}: starting level {}",
            self.level.phase,
            self.level.level_number
        );
        self.setup_level()
    }
}
