//! Hand-authored maze layouts
//!
//! Each variant is a fixed set of interior obstacles inside the boundary frame,
//! plus a list of preferred token spots that sit in open corridors.

use std::fmt;
use std::str::FromStr;

use glam::IVec2;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::config::ArenaConfig;
use crate::error::{SimError, SimResult};

/// Available maze layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MazeVariant {
    /// Long corridors with an open top lane
    Classic,
    /// Four wings around a central spine
    Crossroads,
    /// Open floor broken up by square columns
    Pillars,
}

impl MazeVariant {
    pub const ALL: [MazeVariant; 3] = [
        MazeVariant::Classic,
        MazeVariant::Crossroads,
        MazeVariant::Pillars,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MazeVariant::Classic => "classic",
            MazeVariant::Crossroads => "crossroads",
            MazeVariant::Pillars => "pillars",
        }
    }

    /// Pick a variant uniformly
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        *Self::ALL.choose(rng).unwrap_or(&MazeVariant::Classic)
    }

    /// Interior obstacles as (x, y, width, height)
    fn interior(&self) -> &'static [(i32, i32, i32, i32)] {
        match self {
            MazeVariant::Classic => &[
                (100, 100, 600, 20),
                (100, 200, 20, 300),
                (200, 300, 400, 20),
                (700, 150, 20, 400),
                (300, 150, 20, 200),
                (500, 400, 20, 150),
            ],
            MazeVariant::Crossroads => &[
                (150, 130, 220, 20),
                (430, 130, 220, 20),
                (150, 450, 220, 20),
                (430, 450, 220, 20),
                (390, 200, 20, 200),
                (150, 250, 20, 120),
                (630, 250, 20, 120),
                (250, 290, 80, 20),
                (470, 290, 80, 20),
            ],
            MazeVariant::Pillars => &[
                (160, 160, 40, 40),
                (320, 160, 40, 40),
                (480, 160, 40, 40),
                (640, 160, 40, 40),
                (160, 300, 40, 40),
                (320, 300, 40, 40),
                (480, 300, 40, 40),
                (640, 300, 40, 40),
                (160, 440, 40, 40),
                (320, 440, 40, 40),
                (480, 440, 40, 40),
                (640, 440, 40, 40),
                (560, 60, 20, 60),
            ],
        }
    }

    /// Token anchor points (centers) that sit in open floor
    pub fn preferred_token_spots(&self) -> Vec<IVec2> {
        let spots: &[(i32, i32)] = match self {
            MazeVariant::Classic => &[
                (60, 150),
                (210, 160),
                (250, 250),
                (420, 220),
                (600, 200),
                (620, 360),
                (400, 400),
                (250, 420),
                (600, 500),
                (750, 450),
                (420, 540),
                (750, 250),
            ],
            MazeVariant::Crossroads => &[
                (80, 80),
                (400, 80),
                (720, 200),
                (260, 200),
                (540, 200),
                (260, 380),
                (540, 380),
                (400, 430),
                (80, 300),
                (720, 400),
                (400, 530),
                (250, 530),
            ],
            MazeVariant::Pillars => &[
                (100, 100),
                (240, 230),
                (400, 230),
                (560, 230),
                (240, 370),
                (400, 370),
                (560, 370),
                (720, 300),
                (400, 520),
                (720, 520),
                (260, 90),
                (100, 380),
            ],
        };
        spots.iter().map(|&(x, y)| IVec2::new(x, y)).collect()
    }
}

impl fmt::Display for MazeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MazeVariant {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "classic" => Ok(MazeVariant::Classic),
            "crossroads" => Ok(MazeVariant::Crossroads),
            "pillars" => Ok(MazeVariant::Pillars),
            _ => Err(SimError::UnknownVariant(s.to_string())),
        }
    }
}

/// The four boundary frame walls: top, left, right, bottom
pub fn frame_walls(arena: &ArenaConfig) -> SimResult<Vec<Rect>> {
    let (w, h, t) = (arena.width, arena.height, arena.frame_thickness);
    Ok(vec![
        Rect::new(0, 0, w, t)?,
        Rect::new(0, 0, t, h)?,
        Rect::new(w - t, 0, t, h)?,
        Rect::new(0, h - t, w, t)?,
    ])
}

/// Build the full wall set for a variant: frame first, then interior obstacles
pub fn generate_walls(variant: MazeVariant, arena: &ArenaConfig) -> SimResult<Vec<Rect>> {
    let mut walls = frame_walls(arena)?;
    for &(x, y, w, h) in variant.interior() {
        walls.push(Rect::new(x, y, w, h)?);
    }
    Ok(walls)
}

/// Same as `generate_walls` for a variant given by name
pub fn generate_walls_named(name: &str, arena: &ArenaConfig) -> SimResult<Vec<Rect>> {
    generate_walls(name.parse()?, arena)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::collision::{intersects, intersects_any};

    #[test]
    fn test_every_variant_has_frame_and_interior() {
        let arena = ArenaConfig::default();
        for variant in MazeVariant::ALL {
            let walls = generate_walls(variant, &arena).unwrap();
            assert_eq!(&walls[..4], frame_walls(&arena).unwrap().as_slice());
            assert!(walls.len() > 4, "{variant} has no interior walls");
        }
    }

    #[test]
    fn test_layouts_are_deterministic_and_distinct() {
        let arena = ArenaConfig::default();
        let a = generate_walls(MazeVariant::Classic, &arena).unwrap();
        let b = generate_walls(MazeVariant::Classic, &arena).unwrap();
        let c = generate_walls(MazeVariant::Pillars, &arena).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_spawn_and_goal_are_clear_in_every_variant() {
        let config = GameConfig::default();
        let spawn = config.player.spawn_rect().unwrap();
        let goal = config.goal_rect().unwrap();
        for variant in MazeVariant::ALL {
            let walls = generate_walls(variant, &config.arena).unwrap();
            assert!(!intersects_any(&spawn, &walls), "spawn blocked in {variant}");
            assert!(!intersects_any(&goal, &walls), "goal blocked in {variant}");
        }
    }

    #[test]
    fn test_frame_encloses_play_area() {
        let arena = ArenaConfig::default();
        let play = arena.play_area().unwrap();
        for wall in frame_walls(&arena).unwrap() {
            assert!(!intersects(&wall, &play));
        }
    }

    #[test]
    fn test_named_lookup() {
        let arena = ArenaConfig::default();
        assert!(generate_walls_named("Crossroads", &arena).is_ok());
        assert!(matches!(
            generate_walls_named("spiral", &arena),
            Err(SimError::UnknownVariant(name)) if name == "spiral"
        ));
    }
}
