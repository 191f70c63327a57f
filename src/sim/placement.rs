//! Procedural entity placement
//!
//! Two rejection-sampling strategies scatter entities into open floor:
//! - Enemies: one jittered candidate per interior grid sector, accepted in
//!   shuffled order, kept away from the player spawn
//! - Tokens: jittered preferred spots first, then bounded uniform sampling,
//!   kept apart from each other
//!
//! Returning fewer positions than requested is a normal outcome when the
//! candidates or attempt budget run out.

use glam::{IVec2, Vec2};
use rand::Rng;
use rand::seq::SliceRandom;

use super::collision::{intersects, intersects_any};
use super::layout::MazeVariant;
use super::rect::Rect;
use crate::config::GameConfig;
use crate::error::SimResult;

/// What is being placed; selects the sampling strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Enemy,
    Token,
}

/// Validity rules and tuning for one placement batch
#[derive(Debug, Clone)]
pub struct PlacementConstraints {
    /// Footprints must stay fully inside this area
    pub play_area: Rect,
    /// Size of the entity being placed
    pub footprint: IVec2,
    /// Player spawn center
    pub spawn_point: Vec2,
    /// Minimum center distance from `spawn_point` (enemies)
    pub min_spawn_distance: f32,
    /// Minimum center distance between entities of the batch (tokens)
    pub min_separation: f32,
    /// Sector grid (columns, rows) for enemy sampling
    pub grid: (u32, u32),
    /// Preferred token centers
    pub anchors: Vec<IVec2>,
    /// Radius of the disc each anchor is jittered within
    pub jitter: i32,
    pub fallback_attempts: u32,
}

impl PlacementConstraints {
    pub fn for_enemies(config: &GameConfig) -> SimResult<Self> {
        Ok(Self {
            play_area: config.arena.play_area()?,
            footprint: config.enemy.size,
            spawn_point: config.player.spawn_rect()?.center(),
            min_spawn_distance: config.placement.min_spawn_distance,
            min_separation: 0.0,
            grid: (config.placement.grid_cols, config.placement.grid_rows),
            anchors: Vec::new(),
            jitter: 0,
            fallback_attempts: 0,
        })
    }

    pub fn for_tokens(config: &GameConfig, variant: MazeVariant) -> SimResult<Self> {
        Ok(Self {
            play_area: config.arena.play_area()?,
            footprint: config.token.size,
            spawn_point: config.player.spawn_rect()?.center(),
            min_spawn_distance: 0.0,
            min_separation: config.token.min_separation,
            grid: (config.placement.grid_cols, config.placement.grid_rows),
            anchors: variant.preferred_token_spots(),
            jitter: config.token.jitter,
            fallback_attempts: config.token.fallback_attempts,
        })
    }

    /// Clamp a top-left corner so the footprint stays in the play area
    fn clamp(&self, pos: IVec2) -> IVec2 {
        let area = &self.play_area;
        let max_x = (area.right() - self.footprint.x).max(area.left());
        let max_y = (area.bottom() - self.footprint.y).max(area.top());
        IVec2::new(pos.x.clamp(area.left(), max_x), pos.y.clamp(area.top(), max_y))
    }

    fn footprint_at(&self, pos: IVec2) -> Option<Rect> {
        Rect::from_pos_size(pos, self.footprint).ok()
    }
}

/// Place up to `count` entities of `kind`. Positions are top-left corners.
///
/// Candidates never overlap `walls` or `existing`, and never leave the play
/// area. Enemies also respect the spawn distance; tokens respect separation.
pub fn place_entities<R: Rng + ?Sized>(
    kind: EntityKind,
    count: usize,
    walls: &[Rect],
    existing: &[Rect],
    constraints: &PlacementConstraints,
    rng: &mut R,
) -> Vec<IVec2> {
    match kind {
        EntityKind::Enemy => sample_grid_sectors(count, walls, existing, constraints, rng),
        EntityKind::Token => sample_preferred_spots(count, walls, existing, constraints, rng),
    }
}

/// One jittered candidate per interior sector, accepted in shuffled order
pub fn sample_grid_sectors<R: Rng + ?Sized>(
    count: usize,
    walls: &[Rect],
    existing: &[Rect],
    constraints: &PlacementConstraints,
    rng: &mut R,
) -> Vec<IVec2> {
    let area = &constraints.play_area;
    let (cols, rows) = constraints.grid;
    let (cols, rows) = (cols.max(1) as i32, rows.max(1) as i32);
    let sector = IVec2::new(area.width() / cols, area.height() / rows);
    let slack = ((sector - constraints.footprint) / 2).max(IVec2::ZERO);

    let mut candidates = Vec::new();
    for row in 1..rows - 1 {
        for col in 1..cols - 1 {
            let center = area.pos() + IVec2::new(col, row) * sector + sector / 2;
            let offset = IVec2::new(
                rng.random_range(-slack.x..=slack.x),
                rng.random_range(-slack.y..=slack.y),
            );
            candidates.push(constraints.clamp(center - constraints.footprint / 2 + offset));
        }
    }
    candidates.shuffle(rng);

    let mut placed: Vec<Rect> = Vec::with_capacity(count);
    for pos in candidates {
        if placed.len() >= count {
            break;
        }
        let Some(footprint) = constraints.footprint_at(pos) else {
            continue;
        };
        let far_from_spawn =
            footprint.center().distance(constraints.spawn_point) >= constraints.min_spawn_distance;
        if far_from_spawn
            && !intersects_any(&footprint, walls)
            && !intersects_any(&footprint, existing)
            && !intersects_any(&footprint, &placed)
        {
            placed.push(footprint);
        }
    }
    placed.iter().map(Rect::pos).collect()
}

/// Jittered preferred spots first, then bounded uniform sampling
pub fn sample_preferred_spots<R: Rng + ?Sized>(
    count: usize,
    walls: &[Rect],
    existing: &[Rect],
    constraints: &PlacementConstraints,
    rng: &mut R,
) -> Vec<IVec2> {
    let mut placed: Vec<Rect> = Vec::with_capacity(count);
    let accepts = |footprint: &Rect, placed: &[Rect]| {
        !intersects_any(footprint, walls)
            && !intersects_any(footprint, existing)
            && placed.iter().all(|p| {
                !intersects(p, footprint)
                    && p.center().distance(footprint.center()) >= constraints.min_separation
            })
    };

    let j = constraints.jitter.max(0);
    let mut candidates: Vec<IVec2> = constraints
        .anchors
        .iter()
        .map(|&anchor| {
            let offset = disc_offset(j, rng);
            constraints.clamp(anchor - constraints.footprint / 2 + offset)
        })
        .collect();
    candidates.shuffle(rng);

    for pos in candidates {
        if placed.len() >= count {
            break;
        }
        match constraints.footprint_at(pos) {
            Some(footprint) if accepts(&footprint, &placed) => placed.push(footprint),
            _ => {}
        }
    }

    // Preferred spots exhausted: uniform fallback with a per-token budget
    let area = &constraints.play_area;
    let max = constraints.clamp(IVec2::new(area.right(), area.bottom()));
    while placed.len() < count {
        let before = placed.len();
        for _ in 0..constraints.fallback_attempts {
            let pos = IVec2::new(
                rng.random_range(area.left()..=max.x),
                rng.random_range(area.top()..=max.y),
            );
            if let Some(footprint) = constraints.footprint_at(pos) {
                if accepts(&footprint, &placed) {
                    placed.push(footprint);
                    break;
                }
            }
        }
        if placed.len() == before {
            break;
        }
    }

    placed.iter().map(Rect::pos).collect()
}

/// Uniform integer offset with length at most `radius`
fn disc_offset<R: Rng + ?Sized>(radius: i32, rng: &mut R) -> IVec2 {
    let limit = radius * radius;
    loop {
        let offset = IVec2::new(
            rng.random_range(-radius..=radius),
            rng.random_range(-radius..=radius),
        );
        if offset.length_squared() <= limit {
            return offset;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::layout::generate_walls;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn setup(variant: MazeVariant) -> (GameConfig, Vec<Rect>) {
        let config = GameConfig::default();
        let walls = generate_walls(variant, &config.arena).unwrap();
        (config, walls)
    }

    fn footprints(positions: &[IVec2], size: IVec2) -> Vec<Rect> {
        positions
            .iter()
            .map(|&p| Rect::from_pos_size(p, size).unwrap())
            .collect()
    }

    #[test]
    fn test_enemy_placement_is_reproducible() {
        let (config, walls) = setup(MazeVariant::Classic);
        let constraints = PlacementConstraints::for_enemies(&config).unwrap();
        let a = place_entities(
            EntityKind::Enemy,
            5,
            &walls,
            &[],
            &constraints,
            &mut Pcg32::seed_from_u64(7),
        );
        let b = place_entities(
            EntityKind::Enemy,
            5,
            &walls,
            &[],
            &constraints,
            &mut Pcg32::seed_from_u64(7),
        );
        assert_eq!(a, b);
        assert_eq!(a.len(), 5);
    }

    #[test]
    fn test_enemies_keep_clear_of_spawn() {
        let (config, walls) = setup(MazeVariant::Crossroads);
        let constraints = PlacementConstraints::for_enemies(&config).unwrap();
        let mut rng = Pcg32::seed_from_u64(3);
        let positions = sample_grid_sectors(8, &walls, &[], &constraints, &mut rng);
        for rect in footprints(&positions, config.enemy.size) {
            assert!(rect.center().distance(constraints.spawn_point) >= 200.0);
        }
    }

    #[test]
    fn test_tokens_fall_back_without_anchors() {
        let (config, walls) = setup(MazeVariant::Pillars);
        let mut constraints =
            PlacementConstraints::for_tokens(&config, MazeVariant::Pillars).unwrap();
        constraints.anchors.clear();
        let mut rng = Pcg32::seed_from_u64(11);
        let positions = sample_preferred_spots(4, &walls, &[], &constraints, &mut rng);
        assert_eq!(positions.len(), 4);
    }

    #[test]
    fn test_exhaustion_returns_short_population() {
        // Only room for a couple of well-separated tokens
        let play_area = Rect::new(15, 15, 120, 40).unwrap();
        let constraints = PlacementConstraints {
            play_area,
            footprint: IVec2::new(20, 20),
            spawn_point: Vec2::ZERO,
            min_spawn_distance: 0.0,
            min_separation: 60.0,
            grid: (3, 3),
            anchors: vec![IVec2::new(40, 30)],
            jitter: 5,
            fallback_attempts: 50,
        };
        let mut rng = Pcg32::seed_from_u64(1);
        let positions = sample_preferred_spots(10, &[], &[], &constraints, &mut rng);
        assert!(!positions.is_empty());
        assert!(positions.len() < 10);
    }

    #[test]
    fn test_anchor_jitter_stays_within_radius() {
        let anchor = IVec2::new(400, 300);
        let constraints = PlacementConstraints {
            play_area: Rect::new(15, 15, 770, 570).unwrap(),
            footprint: IVec2::new(20, 20),
            spawn_point: Vec2::ZERO,
            min_spawn_distance: 0.0,
            min_separation: 0.0,
            grid: (8, 6),
            anchors: vec![anchor],
            jitter: 30,
            fallback_attempts: 0,
        };
        for seed in 0..200 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let positions = sample_preferred_spots(1, &[], &[], &constraints, &mut rng);
            assert_eq!(positions.len(), 1);
            let center = positions[0] + constraints.footprint / 2;
            assert!(
                (center - anchor).length_squared() <= 30 * 30,
                "seed {seed} jittered to {center}"
            );
        }
    }

    #[test]
    fn test_disc_offset_with_zero_radius() {
        let mut rng = Pcg32::seed_from_u64(2);
        assert_eq!(disc_offset(0, &mut rng), IVec2::ZERO);
    }

    #[test]
    fn test_existing_footprints_are_avoided() {
        let (config, walls) = setup(MazeVariant::Classic);
        let constraints = PlacementConstraints::for_tokens(&config, MazeVariant::Classic).unwrap();
        let blocker = Rect::new(15, 15, 770, 280).unwrap();
        let mut rng = Pcg32::seed_from_u64(5);
        let positions = sample_preferred_spots(5, &walls, &[blocker], &constraints, &mut rng);
        for rect in footprints(&positions, config.token.size) {
            assert!(!intersects(&rect, &blocker));
        }
    }

    proptest! {
        #[test]
        fn placements_are_valid(seed in any::<u64>(), variant_idx in 0usize..3, count in 0usize..10) {
            let variant = MazeVariant::ALL[variant_idx];
            let (config, walls) = setup(variant);
            let mut rng = Pcg32::seed_from_u64(seed);

            let enemy_rules = PlacementConstraints::for_enemies(&config).unwrap();
            let enemies = place_entities(EntityKind::Enemy, count, &walls, &[], &enemy_rules, &mut rng);
            prop_assert!(enemies.len() <= count);
            for rect in footprints(&enemies, config.enemy.size) {
                prop_assert!(!intersects_any(&rect, &walls));
                prop_assert!(enemy_rules.play_area.contains_rect(&rect));
            }

            let token_rules = PlacementConstraints::for_tokens(&config, variant).unwrap();
            let tokens = place_entities(EntityKind::Token, count, &walls, &[], &token_rules, &mut rng);
            prop_assert!(tokens.len() <= count);
            let rects = footprints(&tokens, config.token.size);
            for (i, a) in rects.iter().enumerate() {
                prop_assert!(!intersects_any(a, &walls));
                prop_assert!(token_rules.play_area.contains_rect(a));
                for b in &rects[i + 1..] {
                    prop_assert!(a.center().distance(b.center()) >= config.token.min_separation);
                }
            }
        }
    }
}
