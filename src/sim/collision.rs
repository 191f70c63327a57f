//! Rectangle overlap tests and axis-separated push-out
//!
//! Movement is resolved one axis at a time: x fully against every obstacle,
//! then y. This lets a mover slide along a wall when travelling diagonally.
//! The trade-off is that exact corner junctions are resolved per axis rather
//! than by a 2D sweep.

use glam::IVec2;

use super::rect::{Axis, Rect};

/// True iff the open interiors of `a` and `b` overlap on both axes.
/// Rectangles that only share an edge do not intersect.
#[inline]
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && b.left() < a.right() && a.top() < b.bottom() && b.top() < a.bottom()
}

/// True if `rect` overlaps any obstacle
pub fn intersects_any(rect: &Rect, obstacles: &[Rect]) -> bool {
    obstacles.iter().any(|o| intersects(rect, o))
}

/// Move `moving` by `delta` along `axis`, then push it out of any obstacle.
///
/// If the moved box overlaps obstacles, its leading edge is snapped flush
/// against the trailing edge of the obstacle nearest in the direction of
/// travel. Ties go to the obstacle seen first. A zero delta never moves.
pub fn resolve_axis_push(moving: Rect, obstacles: &[Rect], axis: Axis, delta: i32) -> Rect {
    if delta == 0 {
        return moving;
    }

    let step = match axis {
        Axis::X => IVec2::new(delta, 0),
        Axis::Y => IVec2::new(0, delta),
    };
    let mut moved = moving.translated(step);
    let extent = moved.extent(axis);

    // Target coordinate for the moved box when flush against each hit
    let mut best: Option<i32> = None;
    for obstacle in obstacles.iter().filter(|o| intersects(&moved, o)) {
        let near = obstacle.coord(axis);
        let far = near + obstacle.extent(axis);
        let candidate = if delta > 0 { near - extent } else { far };
        best = match best {
            // Moving forward: the nearest hit has the smallest near edge.
            Some(b) if delta > 0 && candidate >= b => Some(b),
            // Moving backward: the nearest hit has the largest far edge.
            Some(b) if delta < 0 && candidate <= b => Some(b),
            _ => Some(candidate),
        };
    }

    if let Some(coord) = best {
        moved.set_coord(axis, coord);
    }
    moved
}

/// Apply a 2D move as x then y push-out. This is how the player moves.
pub fn move_and_slide(moving: Rect, obstacles: &[Rect], delta: IVec2) -> Rect {
    let after_x = resolve_axis_push(moving, obstacles, Axis::X, delta.x);
    resolve_axis_push(after_x, obstacles, Axis::Y, delta.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rect(x: i32, y: i32, w: i32, h: i32) -> Rect {
        Rect::new(x, y, w, h).unwrap()
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = rect(0, 0, 10, 10);
        assert!(!intersects(&a, &rect(10, 0, 10, 10)));
        assert!(!intersects(&a, &rect(0, 10, 10, 10)));
        assert!(intersects(&a, &rect(9, 9, 10, 10)));
    }

    #[test]
    fn test_intersection_is_symmetric_for_containment() {
        let outer = rect(0, 0, 100, 100);
        let inner = rect(40, 40, 5, 5);
        assert!(intersects(&outer, &inner));
        assert!(intersects(&inner, &outer));
    }

    #[test]
    fn test_push_out_moving_right() {
        let wall = rect(100, 0, 20, 100);
        let player = rect(58, 10, 40, 40);
        let resolved = resolve_axis_push(player, &[wall], Axis::X, 4);
        assert_eq!(resolved.right(), wall.left());
        assert_eq!(resolved.y, 10);
    }

    #[test]
    fn test_push_out_moving_up() {
        let wall = rect(0, 0, 800, 15);
        let player = rect(50, 17, 40, 40);
        let resolved = resolve_axis_push(player, &[wall], Axis::Y, -4);
        assert_eq!(resolved.top(), wall.bottom());
        assert_eq!(resolved.x, 50);
    }

    #[test]
    fn test_push_out_picks_nearest_obstacle() {
        // Both walls overlap after the move; the nearer one wins so the
        // result clears both.
        let near = rect(100, 0, 20, 100);
        let far = rect(103, 0, 20, 100);
        let player = rect(58, 10, 40, 40);
        let resolved = resolve_axis_push(player, &[far, near], Axis::X, 6);
        assert_eq!(resolved.right(), 100);
        assert!(!intersects_any(&resolved, &[far, near]));
    }

    #[test]
    fn test_free_move_is_untouched() {
        let wall = rect(300, 300, 20, 20);
        let player = rect(50, 50, 40, 40);
        let resolved = resolve_axis_push(player, &[wall], Axis::X, 4);
        assert_eq!(resolved.x, 54);
    }

    #[test]
    fn test_diagonal_into_wall_slides() {
        // Moving right+down into a vertical wall only blocks x
        let wall = rect(100, 0, 20, 300);
        let player = rect(60, 50, 40, 40);
        let resolved = move_and_slide(player, &[wall], IVec2::new(4, 4));
        assert_eq!(resolved.right(), 100);
        assert_eq!(resolved.y, 54);
    }

    proptest! {
        #[test]
        fn resolved_rect_never_rests_in_a_wall(
            px in 20i32..700,
            py in 20i32..500,
            dx in -4i32..=4,
            dy in -4i32..=4,
        ) {
            let walls = [
                rect(0, 0, 800, 15),
                rect(0, 0, 15, 600),
                rect(785, 0, 15, 600),
                rect(0, 585, 800, 15),
                rect(200, 300, 400, 20),
                rect(300, 150, 20, 200),
            ];
            let start = rect(px, py, 40, 40);
            prop_assume!(!intersects_any(&start, &walls));
            let resolved = move_and_slide(start, &walls, IVec2::new(dx, dy));
            prop_assert!(!intersects_any(&resolved, &walls));
        }
    }
}
