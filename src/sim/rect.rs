//! Axis-aligned rectangle geometry
//!
//! All simulation entities are boxes in integer screen space:
//! - x grows to the right, y grows downward
//! - position is the top-left corner
//! - size is fixed at construction and always positive

use glam::{IVec2, Vec2};
use serde::Serialize;

use crate::error::{SimError, SimResult};

/// Movement axis for per-axis resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// An axis-aligned box. Width and height are private so they stay positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    width: i32,
    height: i32,
}

impl Rect {
    /// Build a rectangle, rejecting zero or negative dimensions
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> SimResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(SimError::InvalidRect { width, height });
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// Same as `new` but from a top-left point and a size vector
    pub fn from_pos_size(pos: IVec2, size: IVec2) -> SimResult<Self> {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    #[inline]
    pub fn pos(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> IVec2 {
        IVec2::new(self.width, self.height)
    }

    /// Center point in float space (for distance checks)
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.x as f32 + self.width as f32 / 2.0,
            self.y as f32 + self.height as f32 / 2.0,
        )
    }

    /// Copy of this rectangle moved to a new top-left corner
    pub fn at(&self, pos: IVec2) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            ..*self
        }
    }

    /// Copy of this rectangle shifted by `delta`
    pub fn translated(&self, delta: IVec2) -> Self {
        self.at(self.pos() + delta)
    }

    /// Coordinate along `axis`
    pub fn coord(&self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    pub fn set_coord(&mut self, axis: Axis, value: i32) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
        }
    }

    /// Extent along `axis`
    pub fn extent(&self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }

    /// True if `other` lies entirely inside this rectangle (edges may touch)
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }
}
