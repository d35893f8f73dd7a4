//! Axis-aligned bounding boxes
//!
//! Screen space: x grows right, y grows down. `pos` is the top-left corner.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box used for placement and overlap tests
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height (always positive)
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        assert!(
            size.x > 0.0 && size.y > 0.0,
            "box size must be positive, got {size}"
        );
        Self { pos, size }
    }

    /// Box whose bottom edge is centered on `anchor`
    pub fn from_midbottom(anchor: Vec2, size: Vec2) -> Self {
        Self::new(Vec2::new(anchor.x - size.x / 2.0, anchor.y - size.y), size)
    }

    /// Box centered on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::new(center - size / 2.0, size)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Midpoint of the right edge
    pub fn midright(&self) -> Vec2 {
        Vec2::new(self.right(), self.pos.y + self.size.y / 2.0)
    }

    /// Midpoint of the bottom edge
    pub fn midbottom(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x / 2.0, self.bottom())
    }

    pub fn set_left(&mut self, x: f32) {
        self.pos.x = x;
    }

    pub fn set_right(&mut self, x: f32) {
        self.pos.x = x - self.size.x;
    }

    pub fn set_bottom(&mut self, y: f32) {
        self.pos.y = y - self.size.y;
    }

    /// Move so the bottom edge is centered on `anchor`
    pub fn set_midbottom(&mut self, anchor: Vec2) {
        self.pos = Vec2::new(anchor.x - self.size.x / 2.0, anchor.y - self.size.y);
    }

    /// Keep the box inside `[0, width]` horizontally
    pub fn clamp_horizontal(&mut self, width: f32) {
        if self.left() < 0.0 {
            self.set_left(0.0);
        }
        if self.right() > width {
            self.set_right(width);
        }
    }

    /// Strict overlap: boxes that only share an edge do not intersect
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}
