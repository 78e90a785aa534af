//! Axis-aligned bounding boxes
//!
//! Every entity in both games is a rectangle with a top-left origin, so a
//! single `Aabb` type carries all the collision geometry: overlap tests,
//! horizontal-range tests for platform landings, and canvas clamping.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box with top-left origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height (always positive)
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Right edge x-coordinate
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Bottom edge y-coordinate
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Vertical midpoint (used by the stomp check)
    #[inline]
    pub fn mid_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Strict rectangle overlap (shared edges do not count)
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.bottom()
            && self.bottom() > other.pos.y
    }

    /// Horizontal ranges overlap (the x half of the platform landing test)
    pub fn overlaps_x(&self, other: &Aabb) -> bool {
        self.pos.x < other.right() && self.right() > other.pos.x
    }

    /// Clamp the box horizontally into `[0, bound_width]`
    pub fn clamp_x(&mut self, bound_width: f32) {
        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
        }
        if self.right() > bound_width {
            self.pos.x = bound_width - self.size.x;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_basic() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_overlap_touching_edges_miss() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));

        let c = Aabb::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_overlap_disjoint() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(100.0, 100.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_overlaps_x_ignores_y() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(5.0, 500.0, 10.0, 10.0);
        assert!(a.overlaps_x(&b));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_clamp_x() {
        let mut a = Aabb::new(-5.0, 0.0, 30.0, 40.0);
        a.clamp_x(800.0);
        assert_eq!(a.pos.x, 0.0);

        let mut b = Aabb::new(790.0, 0.0, 30.0, 40.0);
        b.clamp_x(800.0);
        assert_eq!(b.pos.x, 770.0);
    }
}
