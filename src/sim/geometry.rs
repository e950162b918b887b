//! Axis-aligned collision primitives
//!
//! Every collision check in the simulation goes through [`Aabb::intersects`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box stored as center plus half extents.
///
/// The arena uses canvas coordinates: x grows right, y grows down, so
/// `top()` is the smaller y value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, half: Vec2) -> Self {
        Self { center, half }
    }

    /// Build from a top-left corner and a full size.
    pub fn from_top_left(top_left: Vec2, size: Vec2) -> Self {
        Self {
            center: top_left + size * 0.5,
            half: size * 0.5,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.half.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.half.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y - self.half.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.half.y
    }

    /// Strict-inequality overlap test. Boxes that merely touch along an
    /// edge do not collide, which keeps grazing contacts forgiving.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(x: f32, y: f32, hw: f32, hh: f32) -> Aabb {
        Aabb::new(Vec2::new(x, y), Vec2::new(hw, hh))
    }

    #[test]
    fn test_overlapping_boxes_intersect() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        // Right edge of `a` exactly touches left edge of `b`
        let b = boxed(20.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));

        // Same along y
        let c = boxed(0.0, 20.0, 10.0, 10.0);
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_corner_touch_does_not_intersect() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(20.0, 20.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_contained_box_intersects() {
        let outer = boxed(0.0, 0.0, 50.0, 50.0);
        let inner = boxed(5.0, -5.0, 2.0, 2.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_from_top_left() {
        let b = Aabb::from_top_left(Vec2::new(10.0, 20.0), Vec2::new(40.0, 50.0));
        assert_eq!(b.left(), 10.0);
        assert_eq!(b.top(), 20.0);
        assert_eq!(b.right(), 50.0);
        assert_eq!(b.bottom(), 70.0);
    }
}
