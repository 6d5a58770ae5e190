//! Overlap tests used by combat resolution
//!
//! Screen-space coordinates: origin at the top-left corner, y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Strict overlap test: rectangles that only share an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        a_max.x > other.min.x && self.min.x < b_max.x && a_max.y > other.min.y && self.min.y < b_max.y
    }
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// True when two circles are closer than the sum of their radii
///
/// Used for the hostile-vs-projectile test, where the hostile's square is
/// approximated by the circle inscribed in it.
#[inline]
pub fn circles_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    distance(a, b) < radius_a + radius_b
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rect_overlap_basic() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let far = Rect::new(50.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&far));
    }

    #[test]
    fn test_rect_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_rect_containment_overlaps() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_rect_center() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.center(), Vec2::new(25.0, 40.0));
        assert_eq!(r.max(), Vec2::new(40.0, 60.0));
    }

    #[test]
    fn test_circles_overlap_is_strict() {
        let a = Vec2::new(0.0, 0.0);
        // Exactly touching: 3-4-5 triangle, radii sum to 5
        assert!(!circles_overlap(a, 2.0, Vec2::new(3.0, 4.0), 3.0));
        assert!(circles_overlap(a, 2.0, Vec2::new(3.0, 4.0), 3.01));
        assert!((distance(a, Vec2::new(3.0, 4.0)) - 5.0).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_rect_overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 0.5f32..100.0, ah in 0.5f32..100.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 0.5f32..100.0, bh in 0.5f32..100.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn prop_rect_overlaps_itself(
            x in -500.0f32..500.0, y in -500.0f32..500.0,
            w in 0.5f32..100.0, h in 0.5f32..100.0,
        ) {
            let r = Rect::new(x, y, w, h);
            prop_assert!(r.overlaps(&r));
        }

        #[test]
        fn prop_circles_overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0, ra in 0.0f32..50.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0, rb in 0.0f32..50.0,
        ) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            prop_assert_eq!(circles_overlap(a, ra, b, rb), circles_overlap(b, rb, a, ra));
        }
    }
}
