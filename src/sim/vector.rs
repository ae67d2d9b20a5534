//! 2D vector helpers shared by every entity
//!
//! Positions and velocities are `glam::Vec2` values in screen space (pixels,
//! y pointing down). Angles are radians; with y down a positive rotation
//! turns clockwise on screen, which is the convention the ship controls use.

use glam::Vec2;

/// Rotate `v` by `angle` radians using the standard rotation matrix
#[inline]
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    let (s, c) = angle.sin_cos();
    Vec2::new(v.x * c - v.y * s, v.x * s + v.y * c)
}

/// Component-wise difference `a - b`
#[inline]
pub fn subtract(a: Vec2, b: Vec2) -> Vec2 {
    a - b
}

/// Vector of length `magnitude` pointing along `angle`
#[inline]
pub fn from_polar(angle: f32, magnitude: f32) -> Vec2 {
    Vec2::new(angle.cos() * magnitude, angle.sin() * magnitude)
}

/// Heading of `v` in radians, or 0 for a zero-length vector
#[inline]
pub fn heading(v: Vec2) -> f32 {
    if v.length_squared() <= f32::EPSILON {
        0.0
    } else {
        v.y.atan2(v.x)
    }
}

/// Normalize an angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    while angle >= PI {
        angle -= TAU;
    }
    while angle < -PI {
        angle += TAU;
    }
    angle
}

/// Snap a position that left the playfield to the opposite edge.
///
/// This is not a modulo wrap: anything below 0 lands exactly on the far edge
/// and anything beyond the far edge lands exactly on 0, regardless of how far
/// it overshot.
#[inline]
pub fn wrap(pos: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(wrap_axis(pos.x, width), wrap_axis(pos.y, height))
}

/// Snap one coordinate into `[0, extent]`
#[inline]
pub fn wrap_axis(value: f32, extent: f32) -> f32 {
    if value < 0.0 {
        extent
    } else if value > extent {
        0.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_rotate_quarter_turn() {
        let v = rotate(Vec2::new(1.0, 0.0), FRAC_PI_2);
        assert!(v.x.abs() < 1e-6);
        assert!((v.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_rotate_leaves_input_untouched() {
        let v = Vec2::new(15.0, 0.0);
        let r = rotate(v, PI);
        assert_eq!(v, Vec2::new(15.0, 0.0));
        assert!((r.x + 15.0).abs() < 1e-4);
    }

    #[test]
    fn test_subtract() {
        assert_eq!(subtract(Vec2::new(5.0, 3.0), Vec2::new(2.0, 7.0)), Vec2::new(3.0, -4.0));
    }

    #[test]
    fn test_heading_zero_vector() {
        assert_eq!(heading(Vec2::ZERO), 0.0);
        assert!((heading(Vec2::new(0.0, 2.0)) - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_angle() {
        assert!((normalize_angle(2.5 * PI) - FRAC_PI_2).abs() < 1e-5);
        assert!((normalize_angle(-FRAC_PI_2 - 2.0 * PI) + FRAC_PI_2).abs() < 1e-5);
        assert_eq!(normalize_angle(0.5), 0.5);
    }

    #[test]
    fn test_wrap_snaps_to_edges() {
        assert_eq!(wrap(Vec2::new(-0.1, 50.0), 800.0, 600.0), Vec2::new(800.0, 50.0));
        assert_eq!(wrap(Vec2::new(800.5, 50.0), 800.0, 600.0), Vec2::new(0.0, 50.0));
        assert_eq!(wrap(Vec2::new(10.0, -3.0), 800.0, 600.0), Vec2::new(10.0, 600.0));
        assert_eq!(wrap(Vec2::new(10.0, 650.0), 800.0, 600.0), Vec2::new(10.0, 0.0));
        // Far overshoot still snaps exactly to the edge
        assert_eq!(wrap(Vec2::new(-300.0, 5000.0), 800.0, 600.0), Vec2::new(800.0, 0.0));
    }

    #[test]
    fn test_wrap_keeps_boundary_values() {
        assert_eq!(wrap(Vec2::new(0.0, 600.0), 800.0, 600.0), Vec2::new(0.0, 600.0));
        assert_eq!(wrap(Vec2::new(800.0, 0.0), 800.0, 600.0), Vec2::new(800.0, 0.0));
    }

    proptest! {
        #[test]
        fn prop_normalize_angle_range(a in -50.0f32..50.0) {
            let n = normalize_angle(a);
            prop_assert!((-PI..PI).contains(&n));
            let turns = (a - n) / std::f32::consts::TAU;
            prop_assert!((turns - turns.round()).abs() < 1e-3);
        }

        #[test]
        fn prop_wrap_in_bounds_is_identity(x in 0.0f32..=800.0, y in 0.0f32..=600.0) {
            let p = Vec2::new(x, y);
            prop_assert_eq!(wrap(p, 800.0, 600.0), p);
        }

        #[test]
        fn prop_wrap_out_of_bounds_snaps(x in -1000.0f32..1800.0, y in -1000.0f32..1600.0) {
            let w = wrap(Vec2::new(x, y), 800.0, 600.0);
            if x < 0.0 { prop_assert_eq!(w.x, 800.0); }
            if x > 800.0 { prop_assert_eq!(w.x, 0.0); }
            if y < 0.0 { prop_assert_eq!(w.y, 600.0); }
            if y > 600.0 { prop_assert_eq!(w.y, 0.0); }
        }

        #[test]
        fn prop_rotate_preserves_length(x in -100.0f32..100.0, y in -100.0f32..100.0, a in -10.0f32..10.0) {
            let v = Vec2::new(x, y);
            prop_assert!((rotate(v, a).length() - v.length()).abs() < 1e-3);
        }
    }
}
