//! Circle collision tests
//!
//! Every collider in the game is a circle: asteroids and saucers use their
//! own radius, the ship a fixed radius, and projectiles are points.

use glam::Vec2;

/// Whether point `p` lies strictly inside the circle at `center`
#[inline]
pub fn point_in_circle(p: Vec2, center: Vec2, radius: f32) -> bool {
    p.distance_squared(center) < radius * radius
}

/// Whether two circles overlap (touching does not count)
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    point_in_circle(a, b, a_radius + b_radius)
}

/// Index of the first target (in iteration order) containing point `p`
pub fn first_hit<I>(p: Vec2, targets: I) -> Option<usize>
where
    I: IntoIterator<Item = (Vec2, f32)>,
{
    targets
        .into_iter()
        .position(|(center, radius)| point_in_circle(p, center, radius))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_in_circle() {
        let c = Vec2::new(100.0, 100.0);
        assert!(point_in_circle(Vec2::new(100.0, 100.0), c, 15.0));
        assert!(point_in_circle(Vec2::new(114.9, 100.0), c, 15.0));
        // Exactly on the rim is a miss
        assert!(!point_in_circle(Vec2::new(115.0, 100.0), c, 15.0));
        assert!(!point_in_circle(Vec2::new(120.0, 120.0), c, 15.0));
    }

    #[test]
    fn test_circles_overlap() {
        // Ship (r=10) near a large asteroid (r=45)
        assert!(circles_overlap(Vec2::new(0.0, 0.0), 10.0, Vec2::new(54.0, 0.0), 45.0));
        assert!(!circles_overlap(Vec2::new(0.0, 0.0), 10.0, Vec2::new(56.0, 0.0), 45.0));
    }

    #[test]
    fn test_first_hit_order() {
        let targets = [
            (Vec2::new(0.0, 0.0), 5.0),
            (Vec2::new(10.0, 0.0), 20.0),
            (Vec2::new(12.0, 0.0), 20.0),
        ];
        assert_eq!(first_hit(Vec2::new(11.0, 0.0), targets), Some(1));
        assert_eq!(first_hit(Vec2::new(1.0, 0.0), targets), Some(0));
        assert_eq!(first_hit(Vec2::new(500.0, 0.0), targets), None);
    }
}
