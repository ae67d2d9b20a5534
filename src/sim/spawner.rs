//! Procedural generation of asteroids, saucers and explosion debris
//!
//! Everything here is a pure function of the RNG it is handed, so a seeded
//! session always produces the same entities.

use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

use super::state::{Asteroid, Particle, Ufo, UfoSize};
use super::vector::from_polar;
use crate::consts::*;

/// Asteroid polygon vertex count range (inclusive)
const MIN_VERTICES: usize = 8;
const MAX_VERTICES: usize = 11;
/// Per-vertex radius jitter relative to the tier radius
const VERTEX_JITTER: std::ops::Range<f32> = 0.8..1.2;
/// Initial asteroid speed range
const ASTEROID_SPEED: std::ops::Range<f32> = 0.5..1.5;
/// Asteroid spin range (radians per tick)
const ASTEROID_SPIN: f32 = 0.025;
/// Debris spin range (radians per tick)
const PARTICLE_SPIN: f32 = 0.1;

/// Irregular, roughly convex outline: vertices evenly spaced in angle with
/// jittered radii
pub fn asteroid_shape<R: Rng + ?Sized>(rng: &mut R, radius: f32) -> Vec<Vec2> {
    let points = rng.random_range(MIN_VERTICES..=MAX_VERTICES);
    (0..points)
        .map(|i| {
            let angle = (i as f32 / points as f32) * TAU;
            let r = radius * rng.random_range(VERTEX_JITTER);
            from_polar(angle, r)
        })
        .collect()
}

/// Random point on the playfield border
pub fn border_position<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> Vec2 {
    let far_edge = rng.random_bool(0.5);
    if rng.random_bool(0.5) {
        // Top or bottom edge
        let y = if far_edge { height } else { 0.0 };
        Vec2::new(rng.random::<f32>() * width, y)
    } else {
        // Left or right edge
        let x = if far_edge { width } else { 0.0 };
        Vec2::new(x, rng.random::<f32>() * height)
    }
}

/// Build an asteroid of tier `size` at `pos` moving with `vel`; spin and
/// shape are randomized
pub fn new_asteroid<R: Rng + ?Sized>(rng: &mut R, pos: Vec2, vel: Vec2, size: u8) -> Asteroid {
    let radius = Asteroid::tier_radius(size);
    let shape = asteroid_shape(rng, radius);
    Asteroid {
        pos,
        vel,
        rotation: rng.random_range(0.0..TAU),
        rotation_speed: rng.random_range(-ASTEROID_SPIN..ASTEROID_SPIN),
        shape,
        size,
        radius,
    }
}

/// Fresh asteroid entering from the border in a random direction
pub fn random_asteroid<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32, size: u8) -> Asteroid {
    let pos = border_position(rng, width, height);
    let speed = rng.random_range(ASTEROID_SPEED);
    let vel = from_polar(rng.random_range(0.0..TAU), speed);
    new_asteroid(rng, pos, vel, size)
}

/// Fragments left behind when `parent` is shot: two of the next tier down
/// at the parent's position, each heading in its own random direction at
/// 1.5x the parent's speed. The smallest tier leaves nothing.
pub fn split_fragments<R: Rng + ?Sized>(rng: &mut R, parent: &Asteroid) -> Vec<Asteroid> {
    if parent.size <= 1 {
        return Vec::new();
    }

    let size = parent.size - 1;
    let speed = parent.vel.length() * SPLIT_SPEED_FACTOR;
    (0..2)
        .map(|_| {
            let vel = from_polar(rng.random_range(0.0..TAU), speed);
            new_asteroid(rng, parent.pos, vel, size)
        })
        .collect()
}

/// Pick a saucer size for the current score
pub fn choose_ufo_size<R: Rng + ?Sized>(rng: &mut R, score: u64) -> UfoSize {
    if score >= SMALL_UFO_ONLY_SCORE || rng.random_bool(0.5) {
        UfoSize::Small
    } else {
        UfoSize::Big
    }
}

/// Saucer entering from a random side at a random height, heading inward
pub fn new_ufo<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32, score: u64) -> Ufo {
    let size = choose_ufo_size(rng, score);
    let speed = size.speed();

    let (x, vx) = if rng.random_bool(0.5) {
        (width, -speed)
    } else {
        (0.0, speed)
    };
    let y = rng.random::<f32>() * height;

    Ufo {
        pos: Vec2::new(x, y),
        vel: Vec2::new(vx, 0.0),
        radius: size.radius(),
        size,
        fire_ticks: size.fire_interval_ticks(),
        score_value: size.score(),
    }
}

/// Debris burst for a destroyed ship
pub fn explosion<R: Rng + ?Sized>(rng: &mut R, pos: Vec2) -> Vec<Particle> {
    (0..EXPLOSION_PARTICLES)
        .map(|_| {
            let angle = rng.random_range(0.0..TAU);
            let speed = rng.random::<f32>() * 2.0;
            Particle {
                pos,
                vel: from_polar(angle, speed),
                rotation: rng.random_range(0.0..TAU),
                rotation_speed: rng.random_range(-PARTICLE_SPIN..PARTICLE_SPIN),
                life: 1.0 + rng.random::<f32>(),
                length: 5.0 + rng.random::<f32>() * 10.0,
            }
        })
        .collect()
}
