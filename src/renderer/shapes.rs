//! Line geometry for every drawable entity
//!
//! All output is a line list in world space: each consecutive pair of
//! vertices is one segment.

use glam::Vec2;
use std::f32::consts::TAU;

use super::snapshot::{AsteroidView, ParticleView, RenderSnapshot, ShipView, UfoView};
use super::vertex::{LineVertex, colors};
use crate::sim::rotate;

/// Hull triangle, nose first
const SHIP_HULL: [Vec2; 3] = [
    Vec2::new(15.0, 0.0),
    Vec2::new(-10.0, -10.0),
    Vec2::new(-10.0, 10.0),
];
/// Exhaust flame triangle behind the hull
const SHIP_FLAME: [Vec2; 3] = [
    Vec2::new(-10.0, -5.0),
    Vec2::new(-10.0, 5.0),
    Vec2::new(-20.0, 0.0),
];
/// Bullets are drawn as small squares
const BULLET_SIZE: f32 = 2.0;
const COCKPIT_SEGMENTS: u32 = 12;

fn push_line(out: &mut Vec<LineVertex>, a: Vec2, b: Vec2, color: [f32; 4]) {
    out.push(LineVertex::at(a, color));
    out.push(LineVertex::at(b, color));
}

/// Closed outline through `points`
fn closed_loop(points: &[Vec2], color: [f32; 4]) -> Vec<LineVertex> {
    let mut vertices = Vec::with_capacity(points.len() * 2);
    for (i, &a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        push_line(&mut vertices, a, b, color);
    }
    vertices
}

/// Outline of `local` points rotated by `rotation` and moved to `pos`
fn placed_loop(local: &[Vec2], pos: Vec2, rotation: f32, color: [f32; 4]) -> Vec<LineVertex> {
    let world: Vec<Vec2> = local.iter().map(|&p| pos + rotate(p, rotation)).collect();
    closed_loop(&world, color)
}

/// Ship hull, plus flame while thrusting. Nothing on a blink-off frame.
pub fn ship(view: &ShipView) -> Vec<LineVertex> {
    if !view.visible {
        return Vec::new();
    }

    let mut vertices = placed_loop(&SHIP_HULL, view.pos, view.rotation, colors::WHITE);
    if view.thrusting {
        vertices.extend(placed_loop(&SHIP_FLAME, view.pos, view.rotation, colors::WHITE));
    }
    vertices
}

pub fn asteroid(view: &AsteroidView) -> Vec<LineVertex> {
    placed_loop(&view.shape, view.pos, view.rotation, colors::WHITE)
}

/// Saucer: three horizontal bars, four slanted edges and a round cockpit
pub fn ufo(view: &UfoView) -> Vec<LineVertex> {
    let Vec2 { x, y } = view.pos;
    let r = view.radius;
    let c = colors::WHITE;
    let mut vertices = Vec::with_capacity(14 + COCKPIT_SEGMENTS as usize * 2);

    push_line(&mut vertices, Vec2::new(x - r, y), Vec2::new(x + r, y), c);
    for dy in [-0.5, 0.5] {
        push_line(
            &mut vertices,
            Vec2::new(x - r * 0.7, y + r * dy),
            Vec2::new(x + r * 0.7, y + r * dy),
            c,
        );
        push_line(&mut vertices, Vec2::new(x - r, y), Vec2::new(x - r * 0.7, y + r * dy), c);
        push_line(&mut vertices, Vec2::new(x + r, y), Vec2::new(x + r * 0.7, y + r * dy), c);
    }

    vertices.extend(circle(Vec2::new(x, y - r * 0.5), r * 0.3, c, COCKPIT_SEGMENTS));
    vertices
}

/// Circle outline approximated by `segments` chords
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<LineVertex> {
    let points: Vec<Vec2> = (0..segments)
        .map(|i| {
            let theta = (i as f32 / segments as f32) * TAU;
            center + Vec2::new(theta.cos(), theta.sin()) * radius
        })
        .collect();
    closed_loop(&points, color)
}

pub fn bullet(pos: Vec2) -> Vec<LineVertex> {
    let s = BULLET_SIZE;
    closed_loop(
        &[pos, pos + Vec2::new(s, 0.0), pos + Vec2::new(s, s), pos + Vec2::new(0.0, s)],
        colors::WHITE,
    )
}

/// Debris streak centered on the particle, faded by remaining life
pub fn particle(view: &ParticleView) -> Vec<LineVertex> {
    let half = rotate(Vec2::new(view.length / 2.0, 0.0), view.rotation);
    let mut vertices = Vec::with_capacity(2);
    push_line(&mut vertices, view.pos - half, view.pos + half, colors::faded(view.alpha));
    vertices
}

/// Line list for a whole frame (empty on the game-over screen)
pub fn frame(snapshot: &RenderSnapshot) -> Vec<LineVertex> {
    if snapshot.game_over {
        return Vec::new();
    }

    let mut vertices = Vec::new();
    if let Some(view) = &snapshot.ship {
        vertices.extend(ship(view));
    }
    for &pos in &snapshot.bullets {
        vertices.extend(bullet(pos));
    }
    for view in &snapshot.asteroids {
        vertices.extend(asteroid(view));
    }
    for view in &snapshot.ufos {
        vertices.extend(ufo(view));
    }
    for &pos in &snapshot.ufo_bullets {
        vertices.extend(bullet(pos));
    }
    for view in &snapshot.particles {
        vertices.extend(particle(view));
    }
    vertices
}
