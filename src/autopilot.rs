//! Demo pilot for attract mode and headless runs
//!
//! Reads the session and produces the controls a simple player would hold:
//! turn toward the closest threat, shoot when lined up, drift when nothing
//! is near, and restart after a game over.

use glam::Vec2;

use crate::sim::{GamePhase, GameState, TickInput, heading, normalize_angle, subtract};

/// Heading error (radians) below which the pilot stops turning
const TURN_DEADZONE: f32 = 0.05;
/// Heading error (radians) below which the pilot opens fire
const FIRE_CONE: f32 = 0.2;
/// Threats closer than this are engaged without moving
const ENGAGE_RANGE: f32 = 250.0;
/// Thrust only while slower than this (pixels per tick)
const CRUISE_SPEED: f32 = 1.0;

/// Position of the closest asteroid or saucer to `from`, if any
fn nearest_threat(state: &GameState, from: Vec2) -> Option<Vec2> {
    state
        .asteroids
        .iter()
        .map(|a| a.pos)
        .chain(state.ufos.iter().map(|u| u.pos))
        .min_by(|a, b| {
            a.distance_squared(from)
                .partial_cmp(&b.distance_squared(from))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
}

/// Controls for the next tick
pub fn autopilot_input(state: &GameState) -> TickInput {
    if state.phase == GamePhase::GameOver {
        return TickInput {
            restart: true,
            ..Default::default()
        };
    }

    let Some(ship) = state.ship.as_ref() else {
        return TickInput::default();
    };
    let Some(target) = nearest_threat(state, ship.pos) else {
        return TickInput::default();
    };

    let to_target = subtract(target, ship.pos);
    let error = normalize_angle(heading(to_target) - ship.rotation);
    let far = to_target.length() > ENGAGE_RANGE;

    TickInput {
        turn_left: error < -TURN_DEADZONE,
        turn_right: error > TURN_DEADZONE,
        thrust: far && ship.vel.length() < CRUISE_SPEED && error.abs() < FIRE_CONE,
        fire: error.abs() < FIRE_CONE,
        restart: false,
    }
}
