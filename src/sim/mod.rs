//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one `tick` per 1/60 s)
//! - Seeded RNG only, owned by the session
//! - Timers are tick countdowns, never wall-clock time
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod vector;

pub use collision::{circles_overlap, first_hit, point_in_circle};
pub use state::{
    Asteroid, Bullet, GamePhase, GameState, INITIAL_ASTEROIDS, Particle, Ship, Ufo, UfoSize,
};
pub use tick::{TickInput, aim_cone, tick, wave_size};
pub use vector::{from_polar, heading, normalize_angle, rotate, subtract, wrap};
