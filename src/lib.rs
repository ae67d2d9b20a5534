//! Asteroids Clone - A wraparound-playfield arcade shooter
//!
//! Core modules:
//! - `sim`: Fixed-step simulation (motion, collisions, spawning, scoring)
//! - `renderer`: Read-only render snapshot and line geometry
//! - `settings`: Runtime configuration
//! - `autopilot`: Demo/attract-mode input source

pub mod autopilot;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
///
/// Velocities and accelerations are in pixels per tick; timers are tick counts.
pub mod consts {
    /// Simulation rate
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep (seconds)
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;

    /// Default playfield dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Ship handling
    pub const SHIP_TURN_SPEED: f32 = 0.05;
    pub const SHIP_THRUST: f32 = 0.1;
    /// Fixed collision radius of the ship
    pub const SHIP_RADIUS: f32 = 10.0;
    /// Distance from ship center to the nose, where bullets spawn
    pub const SHIP_NOSE_OFFSET: f32 = 15.0;
    /// Ticks between ship shots (200 ms)
    pub const SHIP_FIRE_COOLDOWN_TICKS: u32 = 12;
    /// Invincibility window after respawn (3 s)
    pub const SHIP_INVINCIBLE_TICKS: u32 = 3 * TICK_RATE;
    /// Delay between ship destruction and respawn (2 s)
    pub const RESPAWN_DELAY_TICKS: u32 = 2 * TICK_RATE;

    /// Projectiles (ship and saucer)
    pub const BULLET_SPEED: f32 = 4.0;
    pub const BULLET_LIFESPAN_TICKS: u32 = TICK_RATE;

    /// Asteroid radius per size tier
    pub const ASTEROID_RADIUS_PER_TIER: f32 = 15.0;
    pub const ASTEROID_LARGE: u8 = 3;
    /// Fragments move this much faster than their parent
    pub const SPLIT_SPEED_FACTOR: f32 = 1.5;
    pub const ASTEROID_SCORE: u64 = 100;

    /// Saucers
    pub const UFO_SPAWN_INTERVAL_TICKS: u32 = 10 * TICK_RATE;
    pub const BIG_UFO_RADIUS: f32 = 20.0;
    pub const SMALL_UFO_RADIUS: f32 = 15.0;
    pub const BIG_UFO_SPEED: f32 = 0.5;
    pub const SMALL_UFO_SPEED: f32 = 1.0;
    pub const BIG_UFO_SCORE: u64 = 200;
    pub const SMALL_UFO_SCORE: u64 = 1000;
    pub const BIG_UFO_FIRE_TICKS: u32 = 2 * TICK_RATE;
    pub const SMALL_UFO_FIRE_TICKS: u32 = TICK_RATE;
    /// Score at which only small saucers appear
    pub const SMALL_UFO_ONLY_SCORE: u64 = 40_000;
    /// Score at which small saucers aim perfectly
    pub const PERFECT_AIM_SCORE: u64 = 60_000;

    /// Extra life every this many points
    pub const EXTRA_LIFE_STEP: u64 = 10_000;

    /// Explosion burst
    pub const EXPLOSION_PARTICLES: usize = 10;
}
