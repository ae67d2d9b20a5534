//! Game state and core simulation types
//!
//! Every entity is a plain data record. The session owns all entity pools,
//! the scoring/lives/level counters, the tick countdowns and the RNG.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawner;
use super::vector::{self, from_polar};
use crate::consts::*;

/// Number of large asteroids in the opening wave
pub const INITIAL_ASTEROIDS: usize = 4;

/// Facing of a freshly spawned ship (nose up)
pub const SHIP_START_ROTATION: f32 = -std::f32::consts::FRAC_PI_2;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Lives exhausted, waiting for restart
    GameOver,
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Facing (radians)
    pub rotation: f32,
    /// Thrust held this tick (recomputed every tick, used for the flame)
    pub thrusting: bool,
    pub invincible: bool,
    /// Remaining ticks of the invincibility window, including the current one
    pub invincible_ticks: u32,
}

impl Ship {
    /// A ship at rest at `pos`, facing up
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            rotation: SHIP_START_ROTATION,
            thrusting: false,
            invincible: false,
            invincible_ticks: 0,
        }
    }

    /// A respawned ship, protected for the invincibility window
    pub fn respawned(pos: Vec2) -> Self {
        Self {
            invincible: true,
            invincible_ticks: SHIP_INVINCIBLE_TICKS,
            ..Self::new(pos)
        }
    }

    /// Unit vector along the current facing
    #[inline]
    pub fn facing(&self) -> Vec2 {
        from_polar(self.rotation, 1.0)
    }

    /// Bullet spawn point
    #[inline]
    pub fn nose(&self) -> Vec2 {
        self.pos + vector::rotate(Vec2::new(SHIP_NOSE_OFFSET, 0.0), self.rotation)
    }
}

/// A drifting asteroid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub pos: Vec2,
    pub vel: Vec2,
    pub rotation: f32,
    pub rotation_speed: f32,
    /// Closed polygon, vertex offsets relative to `pos`
    pub shape: Vec<Vec2>,
    /// Size tier: 3 = large, 2 = medium, 1 = small
    pub size: u8,
    /// Collision radius, always `size * 15`
    pub radius: f32,
}

impl Asteroid {
    /// Collision radius for a size tier
    #[inline]
    pub fn tier_radius(size: u8) -> f32 {
        size as f32 * ASTEROID_RADIUS_PER_TIER
    }
}

/// A projectile, fired either by the ship or by a saucer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub ttl_ticks: u32,
}

impl Bullet {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            ttl_ticks: BULLET_LIFESPAN_TICKS,
        }
    }
}

/// Saucer size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UfoSize {
    /// Fast, aims at the ship
    Small,
    /// Slow, fires at random
    Big,
}

impl UfoSize {
    pub fn radius(self) -> f32 {
        match self {
            UfoSize::Small => SMALL_UFO_RADIUS,
            UfoSize::Big => BIG_UFO_RADIUS,
        }
    }

    pub fn speed(self) -> f32 {
        match self {
            UfoSize::Small => SMALL_UFO_SPEED,
            UfoSize::Big => BIG_UFO_SPEED,
        }
    }

    pub fn score(self) -> u64 {
        match self {
            UfoSize::Small => SMALL_UFO_SCORE,
            UfoSize::Big => BIG_UFO_SCORE,
        }
    }

    pub fn fire_interval_ticks(self) -> u32 {
        match self {
            UfoSize::Small => SMALL_UFO_FIRE_TICKS,
            UfoSize::Big => BIG_UFO_FIRE_TICKS,
        }
    }
}

/// A flying saucer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ufo {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub size: UfoSize,
    /// Ticks until the next shot
    pub fire_ticks: u32,
    pub score_value: u64,
}

/// A debris particle for visual effects (no gameplay interaction)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub rotation: f32,
    pub rotation_speed: f32,
    /// Remaining life in seconds
    pub life: f32,
    /// Segment length
    pub length: f32,
}

/// Complete game session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the session RNG was created from
    pub seed: u64,
    /// Session RNG, the only source of randomness
    pub rng: Pcg32,
    pub width: f32,
    pub height: f32,
    /// `None` while waiting for respawn or after the last life is lost
    pub ship: Option<Ship>,
    pub asteroids: Vec<Asteroid>,
    pub bullets: Vec<Bullet>,
    /// At most one saucer at a time
    pub ufos: Vec<Ufo>,
    pub ufo_bullets: Vec<Bullet>,
    pub particles: Vec<Particle>,
    pub score: u64,
    pub lives: u32,
    pub level: u32,
    pub phase: GamePhase,
    /// Ticks until the ship may fire again
    pub fire_cooldown_ticks: u32,
    /// Ticks until the next saucer may spawn
    pub ufo_spawn_ticks: u32,
    /// Ticks until respawn (0 = no respawn pending)
    pub respawn_ticks: u32,
    pub next_extra_life: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new session on the default 800x600 playfield
    pub fn new(seed: u64) -> Self {
        Self::with_screen(seed, SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    /// Create a new session with the given seed and playfield size
    pub fn with_screen(seed: u64, width: f32, height: f32) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let lives = rng.random_range(3..=5);

        let mut state = Self {
            seed,
            rng,
            width,
            height,
            ship: Some(Ship::new(Vec2::new(width / 2.0, height / 2.0))),
            asteroids: Vec::new(),
            bullets: Vec::new(),
            ufos: Vec::new(),
            ufo_bullets: Vec::new(),
            particles: Vec::new(),
            score: 0,
            lives,
            level: 1,
            phase: GamePhase::Playing,
            fire_cooldown_ticks: 0,
            ufo_spawn_ticks: UFO_SPAWN_INTERVAL_TICKS,
            respawn_ticks: 0,
            next_extra_life: EXTRA_LIFE_STEP,
            time_ticks: 0,
        };

        state.spawn_asteroids(INITIAL_ASTEROIDS, ASTEROID_LARGE);
        log::info!(
            "New session: seed={} screen={}x{} lives={}",
            seed,
            width,
            height,
            lives
        );
        state
    }

    /// Throw the session away and start over on the same playfield
    pub fn restart(&mut self) {
        let seed: u64 = self.rng.random();
        *self = Self::with_screen(seed, self.width, self.height);
    }

    /// Playfield center (ship spawn point)
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Snap-to-edge wrap on this playfield
    #[inline]
    pub fn wrap(&self, pos: Vec2) -> Vec2 {
        vector::wrap(pos, self.width, self.height)
    }

    /// Ship position if it can currently be destroyed
    pub fn vulnerable_ship_pos(&self) -> Option<Vec2> {
        if self.phase != GamePhase::Playing {
            return None;
        }
        self.ship.as_ref().filter(|s| !s.invincible).map(|s| s.pos)
    }

    /// Spawn `count` asteroids of tier `size` on the playfield border
    pub fn spawn_asteroids(&mut self, count: usize, size: u8) {
        for _ in 0..count {
            let asteroid = spawner::random_asteroid(&mut self.rng, self.width, self.height, size);
            self.asteroids.push(asteroid);
        }
    }

    /// Destroy the asteroid at `index`, replacing it with fragments if it was
    /// larger than the smallest tier. Returns the destroyed asteroid.
    pub fn split_asteroid(&mut self, index: usize) -> Asteroid {
        let parent = self.asteroids.remove(index);
        let fragments = spawner::split_fragments(&mut self.rng, &parent);
        log::debug!(
            "Asteroid tier {} destroyed at ({:.0}, {:.0}), {} fragments",
            parent.size,
            parent.pos.x,
            parent.pos.y,
            fragments.len()
        );
        self.asteroids.extend(fragments);
        parent
    }

    /// Emit an explosion burst at `pos`
    pub fn spawn_explosion(&mut self, pos: Vec2) {
        let burst = spawner::explosion(&mut self.rng, pos);
        self.particles.extend(burst);
    }

    /// Destroy the ship and start the respawn countdown (no-op without a ship)
    pub fn kill_ship(&mut self) {
        let Some(ship) = self.ship.take() else {
            return;
        };
        self.spawn_explosion(ship.pos);
        self.lives = self.lives.saturating_sub(1);
        self.respawn_ticks = RESPAWN_DELAY_TICKS;
        log::info!(
            "Ship destroyed at ({:.0}, {:.0}), {} lives left",
            ship.pos.x,
            ship.pos.y,
            self.lives
        );
    }

    /// Add points (score only ever grows)
    #[inline]
    pub fn award(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let state = GameState::new(12345);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.level, 1);
        assert_eq!(state.score, 0);
        assert!((3..=5).contains(&state.lives));
        assert_eq!(state.asteroids.len(), INITIAL_ASTEROIDS);
        assert!(state.asteroids.iter().all(|a| a.size == ASTEROID_LARGE));
        assert_eq!(state.next_extra_life, 10_000);

        let ship = state.ship.as_ref().expect("ship present at start");
        assert_eq!(ship.pos, Vec2::new(400.0, 300.0));
        assert_eq!(ship.rotation, SHIP_START_ROTATION);
        assert!(!ship.invincible);
    }

    #[test]
    fn test_same_seed_same_session() {
        let a = GameState::new(7);
        let b = GameState::new(7);
        assert_eq!(a.lives, b.lives);
        for (x, y) in a.asteroids.iter().zip(&b.asteroids) {
            assert_eq!(x.pos, y.pos);
            assert_eq!(x.shape, y.shape);
        }
    }

    #[test]
    fn test_asteroid_radius_matches_tier() {
        let mut state = GameState::new(3);
        state.spawn_asteroids(5, 2);
        state.spawn_asteroids(5, 1);
        for a in &state.asteroids {
            assert_eq!(a.radius, a.size as f32 * 15.0);
        }
    }

    #[test]
    fn test_kill_ship() {
        let mut state = GameState::new(1);
        let lives = state.lives;
        state.kill_ship();
        assert!(state.ship.is_none());
        assert_eq!(state.lives, lives - 1);
        assert_eq!(state.respawn_ticks, RESPAWN_DELAY_TICKS);
        assert_eq!(state.particles.len(), EXPLOSION_PARTICLES);

        // Already absent: nothing changes
        state.kill_ship();
        assert_eq!(state.lives, lives - 1);
        assert_eq!(state.particles.len(), EXPLOSION_PARTICLES);
    }

    #[test]
    fn test_split_small_asteroid_just_removes() {
        let mut state = GameState::new(5);
        state.asteroids.clear();
        state.spawn_asteroids(1, 1);
        let removed = state.split_asteroid(0);
        assert_eq!(removed.size, 1);
        assert!(state.asteroids.is_empty());
    }

    #[test]
    fn test_split_large_asteroid() {
        let mut state = GameState::new(5);
        state.asteroids.clear();
        state.spawn_asteroids(1, 3);
        state.asteroids[0].vel = Vec2::new(0.6, 0.8);
        let parent_pos = state.asteroids[0].pos;

        state.split_asteroid(0);
        assert_eq!(state.asteroids.len(), 2);
        for frag in &state.asteroids {
            assert_eq!(frag.size, 2);
            assert_eq!(frag.radius, 30.0);
            assert_eq!(frag.pos, parent_pos);
            assert!((frag.vel.length() - 1.5).abs() < 1e-4);
        }
    }

    #[test]
    fn test_vulnerable_ship_pos() {
        let mut state = GameState::new(9);
        assert!(state.vulnerable_ship_pos().is_some());

        state.ship = Some(Ship::respawned(state.center()));
        assert!(state.vulnerable_ship_pos().is_none());

        state.ship = Some(Ship::new(state.center()));
        state.phase = GamePhase::GameOver;
        assert!(state.vulnerable_ship_pos().is_none());
    }

    #[test]
    fn test_restart_keeps_screen() {
        let mut state = GameState::with_screen(11, 640.0, 480.0);
        state.score = 5000;
        state.level = 4;
        state.phase = GamePhase::GameOver;
        state.restart();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.width, 640.0);
        assert_eq!(state.height, 480.0);
        assert_eq!(state.asteroids.len(), INITIAL_ASTEROIDS);
        assert!(state.ship.is_some());
    }

    #[test]
    fn test_ship_nose() {
        let ship = Ship::new(Vec2::new(100.0, 100.0));
        let nose = ship.nose();
        // Facing up: nose is 15 px above center
        assert!((nose.x - 100.0).abs() < 1e-4);
        assert!((nose.y - 85.0).abs() < 1e-4);
    }
}
