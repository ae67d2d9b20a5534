//! Read-only view of a session for the renderer
//!
//! Captured after each tick. Holds everything a frontend needs to draw the
//! frame and nothing it could use to change the simulation.

use glam::Vec2;
use serde::Serialize;

use crate::sim::{GamePhase, GameState, UfoSize};

/// Text shown instead of the playfield once the game is over
pub const GAME_OVER_TEXT: &str = "GAME OVER\nPress Enter to Restart";

/// Invincible ships blink, toggling every 0.1 s
const BLINK_PERIOD_TICKS: u32 = 6;

#[derive(Debug, Clone, Serialize)]
pub struct ShipView {
    pub pos: Vec2,
    pub rotation: f32,
    /// Draw the thrust flame
    pub thrusting: bool,
    pub invincible: bool,
    /// False on the "off" half of an invincibility blink
    pub visible: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AsteroidView {
    pub pos: Vec2,
    pub rotation: f32,
    pub size: u8,
    /// Unrotated vertex offsets, closed loop
    pub shape: Vec<Vec2>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UfoView {
    pub pos: Vec2,
    pub radius: f32,
    pub size: UfoSize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParticleView {
    pub pos: Vec2,
    pub rotation: f32,
    pub length: f32,
    /// Fades out over the last second of life
    pub alpha: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hud {
    pub score: u64,
    pub lives: u32,
    pub level: u32,
}

impl Hud {
    /// Status line drawn in the corner
    pub fn text(&self) -> String {
        format!(
            "Score: {}  Lives: {}  Level: {}",
            self.score, self.lives, self.level
        )
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Serialize)]
pub struct RenderSnapshot {
    pub width: f32,
    pub height: f32,
    pub game_over: bool,
    pub ship: Option<ShipView>,
    pub asteroids: Vec<AsteroidView>,
    pub bullets: Vec<Vec2>,
    pub ufo_bullets: Vec<Vec2>,
    pub ufos: Vec<UfoView>,
    pub particles: Vec<ParticleView>,
    pub hud: Hud,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let ship = state.ship.as_ref().map(|s| ShipView {
            pos: s.pos,
            rotation: s.rotation,
            thrusting: s.thrusting,
            invincible: s.invincible,
            visible: !s.invincible || (s.invincible_ticks / BLINK_PERIOD_TICKS) % 2 == 0,
        });

        Self {
            width: state.width,
            height: state.height,
            game_over: state.phase == GamePhase::GameOver,
            ship,
            asteroids: state
                .asteroids
                .iter()
                .map(|a| AsteroidView {
                    pos: a.pos,
                    rotation: a.rotation,
                    size: a.size,
                    shape: a.shape.clone(),
                })
                .collect(),
            bullets: state.bullets.iter().map(|b| b.pos).collect(),
            ufo_bullets: state.ufo_bullets.iter().map(|b| b.pos).collect(),
            ufos: state
                .ufos
                .iter()
                .map(|u| UfoView {
                    pos: u.pos,
                    radius: u.radius,
                    size: u.size,
                })
                .collect(),
            particles: state
                .particles
                .iter()
                .map(|p| ParticleView {
                    pos: p.pos,
                    rotation: p.rotation,
                    length: p.length,
                    alpha: p.life.clamp(0.0, 1.0),
                })
                .collect(),
            hud: Hud {
                score: state.score,
                lives: state.lives,
                level: state.level,
            },
        }
    }

    /// Text overlay for this frame: the HUD line, or the game-over screen
    pub fn overlay_text(&self) -> String {
        if self.game_over {
            GAME_OVER_TEXT.to_string()
        } else {
            self.hud.text()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Ship;

    #[test]
    fn test_capture_counts() {
        let mut state = GameState::new(42);
        state.kill_ship();
        let snap = RenderSnapshot::capture(&state);
        assert!(snap.ship.is_none());
        assert_eq!(snap.asteroids.len(), state.asteroids.len());
        assert_eq!(snap.particles.len(), 10);
        assert_eq!(snap.hud.lives, state.lives);
        assert!(!snap.game_over);
    }

    #[test]
    fn test_particle_alpha() {
        let mut state = GameState::new(42);
        state.spawn_explosion(Vec2::ZERO);
        state.particles[0].life = 1.7;
        state.particles[1].life = 0.25;
        let snap = RenderSnapshot::capture(&state);
        assert_eq!(snap.particles[0].alpha, 1.0);
        assert_eq!(snap.particles[1].alpha, 0.25);
    }

    #[test]
    fn test_invincible_ship_blinks() {
        let mut state = GameState::new(42);
        let mut ship = Ship::respawned(state.center());
        ship.invincible_ticks = 12;
        state.ship = Some(ship.clone());
        assert!(RenderSnapshot::capture(&state).ship.unwrap().visible);

        ship.invincible_ticks = 7;
        state.ship = Some(ship);
        assert!(!RenderSnapshot::capture(&state).ship.unwrap().visible);
    }

    #[test]
    fn test_overlay_text() {
        let mut state = GameState::new(42);
        state.score = 1200;
        state.lives = 3;
        state.level = 2;
        let snap = RenderSnapshot::capture(&state);
        assert_eq!(snap.overlay_text(), "Score: 1200  Lives: 3  Level: 2");

        state.phase = GamePhase::GameOver;
        let snap = RenderSnapshot::capture(&state);
        assert_eq!(snap.overlay_text(), GAME_OVER_TEXT);
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(42);
        let json = serde_json::to_string(&RenderSnapshot::capture(&state)).unwrap();
        assert!(json.contains("\"asteroids\""));
        assert!(json.contains("\"hud\""));
    }
}
