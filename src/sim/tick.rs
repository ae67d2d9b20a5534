//! Fixed timestep simulation tick
//!
//! Advances the session by exactly one 1/60 s step. Phases run in a fixed
//! order and every live entity is processed exactly once per tick.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_4, TAU};

use super::collision::{circles_overlap, first_hit, point_in_circle};
use super::spawner;
use super::state::{Bullet, GamePhase, GameState, Ship, Ufo, UfoSize};
use super::vector::{self, from_polar, heading, subtract};
use crate::consts::*;

/// Control state sampled once per tick (level-triggered, no event queue)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub turn_left: bool,
    pub turn_right: bool,
    pub thrust: bool,
    pub fire: bool,
    /// Only honored on the game-over screen
    pub restart: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase == GamePhase::GameOver {
        if input.restart {
            log::info!("Restart requested, final score {}", state.score);
            state.restart();
        }
        return;
    }

    state.time_ticks += 1;

    update_particles(state);
    update_respawn(state);
    update_ship(state, input);
    update_bullets(state);
    update_asteroids(state);
    award_extra_lives(state);
    update_ufos(state);
    update_ufo_bullets(state);
    check_level_clear(state);
}

fn update_particles(state: &mut GameState) {
    for p in &mut state.particles {
        p.pos += p.vel;
        p.rotation += p.rotation_speed;
        p.life -= SIM_DT;
    }
    state.particles.retain(|p| p.life > 0.0);
}

fn update_respawn(state: &mut GameState) {
    if state.respawn_ticks == 0 {
        return;
    }

    state.respawn_ticks -= 1;
    if state.respawn_ticks > 0 {
        return;
    }

    if state.lives > 0 {
        state.ship = Some(Ship::respawned(state.center()));
        log::info!("Ship respawned, {} lives", state.lives);
    } else {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over: score {} on level {}",
            state.score,
            state.level
        );
    }
}

fn update_ship(state: &mut GameState, input: &TickInput) {
    state.fire_cooldown_ticks = state.fire_cooldown_ticks.saturating_sub(1);

    let (width, height) = (state.width, state.height);
    let Some(ship) = state.ship.as_mut() else {
        return;
    };

    if ship.invincible {
        if ship.invincible_ticks == 0 {
            ship.invincible = false;
        } else {
            ship.invincible_ticks -= 1;
        }
    }

    if input.turn_left {
        ship.rotation -= SHIP_TURN_SPEED;
    }
    if input.turn_right {
        ship.rotation += SHIP_TURN_SPEED;
    }

    // No drag: velocity persists until thrust changes it
    ship.thrusting = input.thrust;
    if input.thrust {
        ship.vel += ship.facing() * SHIP_THRUST;
    }

    ship.pos = vector::wrap(ship.pos + ship.vel, width, height);

    if input.fire && state.fire_cooldown_ticks == 0 {
        let vel = ship.vel + ship.facing() * BULLET_SPEED;
        state.bullets.push(Bullet::new(ship.nose(), vel));
        state.fire_cooldown_ticks = SHIP_FIRE_COOLDOWN_TICKS;
    }
}

/// Move player bullets and resolve hits. A bullet that overlaps several
/// targets hits the oldest one in the pool, not the most recently spawned.
fn update_bullets(state: &mut GameState) {
    let (width, height) = (state.width, state.height);
    let mut bullets = std::mem::take(&mut state.bullets);

    bullets.retain_mut(|b| {
        b.pos = vector::wrap(b.pos + b.vel, width, height);
        b.ttl_ticks = b.ttl_ticks.saturating_sub(1);

        // One target per bullet, asteroids first
        let asteroid_hit = first_hit(b.pos, state.asteroids.iter().map(|a| (a.pos, a.radius)));
        let hit = if let Some(index) = asteroid_hit {
            state.split_asteroid(index);
            state.award(ASTEROID_SCORE);
            true
        } else {
            let ufo_hit = first_hit(b.pos, state.ufos.iter().map(|u| (u.pos, u.radius)));
            match ufo_hit {
                Some(index) => {
                    let ufo = state.ufos.remove(index);
                    state.award(ufo.score_value);
                    log::info!("{:?} saucer destroyed, +{}", ufo.size, ufo.score_value);
                    true
                }
                None => false,
            }
        };

        !hit && b.ttl_ticks > 0
    });

    state.bullets = bullets;
}

fn update_asteroids(state: &mut GameState) {
    let (width, height) = (state.width, state.height);
    let ship_pos = state.vulnerable_ship_pos();
    let mut ship_hit = false;

    for a in &mut state.asteroids {
        a.pos = vector::wrap(a.pos + a.vel, width, height);
        a.rotation += a.rotation_speed;

        if let Some(pos) = ship_pos {
            ship_hit |= circles_overlap(pos, SHIP_RADIUS, a.pos, a.radius);
        }
    }

    if ship_hit {
        state.kill_ship();
    }
}

fn award_extra_lives(state: &mut GameState) {
    while state.score >= state.next_extra_life {
        state.lives += 1;
        state.next_extra_life += EXTRA_LIFE_STEP;
        log::info!("Extra life at {} points, {} lives", state.score, state.lives);
    }
}

fn update_ufos(state: &mut GameState) {
    let (width, height) = (state.width, state.height);

    state.ufo_spawn_ticks = state.ufo_spawn_ticks.saturating_sub(1);
    if state.ufo_spawn_ticks == 0 && state.ufos.is_empty() {
        let ufo = spawner::new_ufo(&mut state.rng, width, height, state.score);
        log::info!(
            "{:?} saucer entering at ({:.0}, {:.0})",
            ufo.size,
            ufo.pos.x,
            ufo.pos.y
        );
        state.ufos.push(ufo);
        state.ufo_spawn_ticks = UFO_SPAWN_INTERVAL_TICKS;
    }

    let score = state.score;
    let vulnerable = state.vulnerable_ship_pos();
    let mut target = state.ship.as_ref().map(|s| s.pos);
    let mut ship_hit = false;
    let mut ufos = std::mem::take(&mut state.ufos);

    ufos.retain_mut(|ufo| {
        // Saucers wrap vertically only; leaving sideways removes them
        ufo.pos += ufo.vel;
        ufo.pos.y = vector::wrap_axis(ufo.pos.y, height);
        if has_exited(ufo, width) {
            log::debug!("{:?} saucer left the playfield", ufo.size);
            return false;
        }

        if let Some(pos) = vulnerable {
            if !ship_hit && circles_overlap(pos, SHIP_RADIUS, ufo.pos, ufo.radius) {
                ship_hit = true;
                target = None;
            }
        }

        ufo.fire_ticks = ufo.fire_ticks.saturating_sub(1);
        if ufo.fire_ticks == 0 {
            if let Some(angle) = ufo_fire_heading(&mut state.rng, ufo, target, score) {
                let vel = from_polar(angle, BULLET_SPEED);
                state.ufo_bullets.push(Bullet::new(ufo.pos, vel));
                ufo.fire_ticks = ufo.size.fire_interval_ticks();
            }
        }

        true
    });

    state.ufos = ufos;
    if ship_hit {
        state.kill_ship();
    }
}

/// Whether a saucer has fully left the playfield in its direction of travel
fn has_exited(ufo: &Ufo, width: f32) -> bool {
    (ufo.vel.x > 0.0 && ufo.pos.x > width + ufo.radius)
        || (ufo.vel.x < 0.0 && ufo.pos.x < -ufo.radius)
}

/// Half-angle of the random deviation applied to a small saucer's aimed
/// shot. Shrinks linearly from 45 degrees at 0 points to none at 60000.
pub fn aim_cone(score: u64) -> f32 {
    if score >= PERFECT_AIM_SCORE {
        0.0
    } else {
        FRAC_PI_4 * (1.0 - score as f32 / PERFECT_AIM_SCORE as f32)
    }
}

/// Direction of a saucer's next shot. Big saucers fire anywhere; small
/// saucers aim at the ship and hold fire while there is none.
fn ufo_fire_heading<R: Rng + ?Sized>(
    rng: &mut R,
    ufo: &Ufo,
    target: Option<Vec2>,
    score: u64,
) -> Option<f32> {
    match ufo.size {
        UfoSize::Big => Some(rng.random_range(0.0..TAU)),
        UfoSize::Small => {
            let target = target?;
            let aim = heading(subtract(target, ufo.pos));
            let deviation = (rng.random::<f32>() * 2.0 - 1.0) * aim_cone(score);
            Some(aim + deviation)
        }
    }
}

fn update_ufo_bullets(state: &mut GameState) {
    let (width, height) = (state.width, state.height);
    let vulnerable = state.vulnerable_ship_pos();
    let mut ship_hit = false;

    state.ufo_bullets.retain_mut(|b| {
        b.pos = vector::wrap(b.pos + b.vel, width, height);
        b.ttl_ticks = b.ttl_ticks.saturating_sub(1);

        if let Some(pos) = vulnerable {
            if !ship_hit && point_in_circle(b.pos, pos, SHIP_RADIUS) {
                ship_hit = true;
                return false;
            }
        }

        b.ttl_ticks > 0
    });

    if ship_hit {
        state.kill_ship();
    }
}

fn check_level_clear(state: &mut GameState) {
    if !state.asteroids.is_empty() || !state.ufos.is_empty() {
        return;
    }

    state.level += 1;
    state.ufo_bullets.clear();

    let count = wave_size(state.level, state.score);
    log::info!("Level {}: spawning {} asteroids", state.level, count);
    state.spawn_asteroids(count, ASTEROID_LARGE);
}

/// Number of large asteroids in the wave for `level`. High scores pin the
/// wave size: 7 between 40000 and 60000 points, 8 from 60000 on.
pub fn wave_size(level: u32, score: u64) -> usize {
    if score >= PERFECT_AIM_SCORE {
        8
    } else if score >= SMALL_UFO_ONLY_SCORE {
        7
    } else {
        level as usize + 3
    }
}
