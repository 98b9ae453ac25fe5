//! Per-frame simulation step
//!
//! One call per display refresh. Draws and advances every entity, resolves
//! collisions, awards score and prunes dead entities. Removals are only
//! marked while iterating; each container is compacted once, at the end of
//! the frame, so nothing is skipped or processed twice.

use glam::Vec2;
use rand::Rng;

use super::collision::circles_touch;
use super::entity::{Body, Particle};
use super::state::{GameEvent, GamePhase, GameState};
use crate::surface::{Color, Surface};
use crate::tuning::Tuning;

/// Advance the game by one frame, drawing it onto `surface`
///
/// `now_ms` is the host's frame timestamp and only drives shrink tweens;
/// motion is per frame, assuming a steady refresh rate.
pub fn tick<S: Surface>(state: &mut GameState, now_ms: f64, surface: &mut S) {
    if !state.is_running() {
        return;
    }
    state.frame_count += 1;

    let GameState {
        rng,
        tuning,
        size,
        player,
        projectiles,
        enemies,
        particles,
        events,
        score,
        ..
    } = state;
    let size = *size;
    let slack = tuning.collision_slack;

    // Translucent fill leaves fading trails behind moving entities
    surface.fill_rect(
        0.0,
        0.0,
        size.width,
        size.height,
        Color::rgba(0, 0, 0, tuning.trail_alpha),
    );
    player.draw(surface);

    // Particles: faded ones go, the rest drift
    particles.retain_mut(|particle| {
        if particle.is_faded() {
            false
        } else {
            particle.update(surface, tuning);
            true
        }
    });

    // Projectiles: move, then retire once fully off the surface
    let mut projectile_dead = vec![false; projectiles.len()];
    for (idx, projectile) in projectiles.iter_mut().enumerate() {
        projectile.update(surface);
        if size.is_circle_outside(projectile.body.pos, projectile.body.radius) {
            projectile_dead[idx] = true;
        }
    }

    // Enemies: move, check the player, then check every live projectile
    let mut enemy_dead = vec![false; enemies.len()];
    let mut player_hit = false;

    'enemies: for (enemy_idx, enemy) in enemies.iter_mut().enumerate() {
        enemy.advance_shrink(now_ms);
        enemy.update(surface);

        if circles_touch(&player.body, &enemy.body, slack) {
            player_hit = true;
            break;
        }

        for (projectile_idx, projectile) in projectiles.iter().enumerate() {
            if projectile_dead[projectile_idx] {
                continue;
            }
            if !circles_touch(&projectile.body, &enemy.body, slack) {
                continue;
            }

            spawn_burst(particles, rng, tuning, projectile.body.pos, &enemy.body);
            projectile_dead[projectile_idx] = true;

            let shrunk = enemy.body.radius - tuning.enemy_shrink_step;
            if shrunk > tuning.enemy_min_radius {
                *score += tuning.hit_score;
                events.push(GameEvent::ScoreChanged { score: *score });
                events.push(GameEvent::EnemyShrunk {
                    pos: enemy.body.pos,
                    target_radius: shrunk,
                });
                enemy.start_shrink(shrunk, now_ms, tuning.enemy_shrink_duration_ms);
                log::debug!("Enemy hit, shrinking to r={:.1}", shrunk);
            } else {
                *score += tuning.kill_score;
                events.push(GameEvent::ScoreChanged { score: *score });
                events.push(GameEvent::EnemyDestroyed {
                    pos: enemy.body.pos,
                    radius: enemy.body.radius,
                });
                enemy_dead[enemy_idx] = true;
                log::debug!("Enemy destroyed (r={:.1})", enemy.body.radius);
                // Gone; no other projectile can hit it this frame
                continue 'enemies;
            }
        }
    }

    compact(projectiles, &projectile_dead);
    compact(enemies, &enemy_dead);

    if player_hit {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver { score: state.score });
        log::info!(
            "Game over: score {} after {} frames",
            state.score,
            state.frame_count
        );
    }
}

/// Scatter debris from a projectile impact
///
/// Particle count scales with the enemy's size; each particle takes the
/// enemy's color and a random velocity.
pub fn spawn_burst<R: Rng>(
    particles: &mut Vec<Particle>,
    rng: &mut R,
    tuning: &Tuning,
    at: Vec2,
    enemy: &Body,
) {
    let count = (enemy.radius * 2.0).ceil().max(0.0) as usize;
    particles.reserve(count);
    for _ in 0..count {
        let radius = rng.random::<f32>() * tuning.particle_max_radius;
        let vel = Vec2::new(
            (rng.random::<f32>() - 0.5) * (rng.random::<f32>() * tuning.particle_max_speed),
            (rng.random::<f32>() - 0.5) * (rng.random::<f32>() * tuning.particle_max_speed),
        );
        particles.push(Particle::new(at, radius, enemy.color, vel));
    }
}

/// Drop every item whose flag is set; flags line up with items by index
fn compact<T>(items: &mut Vec<T>, dead: &[bool]) {
    let mut flags = dead.iter();
    items.retain(|_| !flags.next().copied().unwrap_or(false));
}
