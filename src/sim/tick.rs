//! Per-frame simulation tick
//!
//! One pure transition: previous snapshot + delta + input sample in, next
//! snapshot out. Stages run strictly top to bottom; no stage reaches back
//! into an earlier one.

use rand::Rng;

use super::collision;
use super::spawn;
use super::state::{EffectParticle, GameState, InputSnapshot};
use super::whirlwind;

/// Advance the game by one tick of `delta_ms` milliseconds.
///
/// Returns the previous snapshot unchanged when the game is over or the
/// delta is not positive, so a finished run can never be resumed by
/// accident. `None` input means no movement intent this tick.
///
/// Spawn and emission probabilities assume small deltas (see
/// [`crate::consts::MAX_RECOMMENDED_DELTA_MS`]); at most one enemy spawns
/// per tick regardless of delta size, with no catch-up backlog.
pub fn advance(state: &GameState, delta_ms: f32, input: Option<&InputSnapshot>) -> GameState {
    if state.game_over || delta_ms <= 0.0 {
        return state.clone();
    }

    let dt = delta_ms / 1000.0;
    let mut next = state.clone();

    // 1. Clock
    next.game_time += dt;

    // 2. Player motion
    next.player = state.player.step(input, dt, &next.tuning);

    // 3. Spawn (at most one per tick)
    if next.rng.random::<f32>() < next.tuning.spawn_rate * dt {
        let id = next.next_entity_id();
        let enemy = spawn::spawn_enemy(&mut next.rng, id);
        next.enemies.push(enemy);
    }

    // 4. Enemy AI seeks the already-moved player
    let target = next.player.pos;
    next.enemies = next.enemies.iter().map(|e| e.seek(target, dt)).collect();

    // 5. Whirlwind: area damage (kills drop out here), then the emission roll
    next.enemies = whirlwind::damage_enemies(&next.player, &next.enemies, dt, &next.tuning);
    if let Some((pos, vel)) = whirlwind::roll_emission(&next.player, &next.tuning, &mut next.rng) {
        let id = next.next_entity_id();
        let ttl = next.tuning.particle_ttl;
        next.particles.push(EffectParticle::new(id, pos, vel, ttl));
    }

    // 6. Advance particles, the just-emitted one included
    next.particles = next.particles.iter().map(|p| p.advanced(dt)).collect();

    // 7. Resolution: expiry, culls, contact damage
    let res = collision::resolve(&next.player, next.enemies, next.particles, &next.tuning);
    next.enemies = res.enemies;
    next.particles = res.particles;

    // 8.-9. Apply player damage, then decide game over from the result
    next.player.health = (next.player.health - res.player_damage).max(0.0);
    next.game_over = next.player.health <= 0.0;

    // 10. Score passes through plus an always-zero delta; paused is carried
    next.score += res.score_delta;

    next
}
