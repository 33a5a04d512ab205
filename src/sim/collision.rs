//! Collision and lifetime resolution
//!
//! Operates on the post-movement sets: expired particles and dead enemies
//! are culled, then every surviving enemy in contact range taxes the player.

use super::state::{EffectParticle, Enemy, Player};
use crate::tuning::Tuning;

/// Outcome of the resolution stage.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub enemies: Vec<Enemy>,
    pub particles: Vec<EffectParticle>,
    /// Total damage to apply to the player this tick
    pub player_damage: f32,
    /// Always zero: no rule awards score for kills yet
    pub score_delta: u64,
}

/// Cull expired particles and dead enemies, then accumulate contact damage
/// from every survivor within `contact_radius` of the player.
///
/// The tax is `damage * contact_damage_factor` flat per tick (frame-rate
/// coupled, like particle emission). An enemy's own health is not consulted
/// when it deals contact damage; only survivors of the earlier whirlwind
/// cull reach this point.
pub fn resolve(
    player: &Player,
    enemies: Vec<Enemy>,
    particles: Vec<EffectParticle>,
    tuning: &Tuning,
) -> Resolution {
    let particles: Vec<EffectParticle> = particles.into_iter().filter(|p| !p.expired()).collect();

    // Safety net: the whirlwind stage already drops kills.
    let enemies: Vec<Enemy> = enemies.into_iter().filter(|e| e.health > 0.0).collect();

    let mut player_damage = 0.0;
    for enemy in &enemies {
        if enemy.pos.distance(player.pos) < tuning.contact_radius {
            player_damage += enemy.damage * tuning.contact_damage_factor;
        }
    }

    Resolution {
        enemies,
        particles,
        player_damage,
        score_delta: 0,
    }
}
