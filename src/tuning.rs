//! Data-driven game balance
//!
//! Every gameplay rate lives here so callers (and tests) can override it
//! without touching the simulation. Defaults mirror `crate::consts`.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Balance knobs consumed by the simulation each tick.
///
/// Two of these are deliberately frame-rate coupled and therefore named
/// rather than hardcoded: `particle_emit_chance` and
/// `contact_damage_factor` apply per tick, not per second. Product may want
/// them dt-scaled eventually; until then they are preserved as shipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Player movement speed per axis (units/sec)
    pub player_speed: f32,
    /// Expected enemy spawns per second
    pub spawn_rate: f32,
    /// Whirlwind area-damage radius
    pub whirlwind_radius: f32,
    /// Whirlwind damage per second
    pub whirlwind_dps: f32,
    /// Chance per tick of emitting one cosmetic particle (frame-rate coupled)
    pub particle_emit_chance: f32,
    /// Outward speed of emitted particles (units/sec)
    pub particle_speed: f32,
    /// Particle time-to-live (seconds)
    pub particle_ttl: f32,
    /// Contact-damage radius around the player
    pub contact_radius: f32,
    /// Fraction of an enemy's damage stat applied per tick in contact
    /// (frame-rate coupled)
    pub contact_damage_factor: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: PLAYER_SPEED,
            spawn_rate: ENEMY_SPAWN_RATE,
            whirlwind_radius: WHIRLWIND_RADIUS,
            whirlwind_dps: WHIRLWIND_DPS,
            particle_emit_chance: PARTICLE_EMIT_CHANCE,
            particle_speed: PARTICLE_SPEED,
            particle_ttl: PARTICLE_TTL,
            contact_radius: CONTACT_RADIUS,
            contact_damage_factor: CONTACT_DAMAGE_FACTOR,
        }
    }
}

impl Tuning {
    /// Tuning with all random rates zeroed. Used by tests that need a
    /// fully deterministic entity count.
    pub fn silent() -> Self {
        Self {
            spawn_rate: 0.0,
            particle_emit_chance: 0.0,
            ..Self::default()
        }
    }
}
