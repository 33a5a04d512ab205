//! Whirlwind Arena - a top-down arena survival game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player motion, enemy AI, whirlwind damage, collisions)
//! - `tuning`: Data-driven game balance

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions. Spawn geometry and any renderer must agree on these.
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;
    /// Hard clamp margin keeping the player inside the field
    pub const FIELD_MARGIN: f32 = 20.0;

    /// Player spawn point (field center)
    pub const PLAYER_START_X: f32 = 400.0;
    pub const PLAYER_START_Y: f32 = 300.0;
    pub const PLAYER_MAX_HEALTH: f32 = 100.0;
    /// Player movement speed (units/sec, per axis)
    pub const PLAYER_SPEED: f32 = 200.0;

    /// Expected enemy spawns per second
    pub const ENEMY_SPAWN_RATE: f32 = 0.5;
    /// Enemies spawn this far outside the field edge
    pub const SPAWN_EDGE_OFFSET: f32 = 50.0;

    /// Whirlwind area-damage radius around the player
    pub const WHIRLWIND_RADIUS: f32 = 80.0;
    /// Whirlwind damage per second to enemies inside the radius
    pub const WHIRLWIND_DPS: f32 = 25.0;

    /// Chance per tick of emitting one cosmetic particle.
    /// Flat per tick rather than scaled by dt, so emission tracks frame rate.
    pub const PARTICLE_EMIT_CHANCE: f32 = 0.3;
    /// Outward speed of emitted particles (units/sec)
    pub const PARTICLE_SPEED: f32 = 150.0;
    /// Particle time-to-live (seconds)
    pub const PARTICLE_TTL: f32 = 0.5;

    /// Enemies closer than this deal contact damage to the player
    pub const CONTACT_RADIUS: f32 = 30.0;
    /// Fraction of an enemy's damage stat applied per tick while in contact
    pub const CONTACT_DAMAGE_FACTOR: f32 = 0.1;

    /// Spawn and emission probabilities are only statistically sound for
    /// deltas below roughly this value; the driving loop must not coalesce
    /// several frames into one oversized tick.
    pub const MAX_RECOMMENDED_DELTA_MS: f32 = 100.0;
}
