//! Game state and core simulation types
//!
//! Everything the simulation advances lives here. Snapshots are immutable:
//! a tick never mutates its input, it assembles a new `GameState`, and the
//! caller discards the superseded one.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::tuning::Tuning;

/// Direction keys sampled at the moment a tick begins.
///
/// Absence of a snapshot means "no movement intent". Opposite keys held
/// together cancel arithmetically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// The player-controlled circle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub health: f32,
    pub max_health: f32,
    /// Progression fields: carried in the snapshot but no leveling rule
    /// consumes them yet.
    pub level: u32,
    pub experience: u32,
    pub experience_to_next: u32,
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            level: 1,
            experience: 0,
            experience_to_next: 100,
        }
    }

    /// One tick of keyboard movement, clamped to the field margins.
    ///
    /// Each held key contributes a full `speed * dt` on its axis, so a
    /// diagonal moves sqrt(2) faster than a single axis. Intentionally not
    /// normalized.
    pub fn step(&self, input: Option<&InputSnapshot>, dt: f32, tuning: &Tuning) -> Player {
        let Some(input) = input else {
            return self.clone();
        };

        let step = tuning.player_speed * dt;
        let mut pos = self.pos;
        if input.up {
            pos.y -= step;
        }
        if input.down {
            pos.y += step;
        }
        if input.left {
            pos.x -= step;
        }
        if input.right {
            pos.x += step;
        }

        pos.x = pos.x.clamp(FIELD_MARGIN, FIELD_WIDTH - FIELD_MARGIN);
        pos.y = pos.y.clamp(FIELD_MARGIN, FIELD_HEIGHT - FIELD_MARGIN);

        Player { pos, ..self.clone() }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// Enemy archetypes. The kind is fixed at spawn and determines all stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    Zombie,
    Skeleton,
    Demon,
}

/// Per-kind stat triple. Tankier kinds are slower on purpose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyStats {
    pub max_health: f32,
    pub speed: f32,
    pub damage: f32,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 3] = [EnemyKind::Zombie, EnemyKind::Skeleton, EnemyKind::Demon];

    pub fn stats(self) -> EnemyStats {
        match self {
            EnemyKind::Zombie => EnemyStats {
                max_health: 40.0,
                speed: 100.0,
                damage: 10.0,
            },
            EnemyKind::Skeleton => EnemyStats {
                max_health: 60.0,
                speed: 80.0,
                damage: 15.0,
            },
            EnemyKind::Demon => EnemyStats {
                max_health: 80.0,
                speed: 60.0,
                damage: 20.0,
            },
        }
    }
}

/// An enemy homing toward the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub health: f32,
    pub max_health: f32,
    /// Movement speed (units/sec), from the kind's stat table
    pub speed: f32,
    /// Contact-damage rate, from the kind's stat table
    pub damage: f32,
    pub kind: EnemyKind,
}

impl Enemy {
    pub fn new(id: u32, pos: Vec2, kind: EnemyKind) -> Self {
        let stats = kind.stats();
        Self {
            id,
            pos,
            health: stats.max_health,
            max_health: stats.max_health,
            speed: stats.speed,
            damage: stats.damage,
            kind,
        }
    }

    /// Seek steering: move `speed * dt` along the unit vector toward the
    /// target. An enemy exactly coincident with the target stays put
    /// (`normalize_or_zero` guards the division).
    pub fn seek(&self, target: Vec2, dt: f32) -> Enemy {
        let dir = (target - self.pos).normalize_or_zero();
        Enemy {
            pos: self.pos + dir * self.speed * dt,
            ..self.clone()
        }
    }
}

/// Cosmetic whirlwind debris.
///
/// Carries a `damage` field for parity with the other entities but it is
/// always zero; nothing reads it for gameplay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectParticle {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub damage: f32,
    /// Age in seconds
    pub lifetime: f32,
    /// TTL in seconds
    pub max_lifetime: f32,
}

impl EffectParticle {
    pub fn new(id: u32, pos: Vec2, vel: Vec2, max_lifetime: f32) -> Self {
        Self {
            id,
            pos,
            vel,
            damage: 0.0,
            lifetime: 0.0,
            max_lifetime,
        }
    }

    /// Linear motion plus aging.
    pub fn advanced(&self, dt: f32) -> EffectParticle {
        EffectParticle {
            pos: self.pos + self.vel * dt,
            lifetime: self.lifetime + dt,
            ..self.clone()
        }
    }

    pub fn expired(&self) -> bool {
        self.lifetime >= self.max_lifetime
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG state, advanced by each tick that rolls anything
    pub rng: Pcg32,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub particles: Vec<EffectParticle>,
    /// Elapsed simulated time (seconds)
    pub game_time: f32,
    /// Never incremented by current rules; kills award nothing yet
    pub score: u64,
    /// Terminal once true: further ticks return the snapshot unchanged
    pub game_over: bool,
    /// Carried for the caller; the simulation never branches on it
    pub paused: bool,
    /// Balance knobs for this run
    pub tuning: Tuning,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Fresh initial snapshot: player at field center, nothing spawned.
    /// An external "restart" is exactly this constructor.
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player: Player::new(),
            enemies: Vec::new(),
            particles: Vec::new(),
            game_time: 0.0,
            score: 0,
            game_over: false,
            paused: false,
            tuning,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
