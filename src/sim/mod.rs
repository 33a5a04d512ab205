//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Each tick consumes one immutable snapshot and produces the next
//! - Seeded RNG only, carried inside the snapshot
//! - No rendering, logging, or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod whirlwind;

pub use collision::{Resolution, resolve};
pub use spawn::spawn_enemy;
pub use state::{EffectParticle, Enemy, EnemyKind, EnemyStats, GameState, InputSnapshot, Player};
pub use tick::advance;
pub use whirlwind::{damage_enemies, roll_emission};
