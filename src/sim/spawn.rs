//! Procedural enemy spawning
//!
//! New enemies appear just outside one of the four field edges and pick a
//! kind uniformly; all stats derive from the kind's table.

use glam::Vec2;
use rand::Rng;

use super::state::{Enemy, EnemyKind};
use crate::consts::*;

/// Create one enemy at a random point `SPAWN_EDGE_OFFSET` outside a random
/// edge. The coordinate along the edge is uniform over the field's extent.
pub fn spawn_enemy<R: Rng>(rng: &mut R, id: u32) -> Enemy {
    let pos = match rng.random_range(0..4u8) {
        // Top
        0 => Vec2::new(rng.random_range(0.0..FIELD_WIDTH), -SPAWN_EDGE_OFFSET),
        // Right
        1 => Vec2::new(
            FIELD_WIDTH + SPAWN_EDGE_OFFSET,
            rng.random_range(0.0..FIELD_HEIGHT),
        ),
        // Bottom
        2 => Vec2::new(
            rng.random_range(0.0..FIELD_WIDTH),
            FIELD_HEIGHT + SPAWN_EDGE_OFFSET,
        ),
        // Left
        _ => Vec2::new(-SPAWN_EDGE_OFFSET, rng.random_range(0.0..FIELD_HEIGHT)),
    };

    let kind = EnemyKind::ALL[rng.random_range(0..EnemyKind::ALL.len())];
    Enemy::new(id, pos, kind)
}
