//! Whirlwind area-damage engine
//!
//! Continuous damage to every enemy inside a fixed radius of the player,
//! plus a probabilistic roll for one cosmetic debris particle per tick.

use glam::Vec2;
use rand::Rng;

use super::state::{Enemy, Player};
use crate::tuning::Tuning;

/// Apply `whirlwind_dps * dt` to every enemy within the whirlwind radius.
///
/// Damage is continuous, so totals must be accumulated across ticks, never
/// resampled. Enemies driven to zero health drop out of the returned set
/// right here, before contact damage is ever evaluated against them.
pub fn damage_enemies(player: &Player, enemies: &[Enemy], dt: f32, tuning: &Tuning) -> Vec<Enemy> {
    let mut survivors = Vec::with_capacity(enemies.len());

    for enemy in enemies {
        if enemy.pos.distance(player.pos) <= tuning.whirlwind_radius {
            let health = (enemy.health - tuning.whirlwind_dps * dt).max(0.0);
            if health > 0.0 {
                survivors.push(Enemy {
                    health,
                    ..enemy.clone()
                });
            }
            // Killed enemies vanish the instant health crosses zero.
        } else {
            survivors.push(enemy.clone());
        }
    }

    survivors
}

/// Roll for one cosmetic particle: position at half the whirlwind radius
/// from the player at a random angle, velocity outward along that angle.
///
/// The chance is flat per tick (frame-rate coupled, not `rate * dt`);
/// tests pin it through `Tuning`.
pub fn roll_emission<R: Rng>(player: &Player, tuning: &Tuning, rng: &mut R) -> Option<(Vec2, Vec2)> {
    if rng.random::<f32>() >= tuning.particle_emit_chance {
        return None;
    }

    let angle = rng.random_range(0.0..std::f32::consts::TAU);
    let dir = Vec2::new(angle.cos(), angle.sin());
    let pos = player.pos + dir * tuning.whirlwind_radius * 0.5;
    let vel = dir * tuning.particle_speed;
    Some((pos, vel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::EnemyKind;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn enemy_at(distance: f32) -> Enemy {
        let player = Player::new();
        Enemy::new(1, player.pos + Vec2::new(distance, 0.0), EnemyKind::Zombie)
    }

    #[test]
    fn test_damage_inside_radius() {
        let player = Player::new();
        // Zombie at distance 50, health 40, dt 100ms: 40 - 25*0.1 = 37.5
        let enemies = vec![enemy_at(50.0)];
        let after = damage_enemies(&player, &enemies, 0.1, &Tuning::default());
        assert_eq!(after.len(), 1);
        assert!((after[0].health - 37.5).abs() < 1e-4);
    }

    #[test]
    fn test_no_damage_outside_radius() {
        let player = Player::new();
        let enemies = vec![enemy_at(81.0)];
        let after = damage_enemies(&player, &enemies, 0.1, &Tuning::default());
        assert_eq!(after[0].health, 40.0);
    }

    #[test]
    fn test_boundary_distance_takes_damage() {
        let player = Player::new();
        let enemies = vec![enemy_at(80.0)];
        let after = damage_enemies(&player, &enemies, 0.1, &Tuning::default());
        assert!(after[0].health < 40.0);
    }

    #[test]
    fn test_killed_enemy_dropped_immediately() {
        let player = Player::new();
        let mut weak = enemy_at(10.0);
        weak.health = 1.0;
        let strong = enemy_at(20.0);
        let after = damage_enemies(&player, &[weak, strong], 0.1, &Tuning::default());
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].id, 1);
        assert!(after[0].health > 0.0);
    }

    #[test]
    fn test_emission_geometry() {
        let player = Player::new();
        let tuning = Tuning {
            particle_emit_chance: 1.0,
            ..Tuning::default()
        };
        let mut rng = Pcg32::seed_from_u64(5);
        let (pos, vel) = roll_emission(&player, &tuning, &mut rng).unwrap();
        // Spawns at half the whirlwind radius, moving straight outward.
        let offset = pos - player.pos;
        assert!((offset.length() - 40.0).abs() < 1e-3);
        assert!((vel.length() - 150.0).abs() < 1e-3);
        assert!(offset.normalize().dot(vel.normalize()) > 0.999);
    }

    #[test]
    fn test_emission_respects_chance() {
        let player = Player::new();
        let muted = Tuning {
            particle_emit_chance: 0.0,
            ..Tuning::default()
        };
        let mut rng = Pcg32::seed_from_u64(5);
        for _ in 0..100 {
            assert!(roll_emission(&player, &muted, &mut rng).is_none());
        }
    }
}
