//! Property tests for the simulation invariants: health stays in bounds,
//! particles never outlive their TTL, and game over is terminal.

use proptest::prelude::*;
use whirlwind_arena::sim::{GameState, InputSnapshot, advance};

fn arb_input() -> impl Strategy<Value = InputSnapshot> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(up, down, left, right)| InputSnapshot {
            up,
            down,
            left,
            right,
        },
    )
}

proptest! {
    #[test]
    fn invariants_hold_over_arbitrary_runs(
        seed in any::<u64>(),
        frames in prop::collection::vec((arb_input(), 1.0f32..100.0), 1..200),
    ) {
        let mut state = GameState::new(seed);
        for (input, delta_ms) in frames {
            state = advance(&state, delta_ms, Some(&input));

            prop_assert!(state.player.health >= 0.0);
            prop_assert!(state.player.health <= state.player.max_health);
            for enemy in &state.enemies {
                prop_assert!(enemy.health > 0.0 && enemy.health <= enemy.max_health);
            }
            for particle in &state.particles {
                prop_assert!(particle.lifetime < particle.max_lifetime);
            }
            prop_assert_eq!(state.game_over, state.player.health <= 0.0);

            if state.game_over {
                break;
            }
        }
    }

    #[test]
    fn game_over_is_terminal(
        seed in any::<u64>(),
        delta_ms in -50.0f32..250.0,
        input in arb_input(),
    ) {
        let mut state = GameState::new(seed);
        state.player.health = 0.0;
        state.game_over = true;

        let after = advance(&state, delta_ms, Some(&input));
        prop_assert_eq!(after, state);
    }

    #[test]
    fn non_positive_delta_never_advances(
        seed in any::<u64>(),
        delta_ms in -100.0f32..=0.0,
        input in arb_input(),
    ) {
        let state = GameState::new(seed);
        let after = advance(&state, delta_ms, Some(&input));
        prop_assert_eq!(after, state);
    }

    #[test]
    fn player_stays_inside_field(
        seed in any::<u64>(),
        frames in prop::collection::vec((arb_input(), 1.0f32..1500.0), 1..50),
    ) {
        let mut state = GameState::new(seed);
        for (input, delta_ms) in frames {
            state = advance(&state, delta_ms, Some(&input));
            prop_assert!((20.0..=780.0).contains(&state.player.pos.x));
            prop_assert!((20.0..=580.0).contains(&state.player.pos.y));
            if state.game_over {
                break;
            }
        }
    }
}
