// Host-side tests for the star twinkle draw.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod twinkle {
    include!("../src/core/twinkle.rs");
}

use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;
use twinkle::*;

#[test]
fn low_draws_pass_the_gate_at_minimum_opacity() {
    // every draw is 0.0
    let mut rng = StepRng::new(0, 0);
    let params = TwinkleParams::default();
    let changed = twinkle_tick(&mut rng, 5, &params);
    assert_eq!(changed.len(), 5);
    for (i, (idx, opacity)) in changed.iter().enumerate() {
        assert_eq!(*idx, i);
        assert!((opacity - 0.2).abs() < 1e-12);
    }
}

#[test]
fn high_draws_leave_every_star_unchanged() {
    // every draw is just under 1.0
    let mut rng = StepRng::new(u64::MAX, 0);
    let changed = twinkle_tick(&mut rng, 8, &TwinkleParams::default());
    assert!(changed.is_empty());
}

#[test]
fn opacities_stay_within_bounds() {
    let mut rng = StdRng::seed_from_u64(42);
    let params = TwinkleParams::default();
    let mut total = 0;
    for _ in 0..500 {
        for (idx, opacity) in twinkle_tick(&mut rng, 20, &params) {
            assert!(idx < 20);
            assert!((0.2..=1.0).contains(&opacity), "opacity {opacity}");
            total += 1;
        }
    }
    // 10% of 10_000 draws, loosely
    assert!((700..1300).contains(&total), "changed {total} times");
}

#[test]
fn zero_probability_never_changes_anything() {
    let mut rng = StepRng::new(0, 0);
    let params = TwinkleParams {
        probability: 0.0,
        ..TwinkleParams::default()
    };
    assert_eq!(twinkle_opacity(&mut rng, &params), None);
}

#[test]
fn no_stars_no_changes() {
    let mut rng = StdRng::seed_from_u64(7);
    assert!(twinkle_tick(&mut rng, 0, &TwinkleParams::default()).is_empty());
}

#[test]
fn defaults_match_two_second_ten_percent_flicker() {
    let p = TwinkleParams::default();
    assert_eq!(p.interval_ms, 2000);
    assert!((p.probability - 0.1).abs() < 1e-12);
    assert!((p.min_opacity - 0.2).abs() < 1e-12);
    assert!((p.max_opacity - 1.0).abs() < 1e-12);
}
