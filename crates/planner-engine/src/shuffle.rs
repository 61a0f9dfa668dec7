// ABOUTME: Deterministic seed-keyed shuffling for stable activity ordering
// ABOUTME: Fisher-Yates driven by a stateless sine-based pseudo-random function
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Seeded shuffling
//!
//! The generator is stateless: each draw is a pure function of `seed + i`, so
//! the permutation for a given `(items, seed)` is reproducible across runs and
//! across implementations that share IEEE 754 `sin`.

use planner_core::constants::seeding::PRNG_SCALE;

/// Pseudo-random value in `[0, 1)` derived from `seed`: `frac(sin(seed) * 10000)`.
#[must_use]
pub fn prng(seed: i64) -> f64 {
    let scaled = (seed as f64).sin() * PRNG_SCALE;
    scaled - scaled.floor()
}

/// Return a seed-determined permutation of `items`; the input is left untouched.
///
/// Walks `i` from `len - 1` down to `1`, drawing `j = floor(prng(seed + i) * (i + 1))`
/// and swapping positions `i` and `j`.
#[must_use]
pub fn shuffle<T: Clone>(items: &[T], seed: i64) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let step_seed = i64::try_from(i).map_or(seed, |offset| seed.saturating_add(offset));
        let draw = prng(step_seed) * (i + 1) as f64;
        // floor of a value in [0, i + 1); clamped in case rounding lands on i + 1
        let j = (draw.floor() as usize).min(i);
        shuffled.swap(i, j);
    }
    shuffled
}
