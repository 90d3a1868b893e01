use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const RNG_SEED: u64 = 0x5EED_2026;
/// One slot in `NULL_ONE_IN` is left empty by [`random_slots`].
const NULL_ONE_IN: u32 = 16;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Nullable values in `-bound..=bound`, mostly present.
pub fn random_slots<R: Rng + ?Sized>(rng: &mut R, len: usize, bound: i64) -> Vec<Option<i64>> {
    (0..len)
        .map(|_| {
            if rng.random_range(0..NULL_ONE_IN) == 0 {
                None
            } else {
                Some(rng.random_range(-bound..=bound))
            }
        })
        .collect()
}

/// Sorted `(from, to)` pair with `from <= to <= len`.
pub fn random_window<R: Rng + ?Sized>(rng: &mut R, len: usize) -> (usize, usize) {
    let from = rng.random_range(0..=len);
    let to = rng.random_range(from..=len);
    (from, to)
}
