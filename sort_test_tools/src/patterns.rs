//! Input generators for the sort tests and benchmarks.
//!
//! All random patterns draw from a [`StdRng`] seeded with [`random_init_seed`], so a failing run
//! can be reproduced by setting `OVERRIDE_SEED` to the seed it printed.

use std::env;

use once_cell::sync::Lazy;
use rand::prelude::*;
#[allow(deprecated)]
use zipf::ZipfDistribution;

static SEED: Lazy<u64> = Lazy::new(|| {
    let seed = env::var("OVERRIDE_SEED")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(|| thread_rng().gen());

    eprintln!("Seed: {seed}");
    seed
});

/// Process wide seed shared by every random pattern.
pub fn random_init_seed() -> u64 {
    *SEED
}

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

// --- Random ---

/// Uniformly random values over the full `i32` range.
pub fn random(len: usize) -> Vec<i32> {
    let mut rng = new_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

/// Uniformly random values in `range`. Small ranges produce many duplicates.
pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    let mut rng = new_rng();
    let dist: rand::distributions::Uniform<i32> = range.into();
    (0..len).map(|_| rng.sample(dist)).collect()
}

/// Zipfian distributed values, a handful of values make up most of the input.
#[allow(deprecated)]
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_rng();
    let dist = ZipfDistribution::new(len, exponent).expect("zipf exponent must be positive");
    (0..len).map(|_| rng.sample(dist) as i32).collect()
}

/// Random values of which `sorted_percent` percent at the front are already in order.
pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    let mut v = random(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;
    v[..sorted_len.min(len)].sort();
    v
}

// --- Structured ---

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// Ascending runs of `saw_count` teeth, each restarting at a random low value.
pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_rng();
    let tooth_len = (len / saw_count.max(1)).max(1);
    let mut v = Vec::with_capacity(len);
    while v.len() < len {
        let start: i32 = rng.gen_range(-1000..1000);
        let tooth = (start..).take(tooth_len.min(len - v.len()));
        if rng.gen::<bool>() {
            let mut tooth = tooth.collect::<Vec<_>>();
            tooth.reverse();
            v.extend(tooth);
        } else {
            v.extend(tooth);
        }
    }
    v
}

/// Ascending first half followed by a descending second half.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let half = len / 2;
    let mut v = (0..half as i32).collect::<Vec<_>>();
    v.extend((0..(len - half) as i32).rev());
    v
}
