//! Input patterns for testing and benchmarking sorts.
//!
//! All patterns derive from a single per-process seed, see [`random_init_seed`]. Set the
//! `OVERRIDE_SEED` environment variable to replay a failing run.

use std::env;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;

use rand::prelude::*;

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_rng();

    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = new_rng();

    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

/// Short ASCII words with random letter case, e.g. `["qX", "Banana", "a"]`.
///
/// Byte-wise `str` ordering puts every uppercase letter before every lowercase one, which makes
/// these useful to check that a sort relies on the default ordering of the element type only.
pub fn random_words(len: usize) -> Vec<String> {
    let mut rng = new_rng();

    (0..len)
        .map(|_| {
            let word_len = rng.gen_range(1..=8);
            (0..word_len)
                .map(|_| {
                    let letter = rng.gen_range(b'a'..=b'z');
                    if rng.gen_bool(0.3) {
                        letter.to_ascii_uppercase() as char
                    } else {
                        letter as char
                    }
                })
                .collect::<String>()
        })
        .collect()
}

/// Decimal strings whose lexicographic order equals the numeric order of `v`.
///
/// Values are shifted into the unsigned range and zero padded to the ten digits of `u32::MAX`.
pub fn padded_strings(v: &[i32]) -> Vec<String> {
    v.iter()
        .map(|&val| format!("{:010}", (val as i64) - (i32::MIN as i64)))
        .collect()
}

/// Overwrites the default behavior so that each call to a random derived pattern yields new random
/// values.
///
/// By default `patterns::random(4)` will yield the same values per process invocation.
/// For benchmarks it's advised to call this function.
pub fn use_random_seed_each_time() {
    if env::var("OVERRIDE_SEED").is_ok() {
        panic!("Using use_random_seed_each_time conflicts with the external seed override.");
    }

    USE_FIXED_SEED.store(false, Ordering::Release);
}

pub fn random_init_seed() -> u64 {
    if USE_FIXED_SEED.load(Ordering::Acquire) {
        static SEED: OnceCell<u64> = OnceCell::new();
        *SEED.get_or_init(|| -> u64 {
            env::var("OVERRIDE_SEED")
                .ok()
                .map(|seed| u64::from_str(&seed).unwrap())
                .unwrap_or_else(|| thread_rng().gen())
        })
    } else {
        thread_rng().gen()
    }
}

// --- Private ---

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);

fn new_rng() -> StdRng {
    rand::SeedableRng::seed_from_u64(random_init_seed())
}
