//! Secure bounded sampling of integers.
//!
//! Draws come from a cryptographically secure generator, [`OsRng`] by
//! default. Uniform integer sampling in `rand` rejects out-of-zone values
//! instead of reducing modulo the range, so draws carry no modulo bias.

use std::collections::HashSet;

use rand::distributions::{Distribution, Uniform};
use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};

use crate::constants::{DEFAULT_SAMPLE_COUNT, DEFAULT_UNIQUE};
use crate::error::{Error, Result};

/// Parameters for one sampling call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleRequest {
    pub min_value: i64,
    pub max_value: i64,
    pub count: usize,
    pub unique: bool,
}

impl SampleRequest {
    /// A request for a single unique value in `[min_value, max_value]`.
    pub fn new(min_value: i64, max_value: i64) -> Self {
        SampleRequest {
            min_value,
            max_value,
            count: DEFAULT_SAMPLE_COUNT as usize,
            unique: DEFAULT_UNIQUE,
        }
    }

    pub fn count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    /// Number of integers in the inclusive range.
    pub fn range_size(&self) -> u128 {
        (self.max_value as i128 - self.min_value as i128 + 1).max(0) as u128
    }
}

/// Samples with the operating system's generator.
pub fn generate_random_numbers(request: &SampleRequest) -> Result<Vec<i64>> {
    generate_random_numbers_with(&mut OsRng, request)
}

/// Samples `request.count` integers from `[min_value, max_value]`.
///
/// Fails with [`Error::Range`] when `min_value >= max_value`, or when a
/// unique sample asks for more values than the range holds. Order of the
/// returned values carries no meaning.
pub fn generate_random_numbers_with<R>(rng: &mut R, request: &SampleRequest) -> Result<Vec<i64>>
where
    R: RngCore + CryptoRng + ?Sized,
{
    if request.min_value >= request.max_value {
        return Err(Error::Range(
            "min_value must be less than max_value".to_string(),
        ));
    }

    let range_size = request.range_size();
    if request.unique && range_size < request.count as u128 {
        return Err(Error::Range(
            "Range is too small to generate unique numbers".to_string(),
        ));
    }

    if request.count == 0 {
        return Ok(Vec::new());
    }

    let between = Uniform::new_inclusive(request.min_value, request.max_value);

    if !request.unique {
        return Ok((0..request.count).map(|_| between.sample(rng)).collect());
    }

    // Rejection slows down sharply once most of the range is taken, so dense
    // requests shuffle the range instead.
    if (request.count as u128) * 2 > range_size {
        partial_shuffle(rng, request.min_value, range_size, request.count)
    } else {
        Ok(distinct_draws(rng, &between, request.count))
    }
}

/// Upper bound on the up-front allocation for rejection sampling; the set
/// grows past it as needed.
const INITIAL_SET_CAPACITY: usize = 1024;

fn distinct_draws<R>(rng: &mut R, between: &Uniform<i64>, count: usize) -> Vec<i64>
where
    R: RngCore + ?Sized,
{
    let mut seen = HashSet::with_capacity(count.min(INITIAL_SET_CAPACITY));
    while seen.len() < count {
        seen.insert(between.sample(rng));
    }
    seen.into_iter().collect()
}

/// Fisher-Yates over the first `count` slots of the materialized range.
fn partial_shuffle<R>(rng: &mut R, min_value: i64, range_size: u128, count: usize) -> Result<Vec<i64>>
where
    R: RngCore + ?Sized,
{
    // range_size < 2 * count here, so this only fails for counts that could
    // never be allocated anyway.
    let range_size = usize::try_from(range_size)
        .map_err(|_| Error::Range("Range is too large to sample densely".to_string()))?;

    let mut values: Vec<i64> = (0..range_size)
        .map(|offset| (min_value as i128 + offset as i128) as i64)
        .collect();

    for i in 0..count {
        let j = rng.gen_range(i..range_size);
        values.swap(i, j);
    }

    values.truncate(count);
    Ok(values)
}
