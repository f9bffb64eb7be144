// Author: Lukas Bower
// Purpose: Provide the seeding policy and ranged-draw wrapper over the bit generator.

//! Ranged-draw wrapper.
//!
//! [`Mersenne`] owns exactly one [`Mt19937`] and adds the caller-facing
//! policy: self-seeding from the wall clock at construction, reseed
//! operations with validate-then-mutate semantics, and mapping of raw
//! draws onto integers in a half-open range.

use std::time::{SystemTime, UNIX_EPOCH};

use log::debug;

use crate::generator::Mt19937;

/// Exclusive upper bound of the legacy default range served by
/// [`Mersenne::rand`].
pub const DEFAULT_RAND_MAX: i64 = 32_768;

/// Errors produced by the wrapper. Every failure is raised before any
/// generator state is mutated or any word is drawn, so a failed call
/// never perturbs the output sequence.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MersenneError {
    /// An array seed was supplied without any elements.
    #[error("seed key must contain at least one element")]
    InvalidSeed,
    /// A ranged draw was requested with an empty or inverted interval.
    #[error("invalid range: min {min} must be below max {max}")]
    InvalidRange {
        /// Inclusive lower bound the caller supplied.
        min: i64,
        /// Exclusive upper bound the caller supplied.
        max: i64,
    },
}

/// Seedable source of uniform integers in a half-open range.
#[derive(Debug, Clone)]
pub struct Mersenne {
    gen: Mt19937,
}

impl Mersenne {
    /// Create an instance seeded from the wall clock.
    ///
    /// The clock is read exactly once, here: milliseconds since the Unix
    /// epoch, modulo 1_000_000_000. Every instance is usable without an
    /// explicit seed, at the cost of reproducibility; call
    /// [`Mersenne::with_seed`] or [`Mersenne::reseed`] for deterministic
    /// sequences.
    #[must_use]
    pub fn new() -> Self {
        let seed = clock_seed();
        debug!("mersenne self-seeded from clock: {}", seed);
        Self {
            gen: Mt19937::new(seed),
        }
    }

    /// Create an instance with an explicit scalar seed, bypassing the
    /// clock entirely.
    #[must_use]
    pub fn with_seed(seed: u32) -> Self {
        Self {
            gen: Mt19937::new(seed),
        }
    }

    /// Reseed from a scalar, discarding all prior generator state and any
    /// in-flight batch.
    pub fn reseed(&mut self, seed: u32) {
        debug!("mersenne reseeded with scalar {}", seed);
        self.gen.reseed(seed);
    }

    /// Reseed from a key of 32-bit words, discarding all prior generator
    /// state and any in-flight batch.
    ///
    /// # Errors
    ///
    /// Returns [`MersenneError::InvalidSeed`] if `key` is empty. The
    /// check runs before any mutation: after a rejected call the output
    /// sequence continues exactly as if the call had never happened.
    pub fn reseed_with_slice(&mut self, key: &[u32]) -> Result<(), MersenneError> {
        if key.is_empty() {
            return Err(MersenneError::InvalidSeed);
        }
        debug!("mersenne reseeded with {}-word key", key.len());
        self.gen.reseed_with_slice(key);
        Ok(())
    }

    /// Draw one integer from the legacy default range
    /// [0, [`DEFAULT_RAND_MAX`]).
    pub fn rand(&mut self) -> i64 {
        self.draw(0, DEFAULT_RAND_MAX)
    }

    /// Draw one integer from the half-open interval [`min`, `max`).
    ///
    /// One normalized word is consumed per successful call and mapped as
    /// `floor(v * (max - min) + min)`.
    ///
    /// # Errors
    ///
    /// Returns [`MersenneError::InvalidRange`] when `min >= max`. The
    /// bounds are validated before drawing, so a rejected call does not
    /// advance the generator.
    pub fn rand_range(&mut self, min: i64, max: i64) -> Result<i64, MersenneError> {
        if min >= max {
            return Err(MersenneError::InvalidRange { min, max });
        }
        Ok(self.draw(min, max))
    }

    /// Map one raw draw onto [`min`, `max`). Callers have validated
    /// `min < max`. Widths up to the full `i64` domain exceed what `i64`
    /// arithmetic can hold, so the span and offset are carried in `i128`.
    fn draw(&mut self, min: i64, max: i64) -> i64 {
        let lo = i128::from(min);
        let hi = i128::from(max);
        let span = (hi - lo) as f64;
        let offset = (self.gen.next_real2() * span).floor() as i128;
        // f64 rounding of spans near 2^64 can land exactly on the upper
        // bound; pin the result inside the half-open interval.
        (lo + offset).min(hi - 1) as i64
    }
}

impl Default for Mersenne {
    fn default() -> Self {
        Self::new()
    }
}

/// Wall-clock seed: milliseconds since the Unix epoch modulo one billion.
/// A clock before the epoch degrades to seed 0 rather than failing.
fn clock_seed() -> u32 {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    (millis % 1_000_000_000) as u32
}
