// Author: Lukas Bower
// Purpose: Export the deterministic MT19937 core consumed by the data generation layer.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Deterministic pseudorandom core for seeded fake-data generation.
//!
//! Two strictly layered components: [`Mt19937`], the bit generator
//! holding the 624-word state, and [`Mersenne`], the wrapper that seeds
//! it (from the wall clock by default), reseeds it on demand, and maps
//! raw draws onto integers in a caller-chosen half-open range.
//!
//! The generator reproduces the Matsumoto/Nishimura reference output bit
//! for bit, so sequences are stable across platforms and releases for a
//! given seed. It is not suitable for security-sensitive randomness.
//!
//! Instances are exclusively owned mutable state: share one across
//! threads only behind external mutual exclusion, or give each thread
//! its own.
//!
//! ```
//! use mersenne_core::Mersenne;
//!
//! let mut rng = Mersenne::with_seed(42);
//! let die = rng.rand_range(1, 7)?;
//! assert!((1..7).contains(&die));
//! # Ok::<(), mersenne_core::MersenneError>(())
//! ```

mod generator;
mod mersenne;

pub use generator::Mt19937;
pub use mersenne::{Mersenne, MersenneError, DEFAULT_RAND_MAX};
