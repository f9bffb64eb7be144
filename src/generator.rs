// Author: Lukas Bower
// Purpose: Implement the MT19937 bit generator state, seeding, and output tempering.

//! MT19937 bit generator.
//!
//! Owns the 624-word state array and produces the raw 32-bit word stream.
//! Seeding and output match the Matsumoto/Nishimura reference
//! implementation (`mt19937ar`) bit for bit; the published test vectors
//! for scalar seed `5489` and the reference array seed are checked in
//! `tests/determinism.rs`.

/// Number of 32-bit words in the generator state.
const N: usize = 624;
/// Middle word offset used by the twist recurrence.
const M: usize = 397;
/// Constant vector a.
const MATRIX_A: u32 = 0x9908_b0df;
/// Most significant w-r bits.
const UPPER_MASK: u32 = 0x8000_0000;
/// Least significant r bits.
const LOWER_MASK: u32 = 0x7fff_ffff;

/// The MT19937 generator state: 624 words plus a cursor into the current
/// batch. `mti == N` marks the batch as exhausted; the next draw runs the
/// twist and regenerates all 624 words in place.
///
/// There is no unseeded state: every constructor fully overwrites `mt`.
#[derive(Clone)]
pub struct Mt19937 {
    mt: [u32; N],
    mti: usize,
}

impl Mt19937 {
    /// Create a generator seeded from a single scalar.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        let mut gen = Self {
            mt: [0; N],
            mti: N,
        };
        gen.reseed(seed);
        gen
    }

    /// Create a generator seeded from a key of 32-bit words.
    ///
    /// # Panics
    ///
    /// Panics if `key` is empty. Callers going through
    /// [`Mersenne`](crate::Mersenne) never hit this: the wrapper rejects
    /// empty keys before reaching the generator.
    #[must_use]
    pub fn from_slice(key: &[u32]) -> Self {
        let mut gen = Self {
            mt: [0; N],
            mti: N,
        };
        gen.reseed_with_slice(key);
        gen
    }

    /// Reset the state deterministically from a scalar seed
    /// (`init_genrand` in the reference implementation).
    ///
    /// Discards all prior state, including any in-flight batch.
    pub fn reseed(&mut self, seed: u32) {
        self.mt[0] = seed;
        for i in 1..N {
            let prev = self.mt[i - 1];
            self.mt[i] = 1_812_433_253u32
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        self.mti = N;
    }

    /// Reset the state from a key of 32-bit words (`init_by_array` in the
    /// reference implementation). The key is cycled with wraparound across
    /// two mixing passes, so keys longer than 624 words still contribute
    /// every element.
    ///
    /// # Panics
    ///
    /// Panics if `key` is empty; see [`Mt19937::from_slice`].
    pub fn reseed_with_slice(&mut self, key: &[u32]) {
        self.reseed(19_650_218);
        let mut i = 1usize;
        let mut j = 0usize;
        let mut k = N.max(key.len());
        while k > 0 {
            let prev = self.mt[i - 1];
            self.mt[i] = (self.mt[i] ^ (prev ^ (prev >> 30)).wrapping_mul(1_664_525))
                .wrapping_add(key[j])
                .wrapping_add(j as u32);
            i += 1;
            j += 1;
            if i >= N {
                self.mt[0] = self.mt[N - 1];
                i = 1;
            }
            if j >= key.len() {
                j = 0;
            }
            k -= 1;
        }
        k = N - 1;
        while k > 0 {
            let prev = self.mt[i - 1];
            self.mt[i] = (self.mt[i] ^ (prev ^ (prev >> 30)).wrapping_mul(1_566_083_941))
                .wrapping_sub(i as u32);
            i += 1;
            if i >= N {
                self.mt[0] = self.mt[N - 1];
                i = 1;
            }
            k -= 1;
        }
        // Guarantees a non-zero state word regardless of key contents.
        self.mt[0] = 0x8000_0000;
    }

    /// Regenerate the full 624-word batch from the current state.
    fn twist(&mut self) {
        for i in 0..N {
            let y = (self.mt[i] & UPPER_MASK) | (self.mt[(i + 1) % N] & LOWER_MASK);
            let mut mag = y >> 1;
            if y & 1 != 0 {
                mag ^= MATRIX_A;
            }
            self.mt[i] = self.mt[(i + M) % N] ^ mag;
        }
        self.mti = 0;
    }

    /// Return the next tempered 32-bit word.
    pub fn next_u32(&mut self) -> u32 {
        if self.mti >= N {
            self.twist();
        }
        let mut y = self.mt[self.mti];
        self.mti += 1;
        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^= y >> 18;
        y
    }

    /// Return the next non-negative 31-bit integer (`genrand_int31`).
    pub fn next_int31(&mut self) -> i32 {
        (self.next_u32() >> 1) as i32
    }

    /// Return the next real in the closed interval [0, 1] (`genrand_real1`).
    pub fn next_real1(&mut self) -> f64 {
        // Divided by 2^32 - 1.
        f64::from(self.next_u32()) * (1.0 / 4_294_967_295.0)
    }

    /// Return the next real in the half-open interval [0, 1)
    /// (`genrand_real2`). This is the draw that feeds range mapping.
    pub fn next_real2(&mut self) -> f64 {
        // Divided by 2^32.
        f64::from(self.next_u32()) * (1.0 / 4_294_967_296.0)
    }

    /// Return the next real in the open interval (0, 1) (`genrand_real3`).
    pub fn next_real3(&mut self) -> f64 {
        (f64::from(self.next_u32()) + 0.5) * (1.0 / 4_294_967_296.0)
    }

    /// Return a real in [0, 1) with 53-bit resolution (`genrand_res53`),
    /// built from two raw draws.
    pub fn next_res53(&mut self) -> f64 {
        let a = f64::from(self.next_u32() >> 5);
        let b = f64::from(self.next_u32() >> 6);
        (a * 67_108_864.0 + b) * (1.0 / 9_007_199_254_740_992.0)
    }
}

impl core::fmt::Debug for Mt19937 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // The full state array is noise in logs; report the cursor only.
        f.debug_struct("Mt19937").field("mti", &self.mti).finish()
    }
}
