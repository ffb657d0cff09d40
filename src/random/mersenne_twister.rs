//! 32-bit Mersenne Twister PRNG (MT19937).
//!
//! Provides the large-period (2^19937 - 1) generator that backs [`Rng`],
//! together with the seed-mixing recurrence shared by the classic
//! single-word initialisation and by [`SeedGenerator`].
//!
//! [`Rng`]: crate::random::rng::Rng
//! [`SeedGenerator`]: crate::random::seed_generator::SeedGenerator

use rand_core::{impls, Error, RngCore};

use super::rng::SeedFromWords;

/// Number of 32-bit words in the generator state.
pub const STATE_WORDS: usize = 624;

/// Middle word offset used by the twist.
const SHIFT_SIZE: usize = 397;

/// Coefficients of the rational normal form twist matrix.
const MATRIX_A: u32 = 0x9908_B0DF;

/// Most significant bit of a state word.
const UPPER_MASK: u32 = 0x8000_0000;

/// Least significant 31 bits of a state word.
const LOWER_MASK: u32 = 0x7FFF_FFFF;

/// Multiplier of the seed-mixing recurrence.
const SEED_MULTIPLIER: u32 = 1_812_433_253;

/// Seed used when none is given.
pub const DEFAULT_SEED: u32 = 5489;

/// Mixes a raw scalar `x` at position `n` into a seed word.
///
/// Computes `(1812433253 * (x ^ (x >> 30)) + n) mod 2^32`. The shift is the
/// word size minus two; overflow wraps.
///
/// # Example
/// ```
/// use ambient_rng::random::mersenne_twister::seed_mix;
///
/// assert_eq!(seed_mix(0, 7), 7);
/// assert_eq!(seed_mix(1, 0), 1_812_433_253);
/// ```
#[inline]
pub fn seed_mix(x: u32, n: u32) -> u32 {
    SEED_MULTIPLIER.wrapping_mul(x ^ (x >> 30)).wrapping_add(n)
}

/// 32-bit Mersenne Twister PRNG with period 2^19937-1.
///
/// The output sequence is fully determined by the initial state. Seed it
/// with a single word via [`with_seed`](Self::with_seed), or with a full
/// 624-word state via [`SeedFromWords::from_seed_words`].
#[derive(Clone)]
pub struct Mt19937 {
    mt: [u32; STATE_WORDS],
    mti: usize,
}

impl Mt19937 {
    /// Creates a new PRNG from a single seed word.
    ///
    /// # Parameters
    /// - `seed`: The seed value for deterministic output.
    pub fn with_seed(seed: u32) -> Self {
        let mut mt = [0u32; STATE_WORDS];
        mt[0] = seed;
        for i in 1..STATE_WORDS {
            mt[i] = seed_mix(mt[i - 1], i as u32);
        }
        Mt19937 {
            mt,
            mti: STATE_WORDS,
        }
    }

    /// Creates a new PRNG whose state is the given words, in order.
    ///
    /// Missing trailing words are zero and extra words are ignored. A state
    /// with no significant bits set is replaced by one with only the top bit
    /// of the first word set, since the all-zero state never leaves zero.
    pub fn from_state_words(words: &[u32]) -> Self {
        let mut mt = [0u32; STATE_WORDS];
        let len = words.len().min(STATE_WORDS);
        mt[..len].copy_from_slice(&words[..len]);

        if mt[0] & UPPER_MASK == 0 && mt[1..].iter().all(|&w| w == 0) {
            mt[0] = UPPER_MASK;
        }

        Mt19937 {
            mt,
            mti: STATE_WORDS,
        }
    }

    /// Regenerates the whole state block.
    fn twist(&mut self) {
        let mag01: [u32; 2] = [0, MATRIX_A];

        for i in 0..(STATE_WORDS - SHIFT_SIZE) {
            let y = (self.mt[i] & UPPER_MASK) | (self.mt[i + 1] & LOWER_MASK);
            self.mt[i] = self.mt[i + SHIFT_SIZE] ^ (y >> 1) ^ mag01[(y & 1) as usize];
        }
        for i in (STATE_WORDS - SHIFT_SIZE)..(STATE_WORDS - 1) {
            let y = (self.mt[i] & UPPER_MASK) | (self.mt[i + 1] & LOWER_MASK);
            self.mt[i] =
                self.mt[i + SHIFT_SIZE - STATE_WORDS] ^ (y >> 1) ^ mag01[(y & 1) as usize];
        }
        let y = (self.mt[STATE_WORDS - 1] & UPPER_MASK) | (self.mt[0] & LOWER_MASK);
        self.mt[STATE_WORDS - 1] = self.mt[SHIFT_SIZE - 1] ^ (y >> 1) ^ mag01[(y & 1) as usize];

        self.mti = 0;
    }

    /// Generates the next 32-bit pseudorandom value.
    pub fn next_word(&mut self) -> u32 {
        if self.mti >= STATE_WORDS {
            self.twist();
        }

        let mut y = self.mt[self.mti];
        self.mti += 1;

        // Tempering
        y ^= y >> 11;
        y ^= (y << 7) & 0x9D2C_5680;
        y ^= (y << 15) & 0xEFC6_0000;
        y ^= y >> 18;

        y
    }
}

impl Default for Mt19937 {
    fn default() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }
}

impl std::fmt::Debug for Mt19937 {
    // The 624-word state is not useful in debug output.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mt19937").field("mti", &self.mti).finish()
    }
}

impl RngCore for Mt19937 {
    fn next_u32(&mut self) -> u32 {
        self.next_word()
    }

    fn next_u64(&mut self) -> u64 {
        let hi = self.next_word() as u64;
        let lo = self.next_word() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedFromWords for Mt19937 {
    const STATE_WORDS: usize = STATE_WORDS;

    fn from_seed_words(words: &[u32]) -> Self {
        Self::from_state_words(words)
    }
}
