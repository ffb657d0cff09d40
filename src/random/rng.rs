//! Environment-seeded random stream with uniform and gaussian sampling.
//!
//! An [`Rng`] owns one generator. Construction seeds the full generator
//! state from a [`SeedGenerator`] and then discards
//! [`WARMUP_ITERATIONS`] outputs, which costs on the order of ten
//! milliseconds. Build one `Rng` per process or per worker and keep it;
//! never build one per sample.
//!
//! Uniform and gaussian draws are two views over the same evolving
//! stream, not independent streams.

use log::debug;
use rand::distributions::{Distribution, Standard};
use rand_core::{Error, RngCore};
use rand_distr::StandardNormal;

use super::entropy::{Clock, HostnameSource, ProcessIdSource};
use super::mersenne_twister::Mt19937;
use super::seed_generator::SeedGenerator;
use crate::error::RngError;

/// Number of generator outputs discarded after seeding.
///
/// Trades construction latency for washing out structure left by a weak
/// seed.
pub const WARMUP_ITERATIONS: usize = 1_000_000;

/// A generator that is seeded by supplying its whole state as 32-bit words.
pub trait SeedFromWords: RngCore + Sized {
    /// Number of seed words consumed, one per state slot.
    const STATE_WORDS: usize;

    /// Builds the generator from exactly [`Self::STATE_WORDS`] words,
    /// consumed in order.
    fn from_seed_words(words: &[u32]) -> Self;
}

/// Construction parameters for [`Rng`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RngConfig {
    /// Generator outputs discarded before the first sample.
    pub warmup_iterations: usize,
}

impl Default for RngConfig {
    fn default() -> Self {
        RngConfig {
            warmup_iterations: WARMUP_ITERATIONS,
        }
    }
}

/// Seeded and warmed-up random stream.
///
/// There is no re-seed operation; construct a new `Rng` to get a new
/// stream. Sampling needs `&mut self`, so sharing one instance across
/// threads requires external locking.
///
/// # Example
/// ```no_run
/// use ambient_rng::Rng;
///
/// let mut rng = Rng::new()?;
/// let x = rng.uniform(-1.0, 1.0);
/// assert!((-1.0..=1.0).contains(&x));
/// let z = rng.gaussian();
/// # let _ = z;
/// # Ok::<(), ambient_rng::error::RngError>(())
/// ```
#[derive(Debug)]
pub struct Rng<G = Mt19937> {
    generator: G,
}

impl Rng<Mt19937> {
    /// Creates a Mersenne Twister stream seeded from the real environment.
    ///
    /// # Errors
    /// Returns [`RngError::EnvironmentQueryFailure`] if the hostname cannot
    /// be read.
    pub fn new() -> Result<Self, RngError> {
        Self::from_seed_generator(&SeedGenerator::new())
    }
}

impl<G: SeedFromWords> Rng<G> {
    /// Creates a stream seeded from `seeds` with the default warm-up.
    ///
    /// # Errors
    /// Returns [`RngError::EnvironmentQueryFailure`] if the hostname cannot
    /// be read.
    pub fn from_seed_generator<C, H, P>(seeds: &SeedGenerator<C, H, P>) -> Result<Self, RngError>
    where
        C: Clock,
        H: HostnameSource,
        P: ProcessIdSource,
    {
        Self::with_config(seeds, RngConfig::default())
    }

    /// Creates a stream seeded from `seeds` using `config`.
    ///
    /// # Errors
    /// Returns [`RngError::EnvironmentQueryFailure`] if the hostname cannot
    /// be read. No generator is built in that case.
    pub fn with_config<C, H, P>(
        seeds: &SeedGenerator<C, H, P>,
        config: RngConfig,
    ) -> Result<Self, RngError>
    where
        C: Clock,
        H: HostnameSource,
        P: ProcessIdSource,
    {
        let words = seeds.generate(G::STATE_WORDS)?;
        let mut generator = G::from_seed_words(&words);
        debug!("seeded generator with {} words", words.len());

        for _ in 0..config.warmup_iterations {
            generator.next_u32();
        }
        debug!(
            "discarded {} outputs after seeding",
            config.warmup_iterations
        );

        Ok(Rng { generator })
    }

    /// Returns a draw from `lo + (hi - lo) * u`, where `u` is uniform in
    /// `[0, 1)`.
    ///
    /// No validation is done: `lo > hi` samples the reversed interval.
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * canonical(&mut self.generator)
    }

    /// Returns a draw from the standard normal distribution.
    pub fn gaussian(&mut self) -> f64 {
        standard_normal(&mut self.generator)
    }

    /// Returns the underlying generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }
}

/// Canonical uniform draw in `[0, 1)` with 53 bits of precision.
fn canonical<R: RngCore>(generator: &mut R) -> f64 {
    Standard.sample(generator)
}

/// Ziggurat standard normal draw.
fn standard_normal<R: RngCore>(generator: &mut R) -> f64 {
    StandardNormal.sample(generator)
}

impl<G: RngCore> RngCore for Rng<G> {
    fn next_u32(&mut self) -> u32 {
        self.generator.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.generator.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.generator.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.generator.try_fill_bytes(dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::entropy::Timestamp;
    use crate::random::mersenne_twister::STATE_WORDS;
    use std::io;

    struct FixedClock;

    impl Clock for FixedClock {
        fn now(&self) -> Timestamp {
            Timestamp {
                secs: 1_000,
                micros: 42,
            }
        }
    }

    struct FixedHost;

    impl HostnameSource for FixedHost {
        fn hostname(&self) -> io::Result<Vec<u8>> {
            Ok(b"node01".to_vec())
        }
    }

    struct FixedPid(u32);

    impl ProcessIdSource for FixedPid {
        fn process_id(&self) -> u32 {
            self.0
        }
    }

    fn seeds(pid: u32) -> SeedGenerator<FixedClock, FixedHost, FixedPid> {
        SeedGenerator::with_sources(FixedClock, FixedHost, FixedPid(pid))
    }

    #[test]
    fn test_default_config_uses_warmup_constant() {
        assert_eq!(RngConfig::default().warmup_iterations, 1_000_000);
    }

    #[test]
    fn test_construction_matches_manual_seed_and_warmup() {
        let config = RngConfig {
            warmup_iterations: 5_000,
        };
        let mut rng: Rng = Rng::with_config(&seeds(3), config).unwrap();

        let words = seeds(3).generate(STATE_WORDS).unwrap();
        let mut manual = Mt19937::from_state_words(&words);
        for _ in 0..5_000 {
            manual.next_word();
        }

        for _ in 0..100 {
            assert_eq!(rng.next_u32(), manual.next_word());
        }
    }

    #[test]
    fn test_uniform_reversed_interval() {
        let config = RngConfig {
            warmup_iterations: 0,
        };
        let mut rng: Rng = Rng::with_config(&seeds(3), config).unwrap();
        for _ in 0..1000 {
            let v = rng.uniform(5.0, 2.0);
            assert!(v > 2.0 && v <= 5.0, "reversed uniform out of range: {}", v);
        }
    }

    #[test]
    fn test_uniform_degenerate_interval() {
        let config = RngConfig {
            warmup_iterations: 0,
        };
        let mut rng: Rng = Rng::with_config(&seeds(3), config).unwrap();
        assert_eq!(rng.uniform(7.5, 7.5), 7.5);
    }

    #[test]
    fn test_uniform_and_gaussian_share_one_stream() {
        let config = RngConfig {
            warmup_iterations: 10,
        };
        let mut mixed: Rng = Rng::with_config(&seeds(3), config).unwrap();
        let mut plain: Rng = Rng::with_config(&seeds(3), config).unwrap();

        mixed.gaussian();
        let after_gaussian = mixed.uniform(0.0, 1.0);
        let first = plain.uniform(0.0, 1.0);
        assert_ne!(after_gaussian, first);
    }
}
