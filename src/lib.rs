//! Environment-seeded pseudo-random streams.
//!
//! `ambient-rng` builds a 32-bit Mersenne Twister whose full 624-word state
//! is derived from the wall-clock time (microsecond resolution), the
//! hostname and the process id, then discards the first million outputs.
//! Processes started at the same moment on one host, or on different hosts,
//! get different streams without any coordination. The streams are not
//! cryptographically secure and are not reproducible across runs.
//!
//! # Architecture
//!
//! ```text
//! Clock / HostnameSource / ProcessIdSource   (injected entropy)
//!     ↓
//! SeedGenerator   (cyclic scalar selection + seed-mixing recurrence)
//!     ↓ 624 words
//! Mt19937         (seeded state, warmed up)
//!     ↓
//! Rng             (uniform / gaussian views over one stream)
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use ambient_rng::Rng;
//!
//! let mut rng = Rng::new()?;
//! let u = rng.uniform(0.0, 10.0);
//! let z = rng.gaussian();
//! println!("{} {}", u, z);
//! # Ok::<(), ambient_rng::error::RngError>(())
//! ```
//!
//! Seed from fixed sources, for example in tests:
//!
//! ```
//! use std::io;
//! use ambient_rng::random::entropy::{Clock, HostnameSource, ProcessIdSource, Timestamp};
//! use ambient_rng::{Rng, RngConfig, SeedGenerator};
//!
//! struct Epoch;
//! impl Clock for Epoch {
//!     fn now(&self) -> Timestamp { Timestamp::default() }
//! }
//! struct Host;
//! impl HostnameSource for Host {
//!     fn hostname(&self) -> io::Result<Vec<u8>> { Ok(b"node".to_vec()) }
//! }
//! struct Pid;
//! impl ProcessIdSource for Pid {
//!     fn process_id(&self) -> u32 { 1 }
//! }
//!
//! let seeds = SeedGenerator::with_sources(Epoch, Host, Pid);
//! let config = RngConfig { warmup_iterations: 1_000 };
//! let mut rng: Rng = Rng::with_config(&seeds, config).unwrap();
//! let x = rng.uniform(1.0, 2.0);
//! assert!((1.0..=2.0).contains(&x));
//! ```

#![deny(clippy::all)]

pub mod error;
pub mod random;

pub use error::RngError;
pub use random::mersenne_twister::Mt19937;
pub use random::rng::{Rng, RngConfig, SeedFromWords, WARMUP_ITERATIONS};
pub use random::seed_generator::SeedGenerator;
