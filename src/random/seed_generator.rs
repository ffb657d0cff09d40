//! Seed-word generator driven by time, hostname and process id.
//!
//! Expands a handful of weakly varying environment scalars into an
//! arbitrarily long sequence of 32-bit seed words. Each output cycles
//! through the scalars and passes the chosen one through [`seed_mix`], so
//! concurrent processes on one host, and processes on different hosts,
//! start from different generator states.
//!
//! For output index `n` the scalar is picked by `n % (hostname_len + 3)`:
//!
//! | remainder | scalar                                  |
//! |-----------|-----------------------------------------|
//! | 0         | microseconds of the current time        |
//! | 1         | whole seconds of the current time       |
//! | 2         | process id                              |
//! | r >= 3    | hostname byte `r - 3`, times 41399      |

use log::{debug, warn};

use super::entropy::{
    Clock, HostnameSource, ProcessIdSource, SystemClock, SystemHostname, SystemProcessId,
    Timestamp, HOST_NAME_MAX,
};
use super::mersenne_twister::seed_mix;
use crate::error::RngError;

/// Odd multiplier applied to hostname bytes before mixing.
pub const HOSTNAME_BYTE_MULTIPLIER: u32 = 41399;

/// Number of non-hostname scalars in each cycle (usec, sec, pid).
const FIXED_SCALARS: usize = 3;

/// Generates seed words from the environment.
///
/// The generator itself holds no state between calls: every call to
/// [`fill`](Self::fill) or [`generate`](Self::generate) takes a fresh
/// reading of the clock, hostname and process id.
#[derive(Debug, Clone, Default)]
pub struct SeedGenerator<C = SystemClock, H = SystemHostname, P = SystemProcessId> {
    clock: C,
    hostname: H,
    pid: P,
}

impl SeedGenerator {
    /// Creates a generator that reads the real clock, hostname and pid.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C, H, P> SeedGenerator<C, H, P>
where
    C: Clock,
    H: HostnameSource,
    P: ProcessIdSource,
{
    /// Creates a generator with injected entropy sources.
    ///
    /// # Parameters
    /// - `clock`: Source of the current time.
    /// - `hostname`: Source of the hostname bytes.
    /// - `pid`: Source of the process id.
    pub fn with_sources(clock: C, hostname: H, pid: P) -> Self {
        SeedGenerator {
            clock,
            hostname,
            pid,
        }
    }

    /// Generates `count` seed words.
    ///
    /// # Errors
    /// Returns [`RngError::EnvironmentQueryFailure`] if the hostname cannot
    /// be read.
    pub fn generate(&self, count: usize) -> Result<Vec<u32>, RngError> {
        let mut words = vec![0u32; count];
        self.fill(&mut words)?;
        Ok(words)
    }

    /// Fills `dest` with seed words, index 0 first.
    ///
    /// # Errors
    /// Returns [`RngError::EnvironmentQueryFailure`] if the hostname cannot
    /// be read. `dest` is left untouched in that case.
    pub fn fill(&self, dest: &mut [u32]) -> Result<(), RngError> {
        let pid = self.pid.process_id();
        let now = self.clock.now();
        let host = self.read_hostname()?;

        debug!(
            "generating {} seed words (hostname_len={}, pid={})",
            dest.len(),
            host.len(),
            pid
        );

        for (n, word) in dest.iter_mut().enumerate() {
            let x = select_scalar(n, &now, pid, &host);
            *word = seed_mix(x, n as u32);
        }
        Ok(())
    }

    /// Reads the hostname, cut at the first NUL and at [`HOST_NAME_MAX`].
    fn read_hostname(&self) -> Result<Vec<u8>, RngError> {
        let mut host = self.hostname.hostname().map_err(|e| {
            warn!("hostname lookup failed while seeding: {}", e);
            RngError::from(e)
        })?;

        host.truncate(HOST_NAME_MAX);
        if let Some(end) = host.iter().position(|&b| b == 0) {
            host.truncate(end);
        }
        Ok(host)
    }
}

/// Picks the raw scalar for output index `n`.
fn select_scalar(n: usize, now: &Timestamp, pid: u32, host: &[u8]) -> u32 {
    match n % (host.len() + FIXED_SCALARS) {
        0 => now.micros,
        // Seconds are deliberately truncated to the low 32 bits
        1 => now.secs as u32,
        2 => pid,
        m => (host[m - FIXED_SCALARS] as u32).wrapping_mul(HOSTNAME_BYTE_MULTIPLIER),
    }
}
