//! Entropy collaborators for seed generation.
//!
//! [`SeedGenerator`](crate::random::seed_generator::SeedGenerator) reads the
//! environment only through these traits. The `System*` types query the
//! operating system; tests substitute deterministic fakes.

use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

/// Upper bound on hostname length, in bytes. Longer names are truncated.
pub const HOST_NAME_MAX: usize = 255;

/// A wall-clock reading split into whole seconds and microseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timestamp {
    /// Whole seconds since the Unix epoch.
    pub secs: u64,
    /// Sub-second component, in microseconds (`0..1_000_000`).
    pub micros: u32,
}

/// Source of the current time at microsecond resolution.
pub trait Clock {
    /// Returns the current wall-clock time.
    fn now(&self) -> Timestamp;
}

/// Source of the current hostname.
pub trait HostnameSource {
    /// Returns the raw hostname bytes.
    ///
    /// The returned bytes need not be NUL-terminated or bounded; callers
    /// cut them at the first NUL and at [`HOST_NAME_MAX`].
    ///
    /// # Errors
    /// Returns the underlying I/O error if the hostname cannot be read.
    fn hostname(&self) -> io::Result<Vec<u8>>;
}

/// Source of the current process identifier.
pub trait ProcessIdSource {
    /// Returns the current process id.
    fn process_id(&self) -> u32;
}

/// [`Clock`] backed by [`SystemTime`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        // A clock set before the epoch reads as zero.
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Timestamp {
            secs: elapsed.as_secs(),
            micros: elapsed.subsec_micros(),
        }
    }
}

/// [`HostnameSource`] backed by `gethostname(2)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHostname;

impl HostnameSource for SystemHostname {
    #[cfg(unix)]
    fn hostname(&self) -> io::Result<Vec<u8>> {
        let mut buf = [0u8; HOST_NAME_MAX + 2];

        // SAFETY: `buf` is valid for writes of `HOST_NAME_MAX + 1` bytes and
        // outlives the call.
        let rc = unsafe {
            libc::gethostname(buf.as_mut_ptr() as *mut libc::c_char, HOST_NAME_MAX + 1)
        };
        if rc < 0 {
            return Err(io::Error::last_os_error());
        }

        // gethostname does not promise termination on truncation
        buf[HOST_NAME_MAX + 1] = 0;
        let len = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
        Ok(buf[..len].to_vec())
    }

    #[cfg(not(unix))]
    fn hostname(&self) -> io::Result<Vec<u8>> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "hostname lookup is only available on unix targets",
        ))
    }
}

/// [`ProcessIdSource`] backed by [`std::process::id`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessId;

impl ProcessIdSource for SystemProcessId {
    fn process_id(&self) -> u32 {
        std::process::id()
    }
}
