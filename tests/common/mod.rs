//! Deterministic entropy fakes shared by the integration tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;
use std::io;

use ambient_rng::random::entropy::{Clock, HostnameSource, ProcessIdSource, Timestamp};
use ambient_rng::SeedGenerator;

/// Clock frozen at one instant.
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}

/// Hostname that always reads back the same bytes.
pub struct FixedHost(pub Vec<u8>);

impl HostnameSource for FixedHost {
    fn hostname(&self) -> io::Result<Vec<u8>> {
        Ok(self.0.clone())
    }
}

/// Hostname lookup that always fails, counting attempts.
#[derive(Default)]
pub struct FailingHost {
    pub calls: Rc<Cell<usize>>,
}

impl HostnameSource for FailingHost {
    fn hostname(&self) -> io::Result<Vec<u8>> {
        self.calls.set(self.calls.get() + 1);
        Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "gethostname refused",
        ))
    }
}

/// Process id fixed at construction.
pub struct FixedPid(pub u32);

impl ProcessIdSource for FixedPid {
    fn process_id(&self) -> u32 {
        self.0
    }
}

pub const NOW: Timestamp = Timestamp {
    secs: 1_760_000_000,
    micros: 654_321,
};

pub type FixedSeeds = SeedGenerator<FixedClock, FixedHost, FixedPid>;

/// Seed generator with every entropy input pinned.
pub fn fixed_seeds(host: &str, pid: u32) -> FixedSeeds {
    SeedGenerator::with_sources(
        FixedClock(NOW),
        FixedHost(host.as_bytes().to_vec()),
        FixedPid(pid),
    )
}
