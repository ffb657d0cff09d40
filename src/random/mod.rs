//! Random number generation subsystem.
//!
//! Seeds a Mersenne Twister from wall-clock time, hostname and process id,
//! then serves uniform and gaussian draws from it.

pub mod entropy;
pub mod mersenne_twister;
pub mod rng;
pub mod seed_generator;
