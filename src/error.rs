//! Error types for the ambient-rng library.

use std::io;

use thiserror::Error;

/// Errors produced while seeding a random stream.
#[derive(Debug, Error)]
pub enum RngError {
    /// The hostname could not be read, so no seed could be built.
    #[error("failed to read hostname for seeding: {source}")]
    EnvironmentQueryFailure {
        /// The underlying OS error.
        #[from]
        source: io::Error,
    },
}
