//! Error handling logic

use std::fmt;

/// Error types for the search simulator.
///
/// Every failure in this crate is a caller precondition violation surfaced
/// synchronously at the offending call; the computation itself is pure and
/// deterministic, so there is no transient/recoverable category and no retry
/// policy (a retry would reproduce the same error).
#[derive(Debug, Clone, PartialEq, Eq)] // Eq useful for testing error variants
pub enum GroverError {
    /// Construction rejected: qubit count below 1, or a search-space size
    /// that exceeds the configured maximum (or overflows the index type).
    InvalidConfiguration {
        /// InvalidConfiguration failure message
        message: String,
    },

    /// A caller-supplied iteration count is negative.
    InvalidIterationCount {
        /// InvalidIterationCount failure message
        message: String,
    },
}

impl fmt::Display for GroverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroverError::InvalidConfiguration { message } => {
                write!(f, "Invalid Configuration: {}", message)
            }
            GroverError::InvalidIterationCount { message } => {
                write!(f, "Invalid Iteration Count: {}", message)
            }
        }
    }
}

// Implement the standard Error trait to allow for easy integration with Rust error handling.
impl std::error::Error for GroverError {}
