// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod error;
pub mod state;

// Re-export public types for convenient access via `groversim::core::TypeName`
pub use error::GroverError;
pub use state::AmplitudeVector;

pub mod constants;
pub use constants::search_constants::{DEFAULT_MAX_QUBITS, NORM_TOLERANCE, PI}; // Re-export
