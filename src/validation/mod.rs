// src/validation/mod.rs

//! Provides functions to validate `AmplitudeVector` invariants.

use crate::core::constants::search_constants::NORM_TOLERANCE;
use crate::core::{AmplitudeVector, GroverError};

/// Checks that the state vector is normalized (sum of squared amplitudes ≈ 1).
///
/// Both operators preserve this invariant (the oracle exactly, the
/// diffusion up to floating-point rounding), so a failure indicates either
/// a hand-built state or accumulated drift beyond the tolerance.
///
/// # Arguments
/// * `state` - The `AmplitudeVector` to check.
/// * `tolerance` - Allowed deviation from 1.0. Defaults to 1e-9.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(GroverError::InvalidConfiguration)` if normalization fails.
pub fn check_normalization(
    state: &AmplitudeVector,
    tolerance: Option<f64>,
) -> Result<(), GroverError> {
    let effective_tolerance = tolerance.unwrap_or(NORM_TOLERANCE);
    let norm_sq: f64 = state.vector().iter().map(|a| a * a).sum();
    if (norm_sq - 1.0).abs() > effective_tolerance {
        Err(GroverError::InvalidConfiguration {
            message: format!(
                "State vector normalization failed. Sum(a_i^2) = {} (Deviation > {})",
                norm_sq, effective_tolerance
            ),
        })
    } else {
        Ok(())
    }
}

/// Checks that a probability distribution sums to 1 within tolerance and
/// contains no negative entries.
///
/// # Arguments
/// * `distribution` - Probabilities per basis index, as returned by
///   `AmplitudeVector::probabilities` or `SearchResult::distribution`.
/// * `tolerance` - Allowed deviation from 1.0. Defaults to 1e-9.
pub fn check_distribution(
    distribution: &[f64],
    tolerance: Option<f64>,
) -> Result<(), GroverError> {
    let effective_tolerance = tolerance.unwrap_or(NORM_TOLERANCE);
    if let Some(p) = distribution.iter().find(|p| **p < 0.0) {
        return Err(GroverError::InvalidConfiguration {
            message: format!("Probability distribution contains a negative entry: {}", p),
        });
    }
    let total: f64 = distribution.iter().sum();
    if (total - 1.0).abs() > effective_tolerance {
        Err(GroverError::InvalidConfiguration {
            message: format!(
                "Probability distribution does not sum to 1. Total = {} (Deviation > {})",
                total, effective_tolerance
            ),
        })
    } else {
        Ok(())
    }
}
