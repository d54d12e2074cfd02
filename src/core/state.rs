// src/core/state.rs

use std::fmt;

/// Owned vector of real-valued amplitudes, one per basis-state index `0..N-1`.
///
/// The evolution simulated here stays entirely in the real subspace: the
/// oracle only introduces sign flips and the diffusion reflection is real, so
/// `f64` components are sufficient and no complex arithmetic is involved.
/// The squares of the amplitudes form the measurement probability
/// distribution and must sum to 1 within floating-point tolerance at every
/// observable point.
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point amplitudes
pub struct AmplitudeVector {
    /// The amplitudes, indexed by basis state.
    amplitudes: Vec<f64>,
}

impl AmplitudeVector {
    /// Creates a state from a given amplitude vector.
    /// The caller is responsible for normalization; validation happens
    /// through `validation::check_normalization` where needed.
    #[allow(dead_code)]
    pub(crate) fn new(amplitudes: Vec<f64>) -> Self {
        Self { amplitudes }
    }

    /// Creates the uniform superposition over `dim` basis states: every
    /// amplitude is `1/sqrt(dim)`. This is the unique starting state of a
    /// search run.
    pub fn uniform(dim: usize) -> Self {
        let amplitude = 1.0 / (dim as f64).sqrt();
        Self { amplitudes: vec![amplitude; dim] }
    }

    /// Provides read-only access to the amplitudes.
    pub fn vector(&self) -> &[f64] {
        &self.amplitudes
    }

    /// Provides mutable access for the operators to modify the state.
    pub(crate) fn vector_mut(&mut self) -> &mut [f64] {
        &mut self.amplitudes
    }

    /// Gets the dimension N of the search space this state spans.
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Derived read-only view: probability of observing each basis index,
    /// `amplitude[i]^2`. Sums to 1 within tolerance for a normalized state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a * a).collect()
    }
}

impl fmt::Display for AmplitudeVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Amplitudes[")?;
        for (i, a) in self.amplitudes.iter().enumerate() {
            write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, a)?;
        }
        write!(f, "]")
    }
}
