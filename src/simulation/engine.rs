// src/simulation/engine.rs
use crate::core::{AmplitudeVector, GroverError};
use crate::operators;
use crate::oracle::Oracle;
// Deterministic sampling uses a state-seeded PRNG
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// The core engine that owns and evolves the amplitude vector.
/// (Internal visibility)
pub(crate) struct SearchEngine {
    /// The dense state vector over all 2^n basis indices. Each instance owns
    /// its vector exclusively; parallel searches need independent engines.
    state: AmplitudeVector,
    /// Number of qubits being simulated (n).
    num_qubits: u32,
    /// Search-space size N = 2^n.
    dim: usize,
}

impl SearchEngine {
    /// Initializes the engine for a given qubit count, starting in the
    /// uniform superposition (every amplitude `1/sqrt(N)`).
    ///
    /// Rejects `num_qubits` of zero and any count whose 2^n vector length
    /// exceeds `max_qubits` or overflows `usize`, rather than allocating
    /// unbounded memory.
    pub(crate) fn init(num_qubits: u32, max_qubits: u32) -> Result<Self, GroverError> {
        if num_qubits < 1 {
            return Err(GroverError::InvalidConfiguration {
                message: "Qubit count must be a positive integer".to_string(),
            });
        }
        if num_qubits > max_qubits {
            return Err(GroverError::InvalidConfiguration {
                message: format!(
                    "Qubit count {} exceeds the configured maximum of {} (search space is 2^n)",
                    num_qubits, max_qubits
                ),
            });
        }

        // Dimension of the state vector (2^n), guarded against usize overflow.
        let dim = 1usize
            .checked_shl(num_qubits)
            .ok_or_else(|| GroverError::InvalidConfiguration {
                message: format!(
                    "Qubit count {} overflows the state vector index type",
                    num_qubits
                ),
            })?;

        Ok(Self {
            state: AmplitudeVector::uniform(dim),
            num_qubits,
            dim,
        })
    }

    /// Resets the state to the uniform superposition, discarding any prior
    /// iteration progress.
    pub(crate) fn reset(&mut self) {
        self.state = AmplitudeVector::uniform(self.dim);
    }

    /// Applies one Grover round: oracle sign-flip, then diffusion.
    pub(crate) fn iterate<O: Oracle>(&mut self, oracle: &O) {
        operators::apply_oracle(&mut self.state, oracle);
        operators::apply_diffusion(&mut self.state);
    }

    /// Evaluates the oracle over the full index range, returning the marked
    /// count M. Doubles as the construction-time check that the oracle is
    /// evaluable for every index.
    pub(crate) fn count_marked<O: Oracle>(&self, oracle: &O) -> usize {
        (0..self.dim).filter(|&i| oracle.is_marked(i)).count()
    }

    /// Deterministic measurement: the index of the maximum-probability
    /// entry, ties broken by lowest index. Exposes the exact amplitudes
    /// rather than performing a physical stochastic measurement.
    pub(crate) fn most_likely_index(&self) -> usize {
        let mut best_index = 0;
        let mut best_prob = f64::MIN;
        for (i, amp) in self.state.vector().iter().enumerate() {
            let prob = amp * amp;
            // Strict comparison keeps the lowest index on ties.
            if prob > best_prob {
                best_prob = prob;
                best_index = i;
            }
        }
        best_index
    }

    /// Pseudo-stochastic measurement: samples an index from the current
    /// probability distribution.
    ///
    /// The draw is reproducible: the PRNG is seeded from a hash of the
    /// amplitude bytes, so identical states always sample the same index.
    pub(crate) fn sample_outcome(&self) -> usize {
        let amplitudes = self.state.vector();

        // Deterministic seeding from the state itself.
        let seed = {
            let mut hasher = DefaultHasher::new();
            for amp in amplitudes {
                amp.to_ne_bytes().hash(&mut hasher);
            }
            hasher.finish()
        };
        let mut rng = StdRng::seed_from_u64(seed);

        // Walk the cumulative distribution. Total probability is 1 within
        // tolerance; sampling against the actual total absorbs fp drift.
        let total: f64 = amplitudes.iter().map(|a| a * a).sum();
        let p_sample: f64 = rng.random::<f64>() * total;
        let mut cumulative = 0.0;
        for (i, amp) in amplitudes.iter().enumerate() {
            cumulative += amp * amp;
            if p_sample < cumulative {
                return i;
            }
        }
        // Fallback for the case where p_sample lands exactly on the total.
        self.dim - 1
    }

    /// Read-only access to the evolving state.
    pub(crate) fn state(&self) -> &AmplitudeVector {
        &self.state
    }

    /// Number of qubits (n).
    pub(crate) fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Search-space size (N = 2^n).
    pub(crate) fn dim(&self) -> usize {
        self.dim
    }

    // Crate-visible method to set the state directly for testing.
    #[cfg(test)] // Only compile this function when running tests
    pub(crate) fn set_state(&mut self, state: AmplitudeVector) -> Result<(), GroverError> {
        if state.dim() != self.dim {
            Err(GroverError::InvalidConfiguration {
                message: format!(
                    "Cannot set state: provided dimension {} does not match engine dimension {}",
                    state.dim(),
                    self.dim
                ),
            })
        } else {
            self.state = state;
            Ok(())
        }
    }
}
