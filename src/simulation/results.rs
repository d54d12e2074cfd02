// src/simulation/results.rs
use std::fmt;

/// Holds the outcome of one search run.
/// Contains the deterministically measured index and the full probability
/// distribution at the end of the run, for inspection.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Index of the maximum-probability basis state (ties broken by lowest index).
    result_index: usize,
    /// Probability of each basis index after the final iteration; sums to 1
    /// within floating-point tolerance.
    distribution: Vec<f64>,
    /// Number of `{oracle; diffusion}` rounds that were applied.
    iterations: u64,
}

impl SearchResult {
    /// Creates a new result. (Internal visibility)
    pub(crate) fn new(result_index: usize, distribution: Vec<f64>, iterations: u64) -> Self {
        Self {
            result_index,
            distribution,
            iterations,
        }
    }

    /// The measured index: the basis state with the highest probability,
    /// ties broken by lowest index.
    pub fn result_index(&self) -> usize {
        self.result_index
    }

    /// The full probability distribution after the run, length N.
    pub fn distribution(&self) -> &[f64] {
        &self.distribution
    }

    /// Probability of the measured index.
    pub fn result_probability(&self) -> f64 {
        self.distribution[self.result_index]
    }

    /// Number of Grover rounds the run applied (derived or caller-supplied).
    pub fn iterations(&self) -> u64 {
        self.iterations
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Search Result:")?;
        writeln!(f, "  Iterations applied: {}", self.iterations)?;
        writeln!(
            f,
            "  Most probable index: {} (probability {:.4})",
            self.result_index,
            self.result_probability()
        )
    }
}
