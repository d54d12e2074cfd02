// src/simulation/mod.rs

//! Runs Grover's search over a dense state vector.
//! This module contains the `SearchSimulator` entry point and the internal
//! `SearchEngine` responsible for owning and evolving the amplitude vector.

// Make engine module crate visible for tests
mod results;
pub(crate) mod engine;

// Re-export the main public interface types
pub use results::SearchResult;

// Import necessary types for the SearchSimulator struct and its methods
use crate::core::constants::search_constants::{DEFAULT_MAX_QUBITS, PI};
use crate::core::{AmplitudeVector, GroverError};
use crate::oracle::Oracle;
use engine::SearchEngine;

/// Number of `{oracle; diffusion}` rounds to apply in a run.
///
/// Modeled as an explicit sum type rather than an implicit default baked
/// into control flow, so callers can assert on both branches independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterationCount {
    /// Derive the count as `floor(π/4 · sqrt(N / M))`, where M is the
    /// number of marked items. M = 0 is treated as M = 1 so the derivation
    /// never divides by zero; with nothing marked, no index is meaningfully
    /// "found".
    Optimal,
    /// Apply exactly this many rounds. Zero is legal (the run returns the
    /// initial uniform distribution unchanged); a negative count is rejected
    /// with `GroverError::InvalidIterationCount`.
    Exact(i64),
}

/// The search simulator: owns the amplitude vector and the caller-supplied
/// oracle, applies the oracle and diffusion operators for a computed or
/// explicit number of rounds, and exposes the resulting probability
/// distribution and measured index.
///
/// One instance serves one search; an instance is not designed for
/// concurrent mutation from multiple callers. A caller that needs parallel
/// searches constructs independent instances, one per thread or task.
pub struct SearchSimulator<O: Oracle> {
    engine: SearchEngine,
    oracle: O,
    /// Marked count M, cached at construction by evaluating the oracle over
    /// the full index range.
    marked_count: usize,
}

impl<O: Oracle> SearchSimulator<O> {
    /// Creates a simulator for `num_qubits` qubits (search space N = 2^n)
    /// with the given oracle, starting in the uniform superposition.
    ///
    /// # Errors
    /// `GroverError::InvalidConfiguration` if `num_qubits` is zero or
    /// exceeds the default ceiling of 24 (the dense vector grows as 2^n).
    pub fn new(num_qubits: u32, oracle: O) -> Result<Self, GroverError> {
        Self::with_max_qubits(num_qubits, oracle, DEFAULT_MAX_QUBITS)
    }

    /// Like [`SearchSimulator::new`], but with a caller-configured ceiling
    /// on the qubit count for workloads that can afford larger vectors.
    pub fn with_max_qubits(
        num_qubits: u32,
        oracle: O,
        max_qubits: u32,
    ) -> Result<Self, GroverError> {
        let engine = SearchEngine::init(num_qubits, max_qubits)?;
        // Full-range oracle evaluation: validates the predicate is evaluable
        // for every index and caches M for the iteration-count derivation.
        let marked_count = engine.count_marked(&oracle);
        Ok(Self {
            engine,
            oracle,
            marked_count,
        })
    }

    /// Runs the search: resets to the uniform superposition, applies the
    /// `{oracle; diffusion}` pair exactly the resolved number of times, and
    /// measures.
    ///
    /// The measurement is deterministic: the maximum-probability index with
    /// ties broken by lowest index. Given identical `(n, oracle, count)` the
    /// result is bit-for-bit reproducible. Counts far beyond optimal are
    /// applied exactly as requested; the distribution oscillates away from
    /// the target peak and back, and the caller observes the oscillation.
    ///
    /// # Errors
    /// `GroverError::InvalidIterationCount` for `IterationCount::Exact` with
    /// a negative count.
    pub fn run(&mut self, count: IterationCount) -> Result<SearchResult, GroverError> {
        let rounds = self.resolve_iterations(count)?;
        self.engine.reset();
        for _ in 0..rounds {
            self.engine.iterate(&self.oracle);
        }
        let result_index = self.engine.most_likely_index();
        let distribution = self.engine.state().probabilities();
        Ok(SearchResult::new(result_index, distribution, rounds))
    }

    /// Applies a single `{oracle; diffusion}` round to the current state
    /// without resetting.
    ///
    /// This is the abort-friendly alternative to [`SearchSimulator::run`]
    /// for very large search spaces: drive the loop manually and stop
    /// between iterations. Call [`SearchSimulator::reset`] first to start
    /// from the uniform superposition.
    pub fn step(&mut self) {
        self.engine.iterate(&self.oracle);
    }

    /// Resets the state to the uniform superposition, discarding all
    /// iteration progress.
    pub fn reset(&mut self) {
        self.engine.reset();
    }

    /// The current probability distribution, length N, summing to 1 within
    /// floating-point tolerance.
    pub fn probabilities(&self) -> Vec<f64> {
        self.engine.state().probabilities()
    }

    /// Read-only access to the current amplitude vector.
    pub fn state(&self) -> &AmplitudeVector {
        self.engine.state()
    }

    /// Samples an index from the current probability distribution.
    ///
    /// Unlike the deterministic measurement in [`SearchSimulator::run`],
    /// this draws proportionally to probability, but reproducibly: the
    /// PRNG is seeded from the state itself, so identical states always
    /// sample the same index.
    pub fn sample(&self) -> usize {
        self.engine.sample_outcome()
    }

    /// The derived optimal round count `floor(π/4 · sqrt(N / M))`, with
    /// M = 0 treated as M = 1.
    pub fn optimal_iterations(&self) -> u64 {
        let m = self.marked_count.max(1) as f64;
        let n = self.engine.dim() as f64;
        ((PI / 4.0) * (n / m).sqrt()).floor() as u64
    }

    /// Number of marked items M found by the construction-time oracle scan.
    pub fn marked_count(&self) -> usize {
        self.marked_count
    }

    /// Number of qubits n.
    pub fn num_qubits(&self) -> u32 {
        self.engine.num_qubits()
    }

    /// Search-space size N = 2^n.
    pub fn dimension(&self) -> usize {
        self.engine.dim()
    }

    fn resolve_iterations(&self, count: IterationCount) -> Result<u64, GroverError> {
        match count {
            IterationCount::Optimal => Ok(self.optimal_iterations()),
            IterationCount::Exact(k) if k < 0 => Err(GroverError::InvalidIterationCount {
                message: format!("Iteration count must be non-negative, got {}", k),
            }),
            IterationCount::Exact(k) => Ok(k as u64),
        }
    }
}
