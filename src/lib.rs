// src/lib.rs

//! `groversim` - A classical state-vector simulator for Grover's search
//!
//! The simulator owns a real-valued amplitude vector of size N = 2^n,
//! applies an oracle (diagonal sign-flip of the marked indices) and a
//! diffusion operator (inversion about the mean) for a derived or explicit
//! number of rounds, and reports the resulting probability distribution and
//! measured index.
//!
//! The evolution stays in the real subspace by construction, since the
//! oracle only introduces sign flips. No complex arithmetic is involved, and
//! every run is bit-for-bit reproducible.

pub mod core;
pub mod oracle;
pub mod operators;
pub mod simulation;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use core::{AmplitudeVector, GroverError};
pub use oracle::{MarkedSet, Oracle};
pub use operators::{apply_diffusion, apply_oracle};
pub use simulation::{IterationCount, SearchResult, SearchSimulator};
pub use validation::{check_distribution, check_normalization};

// Example 1: Single marked item
// Demonstrates the derived optimal iteration count amplifying the marked
// index until it dominates the distribution.
/// ```
/// use groversim::{GroverError, IterationCount, MarkedSet, SearchSimulator};
///
/// // Search space of 2^3 = 8 items, with index 5 marked.
/// let mut sim = SearchSimulator::new(3, MarkedSet::single(5))?;
///
/// // Optimal count for N = 8, M = 1 is floor(π/4 · sqrt(8)) = 2.
/// assert_eq!(sim.optimal_iterations(), 2);
///
/// let result = sim.run(IterationCount::Optimal)?;
/// println!("{}", result);
///
/// // Two rounds concentrate over 94% of the probability on index 5.
/// assert_eq!(result.result_index(), 5);
/// assert!(result.distribution()[5] > 0.9);
/// # Ok::<(), GroverError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Closure oracle and explicit iteration counts
// Demonstrates the predicate form of the oracle and the zero-iteration
// identity: with no rounds applied, the distribution stays uniform and the
// tie-break rule picks index 0.
/// ```
/// use groversim::{GroverError, IterationCount, SearchSimulator};
///
/// // Any pure `Fn(usize) -> bool` is an oracle: mark the even indices.
/// let mut sim = SearchSimulator::new(2, |index: usize| index % 2 == 0)?;
/// assert_eq!(sim.marked_count(), 2);
///
/// // Zero rounds: the initial uniform distribution, lowest index on ties.
/// let result = sim.run(IterationCount::Exact(0))?;
/// assert_eq!(result.result_index(), 0);
/// for p in result.distribution() {
///     assert!((p - 0.25).abs() < 1e-9);
/// }
/// # Ok::<(), GroverError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
