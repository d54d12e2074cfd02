// src/oracle/mod.rs

//! Defines the oracle capability: a pure predicate over basis-state indices
//! that marks the target item(s) of a search.
//!
//! The oracle is supplied by the caller at construction time and treated as
//! immutable for the lifetime of one simulation run. It must be a pure
//! function (same answer for the same index on every call); the simulator
//! evaluates it once over the full index range during construction, which
//! both validates that it is evaluable everywhere and caches the marked
//! count used to derive the optimal iteration count.

use std::collections::HashSet;
use std::fmt;

/// Predicate marking target basis-state indices within the search space.
///
/// `Sync` is required so the per-index oracle pass may be parallelized; any
/// closure that captures only shared state satisfies this automatically.
///
/// Analogy: the black-box function `U_ω` of Grover's algorithm, restricted
/// to the phase-oracle form `U_ω|x> = -|x>` for marked `x`.
pub trait Oracle: Sync {
    /// Returns `true` if the basis state `index` is a marked (target) item.
    fn is_marked(&self, index: usize) -> bool;
}

// Any pure predicate closure is an oracle.
impl<F> Oracle for F
where
    F: Fn(usize) -> bool + Sync,
{
    fn is_marked(&self, index: usize) -> bool {
        self(index)
    }
}

/// An oracle defined by an explicit, enumerable set of marked indices.
///
/// This is the set-form equivalent of a predicate oracle: convenient when
/// the targets are known up front, and self-documenting in tests and demos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkedSet {
    indices: HashSet<usize>,
}

impl MarkedSet {
    /// Creates an oracle marking every index yielded by the iterator.
    /// Duplicate indices collapse; an empty iterator yields an oracle that
    /// marks nothing (a legal, if unproductive, search).
    pub fn new<I>(indices: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        Self { indices: indices.into_iter().collect() }
    }

    /// Creates an oracle marking exactly one index.
    pub fn single(index: usize) -> Self {
        Self::new([index])
    }

    /// Number of distinct marked indices.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if no index is marked.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl Oracle for MarkedSet {
    fn is_marked(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }
}

impl fmt::Display for MarkedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Sort for stable output; HashSet iteration order is arbitrary.
        let mut sorted: Vec<usize> = self.indices.iter().copied().collect();
        sorted.sort_unstable();
        write!(f, "MarkedSet{{")?;
        for (i, idx) in sorted.iter().enumerate() {
            write!(f, "{}{}", if i > 0 { ", " } else { "" }, idx)?;
        }
        write!(f, "}}")
    }
}
