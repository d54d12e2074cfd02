//! Numerical constants used by the simulator.

/// Limits and tolerances governing state-vector simulation
pub mod search_constants {
    /// Default ceiling on the qubit count. The dense vector grows as 2^n,
    /// so 24 qubits already means a 16M-entry allocation; anything larger
    /// must be requested explicitly via `SearchSimulator::with_max_qubits`.
    pub const DEFAULT_MAX_QUBITS: u32 = 24;
    /// Allowed deviation of `sum(|a_i|^2)` from 1 in normalization checks.
    pub const NORM_TOLERANCE: f64 = 1e-9;
    /// Used for the optimal iteration count `floor(π/4 · sqrt(N/M))`.
    pub const PI: f64 = std::f64::consts::PI;
}
