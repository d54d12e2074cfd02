// src/operators/mod.rs

//! The two linear transforms of Grover's search, as stateless pure functions
//! over an explicitly passed amplitude buffer.
//!
//! Keeping the operators free of hidden state makes their algebraic
//! properties independently testable: the oracle sign-flip is its own
//! inverse and preserves normalization exactly (squares of amplitudes are
//! unaffected by sign), and the diffusion is an orthogonal reflection about
//! the mean, hence norm-preserving up to floating-point error and
//! self-inverse.
//!
//! Both passes are embarrassingly parallel per index, so above a fixed
//! length cutover they run on rayon parallel iterators; the diffusion mean
//! is a reduction that completes before the reflection pass begins.

use crate::core::AmplitudeVector;
use crate::oracle::Oracle;
use rayon::prelude::*;

/// Vector length at which the per-index passes switch from plain loops to
/// rayon. Below this the working set fits comfortably in cache and the
/// fork/join overhead dominates.
const PARALLEL_CUTOVER: usize = 1 << 16;

/// Applies the oracle operator: for every index `i` in `0..N-1`, negates
/// `amplitude[i]` if `oracle.is_marked(i)`, leaving all others unchanged.
///
/// This is a diagonal sign-flip: a pure linear transform, its own inverse,
/// exactly norm-preserving. Mutates the vector in place; O(N) time, O(1)
/// extra space.
pub fn apply_oracle<O: Oracle + ?Sized>(state: &mut AmplitudeVector, oracle: &O) {
    let amplitudes = state.vector_mut();
    if amplitudes.len() >= PARALLEL_CUTOVER {
        amplitudes.par_iter_mut().enumerate().for_each(|(i, amp)| {
            if oracle.is_marked(i) {
                *amp = -*amp;
            }
        });
    } else {
        for (i, amp) in amplitudes.iter_mut().enumerate() {
            if oracle.is_marked(i) {
                *amp = -*amp;
            }
        }
    }
}

/// Applies the diffusion operator (inversion about the mean): computes
/// `mean = (Σ amplitude) / N` and replaces every `amplitude[i]` with
/// `2·mean - amplitude[i]`.
///
/// This reflects every amplitude about the current mean, which is the
/// standard Grover diffusion operator `D = 2|s><s| - I` restricted to real
/// amplitudes. Mutates the vector in place; O(N) time, O(1) extra space
/// beyond the mean accumulator.
pub fn apply_diffusion(state: &mut AmplitudeVector) {
    let dim = state.dim();
    let amplitudes = state.vector_mut();

    if amplitudes.len() >= PARALLEL_CUTOVER {
        // Reduction barrier: the mean must be complete before any reflection.
        let sum: f64 = amplitudes.par_iter().sum();
        let twice_mean = 2.0 * (sum / dim as f64);
        amplitudes.par_iter_mut().for_each(|amp| {
            *amp = twice_mean - *amp;
        });
    } else {
        let sum: f64 = amplitudes.iter().sum();
        let twice_mean = 2.0 * (sum / dim as f64);
        for amp in amplitudes.iter_mut() {
            *amp = twice_mean - *amp;
        }
    }
}
