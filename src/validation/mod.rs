// src/validation/mod.rs

//! Normalisation checks and floating-point hygiene for states and distributions.

use crate::core::StateVector;
use crate::core::constants::qglass_constants::{AMPLITUDE_EPSILON, DEFAULT_NORM_TOLERANCE};

/// Checks if the state vector is normalized (sum of squared amplitudes ≈ 1.0).
///
/// # Arguments
/// * `state` - The `StateVector` to check.
/// * `tolerance` - Allowed deviation from 1.0. Defaults to 1e-9.
pub fn check_normalization(state: &StateVector, tolerance: Option<f64>) -> bool {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    (state.norm_sqr() - 1.0).abs() <= effective_tolerance
}

/// Rescales `state` to unit norm when its squared norm has drifted outside
/// `[1 - tolerance, 1 + tolerance]`. Returns whether a rescale happened.
///
/// A state with (numerically) zero norm is left alone; unitary evolution
/// cannot produce one.
pub fn renormalize(state: &mut StateVector, tolerance: Option<f64>) -> bool {
    if check_normalization(state, tolerance) {
        return false;
    }
    let norm = state.norm_sqr().sqrt();
    if norm < AMPLITUDE_EPSILON {
        return false;
    }
    for amplitude in state.amplitudes_mut() {
        *amplitude /= norm;
    }
    true
}

/// Rescales a probability vector to sum to 1 when its total is off by more
/// than `tolerance`. Returns whether a rescale happened.
pub fn normalize_distribution(probabilities: &mut [f64], tolerance: Option<f64>) -> bool {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let total: f64 = probabilities.iter().sum();
    if (total - 1.0).abs() <= effective_tolerance || total < AMPLITUDE_EPSILON {
        return false;
    }
    for p in probabilities.iter_mut() {
        *p /= total;
    }
    true
}
