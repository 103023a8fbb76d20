// src/bloch/mod.rs

//! Projection of one qubit of a register onto the Bloch sphere.
//!
//! For qubit `k` the reduced density matrix ρ is obtained by tracing out every
//! other qubit. The Bloch vector is then
//!
//! * x = 2·Re(ρ₁₀)
//! * y = 2·Im(ρ₁₀)
//! * z = ρ₀₀ − ρ₁₁
//!
//! so for a lone qubit a|0⟩ + b|1⟩ this is x = 2·Re(a*b), y = 2·Im(a*b),
//! z = |a|² − |b|². |+⟩ points along +x and (|0⟩ + i|1⟩)/√2 along +y.
//! The length is at most 1 and equals 1 exactly when qubit `k` is not
//! entangled with the rest of the register.

use crate::core::constants::qglass_constants::{AMPLITUDE_EPSILON, PI};
use crate::core::{QglassError, Result, StateVector};
use num_complex::Complex64;
use num_traits::Zero;
use std::fmt;

/// A 2×2 single-qubit density matrix, `rho[row][col]`.
pub type DensityMatrix = [[Complex64; 2]; 2];

/// Cartesian point on or inside the unit sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlochVector {
    /// ⟨X⟩
    pub x: f64,
    /// ⟨Y⟩
    pub y: f64,
    /// ⟨Z⟩, +1 at |0⟩ and −1 at |1⟩
    pub z: f64,
}

impl BlochVector {
    /// Creates a vector from its components.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Reads the vector off a single-qubit density matrix.
    ///
    /// Rounding can push the length a hair past 1; such vectors are scaled back
    /// onto the sphere.
    pub fn from_density_matrix(rho: &DensityMatrix) -> Self {
        let off_diagonal = rho[1][0];
        let vector = Self::new(
            2.0 * off_diagonal.re,
            2.0 * off_diagonal.im,
            rho[0][0].re - rho[1][1].re,
        );
        let norm = vector.norm();
        if norm > 1.0 { vector.shrunk_by(norm) } else { vector }
    }

    /// Euclidean length.
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// True when the vector lies on the sphere within `tolerance`.
    pub fn is_pure(&self, tolerance: f64) -> bool {
        (self.norm() - 1.0).abs() <= tolerance
    }

    /// Spherical angles `(θ, φ)` with polar θ ∈ [0, π] measured from +z and
    /// azimuth φ ∈ [0, 2π) measured from +x. The zero vector maps to (0, 0).
    pub fn angles(&self) -> (f64, f64) {
        let norm = self.norm();
        if norm < AMPLITUDE_EPSILON {
            return (0.0, 0.0);
        }
        let theta = (self.z / norm).clamp(-1.0, 1.0).acos();
        let phi = if self.x.hypot(self.y) < AMPLITUDE_EPSILON {
            0.0
        } else {
            self.y.atan2(self.x).rem_euclid(2.0 * PI)
        };
        (theta, phi)
    }

    /// Components as `[x, y, z]`.
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    fn shrunk_by(&self, divisor: f64) -> Self {
        Self::new(self.x / divisor, self.y / divisor, self.z / divisor)
    }
}

impl fmt::Display for BlochVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }
}

/// Reduced density matrix of `qubit`, tracing out every other qubit.
///
/// # Errors
/// [`QglassError::InvalidQubitIndex`] if `qubit` is not in the register.
pub fn reduced_density_matrix(state: &StateVector, qubit: usize) -> Result<DensityMatrix> {
    let num_qubits = state.num_qubits();
    if qubit >= num_qubits {
        return Err(QglassError::InvalidQubitIndex { qubit, num_qubits });
    }
    Ok(partial_trace(state, qubit))
}

/// Bloch vector of `qubit` within `state`.
///
/// # Errors
/// [`QglassError::InvalidQubitIndex`] if `qubit` is not in the register.
pub fn project(state: &StateVector, qubit: usize) -> Result<BlochVector> {
    reduced_density_matrix(state, qubit).map(|rho| BlochVector::from_density_matrix(&rho))
}

/// Bloch vectors of every qubit in `state`, qubit 0 first.
pub fn project_all(state: &StateVector) -> Vec<BlochVector> {
    (0..state.num_qubits())
        .map(|qubit| BlochVector::from_density_matrix(&partial_trace(state, qubit)))
        .collect()
}

/// `qubit` must be below `state.num_qubits()`.
fn partial_trace(state: &StateVector, qubit: usize) -> DensityMatrix {
    let amplitudes = state.amplitudes();
    let mask = 1usize << qubit;
    let mut rho = [[Complex64::zero(); 2]; 2];

    // Pair every basis state with qubit clear against its partner with it set;
    // the pair shares all other bits, which is what the trace sums over.
    for (index, &a0) in amplitudes.iter().enumerate().filter(|(i, _)| i & mask == 0) {
        let a1 = amplitudes[index | mask];
        rho[0][0] += a0 * a0.conj();
        rho[1][1] += a1 * a1.conj();
        rho[1][0] += a1 * a0.conj();
    }
    rho[0][1] = rho[1][0].conj();
    rho
}
