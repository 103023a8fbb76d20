// src/core/state.rs

use num_complex::Complex64;
use num_traits::{One, Zero};
use std::fmt;

/// The pure state of an n-qubit register as 2^n complex amplitudes.
///
/// Amplitude `i` belongs to the basis state whose bit `k` is the value of
/// qubit `k`. Written as a bitstring, qubit `n-1` comes first and qubit 0
/// last, so for two qubits `|10⟩` is index 2.
///
/// The engine keeps Σ|a_i|² = 1 within its configured tolerance after every
/// mutation. Values handed out by [`Circuit::snapshot`](crate::Circuit::snapshot)
/// are independent copies.
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct StateVector {
    amplitudes: Vec<Complex64>,
    num_qubits: usize,
}

impl StateVector {
    /// The all-zero basis state |0…0⟩ on `num_qubits` qubits.
    pub(crate) fn zero_state(num_qubits: usize) -> Self {
        let mut amplitudes = vec![Complex64::zero(); 1usize << num_qubits];
        amplitudes[0] = Complex64::one();
        Self { amplitudes, num_qubits }
    }

    /// Wraps an amplitude vector. The length must be a power of two.
    pub(crate) fn new(amplitudes: Vec<Complex64>) -> Self {
        debug_assert!(amplitudes.len().is_power_of_two());
        let num_qubits = amplitudes.len().trailing_zeros() as usize;
        Self { amplitudes, num_qubits }
    }

    /// Read-only access to the amplitudes.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Amplitude of one basis state, `None` past the end.
    pub fn amplitude(&self, index: usize) -> Option<Complex64> {
        self.amplitudes.get(index).copied()
    }

    pub(crate) fn amplitudes_mut(&mut self) -> &mut [Complex64] {
        &mut self.amplitudes
    }

    /// Number of qubits n.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of amplitudes, 2^n.
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Σ|a_i|².
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|c| c.norm_sqr()).sum()
    }

    /// Component-wise comparison. Global phase is significant.
    pub fn approx_eq(&self, other: &StateVector, tolerance: f64) -> bool {
        self.dim() == other.dim()
            && self
                .amplitudes
                .iter()
                .zip(other.amplitudes.iter())
                .all(|(a, b)| (a - b).norm() <= tolerance)
    }

    /// Formats a basis index as an n-character bitstring, qubit n-1 first.
    pub fn bitstring(&self, index: usize) -> String {
        format_bitstring(index, self.num_qubits)
    }
}

/// Renders `index` as a zero-padded binary string of `num_qubits` characters.
pub(crate) fn format_bitstring(index: usize, num_qubits: usize) -> String {
    format!("{:0width$b}", index, width = num_qubits)
}

/// Inverse of [`format_bitstring`]; `None` on a wrong length or a non-binary character.
pub(crate) fn parse_bitstring(bits: &str, num_qubits: usize) -> Option<usize> {
    if bits.len() != num_qubits || !bits.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }
    usize::from_str_radix(bits, 2).ok()
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State[")?;
        for (i, c) in self.amplitudes.iter().enumerate() {
            write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, c)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_state_has_unit_amplitude_at_index_zero() {
        let state = StateVector::zero_state(3);
        assert_eq!(state.dim(), 8);
        assert_eq!(state.num_qubits(), 3);
        assert_eq!(state.amplitude(0), Some(Complex64::one()));
        assert!(state.amplitudes()[1..].iter().all(|c| c.is_zero()));
        assert!((state.norm_sqr() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn bitstrings_put_highest_qubit_first() {
        assert_eq!(format_bitstring(2, 2), "10");
        assert_eq!(format_bitstring(1, 3), "001");
        assert_eq!(parse_bitstring("10", 2), Some(2));
        assert_eq!(parse_bitstring("011", 3), Some(3));
        assert_eq!(parse_bitstring("10", 3), None);
        assert_eq!(parse_bitstring("1x", 2), None);
    }

    #[test]
    fn new_infers_qubit_count_from_length() {
        let state = StateVector::new(vec![Complex64::zero(); 16]);
        assert_eq!(state.num_qubits(), 4);
    }
}
