// src/simulation/engine.rs
use crate::core::{QglassError, Result, StateVector};
use crate::gates::{Gate, GateMatrix};
use crate::validation;
use ndarray::Array1;
use ndarray::linalg::kron;
use tracing::trace;

/// Checks a target list against a gate and a register width.
///
/// Order of checks: every index in range, then the count against the gate's
/// arity, then no qubit listed twice.
pub(crate) fn check_targets(gate: &Gate, targets: &[usize], num_qubits: usize) -> Result<()> {
    if let Some(&qubit) = targets.iter().find(|&&t| t >= num_qubits) {
        return Err(QglassError::InvalidTarget { gate: gate.name().to_string(), qubit, num_qubits });
    }
    if targets.len() != gate.arity() {
        return Err(QglassError::DimensionMismatch {
            gate: gate.name().to_string(),
            expected: gate.arity(),
            actual: targets.len(),
        });
    }
    for (pos, &qubit) in targets.iter().enumerate() {
        if targets[..pos].contains(&qubit) {
            return Err(QglassError::InvalidTarget { gate: gate.name().to_string(), qubit, num_qubits });
        }
    }
    Ok(())
}

/// One step of the fold: validates `targets`, expands the gate and returns the evolved state.
///
/// The input state is untouched, so a failure leaves the caller's state as it was.
pub(crate) fn evolve(state: &StateVector, gate: &Gate, targets: &[usize], norm_tolerance: f64) -> Result<StateVector> {
    check_targets(gate, targets, state.num_qubits())?;
    Ok(evolve_with_matrix(state, &gate.matrix(), targets, norm_tolerance))
}

/// Applies an already-resolved matrix. Targets must have been validated.
pub(crate) fn evolve_with_matrix(
    state: &StateVector,
    matrix: &GateMatrix,
    targets: &[usize],
    norm_tolerance: f64,
) -> StateVector {
    let operator = expand_operator(matrix, targets, state.num_qubits());
    let mut next = apply_operator(&operator, state);
    let drifted_norm = next.norm_sqr();
    if validation::renormalize(&mut next, Some(norm_tolerance)) {
        trace!(norm_sqr = drifted_norm, "renormalized state after gate");
    }
    next
}

/// newState = operator · state.
pub(crate) fn apply_operator(operator: &GateMatrix, state: &StateVector) -> StateVector {
    let psi = Array1::from(state.amplitudes().to_vec());
    StateVector::new(operator.dot(&psi).to_vec())
}

/// Expands a 2^k × 2^k gate on `targets` to the full 2^n × 2^n operator.
///
/// Qubit `q` is bit `q` of the basis index and the first listed target is the
/// gate's most significant bit. A single-qubit gate, or a two-qubit gate whose
/// targets are `[q + 1, q]`, is built as `I ⊗ G ⊗ I`; every other target
/// layout is embedded by re-indexing the gate onto the target bits.
pub(crate) fn expand_operator(matrix: &GateMatrix, targets: &[usize], num_qubits: usize) -> GateMatrix {
    match *targets {
        [target] => kron_chain(matrix, target, num_qubits),
        [high, low] if high == low + 1 => kron_chain(matrix, low, num_qubits),
        _ => embed(matrix, targets, num_qubits),
    }
}

fn identity(num_qubits: usize) -> GateMatrix {
    GateMatrix::eye(1 << num_qubits)
}

/// `I(above) ⊗ G ⊗ I(lowest)` with the gate on qubits `lowest..lowest + width`.
fn kron_chain(matrix: &GateMatrix, lowest: usize, num_qubits: usize) -> GateMatrix {
    let width = matrix.nrows().trailing_zeros() as usize;
    let above = num_qubits - lowest - width;
    kron(&kron(&identity(above), matrix), &identity(lowest))
}

/// Places `matrix` on arbitrary target bits: entry (row, col) of the full
/// operator is the gate entry addressed by the target bits of row and col,
/// and zero unless row and col agree on every other bit.
fn embed(matrix: &GateMatrix, targets: &[usize], num_qubits: usize) -> GateMatrix {
    let dim = 1usize << num_qubits;
    let target_mask = targets.iter().fold(0usize, |mask, &t| mask | (1 << t));
    let gate_index = |basis: usize| targets.iter().fold(0usize, |acc, &t| (acc << 1) | ((basis >> t) & 1));

    let mut full = GateMatrix::zeros((dim, dim));
    for row in 0..dim {
        for col in 0..dim {
            if row & !target_mask == col & !target_mask {
                full[[row, col]] = matrix[[gate_index(row), gate_index(col)]];
            }
        }
    }
    full
}
