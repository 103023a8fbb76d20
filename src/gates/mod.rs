// src/gates/mod.rs

//! The gate library: named single- and two-qubit unitaries and their matrices.
//!
//! Every function here is pure. Gates are small `Copy` values; resolving a
//! name or building a matrix never touches engine state.

use crate::core::{QglassError, Result};
use ndarray::{Array2, array};
use num_complex::Complex64;
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_4};
use std::fmt;

/// A dense unitary, 2×2 for single-qubit gates and 4×4 for two-qubit gates.
pub type GateMatrix = Array2<Complex64>;

/// A gate that can be recorded in the circuit log.
///
/// Row/column order of the 4×4 [`Gate::Cx`] matrix is `|control, target⟩`:
/// the first listed target is the high bit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gate {
    /// Pauli X, the bit flip.
    X,
    /// Pauli Y.
    Y,
    /// Pauli Z, a π phase on |1⟩.
    Z,
    /// Hadamard.
    H,
    /// Phase π/2.
    S,
    /// Phase −π/2, the adjoint of S.
    Sdg,
    /// Phase π/4.
    T,
    /// Phase −π/4, the adjoint of T.
    Tdg,
    /// Rotation by θ radians about the X axis.
    Rx(f64),
    /// Rotation by θ radians about the Y axis.
    Ry(f64),
    /// Rotation by θ radians about the Z axis.
    Rz(f64),
    /// Controlled NOT: flips the target when the control is |1⟩.
    Cx,
}

impl Gate {
    /// Resolves a gate by name, case-insensitively.
    ///
    /// Rotations take exactly one parameter, every other gate takes none.
    /// Accepted aliases: `sd`/`s†` for `sdg`, `td`/`t†` for `tdg`, `cnot` for `cx`.
    ///
    /// # Errors
    /// * [`QglassError::UnknownGate`] for an unrecognised name.
    /// * [`QglassError::InvalidParameter`] for a wrong parameter count or a non-finite angle.
    pub fn from_name(name: &str, params: &[f64]) -> Result<Self> {
        let lowered = name.trim().to_ascii_lowercase();

        let fixed = match lowered.as_str() {
            "x" => Some(Gate::X),
            "y" => Some(Gate::Y),
            "z" => Some(Gate::Z),
            "h" => Some(Gate::H),
            "s" => Some(Gate::S),
            "sdg" | "sd" | "s†" => Some(Gate::Sdg),
            "t" => Some(Gate::T),
            "tdg" | "td" | "t†" => Some(Gate::Tdg),
            "cx" | "cnot" => Some(Gate::Cx),
            _ => None,
        };
        if let Some(gate) = fixed {
            if !params.is_empty() {
                return Err(QglassError::InvalidParameter {
                    gate: gate.name().to_string(),
                    message: format!("takes no parameters, got {}", params.len()),
                });
            }
            return Ok(gate);
        }

        let rotation: fn(f64) -> Gate = match lowered.as_str() {
            "rx" => Gate::Rx,
            "ry" => Gate::Ry,
            "rz" => Gate::Rz,
            _ => return Err(QglassError::UnknownGate { name: name.to_string() }),
        };
        let &[theta] = params else {
            return Err(QglassError::InvalidParameter {
                gate: lowered,
                message: format!("expects exactly 1 parameter, got {}", params.len()),
            });
        };
        let gate = rotation(theta);
        gate.validate()?;
        Ok(gate)
    }

    /// Checks that the gate's angle, if any, is finite.
    pub fn validate(&self) -> Result<()> {
        match self {
            Gate::Rx(theta) | Gate::Ry(theta) | Gate::Rz(theta) => check_finite(self.name(), "theta", *theta),
            _ => Ok(()),
        }
    }

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Gate::X => "x",
            Gate::Y => "y",
            Gate::Z => "z",
            Gate::H => "h",
            Gate::S => "s",
            Gate::Sdg => "sdg",
            Gate::T => "t",
            Gate::Tdg => "tdg",
            Gate::Rx(_) => "rx",
            Gate::Ry(_) => "ry",
            Gate::Rz(_) => "rz",
            Gate::Cx => "cx",
        }
    }

    /// Number of target qubits.
    pub fn arity(&self) -> usize {
        match self {
            Gate::Cx => 2,
            _ => 1,
        }
    }

    /// Real parameters, empty for fixed gates.
    pub fn params(&self) -> Vec<f64> {
        match self {
            Gate::Rx(theta) | Gate::Ry(theta) | Gate::Rz(theta) => vec![*theta],
            _ => Vec::new(),
        }
    }

    /// The adjoint gate.
    pub fn inverse(&self) -> Gate {
        match *self {
            Gate::S => Gate::Sdg,
            Gate::Sdg => Gate::S,
            Gate::T => Gate::Tdg,
            Gate::Tdg => Gate::T,
            Gate::Rx(theta) => Gate::Rx(-theta),
            Gate::Ry(theta) => Gate::Ry(-theta),
            Gate::Rz(theta) => Gate::Rz(-theta),
            other => other,
        }
    }

    /// The gate's unitary matrix.
    pub fn matrix(&self) -> GateMatrix {
        let zero = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);
        let i = Complex64::i();

        match *self {
            Gate::X => array![[zero, one], [one, zero]],
            Gate::Y => array![[zero, -i], [i, zero]],
            Gate::Z => array![[one, zero], [zero, -one]],
            Gate::H => {
                let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
                array![[h, h], [h, -h]]
            }
            Gate::S => array![[one, zero], [zero, i]],
            Gate::Sdg => array![[one, zero], [zero, -i]],
            Gate::T => array![[one, zero], [zero, Complex64::from_polar(1.0, FRAC_PI_4)]],
            Gate::Tdg => array![[one, zero], [zero, Complex64::from_polar(1.0, -FRAC_PI_4)]],
            Gate::Rx(theta) => {
                let (sin, cos) = (theta / 2.0).sin_cos();
                let c = Complex64::new(cos, 0.0);
                let s = Complex64::new(0.0, -sin);
                array![[c, s], [s, c]]
            }
            Gate::Ry(theta) => {
                let (sin, cos) = (theta / 2.0).sin_cos();
                let c = Complex64::new(cos, 0.0);
                let s = Complex64::new(sin, 0.0);
                array![[c, -s], [s, c]]
            }
            Gate::Rz(theta) => array![
                [Complex64::from_polar(1.0, -theta / 2.0), zero],
                [zero, Complex64::from_polar(1.0, theta / 2.0)]
            ],
            Gate::Cx => array![
                [one, zero, zero, zero],
                [zero, one, zero, zero],
                [zero, zero, zero, one],
                [zero, zero, one, zero]
            ],
        }
    }

    /// Short label used in circuit diagrams.
    pub(crate) fn symbol(&self) -> &'static str {
        match self {
            Gate::X => "X",
            Gate::Y => "Y",
            Gate::Z => "Z",
            Gate::H => "H",
            Gate::S => "S",
            Gate::Sdg => "S†",
            Gate::T => "T",
            Gate::Tdg => "T†",
            Gate::Rx(_) => "Rx",
            Gate::Ry(_) => "Ry",
            Gate::Rz(_) => "Rz",
            Gate::Cx => "X",
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gate::Rx(theta) | Gate::Ry(theta) | Gate::Rz(theta) => write!(f, "{}({:.4})", self.name(), theta),
            _ => write!(f, "{}", self.name()),
        }
    }
}

/// Looks up a gate by name and returns its matrix.
///
/// ```
/// let h = qglass::gates::matrix("h", &[]).unwrap();
/// assert_eq!(h.dim(), (2, 2));
/// assert!(qglass::gates::matrix("toffoli", &[]).is_err());
/// ```
pub fn matrix(name: &str, params: &[f64]) -> Result<GateMatrix> {
    Gate::from_name(name, params).map(|gate| gate.matrix())
}

/// The general single-qubit rotation U3(θ, φ, λ).
///
/// `[[cos θ/2, −e^{iλ} sin θ/2], [e^{iφ} sin θ/2, e^{i(φ+λ)} cos θ/2]]`.
/// Only used to prepare initial states; it never appears in a circuit log.
pub fn u3(theta: f64, phi: f64, lambda: f64) -> Result<GateMatrix> {
    check_finite("u3", "theta", theta)?;
    check_finite("u3", "phi", phi)?;
    check_finite("u3", "lambda", lambda)?;

    let (sin, cos) = (theta / 2.0).sin_cos();
    Ok(array![
        [Complex64::new(cos, 0.0), -Complex64::from_polar(sin, lambda)],
        [Complex64::from_polar(sin, phi), Complex64::from_polar(cos, phi + lambda)]
    ])
}

/// True when `m† m` is the identity within `tolerance` entry-wise.
pub fn is_unitary(m: &GateMatrix, tolerance: f64) -> bool {
    let (rows, cols) = m.dim();
    if rows != cols {
        return false;
    }
    let product = m.t().mapv(|c| c.conj()).dot(m);
    let identity = GateMatrix::eye(rows);
    product
        .iter()
        .zip(identity.iter())
        .all(|(a, b)| (a - b).norm() <= tolerance)
}

fn check_finite(gate: &str, label: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(QglassError::InvalidParameter {
            gate: gate.to_string(),
            message: format!("{} must be finite, got {}", label, value),
        })
    }
}
