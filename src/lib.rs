// src/lib.rs

//! `qglass` - A state-vector kernel for watching qubits move
//!
//! This library holds an n-qubit pure state as 2^n complex amplitudes, applies
//! named gates to it one at a time, and derives the views a front end needs:
//! outcome probabilities, sampled histograms and per-qubit Bloch vectors.
//! Rendering and user interaction are left to the caller.
//!
//! Conventions used throughout:
//! * qubit `k` is bit `k` of the basis index, and bitstrings are written with
//!   qubit `n-1` first, so `"10"` means qubit 1 is set;
//! * for `cx` the first target is the control;
//! * the Bloch vector is x = 2·Re(ρ₁₀), y = 2·Im(ρ₁₀), z = ρ₀₀ − ρ₁₁.

pub mod core;
pub mod gates;
pub mod circuits;
pub mod simulation;
pub mod bloch;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use core::{KernelConfig, QglassError, Result, StateVector};
pub use gates::{Gate, GateMatrix};
pub use circuits::{Circuit, GateLogEntry, InitialAngles};
pub use simulation::{Histogram, Probabilities};
pub use bloch::{BlochVector, DensityMatrix};
pub use validation::check_normalization;

// Example 1: Single qubit walk around the Bloch sphere
// Each gate moves the vector; the log keeps the history.
/// ```
/// use qglass::{Circuit, QglassError};
/// use std::f64::consts::PI;
///
/// let mut circuit = Circuit::new(1)?;
///
/// // |0> sits at the north pole
/// let v = circuit.bloch_vector(0)?;
/// assert!((v.z - 1.0).abs() < 1e-12);
///
/// // H takes it to +x, S turns it a quarter towards +y
/// circuit.apply("h", &[], &[0])?;
/// circuit.apply("s", &[], &[0])?;
/// let v = circuit.bloch_vector(0)?;
/// assert!((v.y - 1.0).abs() < 1e-12);
///
/// // A quarter turn about x carries +y up to the pole
/// circuit.apply("rx", &[PI / 2.0], &[0])?;
/// let v = circuit.bloch_vector(0)?;
/// assert!((v.z - 1.0).abs() < 1e-12);
/// assert!((v.norm() - 1.0).abs() < 1e-12);
///
/// assert_eq!(circuit.log().len(), 3);
/// assert_eq!(circuit.log()[2].name(), "rx");
/// # Ok::<(), QglassError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Bell pair and sampling
// Demonstrates CX, entanglement in the Bloch view, and seeded sampling.
/// ```
/// use qglass::{Circuit, QglassError};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut circuit = Circuit::new(2)?;
/// circuit.apply("h", &[], &[0])?;
/// circuit.apply("cx", &[], &[0, 1])?; // control 0, target 1
///
/// // Only |00> and |11> remain
/// let probabilities = circuit.probabilities();
/// assert!((probabilities.get("00").unwrap() - 0.5).abs() < 1e-12);
/// assert!(probabilities.get("01").unwrap() < 1e-12);
///
/// // Each qubit on its own is maximally mixed
/// assert!(circuit.bloch_vector(0)?.norm() < 1e-12);
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let histogram = circuit.sample(1000, &mut rng);
/// assert_eq!(histogram.get("00") + histogram.get("11"), 1000);
/// # Ok::<(), QglassError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
