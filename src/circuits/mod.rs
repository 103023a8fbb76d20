// src/circuits/mod.rs

//! The circuit engine: a register's state plus the ordered log of gates that
//! produced it.
//!
//! A [`Circuit`] is an explicit value owned by its caller. Mutation goes
//! through `&mut self` only (`apply`, `apply_gate`, `reset`), and gates are
//! applied strictly in call order. Callers that share a circuit across
//! threads wrap it in their own lock.

mod log;

pub use log::GateLogEntry;

use crate::bloch::{self, BlochVector, DensityMatrix};
use crate::core::{KernelConfig, QglassError, Result, StateVector};
use crate::gates::{self, Gate};
use crate::simulation::engine;
use crate::simulation::{Histogram, Probabilities};
use rand::Rng;
use std::fmt;
use tracing::{debug, instrument};

/// Euler angles `(θ, φ, λ)` of the U3 rotation applied to qubit 0 at construction.
pub type InitialAngles = (f64, f64, f64);

/// Beyond this the 4^n-entry operator cannot be indexed.
const ADDRESSABLE_QUBITS: usize = (usize::BITS / 2) as usize - 1;

/// An n-qubit register evolving under an append-only sequence of gates.
///
/// The state is updated incrementally on every `apply`; the log is kept for
/// display and debugging. Folding the log from the initial state reproduces
/// the current state ([`Circuit::replay`]).
#[derive(Clone, PartialEq)]
pub struct Circuit {
    num_qubits: usize,
    initial_angles: InitialAngles,
    initial_state: StateVector,
    state: StateVector,
    log: Vec<GateLogEntry>,
    config: KernelConfig,
}

impl Circuit {
    /// Creates an `num_qubits` register in |0…0⟩, then rotates qubit 0 by
    /// U3(`initial_angles`) unless all three angles are zero.
    ///
    /// # Errors
    /// * [`QglassError::InvalidQubitCount`] if `num_qubits` is 0 or above the configured maximum.
    /// * [`QglassError::InvalidParameter`] if an initial angle is non-finite.
    pub fn create(num_qubits: usize, initial_angles: InitialAngles) -> Result<Self> {
        Self::with_config(num_qubits, initial_angles, KernelConfig::default())
    }

    /// Shorthand for `create(num_qubits, (0.0, 0.0, 0.0))`.
    pub fn new(num_qubits: usize) -> Result<Self> {
        Self::create(num_qubits, (0.0, 0.0, 0.0))
    }

    /// Like [`Circuit::create`] with explicit settings.
    pub fn with_config(num_qubits: usize, initial_angles: InitialAngles, config: KernelConfig) -> Result<Self> {
        let max = config.max_qubits.min(ADDRESSABLE_QUBITS);
        if num_qubits < 1 || num_qubits > max {
            return Err(QglassError::InvalidQubitCount { requested: num_qubits, max });
        }

        let initial_state = prepare_initial_state(num_qubits, initial_angles, config.norm_tolerance)?;
        debug!(num_qubits, ?initial_angles, "created circuit");

        Ok(Self {
            num_qubits,
            initial_angles,
            state: initial_state.clone(),
            initial_state,
            log: Vec::new(),
            config,
        })
    }

    /// Rebuilds a circuit by applying `entries` in order to a fresh register
    /// built with `config`.
    ///
    /// Sequence numbers are reassigned from 0. Pass `original.config()` to
    /// keep the tolerance and qubit cap of the circuit the log came from.
    pub fn from_log(
        num_qubits: usize,
        initial_angles: InitialAngles,
        config: KernelConfig,
        entries: &[GateLogEntry],
    ) -> Result<Self> {
        let mut circuit = Self::with_config(num_qubits, initial_angles, config)?;
        for entry in entries {
            circuit.apply_gate(*entry.gate(), entry.targets())?;
        }
        Ok(circuit)
    }

    /// Applies the gate called `name` to `targets`.
    ///
    /// For `cx` the first target is the control. On error the state and the
    /// log are left exactly as they were.
    ///
    /// # Errors
    /// * [`QglassError::UnknownGate`] for an unrecognised name.
    /// * [`QglassError::InvalidParameter`] for missing, extra or non-finite parameters.
    /// * [`QglassError::InvalidTarget`] for an out-of-range or repeated target.
    /// * [`QglassError::DimensionMismatch`] if the target count differs from the gate's arity.
    #[instrument(level = "trace", skip(self), fields(step = self.log.len()))]
    pub fn apply(&mut self, name: &str, params: &[f64], targets: &[usize]) -> Result<()> {
        let gate = Gate::from_name(name, params)?;
        self.apply_gate(gate, targets)
    }

    /// Applies an already-resolved gate. Same guarantees as [`Circuit::apply`].
    pub fn apply_gate(&mut self, gate: Gate, targets: &[usize]) -> Result<()> {
        gate.validate()?;
        let next = engine::evolve(&self.state, &gate, targets, self.config.norm_tolerance)?;

        let entry = GateLogEntry::new(self.log.len(), gate, targets.to_vec());
        debug!(%entry, "applied gate");
        self.state = next;
        self.log.push(entry);
        Ok(())
    }

    /// Drops the log and restores the construction-time state.
    pub fn reset(&mut self) {
        debug!(discarded = self.log.len(), "reset circuit");
        self.log.clear();
        self.state = self.initial_state.clone();
    }

    /// Folds the log from the initial state and returns the result.
    ///
    /// The result matches [`Circuit::state`] within the norm tolerance.
    pub fn replay(&self) -> Result<StateVector> {
        self.log.iter().try_fold(self.initial_state.clone(), |state, entry| {
            engine::evolve(&state, entry.gate(), entry.targets(), self.config.norm_tolerance)
        })
    }

    /// Borrows the current state.
    pub fn state(&self) -> &StateVector {
        &self.state
    }

    /// An owned copy of the current state; later gates do not affect it.
    pub fn snapshot(&self) -> StateVector {
        self.state.clone()
    }

    /// The state `reset` returns to.
    pub fn initial_state(&self) -> &StateVector {
        &self.initial_state
    }

    /// Angles passed at construction.
    pub fn initial_angles(&self) -> InitialAngles {
        self.initial_angles
    }

    /// Applied gates, oldest first.
    pub fn log(&self) -> &[GateLogEntry] {
        &self.log
    }

    /// Number of applied gates since construction or the last reset.
    pub fn len(&self) -> usize {
        self.log.len()
    }

    /// Returns `true` if no gate has been applied since construction or the last reset.
    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// Register width.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Settings this circuit was built with.
    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    /// Outcome probabilities of the current state.
    pub fn probabilities(&self) -> Probabilities {
        Probabilities::from_state(&self.state, Some(self.config.norm_tolerance))
    }

    /// `shots` independent draws from the current distribution; the state does not collapse.
    pub fn sample<R: Rng + ?Sized>(&self, shots: usize, rng: &mut R) -> Histogram {
        self.probabilities().sample(shots, rng)
    }

    /// A single draw from the current distribution; the state does not collapse.
    pub fn measure<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        self.probabilities().measure(rng)
    }

    /// Bloch vector of `qubit`.
    ///
    /// # Errors
    /// [`QglassError::InvalidQubitIndex`] if `qubit >= num_qubits`.
    pub fn bloch_vector(&self, qubit: usize) -> Result<BlochVector> {
        bloch::project(&self.state, qubit)
    }

    /// Bloch vectors of every qubit, index 0 first.
    pub fn bloch_vectors(&self) -> Vec<BlochVector> {
        bloch::project_all(&self.state)
    }

    /// Reduced density matrix of `qubit`.
    pub fn reduced_density_matrix(&self, qubit: usize) -> Result<DensityMatrix> {
        bloch::reduced_density_matrix(&self.state, qubit)
    }
}

/// |0…0⟩ with U3 on qubit 0 when any angle is non-zero.
fn prepare_initial_state(num_qubits: usize, angles: InitialAngles, tolerance: f64) -> Result<StateVector> {
    let zero = StateVector::zero_state(num_qubits);
    let (theta, phi, lambda) = angles;
    if theta == 0.0 && phi == 0.0 && lambda == 0.0 {
        return Ok(zero);
    }
    let rotation = gates::u3(theta, phi, lambda)?;
    Ok(engine::evolve_with_matrix(&zero, &rotation, &[0], tolerance))
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let num_ops = self.log.len();
        let num_qubits = self.num_qubits;
        writeln!(f, "qglass::Circuit[{} operations on {} qubits]", num_ops, num_qubits)?;
        if num_ops == 0 {
            return Ok(());
        }

        let labels: Vec<String> = (0..num_qubits).map(|q| format!("q{}: ", q)).collect();
        let label_width = labels.iter().map(|l| l.len()).max().unwrap_or(0);
        let label_padding = " ".repeat(label_width);

        const GATE_WIDTH: usize = 7; // e.g., "───H───"
        const WIRE: &str = "───────"; // GATE_WIDTH dashes
        const V_WIRE: char = '│';
        const H_WIRE: char = '─';

        // grid[row][time]: gate/wire segment; v_connect[row][time]: connector below row
        let mut grid: Vec<Vec<String>> = vec![vec![WIRE.to_string(); num_ops]; num_qubits];
        let mut v_connect: Vec<Vec<char>> = vec![vec![' '; num_ops]; num_qubits];

        fn format_gate(symbol: &str) -> String {
            let slen = symbol.chars().count();
            if slen >= GATE_WIDTH {
                symbol.chars().take(GATE_WIDTH).collect()
            } else {
                let total_dashes = GATE_WIDTH - slen;
                let pre_dashes = total_dashes / 2;
                let post_dashes = total_dashes - pre_dashes;
                format!(
                    "{}{}{}",
                    H_WIRE.to_string().repeat(pre_dashes),
                    symbol,
                    H_WIRE.to_string().repeat(post_dashes)
                )
            }
        }

        for (t, entry) in self.log.iter().enumerate() {
            match entry.targets() {
                [target] => grid[*target][t] = format_gate(entry.gate().symbol()),
                [control, target] => {
                    grid[*control][t] = format_gate("@");
                    grid[*target][t] = format_gate(entry.gate().symbol());
                    let (r_min, r_max) = ((*control).min(*target), (*control).max(*target));
                    for row in v_connect.iter_mut().take(r_max).skip(r_min) {
                        row[t] = V_WIRE;
                    }
                }
                _ => {}
            }
        }

        for r in 0..num_qubits {
            write!(f, "{:<width$}", labels[r], width = label_width)?;
            writeln!(f, "{}", grid[r].join(""))?;

            if r < num_qubits - 1 {
                write!(f, "{}", label_padding)?;
                for connector in &v_connect[r] {
                    let padding_needed = GATE_WIDTH - 1;
                    let pre_pad = padding_needed / 2;
                    let post_pad = padding_needed - pre_pad;
                    write!(f, "{}{}{}", " ".repeat(pre_pad), connector, " ".repeat(post_pad))?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

// Keep the Debug impl delegating to Display
impl fmt::Debug for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
