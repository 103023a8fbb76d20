// src/circuits/log.rs

use crate::gates::Gate;
use std::fmt;

/// One applied gate as recorded in a circuit's history.
///
/// Entries are immutable once recorded. They describe what was applied and
/// are enough to rebuild the state, see [`Circuit::replay`](crate::Circuit::replay).
#[derive(Debug, Clone, PartialEq)]
pub struct GateLogEntry {
    sequence: usize,
    gate: Gate,
    targets: Vec<usize>,
}

impl GateLogEntry {
    pub(crate) fn new(sequence: usize, gate: Gate, targets: Vec<usize>) -> Self {
        Self { sequence, gate, targets }
    }

    /// Position in the log, starting at 0.
    pub fn sequence(&self) -> usize {
        self.sequence
    }

    /// The applied gate.
    pub fn gate(&self) -> &Gate {
        &self.gate
    }

    /// Canonical gate name.
    pub fn name(&self) -> &'static str {
        self.gate.name()
    }

    /// Gate parameters, empty for fixed gates.
    pub fn params(&self) -> Vec<f64> {
        self.gate.params()
    }

    /// Target qubits in call order; for `cx` the control comes first.
    pub fn targets(&self) -> &[usize] {
        &self.targets
    }
}

impl fmt::Display for GateLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.sequence, self.gate)?;
        for (i, target) in self.targets.iter().enumerate() {
            write!(f, "{}q[{}]", if i > 0 { ", " } else { " " }, target)?;
        }
        Ok(())
    }
}
