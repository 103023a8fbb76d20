//! Engine configuration.

use super::constants::qglass_constants::{DEFAULT_MAX_QUBITS, DEFAULT_NORM_TOLERANCE};

/// Tunables for a [`Circuit`](crate::Circuit).
///
/// ```
/// use qglass::KernelConfig;
///
/// let config = KernelConfig::default().with_max_qubits(4).with_norm_tolerance(1e-12);
/// assert_eq!(config.max_qubits, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelConfig {
    /// Allowed deviation of the squared norm from 1 before renormalisation.
    pub norm_tolerance: f64,
    /// Largest register `create` accepts.
    pub max_qubits: usize,
}

impl KernelConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the norm tolerance.
    pub fn with_norm_tolerance(mut self, tolerance: f64) -> Self {
        self.norm_tolerance = tolerance;
        self
    }

    /// Overrides the qubit cap.
    pub fn with_max_qubits(mut self, max_qubits: usize) -> Self {
        self.max_qubits = max_qubits;
        self
    }
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            norm_tolerance: DEFAULT_NORM_TOLERANCE,
            max_qubits: DEFAULT_MAX_QUBITS,
        }
    }
}
