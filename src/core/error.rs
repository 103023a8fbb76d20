//! Error handling logic

use thiserror::Error;

/// Failures reported by the kernel.
///
/// Every fallible operation returns one of these synchronously. Nothing is
/// caught or swallowed inside the crate, and a failed `apply` leaves the
/// engine exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum QglassError {
    /// The requested qubit count is zero or exceeds the configured maximum.
    #[error("invalid qubit count {requested}: must be between 1 and {max}")]
    InvalidQubitCount {
        /// Qubit count that was asked for.
        requested: usize,
        /// Largest qubit count the engine accepts.
        max: usize,
    },

    /// No gate is registered under this name.
    #[error("unknown gate '{name}'")]
    UnknownGate {
        /// Name as supplied by the caller.
        name: String,
    },

    /// A gate angle is non-finite, or the gate got the wrong number of parameters.
    #[error("invalid parameter for '{gate}': {message}")]
    InvalidParameter {
        /// Gate the parameters were meant for.
        gate: String,
        /// What was wrong with them.
        message: String,
    },

    /// A target qubit index is out of range, or the same qubit was targeted twice.
    #[error("invalid target qubit {qubit} for '{gate}' on a {num_qubits}-qubit register")]
    InvalidTarget {
        /// Gate being applied.
        gate: String,
        /// The offending qubit index.
        qubit: usize,
        /// Register width.
        num_qubits: usize,
    },

    /// The number of targets does not match the gate's arity.
    #[error("gate '{gate}' acts on {expected} qubit(s) but {actual} target(s) were given")]
    DimensionMismatch {
        /// Gate being applied.
        gate: String,
        /// Arity of the gate.
        expected: usize,
        /// Number of targets supplied.
        actual: usize,
    },

    /// Bloch projection was asked for a qubit that does not exist.
    #[error("qubit index {qubit} out of range for a {num_qubits}-qubit state")]
    InvalidQubitIndex {
        /// Requested qubit.
        qubit: usize,
        /// Register width.
        num_qubits: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, QglassError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = QglassError::InvalidTarget { gate: "x".into(), qubit: 3, num_qubits: 2 };
        assert_eq!(err.to_string(), "invalid target qubit 3 for 'x' on a 2-qubit register");

        let err = QglassError::DimensionMismatch { gate: "cx".into(), expected: 2, actual: 1 };
        assert!(err.to_string().contains("acts on 2 qubit(s) but 1 target(s)"));
    }
}
