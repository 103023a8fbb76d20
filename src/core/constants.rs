//! Numerical constants shared by the kernel.

/// Defaults and fixed values used across the crate
pub mod qglass_constants {
    /// Allowed drift of Σ|a_i|² away from 1 before the state is renormalised.
    pub const DEFAULT_NORM_TOLERANCE: f64 = 1e-9;
    /// Largest register the engine builds by default. The dense operator has 4^n entries.
    pub const DEFAULT_MAX_QUBITS: usize = 10;
    /// Amplitudes whose squared magnitude falls below this are treated as zero.
    pub const AMPLITUDE_EPSILON: f64 = 1e-12;
    /// Used for phase angles (`e^(iθ)`)
    pub const PI: f64 = std::f64::consts::PI;
}
