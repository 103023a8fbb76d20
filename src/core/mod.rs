// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod config;
pub mod error;
pub mod state;

// Re-export public types for convenient access via `qglass::core::TypeName`
pub use config::KernelConfig;
pub use error::{QglassError, Result};
pub use state::StateVector;

pub mod constants;
pub use constants::qglass_constants::{DEFAULT_NORM_TOLERANCE, PI}; // Re-export
