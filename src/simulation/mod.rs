// src/simulation/mod.rs

//! State evolution and the statistics derived from it.
//!
//! `engine` expands gate matrices to full-register operators and multiplies
//! them into a state; `results` turns a state into outcome probabilities and
//! sampled histograms.

mod results;
pub(crate) mod engine;

// Re-export the main public interface types
pub use results::{Histogram, Probabilities};
