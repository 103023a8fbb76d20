// src/simulation/results.rs
use crate::core::StateVector;
use crate::core::state::{format_bitstring, parse_bitstring};
use crate::validation;
use rand::Rng;
use rand::distr::{Distribution, StandardUniform};
use std::collections::BTreeMap;
use std::fmt;

/// Outcome probabilities p(k) = |a_k|² of a state, derived on demand.
///
/// Indexing follows [`StateVector`]: bitstring `"10"` on two qubits is basis
/// index 2. If the raw probabilities miss 1 by more than the tolerance they
/// are rescaled to sum to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Probabilities {
    values: Vec<f64>,
    num_qubits: usize,
}

impl Probabilities {
    /// Computes the distribution of `state`.
    pub fn from_state(state: &StateVector, tolerance: Option<f64>) -> Self {
        let mut values: Vec<f64> = state.amplitudes().iter().map(|c| c.norm_sqr()).collect();
        validation::normalize_distribution(&mut values, tolerance);
        Self { values, num_qubits: state.num_qubits() }
    }

    /// Probability of one outcome; `None` for a malformed bitstring.
    pub fn get(&self, bitstring: &str) -> Option<f64> {
        parse_bitstring(bitstring, self.num_qubits).map(|index| self.values[index])
    }

    /// Probabilities indexed by basis state.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Width of the outcomes.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// All outcomes in basis order, including zero-probability ones.
    pub fn iter(&self) -> impl Iterator<Item = (String, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(index, p)| (format_bitstring(index, self.num_qubits), *p))
    }

    /// The distribution as a sorted bitstring → probability map.
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        self.iter().collect()
    }

    /// Draws one basis index by inverse-CDF sampling.
    pub fn sample_index<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let u: f64 = StandardUniform.sample(rng);
        let mut cumulative = 0.0;
        for (index, p) in self.values.iter().enumerate() {
            cumulative += p;
            if u < cumulative {
                return index;
            }
        }
        // Rounding can leave the total just below u.
        self.values.iter().rposition(|p| *p > 0.0).unwrap_or(0)
    }

    /// One simulated measurement of every qubit. The distribution is not updated.
    pub fn measure<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        format_bitstring(self.sample_index(rng), self.num_qubits)
    }

    /// `shots` independent draws from this fixed distribution.
    pub fn sample<R: Rng + ?Sized>(&self, shots: usize, rng: &mut R) -> Histogram {
        let mut histogram = Histogram::new();
        for _ in 0..shots {
            histogram.record(self.measure(rng));
        }
        histogram
    }
}

/// Counts of sampled outcomes keyed by bitstring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Histogram {
    counts: BTreeMap<String, usize>,
    shots: usize,
}

impl Histogram {
    /// Creates an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, bitstring: String) {
        *self.counts.entry(bitstring).or_insert(0) += 1;
        self.shots += 1;
    }

    /// Count for one outcome, 0 if it was never drawn.
    pub fn get(&self, bitstring: &str) -> usize {
        self.counts.get(bitstring).copied().unwrap_or(0)
    }

    /// Total number of shots recorded.
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// Drawn outcomes and their counts, sorted by bitstring.
    pub fn counts(&self) -> &BTreeMap<String, usize> {
        &self.counts
    }

    /// Count / shots for every drawn outcome.
    pub fn frequencies(&self) -> BTreeMap<String, f64> {
        self.counts
            .iter()
            .map(|(bits, count)| (bits.clone(), *count as f64 / self.shots as f64))
            .collect()
    }

    /// Returns `true` if no shot was recorded.
    pub fn is_empty(&self) -> bool {
        self.shots == 0
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Histogram ({} shots):", self.shots)?;
        if self.counts.is_empty() {
            writeln!(f, "  No outcomes recorded.")?;
        } else {
            for (bits, count) in &self.counts {
                writeln!(f, "    {}: {}", bits, count)?;
            }
        }
        Ok(())
    }
}
