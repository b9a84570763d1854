//! Deterministic `DeterministicRng` implementations for tests.

use fixturekit_core::rng::DeterministicRng;

/// A no-op RNG that always returns `0` for `next_u64_below` and `0.0` for
/// `next_f64`. Every generator built on it yields the low end of its range.
#[derive(Debug)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_u64_below(&mut self, _bound: u64) -> u64 {
        0
    }

    fn next_f64(&mut self) -> f64 {
        0.0
    }
}

/// An RNG that always returns the largest permitted value, driving every
/// generator to the top edge of its half-open range.
#[derive(Debug)]
pub struct MaxRng;

impl DeterministicRng for MaxRng {
    fn next_u64_below(&mut self, bound: u64) -> u64 {
        bound - 1
    }

    fn next_f64(&mut self) -> f64 {
        1.0 - f64::EPSILON / 2.0
    }
}

/// An RNG that returns values from a predetermined sequence, clamped below
/// the requested bound. Panics if the sequence is exhausted. Used in tests
/// that need specific, repeatable picks.
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<u64>,
    index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given values.
    #[must_use]
    pub fn new(values: Vec<u64>) -> Self {
        Self { values, index: 0 }
    }

    /// Returns how many values have been consumed.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.index
    }
}

impl DeterministicRng for SequenceRng {
    fn next_u64_below(&mut self, bound: u64) -> u64 {
        let val = self.values[self.index];
        self.index += 1;
        val.min(bound - 1)
    }

    fn next_f64(&mut self) -> f64 {
        0.0
    }
}
