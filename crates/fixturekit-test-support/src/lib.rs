//! Shared test doubles for Fixturekit.

mod rng;

pub use rng::{MaxRng, MockRng, SequenceRng};
