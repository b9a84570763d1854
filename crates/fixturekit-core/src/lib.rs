//! Fixturekit core.
//!
//! This crate defines the random source, clock and error types that every
//! generator in `fixturekit-random` depends on. It contains no generators.

pub mod clock;
pub mod config;
pub mod error;
pub mod rng;
