//! Fixturekit: random values for test fixtures.
//!
//! Generators are grouped by what they produce:
//!
//! - [`number`]: integers and floats in half-open ranges
//! - [`temporal`]: instants, dates, times and calendar fragments bounded to
//!   `1970-01-01T00:00:00Z ..= 9999-12-31T00:00:00Z`
//! - [`collection`] and [`enums`]: uniform picks, with exclusions, and
//!   filled vectors and sets
//! - [`dates`]: deterministic start/end-of-day and leap-day helpers
//!
//! Every generator takes the random source explicitly as
//! `&mut dyn DeterministicRng`, and fails with
//! [`FixtureError::InvalidArgument`] when its preconditions are violated.

pub mod collection;
pub mod dates;
pub mod enums;
pub mod number;
pub mod temporal;

pub use fixturekit_core::clock::{Clock, FixedClock, SystemClock};
pub use fixturekit_core::error::FixtureError;
pub use fixturekit_core::rng::{DeterministicRng, SeededRng, with_thread_rng};
