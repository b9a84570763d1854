//! Random numbers in half-open ranges, including signed ranges.
//!
//! Unlike most helpers of this kind, the full signed domain is supported:
//! `random_any::<i64>` draws from `[i64::MIN, i64::MAX)`.

use std::fmt;

use fixturekit_core::error::{FixtureError, ensure};
use fixturekit_core::rng::DeterministicRng;

/// A numeric domain the generators in this module can sample.
pub trait RandomNumber: Copy + PartialOrd + fmt::Display {
    /// Smallest value of the domain.
    const MIN: Self;
    /// Largest value of the domain.
    const MAX: Self;
    /// Additive identity.
    const ZERO: Self;
    /// Type name used in error messages.
    const NAME: &'static str;

    /// Draws uniformly from `[start, end)`. Callers guarantee `start < end`.
    fn sample(rng: &mut dyn DeterministicRng, start: Self, end: Self) -> Self;

    /// Smallest value strictly greater than `self`, saturating at `MAX`.
    #[must_use]
    fn successor(self) -> Self;
}

macro_rules! impl_random_integer {
    ($($ty:ty => $name:literal),* $(,)?) => {$(
        impl RandomNumber for $ty {
            const MIN: Self = <$ty>::MIN;
            const MAX: Self = <$ty>::MAX;
            const ZERO: Self = 0;
            const NAME: &'static str = $name;

            #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
            fn sample(rng: &mut dyn DeterministicRng, start: Self, end: Self) -> Self {
                // The widest span, MIN..MAX of a 64-bit type, is 2^64 - 1.
                let span = (i128::from(end) - i128::from(start)) as u64;
                let offset = rng.next_u64_below(span);
                (i128::from(start) + i128::from(offset)) as Self
            }

            fn successor(self) -> Self {
                self.saturating_add(1)
            }
        }
    )*};
}

impl_random_integer!(i32 => "i32", i64 => "i64");

impl RandomNumber for f64 {
    const MIN: Self = -f64::MAX;
    const MAX: Self = f64::MAX;
    const ZERO: Self = 0.0;
    const NAME: &'static str = "f64";

    fn sample(rng: &mut dyn DeterministicRng, start: Self, end: Self) -> Self {
        let u = rng.next_f64();
        // Interpolating instead of `start + u * (end - start)` keeps
        // `-MAX..MAX` finite.
        let value = start * (1.0 - u) + end * u;
        if value >= end {
            end.next_down().max(start)
        } else {
            value.max(start)
        }
    }

    fn successor(self) -> Self {
        if self >= f64::MAX { f64::MAX } else { self.next_up() }
    }
}

/// Returns a random number in `[start_inclusive, end_exclusive)`.
///
/// Equal bounds are a well-formed single-value range and return the bound.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if `end_exclusive < start_inclusive`.
pub fn random_in_range<N: RandomNumber>(
    rng: &mut dyn DeterministicRng,
    start_inclusive: N,
    end_exclusive: N,
) -> Result<N, FixtureError> {
    ensure(start_inclusive <= end_exclusive, || {
        "End must be greater than or equal to start"
    })?;
    if start_inclusive == end_exclusive {
        return Ok(start_inclusive);
    }
    Ok(N::sample(rng, start_inclusive, end_exclusive))
}

/// Returns a random number which may be positive, negative, or zero.
pub fn random_any<N: RandomNumber>(rng: &mut dyn DeterministicRng) -> N {
    N::sample(rng, N::MIN, N::MAX)
}

/// Returns a random number strictly greater than zero.
pub fn random_positive<N: RandomNumber>(rng: &mut dyn DeterministicRng) -> N {
    N::sample(rng, N::ZERO.successor(), N::MAX)
}

/// Returns a random number strictly less than zero.
pub fn random_negative<N: RandomNumber>(rng: &mut dyn DeterministicRng) -> N {
    N::sample(rng, N::MIN, N::ZERO)
}

/// Returns a random number strictly greater than `min_exclusive`.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if `min_exclusive` is already the
/// largest value of the domain.
pub fn random_greater_than<N: RandomNumber>(
    rng: &mut dyn DeterministicRng,
    min_exclusive: N,
) -> Result<N, FixtureError> {
    ensure(min_exclusive < N::MAX, || {
        format!("Cannot produce {} greater than {}", N::NAME, N::MAX)
    })?;
    random_in_range(rng, min_exclusive.successor(), N::MAX)
}

/// Returns a random number strictly less than `max_exclusive`.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if `max_exclusive` is already the
/// smallest value of the domain.
pub fn random_less_than<N: RandomNumber>(
    rng: &mut dyn DeterministicRng,
    max_exclusive: N,
) -> Result<N, FixtureError> {
    ensure(max_exclusive > N::MIN, || {
        format!("Cannot produce {} less than {}", N::NAME, N::MIN)
    })?;
    random_in_range(rng, N::MIN, max_exclusive)
}
