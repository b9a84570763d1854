//! Times of day, drawn over the nanosecond-of-day domain.

use chrono::{NaiveTime, TimeDelta, Timelike};
use fixturekit_core::error::{FixtureError, ensure};
use fixturekit_core::rng::DeterministicRng;

use super::field::{
    CalendarField, random_field, random_field_after, random_field_before, random_field_between,
};

const NANOS_PER_SECOND: i64 = 1_000_000_000;
pub(crate) const NANOS_PER_DAY: i64 = 86_400 * NANOS_PER_SECOND;

/// The last representable time of day, `23:59:59.999999999`.
pub(crate) fn last_time() -> NaiveTime {
    NaiveTime::MIN - TimeDelta::nanoseconds(1)
}

/// Leap-second representations are folded into the final nanosecond of
/// their second.
fn nano_of_day(time: NaiveTime) -> i64 {
    let nanos = time.nanosecond().min(999_999_999);
    i64::from(time.num_seconds_from_midnight()) * NANOS_PER_SECOND + i64::from(nanos)
}

fn time_from_nano_of_day(nano_of_day: i64) -> NaiveTime {
    let secs = u32::try_from(nano_of_day.div_euclid(NANOS_PER_SECOND)).unwrap_or(0);
    let nanos = u32::try_from(nano_of_day.rem_euclid(NANOS_PER_SECOND)).unwrap_or(0);
    NaiveTime::from_num_seconds_from_midnight_opt(secs, nanos).unwrap_or(NaiveTime::MIN)
}

/// Returns a random time of day.
pub fn random_time(rng: &mut dyn DeterministicRng) -> NaiveTime {
    time_from_nano_of_day(random_field(rng, CalendarField::NanoOfDay))
}

/// Returns a random time of day in `[start_inclusive, end_exclusive)`.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if `end_exclusive` is earlier than
/// `start_inclusive`.
pub fn random_time_between(
    rng: &mut dyn DeterministicRng,
    start_inclusive: NaiveTime,
    end_exclusive: NaiveTime,
) -> Result<NaiveTime, FixtureError> {
    ensure(start_inclusive <= end_exclusive, || {
        "End must be on or after start"
    })?;
    let nanos = random_field_between(
        rng,
        CalendarField::NanoOfDay,
        nano_of_day(start_inclusive),
        nano_of_day(end_exclusive),
    )?;
    Ok(time_from_nano_of_day(nanos))
}

/// Returns a random time of day strictly after `after`.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if `after` is the last
/// representable time of day.
pub fn random_time_after(
    rng: &mut dyn DeterministicRng,
    after: NaiveTime,
) -> Result<NaiveTime, FixtureError> {
    let last = last_time();
    ensure(after < last, || format!("After must be before {last}"))?;
    let nanos = random_field_after(rng, CalendarField::NanoOfDay, nano_of_day(after))?;
    Ok(time_from_nano_of_day(nanos))
}

/// Returns a random time of day strictly before `before`.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if `before` is midnight.
pub fn random_time_before(
    rng: &mut dyn DeterministicRng,
    before: NaiveTime,
) -> Result<NaiveTime, FixtureError> {
    ensure(before > NaiveTime::MIN, || {
        format!("Before must be after {}", NaiveTime::MIN)
    })?;
    let nanos = random_field_before(rng, CalendarField::NanoOfDay, nano_of_day(before))?;
    Ok(time_from_nano_of_day(nanos))
}
