//! Zoned date-times, naive date-times and dates, all derived from instants.
//!
//! Naive values are read and written as UTC wall time.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use fixturekit_core::clock::Clock;
use fixturekit_core::error::FixtureError;
use fixturekit_core::rng::DeterministicRng;

use super::time::last_time;
use super::{random_instant, random_instant_after, random_instant_before, random_instant_between};

/// Returns a random date-time in `zone` between `MIN_INSTANT` and
/// `MAX_INSTANT`.
pub fn random_date_time_in<Tz: TimeZone>(rng: &mut dyn DeterministicRng, zone: &Tz) -> DateTime<Tz> {
    random_instant(rng).with_timezone(zone)
}

/// Returns a random date-time in `[start_inclusive, end_exclusive)`,
/// expressed in the start's time zone.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` under the same conditions as
/// [`random_instant_between`](super::random_instant_between).
pub fn random_date_time_between<Tz: TimeZone>(
    rng: &mut dyn DeterministicRng,
    start_inclusive: &DateTime<Tz>,
    end_exclusive: &DateTime<Tz>,
) -> Result<DateTime<Tz>, FixtureError> {
    let instant = random_instant_between(
        rng,
        start_inclusive.with_timezone(&Utc),
        end_exclusive.with_timezone(&Utc),
    )?;
    Ok(instant.with_timezone(&start_inclusive.timezone()))
}

/// Returns a random date-time strictly after `after`, in its time zone.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if `after` is not before
/// `MAX_INSTANT`.
pub fn random_date_time_after<Tz: TimeZone>(
    rng: &mut dyn DeterministicRng,
    after: &DateTime<Tz>,
) -> Result<DateTime<Tz>, FixtureError> {
    let instant = random_instant_after(rng, after.with_timezone(&Utc))?;
    Ok(instant.with_timezone(&after.timezone()))
}

/// Returns a random date-time strictly before `before`, in its time zone.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if `before` is not after
/// `MIN_INSTANT`.
pub fn random_date_time_before<Tz: TimeZone>(
    rng: &mut dyn DeterministicRng,
    before: &DateTime<Tz>,
) -> Result<DateTime<Tz>, FixtureError> {
    let instant = random_instant_before(rng, before.with_timezone(&Utc))?;
    Ok(instant.with_timezone(&before.timezone()))
}

/// Returns a random naive date-time.
pub fn random_naive_date_time(rng: &mut dyn DeterministicRng) -> NaiveDateTime {
    random_instant(rng).naive_utc()
}

/// Returns a random naive date-time in `[start_inclusive, end_exclusive)`.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if the end precedes the start or a
/// bound falls outside the representable range.
pub fn random_naive_date_time_between(
    rng: &mut dyn DeterministicRng,
    start_inclusive: NaiveDateTime,
    end_exclusive: NaiveDateTime,
) -> Result<NaiveDateTime, FixtureError> {
    let instant =
        random_instant_between(rng, start_inclusive.and_utc(), end_exclusive.and_utc())?;
    Ok(instant.naive_utc())
}

/// Returns a random naive date-time strictly after `after`.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if `after` is not before
/// `MAX_INSTANT`.
pub fn random_naive_date_time_after(
    rng: &mut dyn DeterministicRng,
    after: NaiveDateTime,
) -> Result<NaiveDateTime, FixtureError> {
    Ok(random_instant_after(rng, after.and_utc())?.naive_utc())
}

/// Returns a random naive date-time strictly before `before`.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if `before` is not after
/// `MIN_INSTANT`.
pub fn random_naive_date_time_before(
    rng: &mut dyn DeterministicRng,
    before: NaiveDateTime,
) -> Result<NaiveDateTime, FixtureError> {
    Ok(random_instant_before(rng, before.and_utc())?.naive_utc())
}

/// Returns a random naive date-time after the clock's current UTC wall time.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if the clock reads at or past
/// `MAX_INSTANT`.
pub fn random_future_naive_date_time(
    rng: &mut dyn DeterministicRng,
    clock: &dyn Clock,
) -> Result<NaiveDateTime, FixtureError> {
    random_naive_date_time_after(rng, clock.now().naive_utc())
}

/// Returns a random naive date-time before the clock's current UTC wall time.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if the clock reads at or before
/// the epoch.
pub fn random_past_naive_date_time(
    rng: &mut dyn DeterministicRng,
    clock: &dyn Clock,
) -> Result<NaiveDateTime, FixtureError> {
    random_naive_date_time_before(rng, clock.now().naive_utc())
}

/// Returns a random date.
pub fn random_date(rng: &mut dyn DeterministicRng) -> NaiveDate {
    random_instant(rng).date_naive()
}

/// Returns a random date in `[start_inclusive, end_exclusive)`.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if the end precedes the start or a
/// bound falls outside the representable range.
pub fn random_date_between(
    rng: &mut dyn DeterministicRng,
    start_inclusive: NaiveDate,
    end_exclusive: NaiveDate,
) -> Result<NaiveDate, FixtureError> {
    let instant = random_instant_between(
        rng,
        start_inclusive.and_time(NaiveTime::MIN).and_utc(),
        end_exclusive.and_time(NaiveTime::MIN).and_utc(),
    )?;
    Ok(instant.date_naive())
}

/// Returns a random date strictly after `after`.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if no representable date follows
/// `after`.
pub fn random_date_after(
    rng: &mut dyn DeterministicRng,
    after: NaiveDate,
) -> Result<NaiveDate, FixtureError> {
    // Strictly after the last nanosecond of `after` lands on a later day.
    let last_moment = after.and_time(last_time()).and_utc();
    Ok(random_instant_after(rng, last_moment)?.date_naive())
}

/// Returns a random date strictly before `before`.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if `before` is on or before the
/// epoch's date.
pub fn random_date_before(
    rng: &mut dyn DeterministicRng,
    before: NaiveDate,
) -> Result<NaiveDate, FixtureError> {
    let midnight = before.and_time(NaiveTime::MIN).and_utc();
    Ok(random_instant_before(rng, midnight)?.date_naive())
}

/// Returns a random date after the clock's current UTC date.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if no representable date follows
/// today.
pub fn random_future_date(
    rng: &mut dyn DeterministicRng,
    clock: &dyn Clock,
) -> Result<NaiveDate, FixtureError> {
    random_date_after(rng, clock.now().date_naive())
}

/// Returns a random date before the clock's current UTC date.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if today is the epoch's date.
pub fn random_past_date(
    rng: &mut dyn DeterministicRng,
    clock: &dyn Clock,
) -> Result<NaiveDate, FixtureError> {
    random_date_before(rng, clock.now().date_naive())
}
