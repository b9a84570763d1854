//! Random temporal values bounded to a representable calendar range.
//!
//! Every generator reduces its type to a point on a linear domain (epoch
//! milliseconds, nanosecond of day, or calendar year), draws from that domain
//! with [`random_in_range`], and rebuilds the value. Instants are confined to
//! `[MIN_INSTANT, MAX_INSTANT]`: the Unix epoch through
//! `9999-12-31T00:00:00Z`.
//!
//! "Between" ranges are half-open. "After" and "before" are strict. Entry
//! points that read the current time take a [`Clock`].

mod calendar;
mod date_time;
mod field;
mod span;
mod time;

use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};
use fixturekit_core::clock::Clock;
use fixturekit_core::error::{FixtureError, ensure};
use fixturekit_core::rng::DeterministicRng;

use crate::number::{RandomNumber, random_in_range};

pub use calendar::{
    MonthDay, YearMonth, include_leap_day_this_year, random_future_year,
    random_future_year_month, random_month, random_month_day, random_month_day_after,
    random_month_day_before, random_month_day_between, random_past_year, random_past_year_month,
    random_weekday, random_year, random_year_after, random_year_before, random_year_between,
    random_year_month, random_year_month_after, random_year_month_before,
    random_year_month_between,
};
pub use date_time::{
    random_date, random_date_after, random_date_before, random_date_between,
    random_date_time_after, random_date_time_before, random_date_time_between,
    random_date_time_in, random_future_date, random_future_naive_date_time, random_naive_date_time,
    random_naive_date_time_after, random_naive_date_time_before, random_naive_date_time_between,
    random_past_date, random_past_naive_date_time,
};
pub use field::{
    CalendarField, random_field, random_field_after, random_field_before, random_field_between,
};
pub use span::{
    Period, ZonedFixedClock, random_duration, random_fixed_clock, random_negative_duration,
    random_negative_period, random_period, random_positive_duration, random_positive_period,
    random_time_zone, random_zone_offset, random_zoned_fixed_clock,
};
pub use time::{random_time, random_time_after, random_time_before, random_time_between};

/// Earliest year produced by the year generators.
pub const MIN_YEAR: i32 = 1970;

/// Exclusive upper bound of the year generators.
pub const MAX_YEAR: i32 = 9999;

const MIN_EPOCH_MILLIS: i64 = 0;

/// `9999-12-31T00:00:00Z`.
const MAX_EPOCH_MILLIS: i64 = 253_402_214_400_000;

/// The earliest instant any generator produces: the Unix epoch.
#[must_use]
pub fn min_instant() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH
}

/// The latest instant any generator accepts as a bound.
#[must_use]
pub fn max_instant() -> DateTime<Utc> {
    instant_from_millis(MAX_EPOCH_MILLIS)
}

/// Renders an instant the way bound violations are reported,
/// e.g. `9999-12-31T00:00:00Z`.
pub(crate) fn describe(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn instant_from_millis(millis: i64) -> DateTime<Utc> {
    // Callers only pass millis within [MIN_EPOCH_MILLIS, MAX_EPOCH_MILLIS].
    DateTime::from_timestamp_millis(millis).unwrap_or(DateTime::UNIX_EPOCH)
}

/// Epoch milliseconds, rounded up to the next whole millisecond.
fn ceil_millis(instant: &DateTime<Utc>) -> i64 {
    let floor = instant.timestamp_millis();
    if instant.timestamp_subsec_nanos() % 1_000_000 == 0 {
        floor
    } else {
        floor + 1
    }
}

/// Returns a random instant in `[MIN_INSTANT, MAX_INSTANT)`.
pub fn random_instant(rng: &mut dyn DeterministicRng) -> DateTime<Utc> {
    instant_from_millis(i64::sample(rng, MIN_EPOCH_MILLIS, MAX_EPOCH_MILLIS))
}

/// Returns a random instant in `[start_inclusive, end_exclusive)`.
///
/// Equal bounds return `start_inclusive`. Draws are made on whole
/// milliseconds, so a range that contains no millisecond boundary also
/// returns `start_inclusive`.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if the end precedes the start, or
/// either bound lies outside `[MIN_INSTANT, MAX_INSTANT]`.
pub fn random_instant_between(
    rng: &mut dyn DeterministicRng,
    start_inclusive: DateTime<Utc>,
    end_exclusive: DateTime<Utc>,
) -> Result<DateTime<Utc>, FixtureError> {
    ensure(start_inclusive <= end_exclusive, || {
        "End must be on or after start"
    })?;
    ensure(start_inclusive >= min_instant(), || {
        format!("Start must be on or after {}", describe(&min_instant()))
    })?;
    ensure(end_exclusive <= max_instant(), || {
        format!("End must be on or before {}", describe(&max_instant()))
    })?;

    let low = ceil_millis(&start_inclusive);
    let high = ceil_millis(&end_exclusive);
    if low >= high {
        return Ok(start_inclusive);
    }
    let millis = random_in_range(rng, low, high)?;
    Ok(instant_from_millis(millis))
}

/// Returns a random instant strictly after `after` and before `MAX_INSTANT`.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if `after` is not before
/// `MAX_INSTANT`.
pub fn random_instant_after(
    rng: &mut dyn DeterministicRng,
    after: DateTime<Utc>,
) -> Result<DateTime<Utc>, FixtureError> {
    ensure(after < max_instant(), || {
        format!("Cannot produce date after {}", describe(&max_instant()))
    })?;
    let start = (after + TimeDelta::nanoseconds(1)).max(min_instant());
    random_instant_between(rng, start, max_instant())
}

/// Returns a random instant strictly before `before` and on or after
/// `MIN_INSTANT`.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if `before` is not after
/// `MIN_INSTANT`.
pub fn random_instant_before(
    rng: &mut dyn DeterministicRng,
    before: DateTime<Utc>,
) -> Result<DateTime<Utc>, FixtureError> {
    ensure(before > min_instant(), || {
        format!("Cannot produce date before {}", describe(&min_instant()))
    })?;
    random_instant_between(rng, min_instant(), before.min(max_instant()))
}

/// Returns a random instant after the clock's current time.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if the clock reads at or past
/// `MAX_INSTANT`.
pub fn random_future_instant(
    rng: &mut dyn DeterministicRng,
    clock: &dyn Clock,
) -> Result<DateTime<Utc>, FixtureError> {
    random_instant_after(rng, clock.now())
}

/// Returns a random instant before the clock's current time.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if the clock reads at or before
/// the epoch.
pub fn random_past_instant(
    rng: &mut dyn DeterministicRng,
    clock: &dyn Clock,
) -> Result<DateTime<Utc>, FixtureError> {
    random_instant_before(rng, clock.now())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use fixturekit_core::clock::FixedClock;
    use fixturekit_core::rng::SeededRng;
    use fixturekit_test_support::{MaxRng, MockRng};

    use super::*;

    const TRIALS: usize = 500;

    fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_bounds_are_epoch_and_last_day_of_9999() {
        assert_eq!(min_instant(), utc(1970, 1, 1));
        assert_eq!(max_instant(), utc(9999, 12, 31));
        assert_eq!(describe(&max_instant()), "9999-12-31T00:00:00Z");
        assert_eq!(describe(&min_instant()), "1970-01-01T00:00:00Z");
    }

    #[test]
    fn test_random_instant_within_representable_range() {
        let mut rng = SeededRng::from_seed(11);
        for _ in 0..TRIALS {
            let instant = random_instant(&mut rng);
            assert!(instant >= min_instant() && instant < max_instant());
        }
        assert_eq!(random_instant(&mut MockRng), min_instant());
        assert_eq!(
            random_instant(&mut MaxRng),
            max_instant() - TimeDelta::milliseconds(1)
        );
    }

    #[test]
    fn test_between_is_half_open() {
        let start = utc(2000, 1, 1);
        let end = utc(2000, 1, 2);
        let mut rng = SeededRng::from_seed(12);
        for _ in 0..TRIALS {
            let instant = random_instant_between(&mut rng, start, end).unwrap();
            assert!(instant >= start && instant < end);
        }
        assert_eq!(random_instant_between(&mut MockRng, start, end).unwrap(), start);
        assert_eq!(
            random_instant_between(&mut MaxRng, start, end).unwrap(),
            end - TimeDelta::milliseconds(1)
        );
    }

    #[test]
    fn test_between_equal_bounds_returns_start() {
        let at = utc(2010, 6, 15) + TimeDelta::nanoseconds(123);
        let mut rng = SeededRng::from_seed(13);
        assert_eq!(random_instant_between(&mut rng, at, at).unwrap(), at);
    }

    #[test]
    fn test_between_sub_millisecond_bounds_stay_contained() {
        let start = utc(2010, 6, 15) + TimeDelta::microseconds(1_500);
        let end = start + TimeDelta::milliseconds(3);
        let mut rng = SeededRng::from_seed(14);
        for _ in 0..TRIALS {
            let instant = random_instant_between(&mut rng, start, end).unwrap();
            assert!(instant >= start && instant < end, "{instant} escaped");
        }
        let narrow_end = start + TimeDelta::microseconds(200);
        assert_eq!(random_instant_between(&mut rng, start, narrow_end).unwrap(), start);
    }

    #[test]
    fn test_between_rejects_reversed_and_out_of_bounds() {
        let err = random_instant_between(&mut MockRng, utc(2000, 1, 2), utc(2000, 1, 1))
            .unwrap_err();
        assert_eq!(err.message(), "End must be on or after start");

        let before_epoch = min_instant() - TimeDelta::seconds(1);
        let err = random_instant_between(&mut MockRng, before_epoch, utc(2000, 1, 1))
            .unwrap_err();
        assert_eq!(err.message(), "Start must be on or after 1970-01-01T00:00:00Z");

        let beyond = max_instant() + TimeDelta::seconds(1);
        let err = random_instant_between(&mut MockRng, utc(2000, 1, 1), beyond).unwrap_err();
        assert_eq!(err.message(), "End must be on or before 9999-12-31T00:00:00Z");
    }

    #[test]
    fn test_after_is_strict() {
        let after = utc(9000, 1, 1);
        let mut rng = SeededRng::from_seed(15);
        for _ in 0..TRIALS {
            let instant = random_instant_after(&mut rng, after).unwrap();
            assert!(instant > after && instant < max_instant());
        }
        assert_eq!(
            random_instant_after(&mut MockRng, after).unwrap(),
            after + TimeDelta::milliseconds(1)
        );
    }

    #[test]
    fn test_after_max_instant_fails_naming_the_bound() {
        let err = random_instant_after(&mut MockRng, max_instant()).unwrap_err();
        assert_eq!(err.message(), "Cannot produce date after 9999-12-31T00:00:00Z");
    }

    #[test]
    fn test_after_pre_epoch_reference_starts_at_epoch() {
        let after = min_instant() - TimeDelta::days(10);
        assert_eq!(random_instant_after(&mut MockRng, after).unwrap(), min_instant());
    }

    #[test]
    fn test_before_is_strict() {
        let before = utc(1971, 1, 1);
        let mut rng = SeededRng::from_seed(16);
        for _ in 0..TRIALS {
            let instant = random_instant_before(&mut rng, before).unwrap();
            assert!(instant >= min_instant() && instant < before);
        }
        assert_eq!(
            random_instant_before(&mut MaxRng, before).unwrap(),
            before - TimeDelta::milliseconds(1)
        );
    }

    #[test]
    fn test_before_min_instant_fails_naming_the_bound() {
        let err = random_instant_before(&mut MockRng, min_instant()).unwrap_err();
        assert_eq!(err.message(), "Cannot produce date before 1970-01-01T00:00:00Z");
    }

    #[test]
    fn test_future_and_past_follow_the_clock() {
        let now = utc(2026, 10, 19);
        let clock = FixedClock(now);
        let mut rng = SeededRng::from_seed(17);
        for _ in 0..TRIALS {
            assert!(random_future_instant(&mut rng, &clock).unwrap() > now);
            assert!(random_past_instant(&mut rng, &clock).unwrap() < now);
        }
    }
}
