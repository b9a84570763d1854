//! Raw values for individual calendar and clock fields.

use chrono::{Datelike, NaiveDate};
use fixturekit_core::error::{FixtureError, ensure};
use fixturekit_core::rng::DeterministicRng;

use super::time::NANOS_PER_DAY;
use crate::number::{RandomNumber, random_in_range};

/// A calendar or clock field with a fixed range of valid values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarField {
    NanoOfSecond,
    NanoOfDay,
    MicroOfSecond,
    MicroOfDay,
    MilliOfSecond,
    MilliOfDay,
    SecondOfMinute,
    SecondOfDay,
    MinuteOfHour,
    MinuteOfDay,
    HourOfDay,
    /// Monday is 1, Sunday is 7.
    DayOfWeek,
    DayOfMonth,
    DayOfYear,
    MonthOfYear,
    /// Proleptic year, over the years chrono can represent.
    Year,
}

impl CalendarField {
    /// Smallest valid value.
    #[must_use]
    pub fn min(self) -> i64 {
        match self {
            Self::DayOfWeek | Self::DayOfMonth | Self::DayOfYear | Self::MonthOfYear => 1,
            Self::Year => i64::from(NaiveDate::MIN.year()),
            _ => 0,
        }
    }

    /// Largest valid value.
    #[must_use]
    pub fn max(self) -> i64 {
        match self {
            Self::NanoOfSecond => 999_999_999,
            Self::NanoOfDay => NANOS_PER_DAY - 1,
            Self::MicroOfSecond => 999_999,
            Self::MicroOfDay => NANOS_PER_DAY / 1_000 - 1,
            Self::MilliOfSecond => 999,
            Self::MilliOfDay => NANOS_PER_DAY / 1_000_000 - 1,
            Self::SecondOfMinute | Self::MinuteOfHour => 59,
            Self::SecondOfDay => 86_399,
            Self::MinuteOfDay => 1_439,
            Self::HourOfDay => 23,
            Self::DayOfWeek => 7,
            Self::DayOfMonth => 31,
            Self::DayOfYear => 366,
            Self::MonthOfYear => 12,
            Self::Year => i64::from(NaiveDate::MAX.year()),
        }
    }
}

/// Returns any valid value of `field`, both ends included.
pub fn random_field(rng: &mut dyn DeterministicRng, field: CalendarField) -> i64 {
    i64::sample(rng, field.min(), field.max() + 1)
}

/// Returns a value of `field` in `[start_inclusive, end_exclusive)`.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if a bound lies outside the
/// field's range or the end precedes the start.
pub fn random_field_between(
    rng: &mut dyn DeterministicRng,
    field: CalendarField,
    start_inclusive: i64,
    end_exclusive: i64,
) -> Result<i64, FixtureError> {
    let (min, max) = (field.min(), field.max());
    ensure(start_inclusive >= min, || format!("Start must be on or after {min}"))?;
    ensure(end_exclusive <= max, || format!("End must be on or before {max}"))?;
    ensure(start_inclusive <= end_exclusive, || {
        "End must be on or after start"
    })?;
    random_in_range(rng, start_inclusive, end_exclusive)
}

/// Returns a value of `field` strictly greater than `after`.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if `after` is the field's
/// maximum or lies outside its range.
pub fn random_field_after(
    rng: &mut dyn DeterministicRng,
    field: CalendarField,
    after: i64,
) -> Result<i64, FixtureError> {
    let (min, max) = (field.min(), field.max());
    ensure(after < max, || format!("After must be before {max}"))?;
    ensure(after >= min, || format!("After must be on or after {min}"))?;
    random_in_range(rng, after + 1, max + 1)
}

/// Returns a value of `field` strictly less than `before`.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if `before` is the field's
/// minimum or lies outside its range.
pub fn random_field_before(
    rng: &mut dyn DeterministicRng,
    field: CalendarField,
    before: i64,
) -> Result<i64, FixtureError> {
    let (min, max) = (field.min(), field.max());
    ensure(before > min, || format!("Before must be after {min}"))?;
    ensure(before <= max, || format!("Before must be on or before {max}"))?;
    random_in_range(rng, min, before)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use fixturekit_core::rng::SeededRng;
    use fixturekit_test_support::{MaxRng, MockRng};
    use rstest::rstest;

    use super::*;

    const TRIALS: usize = 500;

    #[rstest]
    #[case(CalendarField::HourOfDay, 0, 23)]
    #[case(CalendarField::DayOfWeek, 1, 7)]
    #[case(CalendarField::DayOfMonth, 1, 31)]
    #[case(CalendarField::MonthOfYear, 1, 12)]
    #[case(CalendarField::NanoOfDay, 0, 86_399_999_999_999)]
    #[case(CalendarField::MilliOfDay, 0, 86_399_999)]
    fn test_random_field_reaches_both_inclusive_ends(
        #[case] field: CalendarField,
        #[case] min: i64,
        #[case] max: i64,
    ) {
        assert_eq!((field.min(), field.max()), (min, max));
        assert_eq!(random_field(&mut MockRng, field), min);
        assert_eq!(random_field(&mut MaxRng, field), max);
    }

    #[test]
    fn test_random_hour_covers_the_day() {
        let mut rng = SeededRng::from_seed(101);
        let hours: HashSet<i64> = (0..TRIALS)
            .map(|_| random_field(&mut rng, CalendarField::HourOfDay))
            .collect();
        assert_eq!(hours.len(), 24);
    }

    #[test]
    fn test_year_field_spans_chrono_range() {
        let mut rng = SeededRng::from_seed(102);
        for _ in 0..TRIALS {
            let year = random_field(&mut rng, CalendarField::Year);
            let year = i32::try_from(year).unwrap();
            assert!(NaiveDate::from_ymd_opt(year, 1, 1).is_some());
        }
    }

    #[test]
    fn test_between_after_and_before_respect_bounds() {
        let mut rng = SeededRng::from_seed(103);
        for _ in 0..TRIALS {
            let day = random_field_between(&mut rng, CalendarField::DayOfMonth, 10, 20).unwrap();
            assert!((10..20).contains(&day));
            assert!(random_field_after(&mut rng, CalendarField::HourOfDay, 12).unwrap() > 12);
            assert!(random_field_before(&mut rng, CalendarField::HourOfDay, 13).unwrap() < 13);
        }
        assert_eq!(random_field_after(&mut MaxRng, CalendarField::HourOfDay, 12).unwrap(), 23);
        assert_eq!(random_field_before(&mut MockRng, CalendarField::MonthOfYear, 5).unwrap(), 1);
        assert_eq!(
            random_field_between(&mut rng, CalendarField::MonthOfYear, 4, 4).unwrap(),
            4
        );
    }

    #[rstest]
    #[case(0, 10, "Start must be on or after 1")]
    #[case(1, 32, "End must be on or before 31")]
    #[case(20, 10, "End must be on or after start")]
    fn test_between_rejects_bad_bounds(#[case] start: i64, #[case] end: i64, #[case] message: &str) {
        let err =
            random_field_between(&mut MockRng, CalendarField::DayOfMonth, start, end).unwrap_err();
        assert_eq!(err.message(), message);
    }

    #[rstest]
    #[case(23, "After must be before 23")]
    #[case(-1, "After must be on or after 0")]
    fn test_after_rejects_bad_reference(#[case] after: i64, #[case] message: &str) {
        let err = random_field_after(&mut MockRng, CalendarField::HourOfDay, after).unwrap_err();
        assert_eq!(err.message(), message);
    }

    #[rstest]
    #[case(1, "Before must be after 1")]
    #[case(13, "Before must be on or before 12")]
    fn test_before_rejects_bad_reference(#[case] before: i64, #[case] message: &str) {
        let err = random_field_before(&mut MockRng, CalendarField::MonthOfYear, before).unwrap_err();
        assert_eq!(err.message(), message);
    }
}
