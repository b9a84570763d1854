//! Deterministic date helpers: day boundaries and leap-day detection.

use std::fmt;

use chrono::{
    DateTime, Datelike, Local, LocalResult, Month, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta,
    TimeZone, Utc, Weekday,
};
use fixturekit_core::error::FixtureError;

use crate::temporal::{MonthDay, YearMonth};

/// Step used to walk out of a daylight-saving gap.
const GAP_STEP_MINUTES: i64 = 15;

/// The same calendar day, in the value's own zone, at `00:00:00`.
pub fn start_of_day<Tz: TimeZone>(value: &DateTime<Tz>) -> DateTime<Tz> {
    at_wall_time(value, NaiveTime::MIN, TimeDelta::minutes(GAP_STEP_MINUTES))
}

/// The same calendar day, in the value's own zone, at `23:59:59.999999999`.
pub fn end_of_day<Tz: TimeZone>(value: &DateTime<Tz>) -> DateTime<Tz> {
    let last = NaiveTime::MIN - TimeDelta::nanoseconds(1);
    at_wall_time(value, last, TimeDelta::minutes(-GAP_STEP_MINUTES))
}

/// Start of the local calendar day containing `instant`.
pub fn start_of_local_day(instant: DateTime<Utc>) -> DateTime<Local> {
    start_of_day(&instant.with_timezone(&Local))
}

/// End of the local calendar day containing `instant`.
pub fn end_of_local_day(instant: DateTime<Utc>) -> DateTime<Local> {
    end_of_day(&instant.with_timezone(&Local))
}

/// Resolves `time` on the value's local date. Ambiguous wall times pick the
/// instant furthest toward the inside of the day. Wall times swallowed by a
/// gap move by `step` until they exist.
fn at_wall_time<Tz: TimeZone>(value: &DateTime<Tz>, time: NaiveTime, step: TimeDelta) -> DateTime<Tz> {
    let zone = value.timezone();
    let date = value.date_naive();
    let mut wall = date.and_time(time);
    while wall.date() == date {
        match zone.from_local_datetime(&wall) {
            LocalResult::Single(resolved) => return resolved,
            LocalResult::Ambiguous(earliest, latest) => {
                return if step > TimeDelta::zero() { earliest } else { latest };
            }
            LocalResult::None => wall += step,
        }
    }
    value.clone()
}

/// Types that may expose a month of the year and a day of the month.
pub trait CalendarFields: fmt::Debug {
    /// Month of the year, `1..=12`.
    fn month_of_year(&self) -> Option<u32>;

    /// Day of the month, `1..=31`.
    fn day_of_month(&self) -> Option<u32>;
}

impl CalendarFields for NaiveDate {
    fn month_of_year(&self) -> Option<u32> {
        Some(self.month())
    }

    fn day_of_month(&self) -> Option<u32> {
        Some(self.day())
    }
}

impl CalendarFields for NaiveDateTime {
    fn month_of_year(&self) -> Option<u32> {
        Some(self.month())
    }

    fn day_of_month(&self) -> Option<u32> {
        Some(self.day())
    }
}

impl<Tz: TimeZone> CalendarFields for DateTime<Tz> {
    fn month_of_year(&self) -> Option<u32> {
        Some(self.month())
    }

    fn day_of_month(&self) -> Option<u32> {
        Some(self.day())
    }
}

impl CalendarFields for MonthDay {
    fn month_of_year(&self) -> Option<u32> {
        Some(self.month().number_from_month())
    }

    fn day_of_month(&self) -> Option<u32> {
        Some(self.day())
    }
}

impl CalendarFields for YearMonth {
    fn month_of_year(&self) -> Option<u32> {
        Some(self.month().number_from_month())
    }

    fn day_of_month(&self) -> Option<u32> {
        None
    }
}

impl CalendarFields for Month {
    fn month_of_year(&self) -> Option<u32> {
        Some(self.number_from_month())
    }

    fn day_of_month(&self) -> Option<u32> {
        None
    }
}

impl CalendarFields for Weekday {
    fn month_of_year(&self) -> Option<u32> {
        None
    }

    fn day_of_month(&self) -> Option<u32> {
        None
    }
}

impl CalendarFields for NaiveTime {
    fn month_of_year(&self) -> Option<u32> {
        None
    }

    fn day_of_month(&self) -> Option<u32> {
        None
    }
}

/// Whether `value` falls on February 29th.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if `value` has no month of the
/// year or no day of the month.
pub fn is_leap_day<T: CalendarFields + ?Sized>(value: &T) -> Result<bool, FixtureError> {
    let month = value
        .month_of_year()
        .ok_or_else(|| FixtureError::invalid(format!("{value:?} does not support month-of-year")))?;
    let day = value
        .day_of_month()
        .ok_or_else(|| FixtureError::invalid(format!("{value:?} does not support day-of-month")))?;
    Ok(month == 2 && day == 29)
}
