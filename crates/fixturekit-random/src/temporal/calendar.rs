//! Calendar fragments: years, year-months, month-days, weekdays, months.

use std::fmt;

use chrono::{Datelike, Month, NaiveDate, Weekday};
use fixturekit_core::clock::Clock;
use fixturekit_core::error::{FixtureError, ensure};
use fixturekit_core::rng::DeterministicRng;

use super::date_time::{random_date_after, random_date_before, random_date_between};
use super::{MAX_YEAR, MIN_YEAR};
use crate::collection::pick;
use crate::enums::RandomEnum;
use crate::number::{RandomNumber, random_in_range};

/// Leap year that month-day draws run in when leap day is allowed.
const LEAP_YEAR: i32 = 2004;
/// Common year that month-day draws run in when leap day is excluded.
const COMMON_YEAR: i32 = LEAP_YEAR - 1;

pub(crate) fn month_from_number(number: u32) -> Month {
    u8::try_from(number)
        .ok()
        .and_then(|n| Month::try_from(n).ok())
        .unwrap_or(Month::January)
}

fn days_in_month(year: i32, month: Month) -> u32 {
    match month {
        Month::February if NaiveDate::from_ymd_opt(year, 1, 1).is_some_and(|d| d.leap_year()) => 29,
        Month::February => 28,
        Month::April | Month::June | Month::September | Month::November => 30,
        _ => 31,
    }
}

/// A month of a specific year, e.g. `2024-02`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    first_day: NaiveDate,
}

impl YearMonth {
    /// Returns `None` if the year is outside chrono's supported range.
    #[must_use]
    pub fn new(year: i32, month: Month) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month.number_from_month(), 1).map(|first_day| Self { first_day })
    }

    /// The month containing `date`.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            first_day: date.with_day(1).unwrap_or(date),
        }
    }

    /// The calendar year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    /// The month of the year.
    #[must_use]
    pub fn month(&self) -> Month {
        month_from_number(self.first_day.month())
    }

    /// The 1st of the month.
    #[must_use]
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// The last day of the month, accounting for leap years.
    #[must_use]
    pub fn last_day(&self) -> NaiveDate {
        let last = days_in_month(self.year(), self.month());
        self.first_day.with_day(last).unwrap_or(self.first_day)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.first_day.month())
    }
}

/// A day of the year without a year, e.g. `--02-29`.
///
/// Ordered January 1st through December 31st, with leap day between
/// February 28th and March 1st.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    // Anchored in a leap year so February 29th is representable.
    date: NaiveDate,
}

impl MonthDay {
    /// February 29th.
    pub const LEAP_DAY: MonthDay = MonthDay {
        date: match NaiveDate::from_ymd_opt(LEAP_YEAR, 2, 29) {
            Some(date) => date,
            None => NaiveDate::MIN,
        },
    };

    /// Returns `None` if `day` does not exist in `month`.
    #[must_use]
    pub fn new(month: Month, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(LEAP_YEAR, month.number_from_month(), day).map(|date| Self { date })
    }

    /// The month-day of `date`.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(month_from_number(date.month()), date.day()).unwrap_or(Self::LEAP_DAY)
    }

    /// The month of the year.
    #[must_use]
    pub fn month(&self) -> Month {
        month_from_number(self.date.month())
    }

    /// The day of the month, `1..=31`.
    #[must_use]
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// True for February 29th.
    #[must_use]
    pub fn is_leap_day(&self) -> bool {
        *self == Self::LEAP_DAY
    }

    /// The first date of `year` on or after this month-day. Leap day rolls
    /// forward to March 1st in a common year.
    fn on_or_after_in(self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.date.month(), self.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
            .unwrap_or(self.date)
    }

    /// The last date of `year` on or before this month-day. Leap day rolls
    /// back to February 28th in a common year.
    fn on_or_before_in(self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.date.month(), self.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
            .unwrap_or(self.date)
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--{:02}-{:02}", self.date.month(), self.day())
    }
}

/// Returns a random day of the week.
pub fn random_weekday(rng: &mut dyn DeterministicRng) -> Weekday {
    *pick(rng, Weekday::VARIANTS)
}

/// Returns a random month.
pub fn random_month(rng: &mut dyn DeterministicRng) -> Month {
    *pick(rng, Month::VARIANTS)
}

/// Returns a random year in `[MIN_YEAR, MAX_YEAR)`.
pub fn random_year(rng: &mut dyn DeterministicRng) -> i32 {
    i32::sample(rng, MIN_YEAR, MAX_YEAR)
}

/// Returns a random year in `[start_inclusive, end_exclusive)`.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if either bound falls outside
/// `[MIN_YEAR, MAX_YEAR]` or the end precedes the start.
pub fn random_year_between(
    rng: &mut dyn DeterministicRng,
    start_inclusive: i32,
    end_exclusive: i32,
) -> Result<i32, FixtureError> {
    ensure(start_inclusive < MAX_YEAR, || format!("Start must be before {MAX_YEAR}"))?;
    ensure(start_inclusive >= MIN_YEAR, || {
        format!("Start must be on or after {MIN_YEAR}")
    })?;
    ensure(end_exclusive > MIN_YEAR, || format!("End must be after {MIN_YEAR}"))?;
    ensure(end_exclusive <= MAX_YEAR, || {
        format!("End must be on or before {MAX_YEAR}")
    })?;
    ensure(start_inclusive <= end_exclusive, || {
        "End must be on or after start"
    })?;
    random_in_range(rng, start_inclusive, end_exclusive)
}

/// Returns a random year strictly after `after`, no earlier than `MIN_YEAR`.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if `after` is `MAX_YEAR - 1` or
/// later, since no year of the range follows it.
pub fn random_year_after(rng: &mut dyn DeterministicRng, after: i32) -> Result<i32, FixtureError> {
    ensure(after < MAX_YEAR - 1, || {
        format!("Cannot produce year after {}", MAX_YEAR - 1)
    })?;
    random_in_range(rng, after.saturating_add(1).max(MIN_YEAR), MAX_YEAR)
}

/// Returns a random year strictly before `before`, no earlier than
/// `MIN_YEAR`.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if `before` is not after
/// `MIN_YEAR`.
pub fn random_year_before(rng: &mut dyn DeterministicRng, before: i32) -> Result<i32, FixtureError> {
    ensure(before > MIN_YEAR, || format!("Before must be after {MIN_YEAR}"))?;
    random_in_range(rng, MIN_YEAR, before.min(MAX_YEAR))
}

/// Returns a random year after the clock's current year.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if the clock reads the final
/// years of the range.
pub fn random_future_year(
    rng: &mut dyn DeterministicRng,
    clock: &dyn Clock,
) -> Result<i32, FixtureError> {
    random_year_after(rng, clock.now().year())
}

/// Returns a random year before the clock's current year.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if the clock reads `MIN_YEAR`.
pub fn random_past_year(
    rng: &mut dyn DeterministicRng,
    clock: &dyn Clock,
) -> Result<i32, FixtureError> {
    random_year_before(rng, clock.now().year())
}

/// Returns a random month of a random date in the instant range.
pub fn random_year_month(rng: &mut dyn DeterministicRng) -> YearMonth {
    YearMonth::from_date(super::random_date(rng))
}

/// Returns a random year-month in `[start_inclusive, end_exclusive)`.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if the end precedes the start or
/// either bound lies outside the instant range.
pub fn random_year_month_between(
    rng: &mut dyn DeterministicRng,
    start_inclusive: YearMonth,
    end_exclusive: YearMonth,
) -> Result<YearMonth, FixtureError> {
    let date = random_date_between(rng, start_inclusive.first_day(), end_exclusive.first_day())?;
    Ok(YearMonth::from_date(date))
}

/// Returns a random year-month strictly after `after`.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if no later month is in range.
pub fn random_year_month_after(
    rng: &mut dyn DeterministicRng,
    after: YearMonth,
) -> Result<YearMonth, FixtureError> {
    Ok(YearMonth::from_date(random_date_after(rng, after.last_day())?))
}

/// Returns a random year-month strictly before `before`.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if no earlier month is in range.
pub fn random_year_month_before(
    rng: &mut dyn DeterministicRng,
    before: YearMonth,
) -> Result<YearMonth, FixtureError> {
    Ok(YearMonth::from_date(random_date_before(rng, before.first_day())?))
}

/// Returns a random year-month after the clock's current month.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if no later month is in range.
pub fn random_future_year_month(
    rng: &mut dyn DeterministicRng,
    clock: &dyn Clock,
) -> Result<YearMonth, FixtureError> {
    random_year_month_after(rng, YearMonth::from_date(clock.now().date_naive()))
}

/// Returns a random year-month before the clock's current month.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if no earlier month is in range.
pub fn random_past_year_month(
    rng: &mut dyn DeterministicRng,
    clock: &dyn Clock,
) -> Result<YearMonth, FixtureError> {
    random_year_month_before(rng, YearMonth::from_date(clock.now().date_naive()))
}

/// Whether the clock's current year has a leap day.
pub fn include_leap_day_this_year(clock: &dyn Clock) -> bool {
    clock.now().date_naive().leap_year()
}

fn draw_year(include_leap_day: bool) -> i32 {
    if include_leap_day { LEAP_YEAR } else { COMMON_YEAR }
}

/// Returns a random month-day: a random month, then a random day of that
/// month. A sampled leap day is redrawn when `include_leap_day` is false.
pub fn random_month_day(rng: &mut dyn DeterministicRng, include_leap_day: bool) -> MonthDay {
    loop {
        let month = random_month(rng);
        let length = u64::from(days_in_month(LEAP_YEAR, month));
        let day = u32::try_from(rng.next_u64_below(length) + 1).unwrap_or(1);
        let Some(month_day) = MonthDay::new(month, day) else {
            continue;
        };
        if month_day.is_leap_day() && !include_leap_day {
            tracing::trace!("sampled leap day while excluded, drawing again");
            continue;
        }
        return month_day;
    }
}

/// Returns a random month-day in `[start_inclusive, end_exclusive)`.
///
/// Equal bounds return the start. Without leap day the range is taken in a
/// common year, where a leap-day bound rolls forward to March 1st.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if the end precedes the start,
/// both bounds are leap day while it is excluded, or leap day is excluded
/// and it is the only day in the range.
pub fn random_month_day_between(
    rng: &mut dyn DeterministicRng,
    start_inclusive: MonthDay,
    end_exclusive: MonthDay,
    include_leap_day: bool,
) -> Result<MonthDay, FixtureError> {
    ensure(
        include_leap_day || !start_inclusive.is_leap_day() || !end_exclusive.is_leap_day(),
        || "Start and End can't both be leap day",
    )?;
    ensure(start_inclusive <= end_exclusive, || {
        "End must be on or after start"
    })?;
    if start_inclusive == end_exclusive {
        return Ok(start_inclusive);
    }
    let year = draw_year(include_leap_day);
    let start = start_inclusive.on_or_after_in(year);
    let end = end_exclusive.on_or_after_in(year);
    ensure(start < end, || "Range only consists of leap day")?;
    Ok(MonthDay::from_date(random_date_between(rng, start, end)?))
}

/// Returns a random month-day strictly after `after`, up to December 31st.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if `after` is December 31st.
pub fn random_month_day_after(
    rng: &mut dyn DeterministicRng,
    after: MonthDay,
    include_leap_day: bool,
) -> Result<MonthDay, FixtureError> {
    ensure(!(after.date.month() == 12 && after.day() == 31), || {
        "After must be before December 31st"
    })?;
    let year = draw_year(include_leap_day);
    let start = after
        .on_or_before_in(year)
        .succ_opt()
        .unwrap_or(after.date);
    let end = NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap_or(start);
    Ok(MonthDay::from_date(random_date_between(rng, start, end)?))
}

/// Returns a random month-day strictly before `before`, from January 1st.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if `before` is January 1st.
pub fn random_month_day_before(
    rng: &mut dyn DeterministicRng,
    before: MonthDay,
    include_leap_day: bool,
) -> Result<MonthDay, FixtureError> {
    ensure(before.date.ordinal() > 1, || "Before must be after January 1st")?;
    let year = draw_year(include_leap_day);
    let start = NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(before.date);
    Ok(MonthDay::from_date(random_date_between(
        rng,
        start,
        before.on_or_after_in(year),
    )?))
}
