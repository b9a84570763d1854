//! Amounts of time, time zones and frozen clocks.

use std::fmt;

use chrono::{DateTime, FixedOffset, Offset, TimeDelta, Utc};
use chrono_tz::{TZ_VARIANTS, Tz};
use fixturekit_core::clock::{Clock, FixedClock};
use fixturekit_core::rng::DeterministicRng;
use serde::{Deserialize, Serialize};

use super::random_instant;
use crate::collection::pick;
use crate::number::{RandomNumber, random_any, random_negative, random_positive};

/// Widest offset from UTC, 18 hours.
const MAX_ZONE_OFFSET_SECONDS: i32 = 18 * 60 * 60;

/// A calendar amount of years, months and days.
///
/// The fields are independent and are not normalised: 14 months stays 14
/// months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Period {
    /// Whole years.
    pub years: i32,
    /// Whole months, not folded into years.
    pub months: i32,
    /// Whole days, not folded into months.
    pub days: i32,
}

impl Period {
    /// The empty period, `P0D`.
    pub const ZERO: Period = Period::new(0, 0, 0);

    /// Builds a period from its three fields.
    #[must_use]
    pub const fn new(years: i32, months: i32, days: i32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    /// True if every field is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// True if any field is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.years < 0 || self.months < 0 || self.days < 0
    }
}

impl fmt::Display for Period {
    /// ISO-8601 form, e.g. `P1Y-2M3D`. The zero period is `P0D`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("P0D");
        }
        f.write_str("P")?;
        if self.years != 0 {
            write!(f, "{}Y", self.years)?;
        }
        if self.months != 0 {
            write!(f, "{}M", self.months)?;
        }
        if self.days != 0 {
            write!(f, "{}D", self.days)?;
        }
        Ok(())
    }
}

/// Returns a random offset from UTC between -18:00 and +18:00, to the
/// second.
pub fn random_zone_offset(rng: &mut dyn DeterministicRng) -> FixedOffset {
    let seconds = i32::sample(rng, -MAX_ZONE_OFFSET_SECONDS, MAX_ZONE_OFFSET_SECONDS + 1);
    FixedOffset::east_opt(seconds).unwrap_or_else(|| Utc.fix())
}

/// Returns a random named time zone from the IANA database.
pub fn random_time_zone(rng: &mut dyn DeterministicRng) -> Tz {
    *pick(rng, &TZ_VARIANTS)
}

/// Returns a UTC clock frozen at a random instant.
pub fn random_fixed_clock(rng: &mut dyn DeterministicRng) -> FixedClock {
    FixedClock(random_instant(rng))
}

/// A clock frozen at one instant, observed from a named time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZonedFixedClock {
    instant: DateTime<Utc>,
    zone: Tz,
}

impl ZonedFixedClock {
    /// Freezes `instant`, read from `zone`.
    #[must_use]
    pub fn new(instant: DateTime<Utc>, zone: Tz) -> Self {
        Self { instant, zone }
    }

    /// The zone the clock is read from.
    #[must_use]
    pub fn zone(&self) -> Tz {
        self.zone
    }

    /// The frozen instant as wall time in the clock's zone.
    #[must_use]
    pub fn local_now(&self) -> DateTime<Tz> {
        self.instant.with_timezone(&self.zone)
    }
}

impl Clock for ZonedFixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

/// Returns a clock frozen at a random instant in a random named zone.
pub fn random_zoned_fixed_clock(rng: &mut dyn DeterministicRng) -> ZonedFixedClock {
    let instant = random_instant(rng);
    ZonedFixedClock::new(instant, random_time_zone(rng))
}

/// Returns a random duration which may be positive, negative or zero.
pub fn random_duration(rng: &mut dyn DeterministicRng) -> TimeDelta {
    TimeDelta::nanoseconds(random_any(rng))
}

/// Returns a random duration strictly greater than zero.
pub fn random_positive_duration(rng: &mut dyn DeterministicRng) -> TimeDelta {
    TimeDelta::nanoseconds(random_positive(rng))
}

/// Returns a random duration strictly less than zero.
pub fn random_negative_duration(rng: &mut dyn DeterministicRng) -> TimeDelta {
    TimeDelta::nanoseconds(random_negative(rng))
}

/// Returns a period whose fields are each any `i32`.
pub fn random_period(rng: &mut dyn DeterministicRng) -> Period {
    Period::new(random_any(rng), random_any(rng), random_any(rng))
}

/// Returns a period whose fields are all strictly positive.
pub fn random_positive_period(rng: &mut dyn DeterministicRng) -> Period {
    Period::new(random_positive(rng), random_positive(rng), random_positive(rng))
}

/// Returns a period whose fields are all strictly negative.
pub fn random_negative_period(rng: &mut dyn DeterministicRng) -> Period {
    Period::new(random_negative(rng), random_negative(rng), random_negative(rng))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use fixturekit_core::rng::SeededRng;
    use fixturekit_test_support::{MaxRng, MockRng};

    use super::*;
    use crate::temporal::{max_instant, min_instant};

    const TRIALS: usize = 500;

    #[test]
    fn test_zone_offset_stays_within_eighteen_hours() {
        let mut rng = SeededRng::from_seed(91);
        let mut seen = HashSet::new();
        for _ in 0..TRIALS {
            let offset = random_zone_offset(&mut rng);
            assert!(offset.local_minus_utc().abs() <= MAX_ZONE_OFFSET_SECONDS);
            seen.insert(offset.local_minus_utc());
        }
        assert!(seen.len() > TRIALS / 2);
        assert_eq!(random_zone_offset(&mut MockRng).local_minus_utc(), -64_800);
        assert_eq!(random_zone_offset(&mut MaxRng).local_minus_utc(), 64_800);
    }

    #[test]
    fn test_fixed_clock_reads_a_bounded_instant() {
        let mut rng = SeededRng::from_seed(92);
        let clock = random_fixed_clock(&mut rng);
        let now = clock.now();
        assert_eq!(clock.now(), now);
        assert!(now >= min_instant() && now < max_instant());
    }

    #[test]
    fn test_time_zone_draws_from_the_whole_database() {
        let mut rng = SeededRng::from_seed(95);
        let seen: HashSet<Tz> = (0..TRIALS).map(|_| random_time_zone(&mut rng)).collect();
        assert!(seen.len() > 100, "only {} distinct zones", seen.len());
        assert_eq!(random_time_zone(&mut MockRng), TZ_VARIANTS[0]);
        assert_eq!(random_time_zone(&mut MaxRng), TZ_VARIANTS[TZ_VARIANTS.len() - 1]);
    }

    #[test]
    fn test_zoned_fixed_clock_shares_the_instant_across_zones() {
        let mut rng = SeededRng::from_seed(96);
        let clock = random_zoned_fixed_clock(&mut rng);
        let local = clock.local_now();
        assert_eq!(local.with_timezone(&Utc), clock.now());
        assert_eq!(local.timezone(), clock.zone());
        assert!(clock.now() >= min_instant() && clock.now() < max_instant());
    }

    #[test]
    fn test_zoned_fixed_clock_applies_zone_offset() {
        let instant = DateTime::from_timestamp(1_720_000_000, 0).unwrap();
        let clock = ZonedFixedClock::new(instant, chrono_tz::Asia::Tokyo);
        assert_eq!(clock.local_now().offset().fix().local_minus_utc(), 9 * 3600);
        assert_eq!(clock.zone().name(), "Asia/Tokyo");
    }

    #[test]
    fn test_duration_signs() {
        let mut rng = SeededRng::from_seed(93);
        for _ in 0..TRIALS {
            assert!(random_positive_duration(&mut rng) > TimeDelta::zero());
            assert!(random_negative_duration(&mut rng) < TimeDelta::zero());
        }
        assert_eq!(random_duration(&mut MockRng), TimeDelta::nanoseconds(i64::MIN));
        assert_eq!(random_positive_duration(&mut MockRng), TimeDelta::nanoseconds(1));
    }

    #[test]
    fn test_period_signs() {
        let mut rng = SeededRng::from_seed(94);
        for _ in 0..TRIALS {
            let positive = random_positive_period(&mut rng);
            assert!(positive.years > 0 && positive.months > 0 && positive.days > 0);
            let negative = random_negative_period(&mut rng);
            assert!(negative.years < 0 && negative.months < 0 && negative.days < 0);
            assert!(negative.is_negative());
        }
        let any = random_period(&mut MockRng);
        assert_eq!(any, Period::new(i32::MIN, i32::MIN, i32::MIN));
    }

    #[test]
    fn test_period_display() {
        assert_eq!(Period::ZERO.to_string(), "P0D");
        assert_eq!(Period::new(1, -2, 3).to_string(), "P1Y-2M3D");
        assert_eq!(Period::new(0, 0, 10).to_string(), "P10D");
    }

    #[test]
    fn test_period_serialises_field_by_field() {
        let period = Period::new(2, 11, -5);
        let json = serde_json::to_value(period).unwrap();
        assert_eq!(json, serde_json::json!({ "years": 2, "months": 11, "days": -5 }));
        let back: Period = serde_json::from_value(json).unwrap();
        assert_eq!(back, period);
    }
}
