//! Random picks over enum domains.

use std::fmt;

use chrono::{Month, Weekday};
use fixturekit_core::error::{FixtureError, ensure};
use fixturekit_core::rng::DeterministicRng;

use crate::collection::{pick, random_from_iter_excluding};

/// An enum whose full set of variants is known at compile time.
///
/// Implement it for fieldless enums with [`impl_random_enum!`](crate::impl_random_enum).
pub trait RandomEnum: Copy + PartialEq + 'static {
    /// Every variant, in declaration order.
    const VARIANTS: &'static [Self];
}

/// Implements [`RandomEnum`] for a fieldless enum by listing its variants.
///
/// ```
/// use fixturekit_random::impl_random_enum;
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Suit { Clubs, Diamonds, Hearts, Spades }
///
/// impl_random_enum!(Suit { Clubs, Diamonds, Hearts, Spades });
/// ```
#[macro_export]
macro_rules! impl_random_enum {
    ($ty:ty { $($variant:ident),+ $(,)? }) => {
        impl $crate::enums::RandomEnum for $ty {
            const VARIANTS: &'static [Self] = &[$(Self::$variant),+];
        }
    };
}

impl_random_enum!(Weekday { Mon, Tue, Wed, Thu, Fri, Sat, Sun });

impl_random_enum!(Month {
    January, February, March, April, May, June, July, August, September, October,
    November, December,
});

/// Returns a random variant of `E`.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if `E` has no variants.
pub fn random_enum<E: RandomEnum>(rng: &mut dyn DeterministicRng) -> Result<E, FixtureError> {
    ensure(!E::VARIANTS.is_empty(), || "Iterable cannot be empty")?;
    Ok(*pick(rng, E::VARIANTS))
}

/// Returns a random variant of `E` not listed in `excludes`.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if `E` has no variants or every
/// variant is excluded.
pub fn random_enum_excluding<E: RandomEnum>(
    rng: &mut dyn DeterministicRng,
    excludes: &[E],
) -> Result<E, FixtureError> {
    random_from_iter_excluding(rng, E::VARIANTS.iter().copied(), excludes)
}

/// Returns the variant of `E` whose `Debug` name is exactly `name`.
///
/// Matching is case-sensitive and takes no aliases, unlike the `FromStr`
/// impls of chrono's enums: `"Mar"` and `"march"` name no `Month`.
pub fn enum_if_present<E: RandomEnum + fmt::Debug>(name: &str) -> Option<E> {
    E::VARIANTS
        .iter()
        .copied()
        .find(|variant| format!("{variant:?}") == name)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use fixturekit_core::rng::SeededRng;
    use fixturekit_test_support::{MaxRng, MockRng};

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Signal {
        Red,
        Amber,
        Green,
    }

    crate::impl_random_enum!(Signal { Red, Amber, Green });

    #[test]
    fn test_variants_listed_in_declaration_order() {
        assert_eq!(Signal::VARIANTS, &[Signal::Red, Signal::Amber, Signal::Green]);
        assert_eq!(Weekday::VARIANTS.len(), 7);
        assert_eq!(Month::VARIANTS.len(), 12);
        assert_eq!(Month::VARIANTS[11], Month::December);
    }

    #[test]
    fn test_random_enum_covers_every_variant() {
        let mut rng = SeededRng::from_seed(61);
        let seen: HashSet<Signal> = (0..200).map(|_| random_enum(&mut rng).unwrap()).collect();
        assert_eq!(seen.len(), 3);
        assert_eq!(random_enum::<Signal>(&mut MockRng).unwrap(), Signal::Red);
        assert_eq!(random_enum::<Weekday>(&mut MaxRng).unwrap(), Weekday::Sun);
    }

    #[test]
    fn test_random_enum_excluding_skips_excluded() {
        let mut rng = SeededRng::from_seed(62);
        for _ in 0..200 {
            let signal = random_enum_excluding(&mut rng, &[Signal::Red, Signal::Green]).unwrap();
            assert_eq!(signal, Signal::Amber);
            let day = random_enum_excluding(&mut rng, &[Weekday::Sat, Weekday::Sun]).unwrap();
            assert!(!matches!(day, Weekday::Sat | Weekday::Sun));
        }
    }

    #[test]
    fn test_random_enum_excluding_everything_fails() {
        let err = random_enum_excluding(&mut MockRng, Signal::VARIANTS).unwrap_err();
        assert_eq!(err.message(), "Iterable only consists of the given excludes");
    }

    #[test]
    fn test_enum_if_present_matches_exact_variant_names() {
        assert_eq!(enum_if_present::<Weekday>("Fri"), Some(Weekday::Fri));
        assert_eq!(enum_if_present::<Month>("March"), Some(Month::March));
        assert_eq!(enum_if_present::<Signal>("Amber"), Some(Signal::Amber));
        assert_eq!(enum_if_present::<Weekday>("Caturday"), None);
    }

    #[test]
    fn test_enum_if_present_rejects_aliases_and_other_cases() {
        assert_eq!(enum_if_present::<Month>("march"), None);
        assert_eq!(enum_if_present::<Month>("Mar"), None);
        assert_eq!(enum_if_present::<Weekday>("Friday"), None);
        assert_eq!(enum_if_present::<Signal>("AMBER"), None);
    }
}
