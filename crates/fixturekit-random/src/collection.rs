//! Uniform picks from slices and iterables, and randomly sized fills.
//!
//! Picks are uniform over positions, so duplicate values are weighted by
//! their multiplicity. Exclusions are matched by equality.

use std::collections::HashSet;
use std::hash::Hash;
use std::ops::{Bound, RangeBounds};

use fixturekit_core::error::{FixtureError, ensure};
use fixturekit_core::rng::DeterministicRng;

use crate::number::random_in_range;

/// Picks an element of a non-empty slice.
pub(crate) fn pick<'a, T>(rng: &mut dyn DeterministicRng, items: &'a [T]) -> &'a T {
    let len = u64::try_from(items.len()).unwrap_or(u64::MAX);
    let index = usize::try_from(rng.next_u64_below(len)).unwrap_or(0);
    &items[index]
}

/// Returns a random element of `items`.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if `items` is empty.
pub fn random_from<'a, T>(
    rng: &mut dyn DeterministicRng,
    items: &'a [T],
) -> Result<&'a T, FixtureError> {
    ensure(!items.is_empty(), || "Array cannot be empty")?;
    Ok(pick(rng, items))
}

/// Returns a random element of `items` that is not equal to any of
/// `excludes`.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if `items` is empty or every
/// element is excluded.
pub fn random_from_excluding<'a, T: PartialEq>(
    rng: &mut dyn DeterministicRng,
    items: &'a [T],
    excludes: &[T],
) -> Result<&'a T, FixtureError> {
    ensure(!items.is_empty(), || "Array cannot be empty")?;
    let remaining: Vec<&T> = items.iter().filter(|item| !excludes.contains(item)).collect();
    ensure(!remaining.is_empty(), || {
        "Array only consists of the given excludes"
    })?;
    Ok(*pick(rng, &remaining))
}

/// Returns a random item of an iterable, consuming it.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if the iterable yields nothing.
pub fn random_from_iter<I>(
    rng: &mut dyn DeterministicRng,
    iterable: I,
) -> Result<I::Item, FixtureError>
where
    I: IntoIterator,
{
    let mut items: Vec<I::Item> = iterable.into_iter().collect();
    ensure(!items.is_empty(), || "Iterable cannot be empty")?;
    Ok(take_random(rng, &mut items))
}

/// Returns a random item of an iterable that is not equal to any of
/// `excludes`.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if the iterable yields nothing or
/// yields only excluded items.
pub fn random_from_iter_excluding<I, T>(
    rng: &mut dyn DeterministicRng,
    iterable: I,
    excludes: &[T],
) -> Result<T, FixtureError>
where
    I: IntoIterator<Item = T>,
    T: PartialEq,
{
    let items: Vec<T> = iterable.into_iter().collect();
    ensure(!items.is_empty(), || "Iterable cannot be empty")?;
    let mut remaining: Vec<T> = items
        .into_iter()
        .filter(|item| !excludes.contains(item))
        .collect();
    ensure(!remaining.is_empty(), || {
        "Iterable only consists of the given excludes"
    })?;
    Ok(take_random(rng, &mut remaining))
}

/// Largest number of slots reserved up front when filling a vector.
const MAX_PREALLOCATED: usize = 4_096;

fn initial_capacity(count: usize) -> usize {
    count.min(MAX_PREALLOCATED)
}

fn take_random<T>(rng: &mut dyn DeterministicRng, items: &mut Vec<T>) -> T {
    let len = u64::try_from(items.len()).unwrap_or(u64::MAX);
    let index = usize::try_from(rng.next_u64_below(len)).unwrap_or(0);
    items.swap_remove(index)
}

/// Calls `supplier` exactly `size` times and collects the results in order.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if `size` is negative.
pub fn random_vec<T, F>(
    rng: &mut dyn DeterministicRng,
    mut supplier: F,
    size: i32,
) -> Result<Vec<T>, FixtureError>
where
    F: FnMut(&mut dyn DeterministicRng) -> T,
{
    ensure(size >= 0, || "Size must be greater than or equal to zero")?;
    let count = usize::try_from(size).unwrap_or(0);
    let mut values = Vec::with_capacity(initial_capacity(count));
    for _ in 0..count {
        values.push(supplier(&mut *rng));
    }
    Ok(values)
}

/// Draws a size uniformly from `sizes`, then fills a vector of that size
/// from `supplier`.
///
/// An unbounded upper end means `i32::MAX`, so `0..` usually produces a
/// vector of hundreds of millions of elements. Bound the range when the
/// supplier or the element type is costly.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if the lower bound is missing or
/// negative, or the range contains no sizes.
pub fn random_vec_sized<T, F, R>(
    rng: &mut dyn DeterministicRng,
    supplier: F,
    sizes: R,
) -> Result<Vec<T>, FixtureError>
where
    F: FnMut(&mut dyn DeterministicRng) -> T,
    R: RangeBounds<i32>,
{
    let size = random_size(rng, &sizes)?;
    random_vec(rng, supplier, size)
}

fn random_size<R: RangeBounds<i32>>(
    rng: &mut dyn DeterministicRng,
    sizes: &R,
) -> Result<i32, FixtureError> {
    let lower = match sizes.start_bound() {
        Bound::Included(&n) => Some((n, i64::from(n))),
        Bound::Excluded(&n) => Some((n, i64::from(n) + 1)),
        Bound::Unbounded => None,
    };
    let lower = match lower {
        Some((endpoint, lower)) if endpoint >= 0 => lower,
        _ => {
            return Err(FixtureError::invalid(
                "Size range must consist of only positive integers",
            ));
        }
    };
    let upper = match sizes.end_bound() {
        Bound::Included(&n) => i64::from(n),
        Bound::Excluded(&n) => i64::from(n) - 1,
        Bound::Unbounded => i64::from(i32::MAX),
    };
    ensure(lower <= upper, || "Size range cannot be empty")?;

    let size = random_in_range(rng, lower, upper + 1)?;
    tracing::debug!(size, lower, upper, "resolved size range");
    Ok(i32::try_from(size).unwrap_or(i32::MAX))
}

/// Fills a vector of `size` independent draws, with replacement, from
/// `elements`.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if `elements` is empty or `size`
/// is negative.
pub fn random_vec_from<T: Clone>(
    rng: &mut dyn DeterministicRng,
    elements: &[T],
    size: i32,
) -> Result<Vec<T>, FixtureError> {
    ensure(!elements.is_empty(), || {
        "Elements to populate from must not be empty"
    })?;
    random_vec(rng, |rng| pick(rng, elements).clone(), size)
}

/// Like [`random_vec_from`], with the size drawn from `sizes`.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if `elements` is empty or `sizes`
/// is invalid.
pub fn random_vec_from_sized<T: Clone, R: RangeBounds<i32>>(
    rng: &mut dyn DeterministicRng,
    elements: &[T],
    sizes: R,
) -> Result<Vec<T>, FixtureError> {
    ensure(!elements.is_empty(), || {
        "Elements to populate from must not be empty"
    })?;
    random_vec_sized(rng, |rng| pick(rng, elements).clone(), sizes)
}

/// Fills a set from `size` draws of `elements`. Colliding draws collapse, so
/// the set may hold fewer than `size` elements.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if `elements` is empty or `size`
/// is negative.
pub fn random_set_from<T: Clone + Eq + Hash>(
    rng: &mut dyn DeterministicRng,
    elements: &[T],
    size: i32,
) -> Result<HashSet<T>, FixtureError> {
    Ok(random_vec_from(rng, elements, size)?.into_iter().collect())
}

/// Like [`random_set_from`], with the number of draws taken from `sizes`.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` if `elements` is empty or `sizes`
/// is invalid.
pub fn random_set_from_sized<T: Clone + Eq + Hash, R: RangeBounds<i32>>(
    rng: &mut dyn DeterministicRng,
    elements: &[T],
    sizes: R,
) -> Result<HashSet<T>, FixtureError> {
    Ok(random_vec_from_sized(rng, elements, sizes)?
        .into_iter()
        .collect())
}

/// Returns true if every needle is present in `haystack`.
pub fn contains_all<T: PartialEq>(haystack: &[T], needles: &[T]) -> bool {
    needles.iter().all(|needle| haystack.contains(needle))
}
