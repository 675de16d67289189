//! # Filtering
//!
//! A [`Filter`] selects the items of a collection that satisfy a
//! [`Specification`]. The contract every filter honours:
//!
//! - the result is a subsequence of the input (relative order kept, nothing
//!   inserted)
//! - every returned item satisfies the specification, every dropped item does not
//! - the specification is evaluated exactly once per item, in a single pass
//! - the input collection is never mutated
//!
//! Filtering cannot fail, so none of these functions return `Result`.

use crate::specification::Specification;

/// Selects the items of a slice that satisfy a specification.
pub trait Filter<T> {
    fn filter<'a, S>(&self, items: &'a [T], spec: &S) -> Vec<&'a T>
    where
        S: Specification<T> + ?Sized;
}

/// The default [`Filter`]: a single linear scan.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemFilter;

impl<T> Filter<T> for ItemFilter {
    fn filter<'a, S>(&self, items: &'a [T], spec: &S) -> Vec<&'a T>
    where
        S: Specification<T> + ?Sized,
    {
        items.iter().filter(|item| spec.is_satisfied(item)).collect()
    }
}

/// Borrowing filter over a slice using [`ItemFilter`].
pub fn filter<'a, T, S>(items: &'a [T], spec: &S) -> Vec<&'a T>
where
    S: Specification<T> + ?Sized,
{
    ItemFilter.filter(items, spec)
}

/// Owning filter: consumes `items` and hands back the matching ones.
pub fn filter_owned<T, S>(items: Vec<T>, spec: &S) -> Vec<T>
where
    S: Specification<T> + ?Sized,
{
    items
        .into_iter()
        .filter(|item| spec.is_satisfied(item))
        .collect()
}

/// Number of items satisfying `spec`.
pub fn count<T, S>(items: &[T], spec: &S) -> usize
where
    S: Specification<T> + ?Sized,
{
    items.iter().filter(|item| spec.is_satisfied(item)).count()
}

/// Splits `items` into `(matched, rejected)`, both in input order.
pub fn partition<'a, T, S>(items: &'a [T], spec: &S) -> (Vec<&'a T>, Vec<&'a T>)
where
    S: Specification<T> + ?Sized,
{
    items.iter().partition(|item| spec.is_satisfied(item))
}
