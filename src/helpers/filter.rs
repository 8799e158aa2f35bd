//! Selection helpers: [`Collection::filter`], [`Collection::filter_changed`]
//! and [`Collection::find`].

use crate::collection::{Collection, RecordSource};
use crate::predicates::{ChangePredicate, Predicate};
use crate::record::Record;
use crate::value::RecordId;
use std::collections::HashMap;

fn prior_of<'a, T: Record>(record: &T, prior: &'a HashMap<RecordId, T>) -> Option<&'a T> {
    record.id().and_then(|id| prior.get(&id))
}

/// Records accepted by `predicate`, in input order.
pub fn filter<T, S, P>(source: &S, predicate: P) -> Vec<T>
where
    T: Clone,
    S: RecordSource<T> + ?Sized,
    P: Predicate<T>,
{
    source
        .records()
        .iter()
        .filter(|r| predicate.accepts(r))
        .cloned()
        .collect()
}

/// Records accepted by `predicate` when paired with their prior version.
///
/// Records are matched to `prior` by id; a record without an id, or whose id
/// has no entry, is evaluated against `None`.
pub fn filter_changed<T, S, P>(source: &S, prior: &HashMap<RecordId, T>, predicate: P) -> Vec<T>
where
    T: Record + Clone,
    S: RecordSource<T> + ?Sized,
    P: ChangePredicate<T>,
{
    source
        .records()
        .iter()
        .filter(|r| predicate.accepts(r, prior_of(*r, prior)))
        .cloned()
        .collect()
}

/// First record accepted by `predicate`.
pub fn find<'a, T, S, P>(source: &'a S, predicate: P) -> Option<&'a T>
where
    S: RecordSource<T> + ?Sized,
    P: Predicate<T>,
{
    source.records().iter().find(|r| predicate.accepts(r))
}

impl<T> Collection<T> {
    /// Keep the records accepted by `predicate`, preserving order.
    ///
    /// # Example
    /// ```
    /// use recordkit::*;
    ///
    /// let evens = Collection::new(vec![1, 2, 3, 4]).filter(|x: &i32| x % 2 == 0);
    /// assert_eq!(evens.into_vec(), vec![2, 4]);
    /// ```
    #[must_use]
    pub fn filter<P: Predicate<T>>(mut self, predicate: P) -> Self {
        self.items.retain(|r| predicate.accepts(r));
        self
    }

    /// First record accepted by `predicate`, or `None`.
    pub fn find<P: Predicate<T>>(&self, predicate: P) -> Option<&T> {
        self.items.iter().find(|r| predicate.accepts(r))
    }
}

impl<T: Record> Collection<T> {
    /// Keep the records accepted by a [`ChangePredicate`], pairing each record
    /// with its prior version from `prior` by id.
    #[must_use]
    pub fn filter_changed<P: ChangePredicate<T>>(mut self, prior: &HashMap<RecordId, T>, predicate: P) -> Self {
        self.items.retain(|r| predicate.accepts(r, prior_of(r, prior)));
        self
    }
}
