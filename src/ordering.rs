//! Record ordering.
//!
//! A [`Comparator`] is a three-way comparison between two records. Closures
//! returning [`Ordering`] implement it. [`FieldComparator`] orders records by
//! one field in a chosen [`SortDirection`]; [`Then`] breaks ties with a second
//! comparator and [`Reversed`] inverts one.
//!
//! Sorting with any comparator is stable (see
//! [`Collection::sort`](crate::Collection::sort)).

use crate::record::Record;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Three-way comparison between two records.
pub trait Comparator<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Sort direction for [`FieldComparator`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Orders records by the value of one field.
///
/// Nulls sort first when ascending and last when descending; values of
/// different kinds follow [`FieldValue::sort_cmp`](crate::FieldValue::sort_cmp).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldComparator {
    field: String,
    direction: SortDirection,
}

impl FieldComparator {
    pub fn new<S: Into<String>>(field: S, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn ascending<S: Into<String>>(field: S) -> Self {
        Self::new(field, SortDirection::Ascending)
    }

    pub fn descending<S: Into<String>>(field: S) -> Self {
        Self::new(field, SortDirection::Descending)
    }

    /// Break ties with `next`.
    #[must_use]
    pub fn then<C>(self, next: C) -> Then<Self, C> {
        Then(self, next)
    }
}

impl<T: Record> Comparator<T> for FieldComparator {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        let ord = a.get(&self.field).sort_cmp(&b.get(&self.field));
        match self.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

/// A comparator with its result inverted.
#[derive(Debug, Clone)]
pub struct Reversed<C>(pub C);

impl<T, C: Comparator<T>> Comparator<T> for Reversed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(a, b).reverse()
    }
}

/// Two comparators applied in sequence.
#[derive(Debug, Clone)]
pub struct Then<A, B>(pub A, pub B);

impl<T, A: Comparator<T>, B: Comparator<T>> Comparator<T> for Then<A, B> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(a, b).then_with(|| self.1.compare(a, b))
    }
}
