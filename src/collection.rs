//! The [`Collection`] type and the [`RecordSource`] abstraction.
//!
//! A `Collection<T>` owns an ordered `Vec<T>` and exposes chainable
//! transformations over it. Transformations that produce a new sequence
//! (`filter`, `sort`, `fill`, `wrap`, ...) consume the collection and return the
//! next one; terminal operations (`map_by`, `group_by`, `reduce`, ...) return
//! plain containers.
//!
//! Each operation also exists as a free function in [`crate::ops`] that borrows
//! any [`RecordSource`] instead. Sources include slices, vectors, and `Option`s
//! of either; `None` reads as an empty sequence.

use crate::record::Record;
use crate::value::FieldValue;
use serde::{Deserialize, Serialize};
use std::ops::Index;
use std::slice;
use std::vec;

/// Anything that can be read as an ordered slice of records.
///
/// Absent sequences (`None`) read as empty, so read-only operations never need
/// a null check at the call site.
pub trait RecordSource<T> {
    fn records(&self) -> &[T];
}

impl<T> RecordSource<T> for [T] {
    fn records(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> RecordSource<T> for [T; N] {
    fn records(&self) -> &[T] {
        self
    }
}

impl<T> RecordSource<T> for Vec<T> {
    fn records(&self) -> &[T] {
        self
    }
}

impl<T> RecordSource<T> for Option<Vec<T>> {
    fn records(&self) -> &[T] {
        self.as_deref().unwrap_or_default()
    }
}

impl<T> RecordSource<T> for Option<&[T]> {
    fn records(&self) -> &[T] {
        self.unwrap_or_default()
    }
}

impl<T> RecordSource<T> for Option<&Vec<T>> {
    fn records(&self) -> &[T] {
        self.map(Vec::as_slice).unwrap_or_default()
    }
}

impl<T> RecordSource<T> for Collection<T> {
    fn records(&self) -> &[T] {
        &self.items
    }
}

impl<T, S: RecordSource<T> + ?Sized> RecordSource<T> for &S {
    fn records(&self) -> &[T] {
        (**self).records()
    }
}

/// An ordered sequence of records with chainable operations.
///
/// ```
/// use recordkit::*;
///
/// # fn main() -> anyhow::Result<()> {
/// let records = vec![
///     DynRecord::new("Opportunity").with("Name", "A").with("StageName", "Open"),
///     DynRecord::new("Opportunity").with("Name", "B").with("StageName", "Closed"),
///     DynRecord::new("Opportunity").with("Name", "C").with("StageName", "Open"),
/// ];
///
/// let open_names = Collection::new(records)
///     .filter(FieldPredicate::new("StageName", "==", "Open")?)
///     .sort_by_field("Name", SortDirection::Descending)
///     .pluck("Name");
///
/// assert_eq!(open_names, vec![FieldValue::from("C"), FieldValue::from("A")]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection<T> {
    pub(crate) items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Collection<T> {
    #[must_use]
    pub const fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// An empty collection.
    #[must_use]
    pub const fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// Wrap an optional sequence; `None` becomes an empty collection.
    #[must_use]
    pub fn from_option(items: Option<Vec<T>>) -> Self {
        Self {
            items: items.unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn is_not_empty(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn push(&mut self, record: T) {
        self.items.push(record);
    }

    /// Append records and return the chain.
    #[must_use]
    pub fn with_records<I: IntoIterator<Item = T>>(mut self, records: I) -> Self {
        self.items.extend(records);
        self
    }

    /// Apply `f` to every record, producing a collection of the results.
    #[must_use]
    pub fn map<O, F>(self, f: F) -> Collection<O>
    where
        F: FnMut(T) -> O,
    {
        Collection {
            items: self.items.into_iter().map(f).collect(),
        }
    }

    /// Terminal extraction of the backing sequence.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Copy of the backing sequence.
    #[must_use]
    pub fn to_list(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }
}

impl<T: Record> Collection<T> {
    /// The value of `field` for every record, in order.
    #[must_use]
    pub fn pluck(&self, field: &str) -> Vec<FieldValue> {
        crate::helpers::keyed::pluck(self, field)
    }
}

impl<T> Extend<T> for Collection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> From<Option<Vec<T>>> for Collection<T> {
    fn from(items: Option<Vec<T>>) -> Self {
        Self::from_option(items)
    }
}

impl<T> AsRef<[T]> for Collection<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> Index<usize> for Collection<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}
