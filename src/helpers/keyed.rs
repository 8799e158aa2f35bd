//! Keyed operations: distinct keys, one-to-one mappings and groupings.
//!
//! # Overview
//! - [`Collection::unique_values`] -- the set of distinct keys
//! - [`Collection::map_by`] -- key -> record, **last write wins**
//! - [`Collection::map_by_unique`] -- key -> record, fails on a duplicate key
//! - [`Collection::map_values_by`] -- key -> derived value, last write wins
//! - [`Collection::group_by`] / [`Collection::group_values_by`] -- key -> records/values
//!
//! Groupings keep every record exactly once, in input order within its group.

use crate::collection::{Collection, RecordSource};
use crate::error::CollectionError;
use crate::extract::{KeyExtractor, KeyValueExtractor};
use crate::record::Record;
use crate::value::FieldValue;
use anyhow::Result;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;

fn unique_of<'a, T: 'a, E, I>(records: I, extractor: &E) -> HashSet<E::Key>
where
    E: KeyExtractor<T>,
    I: IntoIterator<Item = &'a T>,
{
    records.into_iter().map(|r| extractor.key(r)).collect()
}

fn map_of<T, E, I>(records: I, extractor: &E) -> HashMap<E::Key, T>
where
    E: KeyExtractor<T>,
    I: IntoIterator<Item = T>,
{
    let mut out = HashMap::new();
    let mut overwritten = 0usize;
    for r in records {
        if out.insert(extractor.key(&r), r).is_some() {
            overwritten += 1;
        }
    }
    if overwritten > 0 {
        tracing::debug!(overwritten, "map_by: later records replaced earlier ones with the same key");
    }
    out
}

fn unique_map_of<T, E, I>(records: I, extractor: &E) -> Result<HashMap<E::Key, T>>
where
    E: KeyExtractor<T>,
    E::Key: Debug,
    I: IntoIterator<Item = T>,
{
    let mut out = HashMap::new();
    for r in records {
        match out.entry(extractor.key(&r)) {
            Entry::Occupied(e) => {
                return Err(CollectionError::DuplicateKey {
                    key: format!("{:?}", e.key()),
                }
                .into());
            }
            Entry::Vacant(e) => {
                e.insert(r);
            }
        }
    }
    Ok(out)
}

fn map_values_of<'a, T: 'a, E, I>(records: I, extractor: &E) -> HashMap<E::Key, E::Value>
where
    E: KeyValueExtractor<T>,
    I: IntoIterator<Item = &'a T>,
{
    let mut out = HashMap::new();
    let mut overwritten = 0usize;
    for r in records {
        let (k, v) = extractor.key_value(r);
        if out.insert(k, v).is_some() {
            overwritten += 1;
        }
    }
    if overwritten > 0 {
        tracing::debug!(overwritten, "map_values_by: later values replaced earlier ones with the same key");
    }
    out
}

fn group_of<T, E, I>(records: I, extractor: &E) -> HashMap<E::Key, Vec<T>>
where
    E: KeyExtractor<T>,
    I: IntoIterator<Item = T>,
{
    let mut groups: HashMap<E::Key, Vec<T>> = HashMap::new();
    for r in records {
        groups.entry(extractor.key(&r)).or_default().push(r);
    }
    groups
}

fn group_values_of<'a, T: 'a, E, I>(records: I, extractor: &E) -> HashMap<E::Key, Vec<E::Value>>
where
    E: KeyValueExtractor<T>,
    I: IntoIterator<Item = &'a T>,
{
    let mut groups: HashMap<E::Key, Vec<E::Value>> = HashMap::new();
    for r in records {
        let (k, v) = extractor.key_value(r);
        groups.entry(k).or_default().push(v);
    }
    groups
}

/// Distinct keys of `source`.
pub fn unique_values<T, S, E>(source: &S, extractor: E) -> HashSet<E::Key>
where
    S: RecordSource<T> + ?Sized,
    E: KeyExtractor<T>,
{
    unique_of(source.records(), &extractor)
}

/// Key -> record mapping; on duplicate keys the last record wins.
pub fn map_by<T, S, E>(source: &S, extractor: E) -> HashMap<E::Key, T>
where
    T: Clone,
    S: RecordSource<T> + ?Sized,
    E: KeyExtractor<T>,
{
    map_of(source.records().iter().cloned(), &extractor)
}

/// Key -> record mapping that fails on the first duplicate key.
///
/// # Errors
/// [`CollectionError::DuplicateKey`] naming the repeated key.
pub fn map_by_unique<T, S, E>(source: &S, extractor: E) -> Result<HashMap<E::Key, T>>
where
    T: Clone,
    S: RecordSource<T> + ?Sized,
    E: KeyExtractor<T>,
    E::Key: Debug,
{
    unique_map_of(source.records().iter().cloned(), &extractor)
}

/// Key -> value mapping; on duplicate keys the last value wins.
pub fn map_values_by<T, S, E>(source: &S, extractor: E) -> HashMap<E::Key, E::Value>
where
    S: RecordSource<T> + ?Sized,
    E: KeyValueExtractor<T>,
{
    map_values_of(source.records(), &extractor)
}

/// Key -> records grouping, input order kept within each group.
pub fn group_by<T, S, E>(source: &S, extractor: E) -> HashMap<E::Key, Vec<T>>
where
    T: Clone,
    S: RecordSource<T> + ?Sized,
    E: KeyExtractor<T>,
{
    group_of(source.records().iter().cloned(), &extractor)
}

/// Key -> values grouping, input order kept within each group.
pub fn group_values_by<T, S, E>(source: &S, extractor: E) -> HashMap<E::Key, Vec<E::Value>>
where
    S: RecordSource<T> + ?Sized,
    E: KeyValueExtractor<T>,
{
    group_values_of(source.records(), &extractor)
}

/// Value of `field` for every record, in order.
pub fn pluck<T, S>(source: &S, field: &str) -> Vec<FieldValue>
where
    T: Record,
    S: RecordSource<T> + ?Sized,
{
    source.records().iter().map(|r| r.get(field)).collect()
}

impl<T> Collection<T> {
    /// Distinct keys produced by `extractor`.
    ///
    /// # Example
    /// ```
    /// use recordkit::*;
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let c = Collection::new(vec![
    ///     DynRecord::new("Opportunity").with("StageName", "Open").with("Region", "EU"),
    ///     DynRecord::new("Opportunity").with("StageName", "Open").with("Region", "US"),
    ///     DynRecord::new("Opportunity").with("StageName", "Open").with("Region", "EU"),
    /// ]);
    /// assert_eq!(c.unique_values(FieldKey::new("StageName")).len(), 1);
    /// assert_eq!(c.unique_values(CompositeKey::new(["StageName", "Region"])?).len(), 2);
    /// # Ok(())
    /// # }
    /// ```
    pub fn unique_values<E: KeyExtractor<T>>(&self, extractor: E) -> HashSet<E::Key> {
        unique_of(&self.items, &extractor)
    }

    /// One-to-one mapping from key to record.
    ///
    /// Duplicate keys resolve **last write wins**: the record that comes later
    /// in the sequence replaces the earlier one. Use
    /// [`map_by_unique`](Self::map_by_unique) to fail instead.
    pub fn map_by<E: KeyExtractor<T>>(self, extractor: E) -> HashMap<E::Key, T> {
        map_of(self.items, &extractor)
    }

    /// One-to-one mapping from key to record, failing on a duplicate key.
    ///
    /// # Errors
    /// [`CollectionError::DuplicateKey`] naming the repeated key.
    pub fn map_by_unique<E>(self, extractor: E) -> Result<HashMap<E::Key, T>>
    where
        E: KeyExtractor<T>,
        E::Key: Debug,
    {
        unique_map_of(self.items, &extractor)
    }

    /// One-to-one mapping from key to a derived value; last write wins.
    pub fn map_values_by<E: KeyValueExtractor<T>>(self, extractor: E) -> HashMap<E::Key, E::Value> {
        map_values_of(&self.items, &extractor)
    }

    /// One-to-many grouping of records by key.
    pub fn group_by<E: KeyExtractor<T>>(self, extractor: E) -> HashMap<E::Key, Vec<T>> {
        group_of(self.items, &extractor)
    }

    /// One-to-many grouping of derived values by key.
    pub fn group_values_by<E: KeyValueExtractor<T>>(self, extractor: E) -> HashMap<E::Key, Vec<E::Value>> {
        group_values_of(&self.items, &extractor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::category;
    use crate::extract::{FieldKey, FieldToField, IdKey};
    use crate::record::DynRecord;
    use crate::value::RecordId;

    fn opps() -> Vec<DynRecord> {
        vec![
            DynRecord::new("Opportunity").with_id("006A").with("Name", "A").with("StageName", "Open"),
            DynRecord::new("Opportunity").with_id("006B").with("Name", "B").with("StageName", "Closed"),
            DynRecord::new("Opportunity").with_id("006C").with("Name", "C").with("StageName", "Open"),
        ]
    }

    #[test]
    fn group_by_stage_keeps_input_order() {
        let groups = Collection::new(opps()).group_by(FieldKey::new("StageName"));
        let names = |k: &str| pluck(&groups[&FieldValue::from(k)], "Name");
        assert_eq!(names("Open"), vec![FieldValue::from("A"), FieldValue::from("C")]);
        assert_eq!(names("Closed"), vec![FieldValue::from("B")]);
    }

    #[test]
    fn map_by_last_write_wins() {
        crate::testing::init_tracing();
        let m = map_by(&opps(), FieldKey::new("StageName"));
        assert_eq!(m.len(), 2);
        assert_eq!(m[&FieldValue::from("Open")].get("Name"), FieldValue::from("C"));
    }

    #[test]
    fn map_by_unique_fails_on_duplicate() {
        let err = Collection::new(opps()).map_by_unique(FieldKey::new("StageName")).unwrap_err();
        assert!(matches!(category(&err), Some(CollectionError::DuplicateKey { key }) if key.contains("Open")));
    }

    #[test]
    fn map_by_identity() -> Result<()> {
        let m = map_by_unique(&opps(), IdKey)?;
        assert_eq!(m.len(), 3);
        assert!(m.contains_key(&Some(RecordId::new("006B"))));
        Ok(())
    }

    #[test]
    fn key_value_extractors() {
        let names = map_values_by(&opps(), FieldToField::new("Id", "Name"));
        assert_eq!(names[&FieldValue::Id("006A".into())], FieldValue::from("A"));
        let by_stage = group_values_by(&opps(), FieldToField::new("StageName", "Name"));
        assert_eq!(by_stage[&FieldValue::from("Open")], vec![FieldValue::from("A"), FieldValue::from("C")]);
        let owned = Collection::new(opps()).group_values_by(FieldToField::new("StageName", "Name"));
        assert_eq!(owned, by_stage);
    }

    #[test]
    fn map_values_by_last_write_wins() {
        crate::testing::init_tracing();
        let by_stage = map_values_by(&opps(), FieldToField::new("StageName", "Name"));
        assert_eq!(by_stage.len(), 2);
        assert_eq!(by_stage[&FieldValue::from("Open")], FieldValue::from("C"));
        let owned = Collection::new(opps()).map_values_by(FieldToField::new("StageName", "Name"));
        assert_eq!(owned, by_stage);
    }

    #[test]
    fn absent_source_yields_empty_results() {
        let none: Option<Vec<DynRecord>> = None;
        assert!(unique_values(&none, FieldKey::new("Name")).is_empty());
        assert!(map_by(&none, FieldKey::new("Name")).is_empty());
        assert!(group_by(&none, FieldKey::new("Name")).is_empty());
    }
}
