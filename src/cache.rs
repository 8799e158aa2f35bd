//! In-memory multi-map from field-value tuples to records.
//!
//! An [`IndexedCache`] indexes records by the values of one or more fields and
//! answers lookups without rescanning. Several records may share a key; they
//! are kept in insertion order. Id and text values are interchangeable in
//! keys, so a lookup by `Id("001A")` finds a record stored with `"001A"`.
//!
//! ```
//! use recordkit::{DynRecord, FieldValue, IndexedCache};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut cache = IndexedCache::new(["Email"])?;
//! cache.insert(DynRecord::new("Contact").with("Email", "a@example.com").with("LastName", "Ames"));
//!
//! let hit = cache.get(&[FieldValue::from("a@example.com")]);
//! assert!(hit.is_some());
//! assert!(cache.get(&[FieldValue::from("b@example.com")]).is_none());
//! # Ok(())
//! # }
//! ```

use crate::error::{CollectionError, ValidationError};
use crate::record::Record;
use crate::value::FieldValue;
use anyhow::Result;
use std::collections::HashMap;

/// Records indexed by the values of a fixed list of fields.
#[derive(Debug, Clone)]
pub struct IndexedCache<T> {
    fields: Vec<String>,
    entries: HashMap<Vec<FieldValue>, Vec<T>>,
    len: usize,
}

impl<T: Record> IndexedCache<T> {
    /// A cache keyed by `fields`, in order.
    ///
    /// # Errors
    /// A validation error when `fields` is empty.
    pub fn new<I, S>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        if fields.is_empty() {
            return Err(CollectionError::from(
                ValidationError::field("fields", "an indexed cache needs at least one key field")
                    .with_code("EMPTY_FIELD_SET"),
            )
            .into());
        }
        Ok(Self {
            fields,
            entries: HashMap::new(),
            len: 0,
        })
    }

    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    fn key_of(&self, record: &T) -> Vec<FieldValue> {
        self.fields.iter().map(|f| normalize(record.get(f))).collect()
    }

    pub fn insert(&mut self, record: T) {
        let key = self.key_of(&record);
        self.entries.entry(key).or_default().push(record);
        self.len += 1;
    }

    /// The first record inserted under `key`.
    #[must_use]
    pub fn get(&self, key: &[FieldValue]) -> Option<&T> {
        self.get_all(key).first()
    }

    /// Every record under `key`, in insertion order. A key whose length does
    /// not match the indexed fields finds nothing.
    #[must_use]
    pub fn get_all(&self, key: &[FieldValue]) -> &[T] {
        if key.len() != self.fields.len() {
            return &[];
        }
        self.entries.get(&normalized(key)).map(Vec::as_slice).unwrap_or(&[])
    }

    #[must_use]
    pub fn contains(&self, key: &[FieldValue]) -> bool {
        !self.get_all(key).is_empty()
    }

    /// Remove and return every record under `key`.
    pub fn remove(&mut self, key: &[FieldValue]) -> Vec<T> {
        if key.len() != self.fields.len() {
            return Vec::new();
        }
        let removed = self.entries.remove(&normalized(key)).unwrap_or_default();
        if !removed.is_empty() {
            tracing::debug!(?key, count = removed.len(), "evicted cached records");
        }
        self.len -= removed.len();
        removed
    }

    /// Number of cached records.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Distinct keys, in no particular order. Id values come back as text.
    pub fn keys(&self) -> impl Iterator<Item = &[FieldValue]> {
        self.entries.keys().map(Vec::as_slice)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.len = 0;
    }
}

fn normalize(value: FieldValue) -> FieldValue {
    match value {
        FieldValue::Id(id) => FieldValue::Text(id.0),
        FieldValue::List(items) => FieldValue::List(items.into_iter().map(normalize).collect()),
        other => other,
    }
}

fn normalized(key: &[FieldValue]) -> Vec<FieldValue> {
    key.iter().cloned().map(normalize).collect()
}

impl<T: Record> Extend<T> for IndexedCache<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, records: I) {
        for record in records {
            self.insert(record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::category;
    use crate::record::DynRecord;
    use crate::testing::{init_tracing, sample_opportunities};
    use crate::value::RecordId;

    fn v(s: &str) -> FieldValue {
        FieldValue::from(s)
    }

    #[test]
    fn empty_field_list_is_rejected() {
        let err = IndexedCache::<DynRecord>::new(Vec::<String>::new()).unwrap_err();
        assert!(matches!(category(&err), Some(CollectionError::Validation(e)) if e.code.as_deref() == Some("EMPTY_FIELD_SET")));
    }

    #[test]
    fn compound_keys_keep_insertion_order() -> Result<()> {
        let mut cache = IndexedCache::new(["StageName", "Account.Region"])?;
        cache.extend(sample_opportunities());
        assert_eq!(cache.len(), 4);

        let eu_prospects = cache.get_all(&[v("Prospecting"), v("EU")]);
        assert_eq!(eu_prospects.len(), 1);
        assert_eq!(eu_prospects[0].get("Name"), v("Acme Renewal"));

        let us_prospects = cache.get_all(&[v("Prospecting"), v("US")]);
        assert_eq!(us_prospects[0].get("Name"), v("Initech Pilot"));
        assert_eq!(cache.keys().count(), 4);
        Ok(())
    }

    #[test]
    fn wrong_key_length_is_a_miss() -> Result<()> {
        let mut cache = IndexedCache::new(["StageName"])?;
        cache.extend(sample_opportunities());
        assert!(cache.get(&[]).is_none());
        assert!(!cache.contains(&[v("Prospecting"), v("EU")]));
        assert!(cache.remove(&[v("Prospecting"), v("EU")]).is_empty());
        assert_eq!(cache.len(), 4);
        Ok(())
    }

    #[test]
    fn id_and_text_keys_match() -> Result<()> {
        let mut cache = IndexedCache::new(["AccountId"])?;
        cache.insert(DynRecord::new("Opportunity").with("AccountId", "001A").with("Name", "Text key"));
        cache.insert(DynRecord::new("Opportunity").with("AccountId", RecordId::from("001B")).with("Name", "Id key"));

        let by_id = cache.get(&[FieldValue::Id("001A".into())]);
        assert_eq!(by_id.map(|r| r.get("Name")), Some(v("Text key")));
        assert_eq!(cache.get(&[v("001B")]).map(|r| r.get("Name")), Some(v("Id key")));

        assert_eq!(cache.remove(&[FieldValue::Id("001B".into())]).len(), 1);
        assert_eq!(cache.len(), 1);
        Ok(())
    }

    #[test]
    fn remove_and_clear_track_len() -> Result<()> {
        init_tracing();
        let mut cache = IndexedCache::new(["StageName"])?;
        cache.extend(sample_opportunities());
        assert_eq!(cache.remove(&[v("Prospecting")]).len(), 2);
        assert_eq!(cache.len(), 2);
        assert!(!cache.contains(&[v("Prospecting")]));
        cache.clear();
        assert!(cache.is_empty());
        Ok(())
    }
}
