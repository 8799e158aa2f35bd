//! Key extraction strategies.
//!
//! A [`KeyExtractor`] derives the key a record is mapped or grouped under; a
//! [`KeyValueExtractor`] also derives the value stored against that key. The
//! key type is declared alongside the extractor as an associated type, so the
//! result containers of [`Collection::map_by`](crate::Collection::map_by) and
//! friends are fully typed.
//!
//! Closures implement both traits:
//!
//! ```
//! use recordkit::Collection;
//!
//! let words = Collection::new(vec!["apple", "avocado", "banana"]);
//! let by_initial = words.group_by(|w: &&str| w.chars().next());
//! assert_eq!(by_initial[&Some('a')].len(), 2);
//! ```

use crate::error::{CollectionError, ValidationError};
use crate::record::Record;
use crate::value::{FieldValue, RecordId};
use anyhow::Result;
use std::hash::Hash;

/// Derives a key from a record.
pub trait KeyExtractor<T> {
    type Key: Eq + Hash;

    fn key(&self, record: &T) -> Self::Key;
}

/// Derives a `(key, value)` pair from a record.
pub trait KeyValueExtractor<T> {
    type Key: Eq + Hash;
    type Value;

    fn key_value(&self, record: &T) -> (Self::Key, Self::Value);
}

impl<T, K, F> KeyExtractor<T> for F
where
    F: Fn(&T) -> K,
    K: Eq + Hash,
{
    type Key = K;

    fn key(&self, record: &T) -> K {
        self(record)
    }
}

impl<T, K, V, F> KeyValueExtractor<T> for F
where
    F: Fn(&T) -> (K, V),
    K: Eq + Hash,
{
    type Key = K;
    type Value = V;

    fn key_value(&self, record: &T) -> (K, V) {
        self(record)
    }
}

/// Keys a record by the value of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldKey {
    field: String,
}

impl FieldKey {
    pub fn new<S: Into<String>>(field: S) -> Self {
        Self { field: field.into() }
    }
}

impl<T: Record> KeyExtractor<T> for FieldKey {
    type Key = FieldValue;

    fn key(&self, record: &T) -> FieldValue {
        record.get(&self.field)
    }
}

/// Keys a record by the values of two fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPairKey {
    first: String,
    second: String,
}

impl FieldPairKey {
    pub fn new<A: Into<String>, B: Into<String>>(first: A, second: B) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }
}

impl<T: Record> KeyExtractor<T> for FieldPairKey {
    type Key = (FieldValue, FieldValue);

    fn key(&self, record: &T) -> Self::Key {
        (record.get(&self.first), record.get(&self.second))
    }
}

/// Keys a record by the values of any number of fields, in the given order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeKey {
    fields: Vec<String>,
}

impl CompositeKey {
    /// # Errors
    /// Returns a validation error when `fields` is empty.
    pub fn new<I, S>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        if fields.is_empty() {
            return Err(CollectionError::from(
                ValidationError::field("fields", "compound key needs at least one field")
                    .with_code("EMPTY_FIELD_SET"),
            )
            .into());
        }
        Ok(Self { fields })
    }

    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

impl<T: Record> KeyExtractor<T> for CompositeKey {
    type Key = Vec<FieldValue>;

    fn key(&self, record: &T) -> Self::Key {
        self.fields.iter().map(|f| record.get(f)).collect()
    }
}

/// Maps one field (the key) to another (the value).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldToField {
    key_field: String,
    value_field: String,
}

impl FieldToField {
    pub fn new<K: Into<String>, V: Into<String>>(key_field: K, value_field: V) -> Self {
        Self {
            key_field: key_field.into(),
            value_field: value_field.into(),
        }
    }
}

impl<T: Record> KeyValueExtractor<T> for FieldToField {
    type Key = FieldValue;
    type Value = FieldValue;

    fn key_value(&self, record: &T) -> (FieldValue, FieldValue) {
        (record.get(&self.key_field), record.get(&self.value_field))
    }
}

/// Keys a record by its identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdKey;

impl<T: Record> KeyExtractor<T> for IdKey {
    type Key = Option<RecordId>;

    fn key(&self, record: &T) -> Option<RecordId> {
        record.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::category;
    use crate::record::DynRecord;

    fn opp() -> DynRecord {
        DynRecord::new("Opportunity")
            .with_id("006A")
            .with("StageName", "Open")
            .with("Region", "EMEA")
    }

    #[test]
    fn builtin_extractors_read_fields() {
        let r = opp();
        assert_eq!(FieldKey::new("StageName").key(&r), FieldValue::from("Open"));
        assert_eq!(
            FieldPairKey::new("StageName", "Region").key(&r),
            (FieldValue::from("Open"), FieldValue::from("EMEA"))
        );
        assert_eq!(IdKey.key(&r), Some(RecordId::new("006A")));
        assert_eq!(
            FieldToField::new("Id", "StageName").key_value(&r),
            (FieldValue::Id(RecordId::new("006A")), FieldValue::from("Open"))
        );
    }

    #[test]
    fn composite_key_keeps_field_order() -> Result<()> {
        let key = CompositeKey::new(["Region", "StageName"])?;
        assert_eq!(
            key.key(&opp()),
            vec![FieldValue::from("EMEA"), FieldValue::from("Open")]
        );
        Ok(())
    }

    #[test]
    fn composite_key_rejects_empty_field_set() {
        let err = CompositeKey::new(Vec::<String>::new()).unwrap_err();
        assert!(category(&err).is_some_and(CollectionError::is_validation));
    }

    #[test]
    fn closures_are_extractors() {
        let len = |s: &String| s.len();
        assert_eq!(KeyExtractor::key(&len, &"four".to_string()), 4);
        let pair = |s: &String| (s.len(), s.to_uppercase());
        assert_eq!(pair.key_value(&"ab".to_string()), (2, "AB".to_string()));
    }
}
