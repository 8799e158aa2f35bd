//! Test data builders for creating records and datasets fluently.

use crate::collection::Collection;
use crate::record::DynRecord;
use crate::value::{FieldValue, RecordId};

/// A fluent builder for one [`DynRecord`].
///
/// Ids can be given explicitly or derived from a prefix and a sequence
/// number, the way platform ids share a key prefix per record type.
///
/// # Example
///
/// ```
/// use recordkit::Record;
/// use recordkit::testing::RecordBuilder;
///
/// let opp = RecordBuilder::new("Opportunity")
///     .sequential_id("006", 7)
///     .field("StageName", "Open")
///     .field("Amount", 1200)
///     .build();
///
/// assert_eq!(opp.id().map(|id| id.to_string()), Some("006000000000007".to_string()));
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct RecordBuilder {
    record: DynRecord,
}

impl RecordBuilder {
    pub fn new<S: Into<String>>(record_type: S) -> Self {
        Self {
            record: DynRecord::new(record_type),
        }
    }

    pub fn id<I: Into<RecordId>>(mut self, id: I) -> Self {
        self.record.set_id(Some(id.into()));
        self
    }

    /// Id made of `prefix` followed by `n` zero-padded to 15 characters.
    pub fn sequential_id(self, prefix: &str, n: usize) -> Self {
        let width = 15usize.saturating_sub(prefix.len());
        self.id(format!("{prefix}{n:0width$}"))
    }

    pub fn field<S: Into<String>, V: Into<FieldValue>>(mut self, name: S, value: V) -> Self {
        self.record.set(name, value);
        self
    }

    pub fn related<S: Into<String>>(mut self, name: S, parent: DynRecord) -> Self {
        self.record.set_related(name, parent);
        self
    }

    pub fn auto_number<S: Into<String>, V: Into<FieldValue>>(mut self, name: S, value: V) -> Self {
        self.record = self.record.with_auto_number(name, value);
        self
    }

    /// Stamp the platform-generated audit fields with `timestamp`.
    pub fn audited(mut self, timestamp: &str) -> Self {
        for field in crate::record::GENERATED_TIMESTAMP_FIELDS {
            let value = if field.ends_with("ById") {
                FieldValue::Id(RecordId::new("005000000000001"))
            } else {
                FieldValue::from(timestamp)
            };
            self.record.set(field, value);
        }
        self
    }

    #[must_use]
    pub fn build(self) -> DynRecord {
        self.record
    }
}

/// A fluent builder for a [`Collection`] of test records.
///
/// # Example
///
/// ```
/// use recordkit::testing::{RecordBuilder, TestDataBuilder};
///
/// let data = TestDataBuilder::new()
///     .add_value(RecordBuilder::new("Lead").field("Company", "Acme").build())
///     .add_generated(3, |i| RecordBuilder::new("Lead").sequential_id("00Q", i).build())
///     .build();
///
/// assert_eq!(data.len(), 4);
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct TestDataBuilder<T> {
    data: Vec<T>,
}

impl<T> Default for TestDataBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TestDataBuilder<T> {
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn add_value(mut self, value: T) -> Self {
        self.data.push(value);
        self
    }

    pub fn add_values<I: IntoIterator<Item = T>>(mut self, values: I) -> Self {
        self.data.extend(values);
        self
    }

    pub fn add_repeated(mut self, value: T, count: usize) -> Self
    where
        T: Clone,
    {
        self.data.extend(std::iter::repeat_n(value, count));
        self
    }

    /// Add `count` values produced by `generate`, which receives the index
    /// within this call.
    pub fn add_generated<F: FnMut(usize) -> T>(mut self, count: usize, generate: F) -> Self {
        self.data.extend((0..count).map(generate));
        self
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn build(self) -> Collection<T> {
        Collection::new(self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    #[test]
    fn sequential_ids_are_fifteen_chars() {
        let r = RecordBuilder::new("Account").sequential_id("001", 42).build();
        assert_eq!(r.id(), Some(RecordId::new("001000000000042")));
    }

    #[test]
    fn audited_sets_every_generated_field() {
        let r = RecordBuilder::new("Case").audited("2024-05-01T00:00:00Z").build();
        assert_eq!(r.get("CreatedById"), FieldValue::Id(RecordId::new("005000000000001")));
        assert_eq!(r.get("SystemModstamp"), FieldValue::from("2024-05-01T00:00:00Z"));
    }

    #[test]
    fn data_builder_collects_in_order() {
        let c = TestDataBuilder::new().add_value(1).add_repeated(2, 2).add_values([3]).build();
        assert_eq!(c.into_vec(), vec![1, 2, 2, 3]);
    }
}
