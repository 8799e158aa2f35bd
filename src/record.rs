//! Record access.
//!
//! The built-in extractors, predicates and comparators read records through the
//! [`Record`] trait: a stable identity, a record type, and named fields. Any
//! struct can implement it; [`DynRecord`] is a ready-made dynamic record for
//! data whose shape is only known at runtime.

use crate::value::{FieldValue, RecordId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;
use std::sync::Arc;

/// Field names the platform stamps on write. Dropped by replication unless
/// [`CloneSpec::preserve_generated_timestamps`](crate::CloneSpec) is set.
pub const GENERATED_TIMESTAMP_FIELDS: [&str; 5] = [
    "CreatedById",
    "CreatedDate",
    "LastModifiedById",
    "LastModifiedDate",
    "SystemModstamp",
];

/// Read access to a record.
pub trait Record {
    /// Stable primary key, `None` for records not yet persisted.
    fn id(&self) -> Option<RecordId>;

    /// Value of `field`; missing fields read as [`FieldValue::Null`].
    fn get(&self, field: &str) -> FieldValue;

    /// Logical category of the record (e.g. `"Opportunity"`).
    fn record_type(&self) -> &str {
        ""
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn id(&self) -> Option<RecordId> {
        (**self).id()
    }
    fn get(&self, field: &str) -> FieldValue {
        (**self).get(field)
    }
    fn record_type(&self) -> &str {
        (**self).record_type()
    }
}

impl<R: Record + ?Sized> Record for Box<R> {
    fn id(&self) -> Option<RecordId> {
        (**self).id()
    }
    fn get(&self, field: &str) -> FieldValue {
        (**self).get(field)
    }
    fn record_type(&self) -> &str {
        (**self).record_type()
    }
}

impl<R: Record + ?Sized> Record for Rc<R> {
    fn id(&self) -> Option<RecordId> {
        (**self).id()
    }
    fn get(&self, field: &str) -> FieldValue {
        (**self).get(field)
    }
    fn record_type(&self) -> &str {
        (**self).record_type()
    }
}

impl<R: Record + ?Sized> Record for Arc<R> {
    fn id(&self) -> Option<RecordId> {
        (**self).id()
    }
    fn get(&self, field: &str) -> FieldValue {
        (**self).get(field)
    }
    fn record_type(&self) -> &str {
        (**self).record_type()
    }
}

/// A record whose fields are held in a map.
///
/// Parent records reached through a lookup are kept in `related` and shared
/// through `Arc`, so a shallow copy of a child keeps pointing at the same
/// parent. Dotted paths such as `"Account.Name"` read through them.
///
/// ```
/// use recordkit::{DynRecord, FieldValue, Record};
///
/// let account = DynRecord::new("Account").with_id("001A").with("Name", "Acme");
/// let opp = DynRecord::new("Opportunity")
///     .with("StageName", "Open")
///     .with_related("Account", account);
///
/// assert_eq!(opp.get("Account.Name"), FieldValue::from("Acme"));
/// assert_eq!(opp.get("Amount"), FieldValue::Null);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DynRecord {
    record_type: String,
    #[serde(default)]
    id: Option<RecordId>,
    #[serde(default)]
    fields: BTreeMap<String, FieldValue>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    related: BTreeMap<String, Arc<DynRecord>>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    auto_number_fields: BTreeSet<String>,
}

impl DynRecord {
    pub fn new<S: Into<String>>(record_type: S) -> Self {
        Self {
            record_type: record_type.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_id<I: Into<RecordId>>(mut self, id: I) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with<S: Into<String>, V: Into<FieldValue>>(mut self, field: S, value: V) -> Self {
        self.set(field, value);
        self
    }

    #[must_use]
    pub fn with_related<S: Into<String>>(mut self, name: S, parent: DynRecord) -> Self {
        self.set_related(name, parent);
        self
    }

    /// Declare `field` as platform-sequenced (an auto-number).
    #[must_use]
    pub fn with_auto_number<S: Into<String>, V: Into<FieldValue>>(mut self, field: S, value: V) -> Self {
        let field = field.into();
        self.auto_number_fields.insert(field.clone());
        self.set(field, value);
        self
    }

    pub fn set<S: Into<String>, V: Into<FieldValue>>(&mut self, field: S, value: V) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn remove(&mut self, field: &str) -> Option<FieldValue> {
        self.fields.remove(field)
    }

    pub fn set_id(&mut self, id: Option<RecordId>) {
        self.id = id;
    }

    pub fn set_related<S: Into<String>>(&mut self, name: S, parent: DynRecord) {
        self.related.insert(name.into(), Arc::new(parent));
    }

    #[must_use]
    pub fn related(&self, name: &str) -> Option<&DynRecord> {
        self.related.get(name).map(AsRef::as_ref)
    }

    /// Shared handle to a related record; used to check sharing after a copy.
    #[must_use]
    pub fn related_handle(&self, name: &str) -> Option<&Arc<DynRecord>> {
        self.related.get(name)
    }

    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    #[must_use]
    pub const fn fields(&self) -> &BTreeMap<String, FieldValue> {
        &self.fields
    }

    #[must_use]
    pub fn is_auto_number(&self, field: &str) -> bool {
        self.auto_number_fields.contains(field)
    }

    pub(crate) fn auto_number_fields(&self) -> impl Iterator<Item = &str> {
        self.auto_number_fields.iter().map(String::as_str)
    }

    pub(crate) fn related_mut(&mut self) -> &mut BTreeMap<String, Arc<DynRecord>> {
        &mut self.related
    }
}

impl Record for DynRecord {
    fn id(&self) -> Option<RecordId> {
        self.id.clone()
    }

    fn get(&self, field: &str) -> FieldValue {
        if field.eq_ignore_ascii_case("Id") {
            return self.id.clone().map_or(FieldValue::Null, FieldValue::Id);
        }
        if let Some(v) = self.fields.get(field) {
            return v.clone();
        }
        match field.split_once('.') {
            Some((rel, rest)) => self
                .related
                .get(rel)
                .map_or(FieldValue::Null, |parent| parent.get(rest)),
            None => FieldValue::Null,
        }
    }

    fn record_type(&self) -> &str {
        &self.record_type
    }
}
