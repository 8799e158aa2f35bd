//! Prototype replication.
//!
//! [`Collection::fill`](crate::Collection::fill) appends copies of a prototype.
//! How a copy relates to its prototype is controlled by a [`CloneSpec`]; the
//! copying itself is the record type's [`Replicate`] implementation.
//!
//! [`Replicator`] is the builder form: anchor a prototype with
//! [`create`](Replicator::create), then add more records "similar" to it.
//!
//! ```
//! use recordkit::*;
//!
//! # fn main() -> anyhow::Result<()> {
//! let proto = DynRecord::new("Contact").with_id("003A").with("LastName", "Doe");
//! let contacts = Replicator::new()
//!     .create(2, &proto)
//!     .similarly(3, |c: &mut DynRecord, i| c.set("LastName", format!("Doe {i}")))?
//!     .build();
//!
//! assert_eq!(contacts.len(), 5);
//! assert!(contacts.iter().all(|c| c.id().is_none()));
//! # Ok(())
//! # }
//! ```

use crate::collection::Collection;
use crate::error::CollectionError;
use crate::record::{DynRecord, Record, GENERATED_TIMESTAMP_FIELDS};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// How a replica relates to its prototype. Everything is off by default: a
/// replica has no identity, no generated timestamps, no auto-number values,
/// and shares related records with the prototype.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CloneSpec {
    pub preserve_identity: bool,
    pub deep_copy: bool,
    pub preserve_generated_timestamps: bool,
    pub preserve_auto_sequence: bool,
}

impl CloneSpec {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            preserve_identity: false,
            deep_copy: false,
            preserve_generated_timestamps: false,
            preserve_auto_sequence: false,
        }
    }

    /// An exact copy: identity, timestamps, sequences kept, related records copied.
    #[must_use]
    pub const fn exact() -> Self {
        Self {
            preserve_identity: true,
            deep_copy: true,
            preserve_generated_timestamps: true,
            preserve_auto_sequence: true,
        }
    }

    #[must_use]
    pub const fn with_identity(mut self, preserve: bool) -> Self {
        self.preserve_identity = preserve;
        self
    }

    #[must_use]
    pub const fn with_deep_copy(mut self, deep: bool) -> Self {
        self.deep_copy = deep;
        self
    }

    #[must_use]
    pub const fn with_generated_timestamps(mut self, preserve: bool) -> Self {
        self.preserve_generated_timestamps = preserve;
        self
    }

    #[must_use]
    pub const fn with_auto_sequence(mut self, preserve: bool) -> Self {
        self.preserve_auto_sequence = preserve;
        self
    }
}

/// Produces an independent copy of `self` honoring a [`CloneSpec`].
///
/// Implementations must not mutate the prototype, and two replicas of the same
/// prototype must not share mutable state.
pub trait Replicate: Sized {
    fn replicate(&self, spec: &CloneSpec) -> Self;
}

impl Replicate for DynRecord {
    fn replicate(&self, spec: &CloneSpec) -> Self {
        let mut copy = self.clone();
        if !spec.preserve_identity {
            copy.set_id(None);
        }
        if !spec.preserve_generated_timestamps {
            for field in GENERATED_TIMESTAMP_FIELDS {
                copy.remove(field);
            }
        }
        if !spec.preserve_auto_sequence {
            let sequenced: Vec<String> = self.auto_number_fields().map(str::to_owned).collect();
            for field in sequenced {
                copy.remove(&field);
            }
        }
        if spec.deep_copy {
            for parent in copy.related_mut().values_mut() {
                *parent = Arc::new(parent.replicate(spec));
            }
        }
        copy
    }
}

/// Append `count` replicas of `prototype` to `out`.
pub(crate) fn replicate_into<T: Replicate>(out: &mut Vec<T>, count: usize, prototype: &T, spec: &CloneSpec) {
    out.reserve(count);
    out.extend((0..count).map(|_| prototype.replicate(spec)));
}

/// Builds a collection from an anchored prototype.
///
/// [`similarly`](Self::similarly) and [`similarly_from`](Self::similarly_from)
/// depend on a prior [`create`](Self::create) and fail with
/// [`CollectionError::State`] without one.
#[derive(Debug, Clone)]
pub struct Replicator<T> {
    spec: CloneSpec,
    anchor: Option<T>,
    records: Vec<T>,
}

impl<T> Default for Replicator<T> {
    fn default() -> Self {
        Self {
            spec: CloneSpec::default(),
            anchor: None,
            records: Vec::new(),
        }
    }
}

impl<T: Replicate + Record + Clone> Replicator<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_spec(mut self, spec: CloneSpec) -> Self {
        self.spec = spec;
        self
    }

    /// Anchor `prototype` and append `count` replicas of it. A later `create`
    /// replaces the anchor.
    #[must_use]
    pub fn create(mut self, count: usize, prototype: &T) -> Self {
        tracing::trace!(record_type = prototype.record_type(), count, "anchoring prototype");
        replicate_into(&mut self.records, count, prototype, &self.spec);
        self.anchor = Some(prototype.clone());
        self
    }

    /// Append `count` replicas of the anchor, each passed through `customize`
    /// with its zero-based index within this call.
    ///
    /// # Errors
    /// [`CollectionError::State`] when no prototype has been anchored.
    pub fn similarly<F>(mut self, count: usize, mut customize: F) -> Result<Self>
    where
        F: FnMut(&mut T, usize),
    {
        let Some(anchor) = self.anchor.as_ref() else {
            return Err(CollectionError::state("similarly() called before create()").into());
        };
        let start = self.records.len();
        replicate_into(&mut self.records, count, anchor, &self.spec);
        for (i, record) in self.records[start..].iter_mut().enumerate() {
            customize(record, i);
        }
        Ok(self)
    }

    /// Append `count` replicas of a different prototype of the same record type.
    ///
    /// # Errors
    /// [`CollectionError::State`] when no prototype has been anchored or the
    /// record types differ.
    pub fn similarly_from(mut self, count: usize, prototype: &T) -> Result<Self> {
        let Some(anchor) = self.anchor.as_ref() else {
            return Err(CollectionError::state("similarly_from() called before create()").into());
        };
        if anchor.record_type() != prototype.record_type() {
            return Err(CollectionError::state(format!(
                "cannot continue a {} sequence with a {} prototype",
                anchor.record_type(),
                prototype.record_type()
            ))
            .into());
        }
        replicate_into(&mut self.records, count, prototype, &self.spec);
        Ok(self)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn build(self) -> Collection<T> {
        Collection::new(self.records)
    }
}
