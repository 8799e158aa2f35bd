//! # Recordkit
//!
//! A **chainable collection toolkit** for platform-style business records.
//! Recordkit wraps an ordered sequence of records in a [`Collection`] and
//! provides the keyed, filtering, ordering and replication operations that
//! business logic needs, driven by small pluggable strategies.
//!
//! ## Key Features
//!
//! - **Fluent API** - chain `filter`, `sort`, `fill`, `wrap` and `for_each`
//! - **Keyed operations** - `unique_values`, `map_by`, `group_by` over any key extractor
//! - **Built-in strategies** - field predicates with comparison operators, set
//!   membership, relationship membership, geographic distance, field changes
//! - **Null-safe** - absent sequences behave as empty for every read-only operation
//! - **Replication** - copy prototypes with explicit [`CloneSpec`] policies
//! - **Type-safe** - generic over the record type; dynamic records are one option
//!
//! ## Quick Start
//!
//! ```
//! use recordkit::*;
//! # use anyhow::Result;
//!
//! # fn main() -> Result<()> {
//! let opps = Collection::new(vec![
//!     DynRecord::new("Opportunity").with_id("006A").with("StageName", "Open").with("Amount", 100),
//!     DynRecord::new("Opportunity").with_id("006B").with("StageName", "Closed").with("Amount", 250),
//!     DynRecord::new("Opportunity").with_id("006C").with("StageName", "Open").with("Amount", 75),
//! ]);
//!
//! // Group by stage
//! let by_stage = opps.clone().group_by(FieldKey::new("StageName"));
//! assert_eq!(by_stage[&FieldValue::from("Open")].len(), 2);
//!
//! // Filter, sort, fold
//! let open_total = opps
//!     .filter(FieldPredicate::new("StageName", "==", "Open")?)
//!     .sort_by_field("Amount", SortDirection::Ascending)
//!     .reduce(0.0, |acc, o, _| acc + o.get("Amount").as_f64().unwrap_or(0.0));
//! assert_eq!(open_total, 175.0);
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Concepts
//!
//! ### Records
//!
//! The [`Record`] trait is the read-only view every built-in strategy uses:
//! an optional [`RecordId`] plus field lookup returning a [`FieldValue`].
//! [`DynRecord`] is a ready-made dynamic record; any struct can implement the
//! trait itself.
//!
//! ### Collection
//!
//! A [`Collection<T>`] owns an ordered `Vec<T>`. Operations that produce a
//! sequence consume the collection and return the next one; terminal operations
//! return plain containers. Every operation also exists as a free function in
//! [`ops`], taking any [`RecordSource`] (slices, vectors, `Option`s).
//!
//! ### Strategies
//!
//! Operations are parameterized by one-method traits. Closures implement all of
//! them:
//! - [`KeyExtractor`] / [`KeyValueExtractor`] - derive a key (and value) from a record
//! - [`Predicate`] / [`ChangePredicate`] - accept or reject a record (with its prior version)
//! - [`Comparator`] - three-way ordering between records
//! - [`WrapperFactory`] - adapt a record into a wrapper type
//!
//! ### Errors
//!
//! Fallible operations return [`anyhow::Result`] backed by a [`CollectionError`].
//! Lookup misses are `Option`s, never errors.
//!
//! ## Module Overview
//!
//! - [`collection`] - the `Collection` type and `RecordSource`
//! - [`record`] / [`value`] - the record model
//! - [`extract`], [`predicates`], [`ordering`], [`wrap`] - strategies and built-ins
//! - [`replicate`] - `CloneSpec`, `Replicate` and the `Replicator` builder
//! - [`cache`] - `IndexedCache`, a multi-map keyed by field values
//! - [`cast`] - deep conversion between structurally compatible types
//! - [`ops`] - free-function forms of every operation
//! - [`testing`] - assertions, builders and fixtures for tests

pub mod cache;
pub mod cast;
pub mod collection;
pub mod error;
pub mod extract;
pub mod ops;
pub mod ordering;
pub mod predicates;
pub mod record;
pub mod replicate;
pub mod testing;
pub mod value;
pub mod wrap;

mod helpers;

pub use cache::IndexedCache;
pub use cast::cast;
pub use collection::{Collection, RecordSource};
pub use error::{category, CollectionError, ValidationError};
pub use extract::{CompositeKey, FieldKey, FieldPairKey, FieldToField, IdKey, KeyExtractor, KeyValueExtractor};
pub use ordering::{Comparator, FieldComparator, Reversed, SortDirection, Then};
pub use predicates::{
    AnyOf, All, ChangePredicate, DistanceUnit, FieldChanged, FieldPredicate, FieldValuesPredicate, GeoPoint, Not,
    Operator, Predicate, RelatedTo, ValueMatch, WithinDistance,
};
pub use record::{DynRecord, Record, GENERATED_TIMESTAMP_FIELDS};
pub use replicate::{CloneSpec, Replicate, Replicator};
pub use value::{FieldValue, RecordId};
pub use wrap::{Wrapped, WrapperFactory};
