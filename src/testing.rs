//! Testing utilities for code built on recordkit collections.
//!
//! This module provides:
//!
//! - **Assertions**: compare collection outputs and groupings with expected results
//! - **Builders**: construct records and datasets fluently
//! - **Fixtures**: small fixed record sets (accounts, opportunities, stores)
//!
//! # Quick Start
//!
//! ```
//! use recordkit::*;
//! use recordkit::testing::*;
//!
//! # fn main() -> anyhow::Result<()> {
//! let prospecting = Collection::new(sample_opportunities())
//!     .filter(FieldPredicate::new("StageName", "==", "Prospecting")?);
//!
//! assert_field_values(&prospecting, "Name", ["Acme Renewal", "Initech Pilot"]);
//! assert_all(&prospecting, |o: &DynRecord| o.get("Account.Region") != FieldValue::Null);
//! # Ok(())
//! # }
//! ```
//!
//! # Assertion Functions
//!
//! - [`assert_collections_equal`]: exact order-dependent comparison
//! - [`assert_collections_unordered_equal`]: order-independent comparison
//! - [`assert_groups_equal`]: per-key comparison of `group_by` output
//! - [`assert_field_values`]: compare one field across all records
//! - [`assert_all`] / [`assert_none`]: predicate checks over every element

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;

/// Install a `tracing` subscriber honoring `RUST_LOG`, once per process.
///
/// Only available to this crate's own tests.
#[cfg(test)]
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
