//! Record predicates.
//!
//! A [`Predicate`] accepts or rejects a record. A [`ChangePredicate`] is given
//! the record together with its prior version, for filters that react to a
//! change (see [`Collection::filter_changed`](crate::Collection::filter_changed)).
//!
//! Closures implement both traits. The built-in predicates are constructed from
//! explicit parameters and validated up front:
//!
//! - [`FieldPredicate`] -- compare one field against a value (`==`, `!=`, `>`,
//!   `>=`, `<`, `<=`, `IN`, `NOT IN`).
//! - [`FieldValuesPredicate`] -- set membership of one field.
//! - [`RelatedTo`] -- foreign key points at one of a set of parent records.
//! - [`WithinDistance`] -- a coordinate pair lies within a radius of a point.
//! - [`FieldChanged`] -- a field moved from one value to another.
//!
//! [`Not`], [`All`] and [`AnyOf`] compose predicates.
//!
//! # Example
//! ```
//! use recordkit::*;
//!
//! # fn main() -> anyhow::Result<()> {
//! let open = FieldPredicate::new("StageName", "==", "Open")?;
//! let big = FieldPredicate::new("Amount", ">=", 1000)?;
//! let both = All::new(vec![Box::new(open) as Box<dyn Predicate<DynRecord>>, Box::new(big)]);
//!
//! let r = DynRecord::new("Opportunity").with("StageName", "Open").with("Amount", 2500);
//! assert!(both.accepts(&r));
//! # Ok(())
//! # }
//! ```

mod changed;
mod distance;
mod field;
mod related;

pub use changed::{FieldChanged, ValueMatch};
pub use distance::{DistanceUnit, GeoPoint, WithinDistance};
pub use field::{FieldPredicate, FieldValuesPredicate, Operator};
pub use related::RelatedTo;

/// Accepts or rejects a record.
pub trait Predicate<T> {
    fn accepts(&self, record: &T) -> bool;
}

/// Accepts or rejects a record given its prior version, if any.
pub trait ChangePredicate<T> {
    fn accepts(&self, record: &T, prior: Option<&T>) -> bool;
}

impl<T, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    fn accepts(&self, record: &T) -> bool {
        self(record)
    }
}

impl<T, F> ChangePredicate<T> for F
where
    F: Fn(&T, Option<&T>) -> bool,
{
    fn accepts(&self, record: &T, prior: Option<&T>) -> bool {
        self(record, prior)
    }
}

/// Inverts a predicate.
#[derive(Debug, Clone)]
pub struct Not<P>(pub P);

impl<T, P: Predicate<T>> Predicate<T> for Not<P> {
    fn accepts(&self, record: &T) -> bool {
        !self.0.accepts(record)
    }
}

/// Accepts when every inner predicate accepts. Empty accepts everything.
pub struct All<T> {
    predicates: Vec<Box<dyn Predicate<T>>>,
}

impl<T> All<T> {
    #[must_use]
    pub fn new(predicates: Vec<Box<dyn Predicate<T>>>) -> Self {
        Self { predicates }
    }
}

impl<T> Predicate<T> for All<T> {
    fn accepts(&self, record: &T) -> bool {
        self.predicates.iter().all(|p| p.accepts(record))
    }
}

/// Accepts when at least one inner predicate accepts. Empty rejects everything.
pub struct AnyOf<T> {
    predicates: Vec<Box<dyn Predicate<T>>>,
}

impl<T> AnyOf<T> {
    #[must_use]
    pub fn new(predicates: Vec<Box<dyn Predicate<T>>>) -> Self {
        Self { predicates }
    }
}

impl<T> Predicate<T> for AnyOf<T> {
    fn accepts(&self, record: &T) -> bool {
        self.predicates.iter().any(|p| p.accepts(record))
    }
}
