//! Relationship membership.

use super::Predicate;
use crate::record::Record;
use crate::value::RecordId;
use std::collections::HashSet;

/// Accepts records whose foreign-key field holds the identity of one of the
/// given parent records. Parents without an identity are ignored.
///
/// ```
/// use recordkit::*;
///
/// let accounts = vec![DynRecord::new("Account").with_id("001A")];
/// let related = RelatedTo::new("AccountId", &accounts);
///
/// assert!(related.accepts(&DynRecord::new("Contact").with("AccountId", "001A")));
/// assert!(!related.accepts(&DynRecord::new("Contact").with("AccountId", "001B")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedTo {
    field: String,
    parent_ids: HashSet<RecordId>,
}

impl RelatedTo {
    pub fn new<S, P>(field: S, parents: &[P]) -> Self
    where
        S: Into<String>,
        P: Record,
    {
        Self {
            field: field.into(),
            parent_ids: parents.iter().filter_map(|p| p.id()).collect(),
        }
    }

    /// Build from identities directly.
    pub fn from_ids<S, I>(field: S, ids: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = RecordId>,
    {
        Self {
            field: field.into(),
            parent_ids: ids.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn parent_count(&self) -> usize {
        self.parent_ids.len()
    }
}

impl<T: Record> Predicate<T> for RelatedTo {
    fn accepts(&self, record: &T) -> bool {
        record
            .get(&self.field)
            .as_id()
            .is_some_and(|id| self.parent_ids.contains(&id))
    }
}
