//! [`Collection::fill`]: append replicas of a prototype.

use crate::collection::Collection;
use crate::replicate::{replicate_into, CloneSpec, Replicate};

impl<T: Replicate> Collection<T> {
    /// Append `count` independent replicas of `prototype`.
    ///
    /// `spec` defaults to [`CloneSpec::default`]. The prototype is never
    /// modified, and replicas share no mutable state with it or each other.
    ///
    /// # Example
    /// ```
    /// use recordkit::*;
    ///
    /// let proto = DynRecord::new("Lead").with_id("00QA").with("Company", "Acme");
    /// let leads = Collection::empty().fill(3, &proto, None);
    /// assert_eq!(leads.len(), 3);
    /// assert!(leads.iter().all(|l| l.id().is_none()));
    /// ```
    #[must_use]
    pub fn fill(mut self, count: usize, prototype: &T, spec: Option<CloneSpec>) -> Self {
        let spec = spec.unwrap_or_default();
        tracing::trace!(count, ?spec, "filling collection");
        replicate_into(&mut self.items, count, prototype, &spec);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{DynRecord, Record};
    use crate::value::FieldValue;

    #[test]
    fn replicas_are_independent() {
        let proto = DynRecord::new("Lead").with_id("00QA").with("Company", "Acme");
        let mut filled = Collection::new(vec![DynRecord::new("Lead")]).fill(2, &proto, Some(CloneSpec::exact()));
        filled.items[1].set("Company", "Changed");
        assert_eq!(filled.len(), 3);
        assert_eq!(filled[2].get("Company"), FieldValue::from("Acme"));
        assert_eq!(proto.get("Company"), FieldValue::from("Acme"));
        assert_eq!(filled[2].id(), proto.id());
    }

    #[test]
    fn zero_count_is_a_no_op() {
        let proto = DynRecord::new("Lead");
        assert!(Collection::empty().fill(0, &proto, None).is_empty());
    }
}
