//! Change detection between a record and its prior version.

use super::ChangePredicate;
use crate::record::Record;
use crate::value::FieldValue;

/// One side of a [`FieldChanged`] transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueMatch {
    /// Wildcard; matches any value, including `Null`.
    Any,
    Exactly(FieldValue),
}

impl ValueMatch {
    fn matches(&self, value: &FieldValue) -> bool {
        match self {
            Self::Any => true,
            Self::Exactly(expected) => expected.matches(value),
        }
    }
}

impl From<FieldValue> for ValueMatch {
    fn from(value: FieldValue) -> Self {
        Self::Exactly(value)
    }
}

macro_rules! value_match_from {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for ValueMatch {
                fn from(value: $t) -> Self {
                    Self::Exactly(FieldValue::from(value))
                }
            }
        )*
    };
}

value_match_from!(&str, String, bool, i32, i64, f64);

/// Accepts a record when `field` changed from `from` to `to` relative to its
/// prior version.
///
/// The value must actually differ between the two versions. A record without a
/// prior version (a newly inserted one) is treated as having had `Null`.
///
/// ```
/// use recordkit::*;
///
/// let closed = FieldChanged::new("StageName", "Open", "Closed");
/// let before = DynRecord::new("Opportunity").with("StageName", "Open");
/// let after = DynRecord::new("Opportunity").with("StageName", "Closed");
///
/// assert!(closed.accepts(&after, Some(&before)));
/// assert!(!closed.accepts(&before, Some(&after)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChanged {
    field: String,
    from: ValueMatch,
    to: ValueMatch,
}

impl FieldChanged {
    /// Wildcard for either side of the transition.
    pub const ANY: ValueMatch = ValueMatch::Any;

    pub fn new<S, F, T>(field: S, from: F, to: T) -> Self
    where
        S: Into<String>,
        F: Into<ValueMatch>,
        T: Into<ValueMatch>,
    {
        Self {
            field: field.into(),
            from: from.into(),
            to: to.into(),
        }
    }

    /// Any change of `field`.
    pub fn any_change<S: Into<String>>(field: S) -> Self {
        Self::new(field, ValueMatch::Any, ValueMatch::Any)
    }
}

impl<T: Record> ChangePredicate<T> for FieldChanged {
    fn accepts(&self, record: &T, prior: Option<&T>) -> bool {
        let current = record.get(&self.field);
        let previous = prior.map_or(FieldValue::Null, |p| p.get(&self.field));
        !current.matches(&previous) && self.from.matches(&previous) && self.to.matches(&current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::DynRecord;

    fn stage(s: &str) -> DynRecord {
        DynRecord::new("Opportunity").with_id("006A").with("StageName", s)
    }

    #[test]
    fn exact_transition() {
        let p = FieldChanged::new("StageName", "Open", "Closed");
        assert!(p.accepts(&stage("Closed"), Some(&stage("Open"))));
        assert!(!p.accepts(&stage("Closed"), Some(&stage("Pending"))));
        assert!(!p.accepts(&stage("Closed"), Some(&stage("Closed"))));
    }

    #[test]
    fn wildcards_on_either_side() {
        let into_closed = FieldChanged::new("StageName", FieldChanged::ANY, "Closed");
        let out_of_open = FieldChanged::new("StageName", "Open", FieldChanged::ANY);
        assert!(into_closed.accepts(&stage("Closed"), Some(&stage("Pending"))));
        assert!(out_of_open.accepts(&stage("Pending"), Some(&stage("Open"))));
        assert!(!out_of_open.accepts(&stage("Open"), Some(&stage("Open"))));
    }

    #[test]
    fn detects_change_between_large_integers() {
        let amount = |n: i64| DynRecord::new("Opportunity").with_id("006A").with("Amount", n);
        let any = FieldChanged::any_change("Amount");
        assert!(any.accepts(&amount(9_007_199_254_740_993), Some(&amount(9_007_199_254_740_992))));
        assert!(!any.accepts(&amount(9_007_199_254_740_993), Some(&amount(9_007_199_254_740_993))));
    }

    #[test]
    fn missing_prior_reads_as_null() {
        let any = FieldChanged::any_change("StageName");
        assert!(any.accepts(&stage("Open"), None));
        assert!(!FieldChanged::new("StageName", "Open", "Closed").accepts(&stage("Closed"), None));
        assert!(FieldChanged::new("StageName", FieldValue::Null, "Open").accepts(&stage("Open"), None));
    }
}
