//! Field-value predicates.

use super::Predicate;
use crate::error::{CollectionError, ValidationError};
use crate::record::Record;
use crate::value::FieldValue;
use anyhow::Result;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Comparison operators supported by [`FieldPredicate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
    In,
    NotIn,
}

impl Operator {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::In => "IN",
            Self::NotIn => "NOT IN",
        }
    }

    fn evaluate(self, actual: &FieldValue, expected: &FieldValue) -> bool {
        match self {
            Self::Eq => actual.matches(expected),
            Self::Ne => !actual.matches(expected),
            Self::Gt => actual.compare(expected) == Some(Ordering::Greater),
            Self::Ge => matches!(actual.compare(expected), Some(Ordering::Greater | Ordering::Equal)),
            Self::Lt => actual.compare(expected) == Some(Ordering::Less),
            Self::Le => matches!(actual.compare(expected), Some(Ordering::Less | Ordering::Equal)),
            Self::In => members(expected).iter().any(|m| actual.matches(m)),
            Self::NotIn => !members(expected).iter().any(|m| actual.matches(m)),
        }
    }
}

// A scalar operand to IN / NOT IN is a set of one.
fn members(operand: &FieldValue) -> &[FieldValue] {
    match operand {
        FieldValue::List(items) => items,
        other => std::slice::from_ref(other),
    }
}

impl FromStr for Operator {
    type Err = CollectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ").to_ascii_uppercase();
        match normalized.as_str() {
            "==" | "=" => Ok(Self::Eq),
            "!=" | "<>" => Ok(Self::Ne),
            ">" => Ok(Self::Gt),
            ">=" => Ok(Self::Ge),
            "<" => Ok(Self::Lt),
            "<=" => Ok(Self::Le),
            "IN" => Ok(Self::In),
            "NOT IN" => Ok(Self::NotIn),
            _ => Err(ValidationError::field("operator", format!("unsupported operator '{s}'"))
                .with_code("UNSUPPORTED_OPERATOR")
                .into()),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Compares one field of a record against a fixed value.
///
/// Ordering operators reject records whose field is `Null`, and `Int`/`Float`
/// values compare numerically. For `IN`/`NOT IN` the operand is a
/// [`FieldValue::List`]; a scalar operand acts as a one-element list.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldPredicate {
    field: String,
    operator: Operator,
    value: FieldValue,
}

impl FieldPredicate {
    /// Build from an operator string such as `"=="` or `"NOT IN"`.
    ///
    /// # Errors
    /// Returns a validation error for operators outside the supported set.
    pub fn new<S, V>(field: S, operator: &str, value: V) -> Result<Self>
    where
        S: Into<String>,
        V: Into<FieldValue>,
    {
        let operator: Operator = operator.parse()?;
        Ok(Self::with_operator(field, operator, value))
    }

    pub fn with_operator<S, V>(field: S, operator: Operator, value: V) -> Self
    where
        S: Into<String>,
        V: Into<FieldValue>,
    {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }

    #[must_use]
    pub const fn operator(&self) -> Operator {
        self.operator
    }
}

impl<T: Record> Predicate<T> for FieldPredicate {
    fn accepts(&self, record: &T) -> bool {
        self.operator.evaluate(&record.get(&self.field), &self.value)
    }
}

/// Set membership of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValuesPredicate {
    field: String,
    values: HashSet<FieldValue>,
    negate: bool,
}

impl FieldValuesPredicate {
    /// Accepts records whose field value is in `values`.
    pub fn within<S, I, V>(field: S, values: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<FieldValue>,
    {
        Self {
            field: field.into(),
            values: values.into_iter().map(Into::into).collect(),
            negate: false,
        }
    }

    /// Accepts records whose field value is not in `values`.
    pub fn not_within<S, I, V>(field: S, values: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<FieldValue>,
    {
        Self {
            negate: true,
            ..Self::within(field, values)
        }
    }
}

impl<T: Record> Predicate<T> for FieldValuesPredicate {
    fn accepts(&self, record: &T) -> bool {
        let value = record.get(&self.field);
        // Exact hit first; fall back to the semantic match so 1 and 1.0 agree.
        let found = self.values.contains(&value) || self.values.iter().any(|v| v.matches(&value));
        found != self.negate
    }
}
