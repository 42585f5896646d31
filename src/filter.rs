// Query filtering over record sequences

use crate::record::Record;
use crate::value::Value;
use std::cmp::Ordering;

/// Filter for querying records
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    /// Field name to filter on
    pub field: String,
    /// Comparison operator
    pub op: FilterOp,
    /// Value to compare against
    pub value: Value,
}

/// Comparison operators for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,         // ==
    Ne,         // !=
    Gt,         // >
    Lt,         // <
    Gte,        // >=
    Lte,        // <=
    Contains,   // substring, strings only
    StartsWith, // prefix, strings only
}

impl FilterOp {
    /// Apply the operator to a field value and an operand
    ///
    /// Values of different variants never match, under any operator.
    pub fn apply(self, field_value: &Value, operand: &Value) -> bool {
        match self {
            FilterOp::Contains => match (field_value, operand) {
                (Value::String(s), Value::String(needle)) => s.contains(needle.as_str()),
                _ => false,
            },
            FilterOp::StartsWith => match (field_value, operand) {
                (Value::String(s), Value::String(prefix)) => s.as_bytes().starts_with(prefix.as_bytes()),
                _ => false,
            },
            _ => match field_value.compare(operand) {
                Some(ordering) => self.accepts(ordering),
                None => false,
            },
        }
    }

    fn accepts(self, ordering: Ordering) -> bool {
        match self {
            FilterOp::Eq => ordering == Ordering::Equal,
            FilterOp::Ne => ordering != Ordering::Equal,
            FilterOp::Gt => ordering == Ordering::Greater,
            FilterOp::Lt => ordering == Ordering::Less,
            FilterOp::Gte => ordering != Ordering::Less,
            FilterOp::Lte => ordering != Ordering::Greater,
            FilterOp::Contains | FilterOp::StartsWith => false,
        }
    }
}

impl std::fmt::Display for FilterOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterOp::Eq => write!(f, "="),
            FilterOp::Ne => write!(f, "!="),
            FilterOp::Gt => write!(f, ">"),
            FilterOp::Lt => write!(f, "<"),
            FilterOp::Gte => write!(f, ">="),
            FilterOp::Lte => write!(f, "<="),
            FilterOp::Contains => write!(f, "CONTAINS"),
            FilterOp::StartsWith => write!(f, "STARTS WITH"),
        }
    }
}

impl Filter {
    pub fn new(field: impl Into<String>, op: FilterOp, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field, FilterOp::Eq, value)
    }

    /// Case-sensitive, byte-wise string prefix match
    pub fn starts_with(field: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self::new(field, FilterOp::StartsWith, Value::String(prefix.into()))
    }

    /// Field holds exactly `true`
    pub fn is_true(field: impl Into<String>) -> Self {
        Self::new(field, FilterOp::Eq, true)
    }

    /// Check a record against this filter; a missing field never matches
    pub fn matches(&self, record: &Record) -> bool {
        record
            .get(&self.field)
            .is_some_and(|field_value| self.op.apply(field_value, &self.value))
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.field, self.op, self.value)
    }
}
