// Fixed-schema records made of named field values

use crate::error::{Result, StoreError};
use crate::value::Value;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered bundle of named field values
///
/// The field set is fixed when the record is built: values can be replaced,
/// but fields can't be added or removed. A record always has at least one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "IndexMap<String, Value>", into = "IndexMap<String, Value>")]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    /// Build a record from `(field, value)` pairs, keeping their order
    ///
    /// A repeated field name keeps its first position and takes the last value.
    pub fn new<I, K, V>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let fields: IndexMap<String, Value> = fields.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self::try_from(fields)
    }

    /// Value of a field, or `None` if the record has no such field
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Replace the value of an existing field, returning the previous value
    pub fn set(&mut self, field: &str, value: impl Into<Value>) -> Result<Value> {
        match self.fields.get_mut(field) {
            Some(slot) => Ok(std::mem::replace(slot, value.into())),
            None => Err(StoreError::UnknownField {
                field: field.to_string(),
            }),
        }
    }

    /// Caller-provided identifier, if the record has an `id` field
    pub fn id(&self) -> Option<&Value> {
        self.fields.get("id")
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Fields in creation order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Serialize as a single-line JSON object
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl TryFrom<IndexMap<String, Value>> for Record {
    type Error = StoreError;

    fn try_from(fields: IndexMap<String, Value>) -> Result<Self> {
        if fields.is_empty() {
            return Err(StoreError::EmptyRecord);
        }
        Ok(Self { fields })
    }
}

impl From<Record> for IndexMap<String, Value> {
    fn from(record: Record) -> Self {
        record.fields
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", name, value)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, name: &str, active: bool) -> Record {
        Record::new([
            ("id", Value::from(id)),
            ("name", Value::from(name)),
            ("active", Value::from(active)),
        ])
        .unwrap()
    }

    #[test]
    fn test_record_new_keeps_field_order() {
        let record = user(101, "Francis", true);
        let names: Vec<&str> = record.field_names().collect();
        assert_eq!(names, vec!["id", "name", "active"]);
        assert_eq!(record.field_count(), 3);
    }

    #[test]
    fn test_record_new_empty_fails() {
        let result = Record::new(Vec::<(String, Value)>::new());
        assert_eq!(result, Err(StoreError::EmptyRecord));
    }

    #[test]
    fn test_record_new_duplicate_field_last_value_wins() {
        let record = Record::new([("name", "Spring"), ("name", "Flask")]).unwrap();
        assert_eq!(record.field_count(), 1);
        assert_eq!(record.get("name"), Some(&Value::from("Flask")));
    }

    #[test]
    fn test_record_get_and_id() {
        let record = user(102, "Admin", true);
        assert_eq!(record.get("name"), Some(&Value::from("Admin")));
        assert_eq!(record.get("email"), None);
        assert_eq!(record.id(), Some(&Value::from(102)));

        let anonymous = Record::new([("name", "Django")]).unwrap();
        assert!(anonymous.id().is_none());
    }

    #[test]
    fn test_record_set_existing_field() {
        let mut record = user(101, "Francis", true);
        let previous = record.set("active", false).unwrap();

        assert_eq!(previous, Value::from(true));
        assert_eq!(record.get("active"), Some(&Value::from(false)));
    }

    #[test]
    fn test_record_set_unknown_field() {
        let mut record = user(101, "Francis", true);
        let err = record.set("email", "f@example.com").unwrap_err();

        assert_eq!(
            err,
            StoreError::UnknownField {
                field: "email".to_string()
            }
        );
        assert!(!record.contains_field("email"));
        assert_eq!(record.field_count(), 3);
    }

    #[test]
    fn test_record_display() {
        let record = user(101, "Francis", true);
        assert_eq!(record.to_string(), "{id=101, name=Francis, active=true}");
    }

    #[test]
    fn test_record_json() {
        let record = user(101, "Francis", true);
        assert_eq!(
            record.to_json().unwrap(),
            r#"{"id":101,"name":"Francis","active":true}"#
        );

        let parsed: Record = serde_json::from_str(r#"{"name":"Laravel","stars":5}"#).unwrap();
        assert_eq!(parsed.get("stars"), Some(&Value::from(5)));
    }

    #[test]
    fn test_record_deserialize_empty_rejected() {
        let result: std::result::Result<Record, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }
}
