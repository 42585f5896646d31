// Error taxonomy for record store operations

use thiserror::Error;

/// Errors raised by positional access and field mutation
///
/// Score lookups never fail: an absent key is `None`, not an error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("unknown field: {field}")]
    UnknownField { field: String },

    #[error("record must have at least one field")]
    EmptyRecord,
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::IndexOutOfRange { index: 5, len: 3 };
        assert_eq!(err.to_string(), "index 5 out of range for sequence of length 3");

        let err = StoreError::UnknownField {
            field: "email".to_string(),
        };
        assert_eq!(err.to_string(), "unknown field: email");

        assert_eq!(StoreError::EmptyRecord.to_string(), "record must have at least one field");
    }
}
