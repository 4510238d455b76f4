//! Error taxonomy shared by the value model, the manager and every role view.

use thiserror::Error;

/// Errors returned by configuration lookups and interface views.
///
/// Every producing operation returns one of these instead of a null or empty
/// sentinel, so callers can tell an absent key from a wrong shape from an
/// empty container.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CfgError {
    /// Key, name or role collection is absent.
    #[error("not found: {0}")]
    NotFound(String),

    /// Index past the end of an array or role collection.
    #[error("index {index} out of range (length {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Node kind differs from the kind the operation requires.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// An array that must name at least one element is empty.
    #[error("empty array is not supported for {0}, at least one value should be given")]
    EmptyCollection(String),

    /// A value could not be coerced into the requested representation.
    #[error("conversion error: {0}")]
    ConversionError(String),

    /// The entry or the app-level resource lacks what the transport needs.
    #[error("configuration unavailable: {0}")]
    ConfigUnavailable(String),

    /// Copying values into the document failed.
    #[error("allocation failure: {0}")]
    AllocationFailure(String),

    /// The entry has no `EndPoint` field.
    #[error("endpoint not found for interface {0}")]
    EndpointMissing(String),
}

/// Result type for configuration operations.
pub type CfgResult<T> = Result<T, CfgError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CfgError::IndexOutOfRange { index: 3, len: 2 };
        assert_eq!(err.to_string(), "index 3 out of range (length 2)");

        let err = CfgError::TypeMismatch {
            expected: "array",
            found: "string",
        };
        assert!(err.to_string().contains("expected array"));

        let err = CfgError::EmptyCollection("Topics".into());
        assert!(err.to_string().contains("Topics"));
    }
}
