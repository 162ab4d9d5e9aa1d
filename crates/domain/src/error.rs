//! Unified error types for the domain layer
//!
//! The domain only fails at its edges: decoding the catalog document and
//! parsing configuration values. Filtering, dropdown sync and rendering are
//! total over any well-formed catalog.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// The catalog document could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// A value was outside the set the domain accepts
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    /// Creates a parse error for documents or strings that cannot be decoded.
    ///
    /// # Example
    /// ```ignore
    /// serde_json::from_str::<Vec<Item>>(json).map_err(|e| DomainError::parse(e.to_string()))?;
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_errors_become_parse_errors() {
        let err = serde_json::from_str::<Vec<u8>>("[1, ").unwrap_err();
        let domain: DomainError = err.into();
        assert!(matches!(domain, DomainError::Parse(_)));
        assert!(domain.to_string().starts_with("Parse error:"));
    }

    #[test]
    fn constructors_accept_borrowed_and_owned_messages() {
        assert_eq!(
            DomainError::validation("bad"),
            DomainError::Validation("bad".to_string())
        );
        assert_eq!(
            DomainError::parse(String::from("oops")).to_string(),
            "Parse error: oops"
        );
    }
}
