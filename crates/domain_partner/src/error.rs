//! Partner domain errors
//!
//! This module defines the error types that can occur while valuing or
//! auditing a partner ownership tree.

use thiserror::Error;

use core_kernel::DocumentError;

/// Errors that can occur in the partner domain
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PartnerError {
    /// A partner's document is neither a valid personal nor company ID
    #[error("The document \"{0}\" does not comply with the required format.")]
    InvalidDocument(String),

    /// Partner tree audit failed
    #[error("Partner validation failed: {0}")]
    ValidationFailed(String),
}

impl PartnerError {
    /// Creates an InvalidDocument error for the offending document
    pub fn invalid_document(document: impl Into<String>) -> Self {
        PartnerError::InvalidDocument(document.into())
    }

    /// Creates a ValidationFailed error from audit errors
    pub fn validation_failed(errors: Vec<String>) -> Self {
        PartnerError::ValidationFailed(errors.join("; "))
    }
}

impl From<DocumentError> for PartnerError {
    fn from(error: DocumentError) -> Self {
        match error {
            DocumentError::InvalidDocument(document) => PartnerError::invalid_document(document),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_error_keeps_document() {
        let error: PartnerError = DocumentError::InvalidDocument("12345678900".to_string()).into();
        assert_eq!(error, PartnerError::invalid_document("12345678900"));
        assert_eq!(
            error.to_string(),
            "The document \"12345678900\" does not comply with the required format."
        );
    }
}
