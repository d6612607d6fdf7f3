//! Client-side validation of identifiers before they reach a request path

use thiserror::Error;

use crate::error::Error;

/// Maximum length for index uids (400 bytes)
pub const MAX_INDEX_UID_LEN: usize = 400;

/// Maximum length for document identifiers (511 bytes)
pub const MAX_DOCUMENT_ID_LEN: usize = 511;

/// Validation error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Index uid cannot be empty")]
    EmptyIndexUid,

    #[error("Index uid too long: {len} bytes (max {max})")]
    IndexUidTooLong { len: usize, max: usize },

    #[error("Index uid `{0}` may only contain alphanumeric characters, hyphens and underscores")]
    InvalidIndexUid(String),

    #[error("Document id cannot be empty")]
    EmptyDocumentId,

    #[error("Document id too long: {len} bytes (max {max})")]
    DocumentIdTooLong { len: usize, max: usize },

    #[error("Document id `{0}` may only contain alphanumeric characters, hyphens and underscores")]
    InvalidDocumentId(String),

    #[error("Poll interval must be greater than zero")]
    ZeroPollInterval,

    #[error("Poll timeout must be greater than zero")]
    ZeroPollTimeout,

    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: i64 },
}

impl From<ValidationError> for Error {
    fn from(e: ValidationError) -> Self {
        Error::InvalidArgument(e.to_string())
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Validate an index uid
pub fn validate_index_uid(uid: &str) -> Result<(), ValidationError> {
    if uid.is_empty() {
        return Err(ValidationError::EmptyIndexUid);
    }
    if uid.len() > MAX_INDEX_UID_LEN {
        return Err(ValidationError::IndexUidTooLong {
            len: uid.len(),
            max: MAX_INDEX_UID_LEN,
        });
    }
    if !uid.chars().all(is_identifier_char) {
        return Err(ValidationError::InvalidIndexUid(uid.to_string()));
    }
    Ok(())
}

/// Validate a document identifier
pub fn validate_document_id(id: &str) -> Result<(), ValidationError> {
    if id.is_empty() {
        return Err(ValidationError::EmptyDocumentId);
    }
    if id.len() > MAX_DOCUMENT_ID_LEN {
        return Err(ValidationError::DocumentIdTooLong {
            len: id.len(),
            max: MAX_DOCUMENT_ID_LEN,
        });
    }
    if !id.chars().all(is_identifier_char) {
        return Err(ValidationError::InvalidDocumentId(id.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_index_uid() {
        assert!(validate_index_uid("books_test").is_ok());
        assert!(validate_index_uid("movies-2024").is_ok());
        assert_eq!(validate_index_uid(""), Err(ValidationError::EmptyIndexUid));
        assert!(validate_index_uid("movies/../keys").is_err());
        assert!(validate_index_uid(&"x".repeat(401)).is_err());
    }

    #[test]
    fn test_validate_document_id() {
        assert!(validate_document_id("123456").is_ok());
        assert!(validate_document_id("doc_1-a").is_ok());
        assert_eq!(validate_document_id(""), Err(ValidationError::EmptyDocumentId));
        assert!(validate_document_id("a b").is_err());
        assert!(validate_document_id(&"x".repeat(600)).is_err());
    }

    #[test]
    fn test_validation_maps_to_invalid_argument() {
        let err: Error = ValidationError::ZeroPollInterval.into();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}
