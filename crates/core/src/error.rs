//! Error types for the PromptSmith domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant. None of them are fatal:
//! a failed decode or import leaves the caller's answer set untouched.

use thiserror::Error;

/// The top-level error type for all PromptSmith operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Codec errors ---
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    // --- Store errors ---
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    // --- Field addressing ---
    #[error("Invalid value for field '{field}': {reason}")]
    InvalidField { field: String, reason: String },

    #[error("Unknown field: {0}")]
    UnknownField(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

/// Failures while turning an answer set into a token/document or back.
#[derive(Debug, Clone, Error)]
pub enum CodecError {
    #[error("Token is not valid base64: {0}")]
    InvalidBase64(String),

    #[error("Token does not decode to UTF-8 text: {0}")]
    InvalidUtf8(String),

    #[error("Malformed JSON document: {0}")]
    InvalidJson(String),

    #[error("Malformed TOML document: {0}")]
    InvalidToml(String),

    #[error("Document top level must be an object, found {0}")]
    NotAnObject(String),

    #[error("Token carries none of the answer fields")]
    NoKnownFields,

    #[error("Failed to serialize answers: {0}")]
    Serialize(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage I/O failed: {0}")]
    Io(String),

    #[error("Failed to serialize session: {0}")]
    Serialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codec_error_displays_correctly() {
        let err = Error::Codec(CodecError::InvalidBase64("invalid byte 33".into()));
        assert!(err.to_string().contains("base64"));
        assert!(err.to_string().contains("invalid byte 33"));
    }

    #[test]
    fn invalid_field_names_the_field() {
        let err = Error::InvalidField {
            field: "tone".into(),
            reason: "expected one of professional, didactic".into(),
        };
        assert!(err.to_string().contains("'tone'"));
        assert!(err.to_string().contains("professional"));
    }
}
