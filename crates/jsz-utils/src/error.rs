use thiserror::Error;

/// Errors that propagate to the caller instead of going through the sink.
#[derive(Error, Debug)]
pub enum UtilsError {
    /// Malformed JSON text handed to [`parse_json`](crate::json::parse_json).
    #[error("SyntaxError: {0}")]
    Json(#[from] serde_json::Error),

    /// An operation the host rejects for the given primitive.
    #[error("TypeError: {0}")]
    Type(String),

    #[error("RangeError: {0}")]
    Range(String),
}
