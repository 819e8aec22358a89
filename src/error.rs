//! Error types for token parsing, mutation and signing.

use std::path::PathBuf;

/// Errors raised while decoding, mutating or re-signing a token.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The compact serialization did not contain three dot-separated segments.
    #[error("malformed token: expected 3 segments, found {segments}")]
    MalformedToken {
        /// Number of segments found in the input.
        segments: usize,
    },

    /// A header or payload segment was not valid base64url data.
    #[error("invalid base64url in {segment} segment: {source}")]
    InvalidBase64 {
        /// Which segment failed to decode.
        segment: &'static str,
        /// The underlying decode error.
        #[source]
        source: base64ct::Error,
    },

    /// A decoded header or payload segment was not a JSON object.
    #[error("invalid JSON in {segment} segment: {source}")]
    InvalidJson {
        /// Which segment failed to parse.
        segment: &'static str,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// A user-supplied replacement payload was not a JSON object.
    #[error("invalid payload JSON: {0}")]
    InvalidPayloadJson(String),

    /// The HMAC key file does not exist.
    #[error("File not found")]
    KeyFileNotFound(PathBuf),

    /// Reading the HMAC key file failed for a reason other than absence.
    #[error("unable to read key file: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing a header or payload back to JSON failed.
    #[error("unable to serialize segment: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;
