//! Errors raised by the vector text and binary codecs

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Codec errors
///
/// Every variant carries enough context (byte offset, token, lengths) for a
/// caller to report where the payload went wrong. Decoding is all-or-nothing:
/// no partial vector is ever returned alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum CodecError {
    /// The text envelope is structurally invalid (missing bracket, bad UTF-8)
    #[error("Malformed vector literal at byte {offset}: {reason}")]
    MalformedInput { offset: usize, reason: String },

    /// A single element token is not a float or a recognised special literal
    #[error("Malformed vector element at position {position}: \"{token}\" ({reason})")]
    MalformedElement {
        token: String,
        position: usize,
        reason: String,
    },

    #[error("Vector length {length} exceeds the wire maximum of {max} elements")]
    LengthOverflow { length: usize, max: usize },

    #[error("Truncated vector payload: need {needed} bytes, have {available}")]
    TruncatedInput { needed: usize, available: usize },
}

impl CodecError {
    pub(crate) fn malformed_input(offset: usize, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            offset,
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed_element(
        token: impl Into<String>,
        position: usize,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedElement {
            token: token.into(),
            position,
            reason: reason.into(),
        }
    }
}
