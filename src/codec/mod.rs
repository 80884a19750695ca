//! Vector value codecs
//!
//! Two independent, symmetric pairs of pure functions:
//! - text: `[1,2.5,NaN]`
//! - binary: `count u16 | reserved u16 | count x f32`, big-endian
//!
//! Both consult the [`element`] policy for what a single element may be.
//! None of them keep state, block or log; they can be called from any thread.

pub mod binary;
pub mod element;
pub mod text;

pub use binary::{encoded_len, from_binary, to_binary, HEADER_SIZE, MAX_DIMENSIONS};
pub use text::{from_text, to_text};

use crate::core::errors::CodecError;
use crate::core::types::{Format, Vector};

/// Encode `vector` in the requested wire format
pub fn encode(vector: &Vector, format: Format) -> Result<Vec<u8>, CodecError> {
    match format {
        Format::Text => Ok(to_text(vector).into_bytes()),
        Format::Binary => to_binary(vector),
    }
}

/// Decode a wire payload in the given format
///
/// Text payloads must be valid UTF-8; a bad sequence is reported as
/// `MalformedInput` at the offset of its first byte.
pub fn decode(bytes: &[u8], format: Format) -> Result<Vector, CodecError> {
    match format {
        Format::Text => {
            let text = std::str::from_utf8(bytes).map_err(|e| {
                CodecError::malformed_input(e.valid_up_to(), "vector literal is not valid UTF-8")
            })?;
            from_text(text)
        }
        Format::Binary => from_binary(bytes),
    }
}
