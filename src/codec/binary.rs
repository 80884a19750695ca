//! Binary wire form
//!
//! ```text
//! +-----------+--------------+----------------------------+
//! | count u16 | reserved u16 | count x f32 (IEEE-754)     |
//! +-----------+--------------+----------------------------+
//! ```
//!
//! Every field is big-endian. `reserved` is written as zero and ignored on
//! read. Element bits move verbatim, so NaN payloads and subnormals survive.

use super::element::ELEMENT_SIZE;
use crate::core::errors::CodecError;
use crate::core::types::Vector;

/// Size of the `count` + `reserved` header
pub const HEADER_SIZE: usize = 4;

/// Largest element count the 16-bit count field can carry
pub const MAX_DIMENSIONS: usize = u16::MAX as usize;

/// Exact encoded size of a vector with `len` elements
pub fn encoded_len(len: usize) -> usize {
    HEADER_SIZE + len * ELEMENT_SIZE
}

/// Encode a vector; fails if it has more than [`MAX_DIMENSIONS`] elements
pub fn to_binary(vector: &Vector) -> Result<Vec<u8>, CodecError> {
    let count = u16::try_from(vector.len()).map_err(|_| CodecError::LengthOverflow {
        length: vector.len(),
        max: MAX_DIMENSIONS,
    })?;

    let mut buf = Vec::with_capacity(encoded_len(vector.len()));
    buf.extend_from_slice(&count.to_be_bytes());
    buf.extend_from_slice(&0u16.to_be_bytes());
    for value in vector {
        buf.extend_from_slice(&value.to_be_bytes());
    }
    Ok(buf)
}

/// Decode a vector from its binary form
///
/// Bytes past the declared payload are not inspected.
pub fn from_binary(bytes: &[u8]) -> Result<Vector, CodecError> {
    if bytes.len() < HEADER_SIZE {
        return Err(CodecError::TruncatedInput {
            needed: HEADER_SIZE,
            available: bytes.len(),
        });
    }

    let count = usize::from(u16::from_be_bytes([bytes[0], bytes[1]]));
    let needed = encoded_len(count);
    if bytes.len() < needed {
        return Err(CodecError::TruncatedInput {
            needed,
            available: bytes.len(),
        });
    }

    Ok(bytes[HEADER_SIZE..needed]
        .chunks_exact(ELEMENT_SIZE)
        .map(|chunk| f32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}
