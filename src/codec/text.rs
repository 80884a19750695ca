//! Text wire form: `[e1,e2,...,en]`

use super::element;
use crate::core::errors::CodecError;
use crate::core::types::Vector;

const OPEN: char = '[';
const CLOSE: char = ']';
const DELIMITER: char = ',';

/// Encode a vector as `[e1,...,en]` with no whitespace
pub fn to_text(vector: &Vector) -> String {
    let mut out = String::with_capacity(2 + vector.len() * 10);
    out.push(OPEN);
    for (i, &value) in vector.iter().enumerate() {
        if i > 0 {
            out.push(DELIMITER);
        }
        element::format_element(value, &mut out);
    }
    out.push(CLOSE);
    out
}

/// Decode a bracketed, comma-separated literal
///
/// Exactly one leading `[` and one trailing `]` are required. ASCII
/// whitespace around an element is tolerated; an empty element is not.
pub fn from_text(input: &str) -> Result<Vector, CodecError> {
    let rest = input
        .strip_prefix(OPEN)
        .ok_or_else(|| CodecError::malformed_input(0, "vector literal must start with \"[\""))?;
    let interior = rest.strip_suffix(CLOSE).ok_or_else(|| {
        CodecError::malformed_input(input.len(), "vector literal must end with \"]\"")
    })?;

    if interior.is_empty() {
        return Ok(Vector::default());
    }

    interior
        .split(DELIMITER)
        .enumerate()
        .map(|(position, raw)| {
            let token = raw.trim_matches(|c: char| c.is_ascii_whitespace());
            element::parse_element(token)
                .map_err(|fault| CodecError::malformed_element(token, position, fault.reason()))
        })
        .collect::<Result<Vec<f32>, _>>()
        .map(Vector::new)
}
