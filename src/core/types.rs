use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::codec::element::{self, HostNumeric};
use crate::codec::{from_text, to_text};
use crate::core::errors::{CodecError, ConfigError};

/// Server-side type identifier
pub type Oid = u32;

/// Fixed-length vector of single-precision floats
///
/// Equality compares element bit patterns, so a vector holding NaN equals
/// itself and `0.0` differs from `-0.0`. That is the equality both codecs
/// promise to round-trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector {
    elements: Vec<f32>,
}

impl Vector {
    pub fn new(elements: Vec<f32>) -> Self {
        Self { elements }
    }

    /// Build a vector from any host numeric slice, rounding each value to the
    /// nearest `f32`
    pub fn from_host<T: HostNumeric>(values: &[T]) -> Self {
        values.iter().map(|v| v.to_element()).collect()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f32> {
        self.elements.iter()
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.elements
    }

    /// Lossless widening to `f64`
    pub fn to_f64_vec(&self) -> Vec<f64> {
        self.elements.iter().copied().map(element::widen).collect()
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.elements.len() == other.elements.len()
            && self
                .elements
                .iter()
                .zip(&other.elements)
                .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

impl Eq for Vector {}

impl Hash for Vector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elements.len().hash(state);
        for value in &self.elements {
            value.to_bits().hash(state);
        }
    }
}

impl From<Vec<f32>> for Vector {
    fn from(elements: Vec<f32>) -> Self {
        Self::new(elements)
    }
}

impl From<&[f32]> for Vector {
    fn from(elements: &[f32]) -> Self {
        Self::new(elements.to_vec())
    }
}

impl From<Vector> for Vec<f32> {
    fn from(vector: Vector) -> Self {
        vector.elements
    }
}

impl FromIterator<f32> for Vector {
    fn from_iter<I: IntoIterator<Item = f32>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl AsRef<[f32]> for Vector {
    fn as_ref(&self) -> &[f32] {
        &self.elements
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f32;
    type IntoIter = std::slice::Iter<'a, f32>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// Renders the text wire form, e.g. `[1,2.5,NaN]`
impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_text(self))
    }
}

impl FromStr for Vector {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_text(s)
    }
}

/// Wire representation a value travels in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Text,
    Binary,
}

impl Format {
    /// Protocol format code (0 = text, 1 = binary)
    pub fn code(self) -> i16 {
        match self {
            Format::Text => 0,
            Format::Binary => 1,
        }
    }

    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            0 => Some(Format::Text),
            1 => Some(Format::Binary),
            _ => None,
        }
    }

    pub fn all() -> [Format; 2] {
        [Format::Text, Format::Binary]
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Text => f.write_str("text"),
            Format::Binary => f.write_str("binary"),
        }
    }
}

impl FromStr for Format {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Format::Text),
            "binary" => Ok(Format::Binary),
            _ => Err(ConfigError::InvalidValue {
                field: "format".to_string(),
                value: s.to_string(),
            }),
        }
    }
}
