//! Element conversion policy shared by the text and binary codecs
//!
//! The element type is exactly `f32`. Special values travel in text as the
//! fixed literals `NaN`, `Infinity` and `-Infinity`; they are matched
//! case-sensitively and never depend on locale or configuration. Nothing is
//! range-checked beyond IEEE representability.

use std::fmt::Write;

/// Width of one element on the binary wire
pub const ELEMENT_SIZE: usize = std::mem::size_of::<f32>();

pub const NAN_TOKEN: &str = "NaN";
pub const INFINITY_TOKEN: &str = "Infinity";
pub const NEG_INFINITY_TOKEN: &str = "-Infinity";

/// Magnitudes outside `[1e-5, 1e16)` are written in exponent form
const EXP_LOWER: f32 = 1e-5;
const EXP_UPPER: f32 = 1e16;

/// Why a token was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementFault {
    Invalid,
    OutOfRange,
}

impl ElementFault {
    pub fn reason(self) -> &'static str {
        match self {
            ElementFault::Invalid => "invalid input syntax for type real",
            ElementFault::OutOfRange => "value out of range for type real",
        }
    }
}

/// Append the shortest decimal that re-parses to the same `f32`
pub fn format_element(value: f32, out: &mut String) {
    if value.is_nan() {
        out.push_str(NAN_TOKEN);
        return;
    }
    if value.is_infinite() {
        out.push_str(if value.is_sign_positive() {
            INFINITY_TOKEN
        } else {
            NEG_INFINITY_TOKEN
        });
        return;
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(EXP_LOWER..EXP_UPPER).contains(&magnitude) {
        write!(out, "{:e}", value).expect("writing to a String cannot fail");
    } else {
        write!(out, "{}", value).expect("writing to a String cannot fail");
    }
}

/// Parse one text token into an `f32`
///
/// Values in range round to the nearest `f32` and underflow rounds towards
/// zero, both per IEEE. A finite literal whose magnitude overflows `f32`
/// (e.g. `1e40`) is the one exception: IEEE rounding would make it infinite,
/// but it is rejected with [`ElementFault::OutOfRange`] to match the server,
/// which refuses such input for type real. Infinity must be spelled out.
pub fn parse_element(token: &str) -> Result<f32, ElementFault> {
    match token {
        NAN_TOKEN => return Ok(f32::NAN),
        INFINITY_TOKEN => return Ok(f32::INFINITY),
        NEG_INFINITY_TOKEN => return Ok(f32::NEG_INFINITY),
        _ => {}
    }

    // `str::parse` also accepts "inf", "nan", "infinity" in any case; only
    // decimal digits may open a numeric literal here.
    let unsigned = token.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(token);
    if !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return Err(ElementFault::Invalid);
    }

    let value: f32 = token.parse().map_err(|_| ElementFault::Invalid)?;
    if value.is_infinite() {
        return Err(ElementFault::OutOfRange);
    }
    Ok(value)
}

/// Lossless widening to the host's double type
pub fn widen(value: f32) -> f64 {
    f64::from(value)
}

/// Host numeric types that can become vector elements
///
/// Conversion rounds to the nearest representable `f32` (ties to even).
pub trait HostNumeric: Copy {
    fn to_element(self) -> f32;
}

macro_rules! impl_host_numeric {
    ($($t:ty),*) => {
        $(
            impl HostNumeric for $t {
                #[inline]
                fn to_element(self) -> f32 {
                    self as f32
                }
            }
        )*
    };
}

impl_host_numeric!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);
