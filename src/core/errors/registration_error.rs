//! Errors raised while installing and looking up vector adapters

use thiserror::Error;

use super::CodecError;
use crate::core::types::{Format, Oid};

/// Registration and dispatch errors
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("{type_name} type not found in the database")]
    TypeNotFound { type_name: String },

    #[error("No {format} loader registered for type oid {oid}")]
    NoLoader { oid: Oid, format: Format },

    #[error("No {format} dumper registered")]
    NoDumper { format: Format },

    #[error("Type catalog lookup failed: {0}")]
    Catalog(#[from] anyhow::Error),

    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),
}
