//! Error types for the vector codec
//!
//! Codec errors are produced by the pure encode/decode functions, registration
//! errors by the adapter layer, and config errors while loading settings.

pub mod codec_error;
pub mod config_error;
pub mod registration_error;

// Re-export all error types
pub use codec_error::*;
pub use config_error::*;
pub use registration_error::*;
