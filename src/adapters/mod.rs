/*
 * Copyright 2025 Vijaykumar Singh
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Client adapters for the vector type
//!
//! A database client moves values through per-format dumpers (host value to
//! wire bytes) and loaders (wire bytes to host value). This module provides
//! the four vector adapters, a dispatch table keyed by type oid and format,
//! and the routine that discovers the server's oid and installs them.

pub mod registration;
pub mod registry;

pub use registration::{
    register_vector, register_vector_async, AsyncTypeCatalog, StaticTypeCatalog, TypeCatalog,
    TypeInfo,
};
pub use registry::AdapterRegistry;

use crate::codec;
use crate::core::errors::CodecError;
use crate::core::types::{Format, Vector};

/// Turns a vector into wire bytes for one format
pub trait VectorDumper: Send + Sync {
    fn format(&self) -> Format;

    fn dump(&self, vector: &Vector) -> Result<Vec<u8>, CodecError>;

    /// SQL NULL passes through untouched
    fn dump_nullable(&self, vector: Option<&Vector>) -> Result<Option<Vec<u8>>, CodecError> {
        vector.map(|v| self.dump(v)).transpose()
    }
}

/// Turns wire bytes of one format back into a vector
pub trait VectorLoader: Send + Sync {
    fn format(&self) -> Format;

    fn load(&self, data: &[u8]) -> Result<Vector, CodecError>;

    /// SQL NULL passes through untouched
    fn load_nullable(&self, data: Option<&[u8]>) -> Result<Option<Vector>, CodecError> {
        data.map(|d| self.load(d)).transpose()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TextDumper;

#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryDumper;

#[derive(Debug, Clone, Copy, Default)]
pub struct TextLoader;

#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryLoader;

impl VectorDumper for TextDumper {
    fn format(&self) -> Format {
        Format::Text
    }

    fn dump(&self, vector: &Vector) -> Result<Vec<u8>, CodecError> {
        codec::encode(vector, Format::Text)
    }
}

impl VectorDumper for BinaryDumper {
    fn format(&self) -> Format {
        Format::Binary
    }

    fn dump(&self, vector: &Vector) -> Result<Vec<u8>, CodecError> {
        codec::to_binary(vector)
    }
}

impl VectorLoader for TextLoader {
    fn format(&self) -> Format {
        Format::Text
    }

    fn load(&self, data: &[u8]) -> Result<Vector, CodecError> {
        codec::decode(data, Format::Text)
    }
}

impl VectorLoader for BinaryLoader {
    fn format(&self) -> Format {
        Format::Binary
    }

    fn load(&self, data: &[u8]) -> Result<Vector, CodecError> {
        codec::from_binary(data)
    }
}
