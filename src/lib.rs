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

//! # ProximaDB Vector Codec
//!
//! Wire codec for the `vector` column type: a fixed-length list of `f32`
//! exchanged with the database server in two representations.
//!
//! - **Text**: `[1,2.5,NaN,-Infinity]`
//! - **Binary**: big-endian `u16` count, `u16` reserved, then `count` IEEE-754 floats
//!
//! ```
//! use proximadb_vector_codec::{from_binary, from_text, to_binary, to_text, Vector};
//!
//! let v = Vector::new(vec![1.0, 2.0, 3.0]);
//! assert_eq!(to_text(&v), "[1,2,3]");
//! assert_eq!(from_text("[1,2,3]").unwrap(), v);
//!
//! let bytes = to_binary(&v).unwrap();
//! assert_eq!(bytes.len(), 4 + 4 * 3);
//! assert_eq!(from_binary(&bytes).unwrap(), v);
//! ```
//!
//! The [`adapters`] module wires these functions into a client's per-type
//! dispatch table once the server's type oid is known.

pub mod adapters;
pub mod codec;
pub mod core;

pub use crate::adapters::{
    register_vector, register_vector_async, AdapterRegistry, AsyncTypeCatalog, StaticTypeCatalog,
    TypeCatalog, TypeInfo, VectorDumper, VectorLoader,
};
pub use crate::codec::{decode, encode, from_binary, from_text, to_binary, to_text};
pub use crate::core::*;

pub type Result<T> = std::result::Result<T, CodecError>;
