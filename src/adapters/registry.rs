//! Dispatch table for vector adapters
//!
//! Populated once when a connection (or connection pool) is set up, then
//! read on every value transfer. DashMap keeps reads lock-free across shards
//! so a shared registry can serve many threads.

use dashmap::DashMap;
use std::sync::Arc;

use super::registration::TypeInfo;
use super::{VectorDumper, VectorLoader};
use crate::core::errors::RegistrationError;
use crate::core::types::{Format, Oid, Vector};

/// Per-connection adapter table keyed by `(type oid, format)`
#[derive(Default)]
pub struct AdapterRegistry {
    /// Loaders keyed by the server type they decode
    loaders: DashMap<(Oid, Format), Arc<dyn VectorLoader>>,

    /// Dumpers keyed by format; the host type is always `Vector`
    dumpers: DashMap<Format, Arc<dyn VectorDumper>>,

    /// Server types installed through registration, by name
    types: DashMap<String, TypeInfo>,
}

impl AdapterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a loader for `oid`, replacing any previous one for its format
    pub fn register_loader(&self, oid: Oid, loader: Arc<dyn VectorLoader>) {
        self.loaders.insert((oid, loader.format()), loader);
    }

    /// Install a dumper, replacing any previous one for its format
    pub fn register_dumper(&self, dumper: Arc<dyn VectorDumper>) {
        self.dumpers.insert(dumper.format(), dumper);
    }

    pub fn register_type(&self, info: TypeInfo) {
        self.types.insert(info.name.clone(), info);
    }

    pub fn loader(&self, oid: Oid, format: Format) -> Result<Arc<dyn VectorLoader>, RegistrationError> {
        self.loaders
            .get(&(oid, format))
            .map(|entry| Arc::clone(entry.value()))
            .ok_or(RegistrationError::NoLoader { oid, format })
    }

    pub fn dumper(&self, format: Format) -> Result<Arc<dyn VectorDumper>, RegistrationError> {
        self.dumpers
            .get(&format)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or(RegistrationError::NoDumper { format })
    }

    /// Decode a column value of type `oid` received in `format`
    pub fn load(&self, oid: Oid, format: Format, data: &[u8]) -> Result<Vector, RegistrationError> {
        Ok(self.loader(oid, format)?.load(data)?)
    }

    /// Encode a query parameter in `format`
    pub fn dump(&self, format: Format, vector: &Vector) -> Result<Vec<u8>, RegistrationError> {
        Ok(self.dumper(format)?.dump(vector)?)
    }

    pub fn type_info(&self, name: &str) -> Option<TypeInfo> {
        self.types.get(name).map(|entry| entry.value().clone())
    }

    /// Whether any loader is installed for `oid`
    pub fn is_registered(&self, oid: Oid) -> bool {
        Format::all()
            .iter()
            .any(|&format| self.loaders.contains_key(&(oid, format)))
    }

    /// Formats with an installed loader for `oid`, text first
    pub fn registered_formats(&self, oid: Oid) -> Vec<Format> {
        Format::all()
            .into_iter()
            .filter(|&format| self.loaders.contains_key(&(oid, format)))
            .collect()
    }

    pub fn loader_count(&self) -> usize {
        self.loaders.len()
    }
}

impl std::fmt::Debug for AdapterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut loaders: Vec<(Oid, Format)> = self.loaders.iter().map(|e| *e.key()).collect();
        loaders.sort_by_key(|(oid, format)| (*oid, format.code()));
        let mut dumpers: Vec<Format> = self.dumpers.iter().map(|e| *e.key()).collect();
        dumpers.sort_by_key(|format| format.code());

        f.debug_struct("AdapterRegistry")
            .field("loaders", &loaders)
            .field("dumpers", &dumpers)
            .field("types", &self.types.len())
            .finish()
    }
}
