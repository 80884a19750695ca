//! Discovering the server-side vector type and installing its adapters

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

use super::registry::AdapterRegistry;
use super::{BinaryDumper, BinaryLoader, TextDumper, TextLoader};
use crate::core::config::RegistrationConfig;
use crate::core::errors::RegistrationError;
use crate::core::types::Oid;

/// A server type as reported by the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeInfo {
    pub name: String,
    pub oid: Oid,
    pub array_oid: Option<Oid>,
}

impl TypeInfo {
    pub fn new(name: impl Into<String>, oid: Oid) -> Self {
        Self {
            name: name.into(),
            oid,
            array_oid: None,
        }
    }

    pub fn with_array_oid(mut self, array_oid: Oid) -> Self {
        self.array_oid = Some(array_oid);
        self
    }
}

/// Blocking lookup of a type by name; `Ok(None)` means it is not installed
pub trait TypeCatalog {
    fn fetch_type(&self, name: &str) -> anyhow::Result<Option<TypeInfo>>;
}

/// Async lookup of a type by name; `Ok(None)` means it is not installed
#[async_trait]
pub trait AsyncTypeCatalog: Send + Sync {
    async fn fetch_type(&self, name: &str) -> anyhow::Result<Option<TypeInfo>>;
}

/// Catalog backed by a fixed map, for embedded setups and tests
#[derive(Debug, Clone, Default)]
pub struct StaticTypeCatalog {
    types: HashMap<String, TypeInfo>,
}

impl StaticTypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, info: TypeInfo) -> Self {
        self.types.insert(info.name.clone(), info);
        self
    }
}

impl TypeCatalog for StaticTypeCatalog {
    fn fetch_type(&self, name: &str) -> anyhow::Result<Option<TypeInfo>> {
        Ok(self.types.get(name).cloned())
    }
}

#[async_trait]
impl AsyncTypeCatalog for StaticTypeCatalog {
    async fn fetch_type(&self, name: &str) -> anyhow::Result<Option<TypeInfo>> {
        Ok(self.types.get(name).cloned())
    }
}

/// Look up the vector type and install text and binary adapters for it
pub fn register_vector<C>(
    catalog: &C,
    registry: &AdapterRegistry,
    config: &RegistrationConfig,
) -> Result<TypeInfo, RegistrationError>
where
    C: TypeCatalog + ?Sized,
{
    let found = catalog.fetch_type(&config.type_name)?;
    install_adapters(found, registry, config)
}

/// Async counterpart of [`register_vector`]
pub async fn register_vector_async<C>(
    catalog: &C,
    registry: &AdapterRegistry,
    config: &RegistrationConfig,
) -> Result<TypeInfo, RegistrationError>
where
    C: AsyncTypeCatalog + ?Sized,
{
    let found = catalog.fetch_type(&config.type_name).await?;
    install_adapters(found, registry, config)
}

fn install_adapters(
    found: Option<TypeInfo>,
    registry: &AdapterRegistry,
    config: &RegistrationConfig,
) -> Result<TypeInfo, RegistrationError> {
    let info = match found {
        Some(info) => info,
        None => {
            warn!("Type '{}' not found in the database", config.type_name);
            return Err(RegistrationError::TypeNotFound {
                type_name: config.type_name.clone(),
            });
        }
    };

    registry.register_type(info.clone());
    registry.register_dumper(Arc::new(TextDumper));
    registry.register_dumper(Arc::new(BinaryDumper));
    registry.register_loader(info.oid, Arc::new(TextLoader));
    registry.register_loader(info.oid, Arc::new(BinaryLoader));

    info!(
        type_name = %info.name,
        oid = info.oid,
        default_format = %config.default_format,
        "Registered vector adapters"
    );
    Ok(info)
}
