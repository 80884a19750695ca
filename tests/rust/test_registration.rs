//! Adapter registration integration tests

use super::common::*;
use anyhow::Result;
use proximadb_vector_codec::core::RegistrationConfig;
use proximadb_vector_codec::{
    register_vector, register_vector_async, AdapterRegistry, CodecError, CodecConfig, Format,
    RegistrationError, StaticTypeCatalog, Vector,
};
use std::sync::Arc;

#[cfg(test)]
mod registration_tests {
    use super::*;

    #[test]
    fn test_register_then_transfer_values() -> Result<()> {
        init_test_env();

        let registry = AdapterRegistry::new();
        let info = register_vector(&create_test_catalog(), &registry, &RegistrationConfig::default())?;
        assert_eq!(info.oid, VECTOR_OID);
        assert_eq!(info.array_oid, Some(VECTOR_OID + 5));

        let v = create_test_vector(384);
        for format in Format::all() {
            let wire = registry.dump(format, &v)?;
            let back = registry.load(info.oid, format, &wire)?;
            assert_eq!(back, v);
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_async_registration() -> Result<()> {
        init_test_env();

        let registry = AdapterRegistry::new();
        let info =
            register_vector_async(&create_test_catalog(), &registry, &RegistrationConfig::default())
                .await?;
        assert!(registry.is_registered(info.oid));

        let loaded = registry.load(info.oid, Format::Text, b"[1,NaN,-Infinity]")?;
        assert_eq!(loaded.len(), 3);
        Ok(())
    }

    #[test]
    fn test_type_not_found() {
        init_test_env();

        let registry = AdapterRegistry::new();
        let err = register_vector(&StaticTypeCatalog::new(), &registry, &RegistrationConfig::default())
            .unwrap_err();
        assert!(matches!(err, RegistrationError::TypeNotFound { .. }));
        assert!(!registry.is_registered(VECTOR_OID));
    }

    #[test]
    fn test_config_drives_type_name() -> Result<()> {
        let config = CodecConfig::from_toml_str(
            r#"
            [registration]
            type_name = "missing_type"
            "#,
        )?;
        let registry = AdapterRegistry::new();
        let err = register_vector(&create_test_catalog(), &registry, &config.registration)
            .unwrap_err();
        assert_eq!(err.to_string(), "missing_type type not found in the database");
        Ok(())
    }

    #[test]
    fn test_decode_errors_pass_through_registry() -> Result<()> {
        let registry = AdapterRegistry::new();
        register_vector(&create_test_catalog(), &registry, &RegistrationConfig::default())?;

        let err = registry
            .load(VECTOR_OID, Format::Text, b"[1,two,3]")
            .unwrap_err();
        match err {
            RegistrationError::Codec(CodecError::MalformedElement { token, position, .. }) => {
                assert_eq!(token, "two");
                assert_eq!(position, 1);
            }
            other => panic!("expected a codec error, got {:?}", other),
        }

        let too_long = Vector::new(vec![0.0; 70_000]);
        assert!(matches!(
            registry.dump(Format::Binary, &too_long),
            Err(RegistrationError::Codec(CodecError::LengthOverflow { .. }))
        ));
        // Text has no length ceiling
        assert!(registry.dump(Format::Text, &too_long).is_ok());
        Ok(())
    }

    #[test]
    fn test_shared_registry_across_threads() -> Result<()> {
        let registry = Arc::new(AdapterRegistry::new());
        register_vector(&create_test_catalog(), &registry, &RegistrationConfig::default())?;

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    let v = create_test_vector(64 + i);
                    let wire = registry.dump(Format::Binary, &v).unwrap();
                    registry.load(VECTOR_OID, Format::Binary, &wire).unwrap() == v
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().expect("worker panicked"));
        }
        Ok(())
    }
}
