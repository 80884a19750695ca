//! Common utilities for integration tests

use std::sync::Once;

use proximadb_vector_codec::{StaticTypeCatalog, TypeInfo, Vector};

static INIT: Once = Once::new();

/// Oid the test catalog hands out for `vector`
pub const VECTOR_OID: u32 = 16_388;

/// Initialize test environment
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// Deterministic vector of `dimension` elements
pub fn create_test_vector(dimension: usize) -> Vector {
    (0..dimension).map(|i| (i as f32) * 0.1 - 3.0).collect()
}

/// Vector holding every IEEE category the codecs must carry
pub fn create_edge_case_vector() -> Vector {
    Vector::new(vec![
        0.0,
        -0.0,
        1.0,
        -1.0,
        f32::MIN_POSITIVE,
        f32::from_bits(1),
        f32::MAX,
        f32::MIN,
        f32::EPSILON,
        f32::INFINITY,
        f32::NEG_INFINITY,
        f32::NAN,
    ])
}

/// Catalog that knows the `vector` type
pub fn create_test_catalog() -> StaticTypeCatalog {
    StaticTypeCatalog::new().with_type(TypeInfo::new("vector", VECTOR_OID).with_array_oid(VECTOR_OID + 5))
}

/// Element bit patterns, for comparisons that must not go through float equality
pub fn bits(vector: &Vector) -> Vec<u32> {
    vector.iter().map(|f| f.to_bits()).collect()
}
