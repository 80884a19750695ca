//! Property-based round-trip tests for both codecs

use proptest::prelude::*;
use proximadb_vector_codec::{from_binary, from_text, to_binary, to_text, Vector};

use super::common::bits;

/// Finite floats of any magnitude, including subnormals and signed zero
fn arb_finite() -> impl Strategy<Value = f32> {
    any::<u32>()
        .prop_map(f32::from_bits)
        .prop_filter("finite", |f| f.is_finite())
}

fn arb_finite_vector() -> impl Strategy<Value = Vector> {
    prop::collection::vec(arb_finite(), 0..1000).prop_map(Vector::new)
}

/// Every bit pattern, NaN payloads included
fn arb_any_vector() -> impl Strategy<Value = Vector> {
    prop::collection::vec(any::<u32>().prop_map(f32::from_bits), 0..256).prop_map(Vector::new)
}

proptest! {
    #[test]
    fn text_round_trip_is_exact_for_finite(v in arb_finite_vector()) {
        let decoded = from_text(&to_text(&v)).unwrap();
        prop_assert_eq!(bits(&decoded), bits(&v));
    }

    #[test]
    fn binary_round_trip_is_exact_for_finite(v in arb_finite_vector()) {
        let decoded = from_binary(&to_binary(&v).unwrap()).unwrap();
        prop_assert_eq!(decoded, v);
    }

    #[test]
    fn binary_round_trip_preserves_every_bit_pattern(v in arb_any_vector()) {
        let encoded = to_binary(&v).unwrap();
        prop_assert_eq!(encoded.len(), 4 + 4 * v.len());
        prop_assert_eq!(bits(&from_binary(&encoded).unwrap()), bits(&v));
    }

    #[test]
    fn text_round_trip_preserves_category(v in arb_any_vector()) {
        let decoded = from_text(&to_text(&v)).unwrap();
        prop_assert_eq!(decoded.len(), v.len());
        for (a, b) in decoded.iter().zip(v.iter()) {
            if b.is_nan() {
                prop_assert!(a.is_nan());
            } else {
                prop_assert_eq!(a.to_bits(), b.to_bits());
            }
        }
    }

    #[test]
    fn truncated_binary_never_decodes(v in arb_finite_vector(), cut in 1usize..8) {
        let encoded = to_binary(&v).unwrap();
        let cut = cut.min(encoded.len());
        prop_assert!(from_binary(&encoded[..encoded.len() - cut]).is_err());
    }

    #[test]
    fn text_decoder_never_panics(input in "\\PC*") {
        let _ = from_text(&input);
    }
}
