//! Feature Vector Assembly

use composition::Composition;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::schema::{element_slot, feature_names, processing_slot, structure_slot, FEATURE_DIMENSION};
use crate::EncodeError;

/// Feature vector in the model's input schema.
///
/// Always [`FEATURE_DIMENSION`] values in schema order, each finite and in
/// [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    values: Vec<f32>,
}

impl FeatureVector {
    /// Values in schema order
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Number of slots
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value of a named slot ("Ti", "Structure_BCC"), for diagnostics
    pub fn slot(&self, name: &str) -> Option<f32> {
        feature_names()
            .iter()
            .position(|n| *n == name)
            .map(|idx| self.values[idx])
    }
}

/// Encode a composition and categorical tags into the model's input layout.
///
/// Every element in the composition must belong to the supported set.
/// Tags are matched against the recognized one-hot slot names; an
/// unrecognized value (including the "?" placeholder) sets no slot and is
/// not an error.
pub fn encode(
    comp: &Composition,
    structure_type: &str,
    processing_type: &str,
) -> Result<FeatureVector, EncodeError> {
    let mut values = vec![0.0f32; FEATURE_DIMENSION];

    for (symbol, _) in comp.elements() {
        if !crate::ALLOWED_ELEMENTS.contains(&symbol) {
            return Err(EncodeError::unsupported_element(symbol));
        }
        match element_slot(symbol) {
            Some(idx) => values[idx] = comp.atomic_fraction(symbol) as f32,
            // Supported elements always occupy a slot; anything else was
            // rejected above.
            None => return Err(EncodeError::unsupported_element(symbol)),
        }
    }

    match structure_slot(structure_type) {
        Some(idx) => values[idx] = 1.0,
        None => debug!(
            "Structure type '{}' not recognized, one-hot slots left unset",
            structure_type
        ),
    }

    match processing_slot(processing_type) {
        Some(idx) => values[idx] = 1.0,
        None => debug!(
            "Processing type '{}' not recognized, one-hot slots left unset",
            processing_type
        ),
    }

    Ok(FeatureVector { values })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ALLOWED_ELEMENTS, ELEMENT_SLOTS};
    use proptest::prelude::*;

    fn elemental_sum(vector: &FeatureVector) -> f32 {
        vector.values()[..ELEMENT_SLOTS.len()].iter().sum()
    }

    #[test]
    fn test_binary_alloy_fractions() {
        let comp = Composition::parse("Ti50Zr50").unwrap();
        let vector = encode(&comp, "BCC", "A").unwrap();

        assert_eq!(vector.slot("Ti"), Some(0.5));
        assert_eq!(vector.slot("Zr"), Some(0.5));
        assert_eq!(vector.slot("Structure_BCC"), Some(1.0));
        assert_eq!(vector.slot("Processing_A"), Some(1.0));

        // Everything else stays zero
        let set: usize = vector
            .values()
            .iter()
            .filter(|v| **v != 0.0)
            .count();
        assert_eq!(set, 4);
    }

    #[test]
    fn test_unsupported_element() {
        let comp = Composition::parse("Au").unwrap();
        let err = encode(&comp, "?", "?").unwrap_err();
        match err {
            EncodeError::UnsupportedElement { symbol, allowed } => {
                assert_eq!(symbol, "Au");
                assert!(allowed.contains("Ti"));
                assert!(allowed.contains("Ru"));
            }
        }
    }

    #[test]
    fn test_structure_one_hot() {
        let comp = Composition::parse("Ti").unwrap();
        let vector = encode(&comp, "FCC", "?").unwrap();

        assert_eq!(vector.slot("Structure_FCC"), Some(1.0));
        assert_eq!(vector.slot("Structure_other"), Some(0.0));
        assert_eq!(vector.slot("Structure_HCP"), Some(0.0));
        assert_eq!(vector.slot("Structure_BCC"), Some(0.0));
    }

    #[test]
    fn test_unknown_tag_is_silent() {
        let comp = Composition::parse("Ti").unwrap();
        let vector = encode(&comp, "unknown_value", "?").unwrap();

        for name in crate::STRUCTURE_SLOTS {
            assert_eq!(vector.slot(name), Some(0.0));
        }
        for name in crate::PROCESSING_SLOTS {
            assert_eq!(vector.slot(name), Some(0.0));
        }
    }

    #[test]
    fn test_other_is_a_recognized_tag() {
        let comp = Composition::parse("Ti").unwrap();
        let vector = encode(&comp, "other", "other").unwrap();
        assert_eq!(vector.slot("Structure_other"), Some(1.0));
        assert_eq!(vector.slot("Processing_other"), Some(1.0));
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let comp = Composition::parse("Ti33Zr33Hf34").unwrap();
        let first = encode(&comp, "HCP", "HIP").unwrap();
        let second = encode(&comp, "HCP", "HIP").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_output_shape_is_fixed() {
        let comp = Composition::parse("W").unwrap();
        let vector = encode(&comp, "?", "?").unwrap();
        assert_eq!(vector.len(), FEATURE_DIMENSION);
        assert!(vector
            .values()
            .iter()
            .all(|v| v.is_finite() && (0.0..=1.0).contains(v)));
    }

    proptest! {
        /// Any composition over the supported set encodes, and the elemental
        /// slots carry a unit total.
        #[test]
        fn prop_supported_compositions_encode(
            amounts in proptest::collection::vec(0.01f64..100.0, 1..=ALLOWED_ELEMENTS.len())
        ) {
            let pairs: Vec<(&str, f64)> = ALLOWED_ELEMENTS
                .iter()
                .zip(amounts.iter())
                .map(|(sym, amt)| (*sym, *amt))
                .collect();
            let comp = Composition::from_amounts(pairs).unwrap();
            let vector = encode(&comp, "?", "?").unwrap();

            prop_assert!((elemental_sum(&vector) - 1.0).abs() < 1e-5);
            prop_assert!(vector.values().iter().all(|v| (0.0..=1.0).contains(v)));
        }
    }
}
