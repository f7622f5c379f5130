//! Model Input Schema
//!
//! Slot names and ordering are frozen to the layout the regression model was
//! trained with; any reordering silently corrupts predictions.

/// Elements the model was trained on. Compositions are restricted to these.
pub const ALLOWED_ELEMENTS: [&str; 10] = [
    "Ti", "Zr", "Hf", "V", "Nb", "Ta", "Mo", "W", "Re", "Ru",
];

/// Elemental-fraction slots in training order.
///
/// A superset of [`ALLOWED_ELEMENTS`]; slots for elements that can no longer
/// appear in valid input stay at 0.
pub const ELEMENT_SLOTS: [&str; 26] = [
    "Mo", "Mn", "W", "Ta", "Hf", "Zr", "Be", "Cu", "B", "Cr",
    "Al", "Fe", "Sn", "Nb", "U", "Ti", "V", "Re", "Ir", "Bi",
    "Si", "Co", "Ni", "N", "C", "O",
];

/// One-hot slots for the structure tag
pub const STRUCTURE_SLOTS: [&str; 4] = [
    "Structure_other",
    "Structure_FCC",
    "Structure_HCP",
    "Structure_BCC",
];

/// One-hot slots for the processing tag
pub const PROCESSING_SLOTS: [&str; 4] = [
    "Processing_other",
    "Processing_A",
    "Processing_HIP",
    "Processing_Q",
];

/// Total number of feature slots
pub const FEATURE_DIMENSION: usize =
    ELEMENT_SLOTS.len() + STRUCTURE_SLOTS.len() + PROCESSING_SLOTS.len();

/// All slot names in vector order
pub fn feature_names() -> Vec<&'static str> {
    ELEMENT_SLOTS
        .iter()
        .chain(STRUCTURE_SLOTS.iter())
        .chain(PROCESSING_SLOTS.iter())
        .copied()
        .collect()
}

/// Vector index of an element's fraction slot
pub fn element_slot(symbol: &str) -> Option<usize> {
    ELEMENT_SLOTS.iter().position(|name| *name == symbol)
}

/// Vector index of the one-hot slot for a structure tag value.
///
/// The lookup key is `Structure_{tag}`; unrecognized tags have no slot.
pub fn structure_slot(tag: &str) -> Option<usize> {
    let key = format!("Structure_{}", tag);
    STRUCTURE_SLOTS
        .iter()
        .position(|name| *name == key)
        .map(|idx| ELEMENT_SLOTS.len() + idx)
}

/// Vector index of the one-hot slot for a processing tag value
pub fn processing_slot(tag: &str) -> Option<usize> {
    let key = format!("Processing_{}", tag);
    PROCESSING_SLOTS
        .iter()
        .position(|name| *name == key)
        .map(|idx| ELEMENT_SLOTS.len() + STRUCTURE_SLOTS.len() + idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension() {
        assert_eq!(FEATURE_DIMENSION, 34);
        assert_eq!(feature_names().len(), FEATURE_DIMENSION);
    }

    #[test]
    fn test_allowed_elements_all_have_slots() {
        for symbol in ALLOWED_ELEMENTS {
            assert!(element_slot(symbol).is_some(), "{} has no slot", symbol);
        }
    }

    #[test]
    fn test_structure_slot_lookup() {
        assert_eq!(structure_slot("other"), Some(26));
        assert_eq!(structure_slot("FCC"), Some(27));
        assert_eq!(structure_slot("BCC"), Some(29));
        assert_eq!(structure_slot("?"), None);
        assert_eq!(structure_slot("fcc"), None);
    }

    #[test]
    fn test_processing_slot_lookup() {
        assert_eq!(processing_slot("other"), Some(30));
        assert_eq!(processing_slot("A"), Some(31));
        assert_eq!(processing_slot("Q"), Some(33));
        assert_eq!(processing_slot("unknown_value"), None);
    }
}
