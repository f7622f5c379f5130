//! Feature Encoding for the Alloy Property Model
//!
//! Converts a validated composition plus categorical tags into the
//! fixed-order numeric vector the pretrained regression model expects.

mod encoder;
mod schema;

pub use encoder::{encode, FeatureVector};
pub use schema::{
    element_slot, feature_names, processing_slot, structure_slot, ALLOWED_ELEMENTS,
    ELEMENT_SLOTS, FEATURE_DIMENSION, PROCESSING_SLOTS, STRUCTURE_SLOTS,
};

use thiserror::Error;

/// Errors during feature encoding
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    /// Composition contains an element the model was never trained on.
    /// Permanent: the caller must change the composition, not retry.
    #[error("Element {symbol} is not covered by the model; supported elements: {allowed}")]
    UnsupportedElement { symbol: String, allowed: String },
}

impl EncodeError {
    pub(crate) fn unsupported_element(symbol: &str) -> Self {
        EncodeError::UnsupportedElement {
            symbol: symbol.to_string(),
            allowed: ALLOWED_ELEMENTS.join(", "),
        }
    }
}
