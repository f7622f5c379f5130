//! Composition Error Types

use thiserror::Error;

/// Errors constructing or parsing a composition
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompositionError {
    /// Formula string contained no elements
    #[error("Empty composition")]
    EmptyFormula,

    /// Formula string could not be parsed
    #[error("Cannot parse formula '{formula}': {reason}")]
    Parse { formula: String, reason: String },

    /// Symbol does not name a chemical element
    #[error("Unknown element symbol: {0}")]
    UnknownElement(String),

    /// Amount is non-positive or non-finite
    #[error("Invalid amount {amount} for element {symbol}")]
    InvalidAmount { symbol: String, amount: f64 },
}
