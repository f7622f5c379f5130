//! Chemical Composition Parsing and Validation
//!
//! Provides formula parsing and the composition data model for the alloy
//! prediction pipeline.

mod composition;
mod element;
mod error;
mod parser;

pub use composition::{Composition, CompositionInput};
pub use element::{is_element_symbol, ELEMENT_SYMBOLS};
pub use error::CompositionError;
pub use parser::parse_formula;
