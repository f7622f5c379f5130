//! Composition Data Model

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::element::is_element_symbol;
use crate::error::CompositionError;
use crate::parser::parse_formula;

/// An alloy composition: element symbol to positive atomic amount.
///
/// Amounts are kept as supplied ("Ti50Zr50" stores 50/50); atomic fractions
/// are computed against the total on demand. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    amounts: BTreeMap<String, f64>,
}

impl Composition {
    /// Parse a chemical formula string ("Ti50Zr50", "(TiZr)3Mo")
    pub fn parse(formula: &str) -> Result<Self, CompositionError> {
        let pairs = parse_formula(formula)?;
        debug!("Parsed formula '{}' into {} element(s)", formula, pairs.len());
        Self::from_amounts(pairs)
    }

    /// Build a composition from explicit (symbol, amount) pairs.
    ///
    /// Symbols must name real elements and amounts must be positive and
    /// finite; repeated symbols accumulate.
    pub fn from_amounts<I, S>(pairs: I) -> Result<Self, CompositionError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut amounts: BTreeMap<String, f64> = BTreeMap::new();

        for (symbol, amount) in pairs {
            let symbol = symbol.into();
            if !is_element_symbol(&symbol) {
                return Err(CompositionError::UnknownElement(symbol));
            }
            if !amount.is_finite() || amount <= 0.0 {
                return Err(CompositionError::InvalidAmount { symbol, amount });
            }
            *amounts.entry(symbol).or_insert(0.0) += amount;
        }

        if amounts.is_empty() {
            return Err(CompositionError::EmptyFormula);
        }

        Ok(Self { amounts })
    }

    /// Atomic fraction of an element (0 for elements not present)
    pub fn atomic_fraction(&self, symbol: &str) -> f64 {
        match self.amounts.get(symbol) {
            Some(amount) => amount / self.total_atoms(),
            None => 0.0,
        }
    }

    /// Total atom count over all elements
    pub fn total_atoms(&self) -> f64 {
        self.amounts.values().sum()
    }

    /// Iterate (symbol, amount) pairs in symbol order
    pub fn elements(&self) -> impl Iterator<Item = (&str, f64)> {
        self.amounts.iter().map(|(sym, amt)| (sym.as_str(), *amt))
    }

    /// Number of distinct elements
    pub fn element_count(&self) -> usize {
        self.amounts.len()
    }

    /// Whether the composition contains an element with nonzero amount
    pub fn contains(&self, symbol: &str) -> bool {
        self.amounts.contains_key(symbol)
    }
}

impl FromStr for Composition {
    type Err = CompositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, amount) in &self.amounts {
            if *amount == 1.0 {
                write!(f, "{}", symbol)?;
            } else if amount.fract() == 0.0 {
                write!(f, "{}{}", symbol, *amount as i64)?;
            } else {
                write!(f, "{}{}", symbol, amount)?;
            }
        }
        Ok(())
    }
}

/// Composition argument accepted by the pipeline entry points.
///
/// A tagged variant resolved once at the boundary: either a formula string
/// still to be parsed, or an already-constructed composition.
#[derive(Debug, Clone)]
pub enum CompositionInput {
    /// A chemical formula string ("Ti50Zr50")
    Formula(String),
    /// A pre-parsed composition
    Parsed(Composition),
}

impl CompositionInput {
    /// Resolve to a concrete composition, parsing the formula variant
    pub fn resolve(self) -> Result<Composition, CompositionError> {
        match self {
            CompositionInput::Formula(formula) => Composition::parse(&formula),
            CompositionInput::Parsed(composition) => Ok(composition),
        }
    }
}

impl From<&str> for CompositionInput {
    fn from(formula: &str) -> Self {
        CompositionInput::Formula(formula.to_string())
    }
}

impl From<String> for CompositionInput {
    fn from(formula: String) -> Self {
        CompositionInput::Formula(formula)
    }
}

impl From<Composition> for CompositionInput {
    fn from(composition: Composition) -> Self {
        CompositionInput::Parsed(composition)
    }
}
