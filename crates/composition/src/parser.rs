//! Chemical formula parser using nom
//!
//! Grammar:
//! ```text
//! formula := term+
//! term    := symbol amount? | '(' formula ')' amount?
//! symbol  := [A-Z][a-z]*
//! amount  := digits ('.' digits?)?
//! ```
//!
//! Amounts default to 1, repeated symbols accumulate, and a multiplier after
//! a parenthesized group scales every element inside it ("(TiZr)3Mo" is
//! Ti3 Zr3 Mo1).

use nom::{
    branch::alt,
    bytes::complete::take_while,
    character::complete::{char, digit0, digit1, multispace0, satisfy},
    combinator::{map, map_res, opt, recognize},
    multi::many1,
    sequence::{delimited, pair, preceded},
    IResult,
};

use crate::error::CompositionError;

/// Parse a chemical formula into (symbol, amount) pairs.
///
/// Pairs are returned in order of first appearance; symbol validation is the
/// caller's concern.
pub fn parse_formula(input: &str) -> Result<Vec<(String, f64)>, CompositionError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CompositionError::EmptyFormula);
    }

    match formula(trimmed) {
        Ok(("", terms)) => Ok(terms),
        Ok((remaining, _)) => Err(CompositionError::Parse {
            formula: input.to_string(),
            reason: format!("unexpected characters at '{}'", remaining),
        }),
        Err(e) => Err(CompositionError::Parse {
            formula: input.to_string(),
            reason: format!("{:?}", e),
        }),
    }
}

fn formula(input: &str) -> IResult<&str, Vec<(String, f64)>> {
    map(many1(ws(term)), |groups| {
        groups.into_iter().flatten().collect()
    })(input)
}

/// A single element or a parenthesized group, with an optional multiplier
fn term(input: &str) -> IResult<&str, Vec<(String, f64)>> {
    alt((
        map(pair(symbol, opt(amount)), |(sym, n)| {
            vec![(sym.to_string(), n.unwrap_or(1.0))]
        }),
        map(
            pair(
                delimited(char('('), formula, char(')')),
                opt(amount),
            ),
            |(inner, n)| {
                let multiplier = n.unwrap_or(1.0);
                inner
                    .into_iter()
                    .map(|(sym, amt)| (sym, amt * multiplier))
                    .collect()
            },
        ),
    ))(input)
}

/// An element symbol: one uppercase letter followed by lowercase letters
fn symbol(input: &str) -> IResult<&str, &str> {
    recognize(preceded(
        satisfy(|c| c.is_ascii_uppercase()),
        take_while(|c: char| c.is_ascii_lowercase()),
    ))(input)
}

/// An unsigned decimal amount ("50", "0.5", "2.")
fn amount(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(pair(digit1, opt(pair(char('.'), digit0)))),
        |s: &str| s.parse::<f64>(),
    )(input)
}

/// Skip surrounding whitespace
fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    delimited(multispace0, inner, multispace0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_alloy() {
        let pairs = parse_formula("Ti50Zr50").unwrap();
        assert_eq!(
            pairs,
            vec![("Ti".to_string(), 50.0), ("Zr".to_string(), 50.0)]
        );
    }

    #[test]
    fn test_implicit_amount() {
        let pairs = parse_formula("NbMoTaW").unwrap();
        assert_eq!(pairs.len(), 4);
        assert!(pairs.iter().all(|(_, amt)| *amt == 1.0));
    }

    #[test]
    fn test_decimal_amounts() {
        let pairs = parse_formula("Ti0.5Zr0.5").unwrap();
        assert_eq!(
            pairs,
            vec![("Ti".to_string(), 0.5), ("Zr".to_string(), 0.5)]
        );
    }

    #[test]
    fn test_oxide_formula() {
        let pairs = parse_formula("Fe2O3").unwrap();
        assert_eq!(pairs, vec![("Fe".to_string(), 2.0), ("O".to_string(), 3.0)]);
    }

    #[test]
    fn test_group_multiplier() {
        let pairs = parse_formula("(TiZr)3Mo").unwrap();
        assert_eq!(
            pairs,
            vec![
                ("Ti".to_string(), 3.0),
                ("Zr".to_string(), 3.0),
                ("Mo".to_string(), 1.0),
            ]
        );
    }

    #[test]
    fn test_whitespace_tolerated() {
        let pairs = parse_formula("  Ti50 Zr50 ").unwrap();
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn test_empty_formula() {
        assert!(matches!(
            parse_formula("   "),
            Err(CompositionError::EmptyFormula)
        ));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(matches!(
            parse_formula("123"),
            Err(CompositionError::Parse { .. })
        ));
        assert!(matches!(
            parse_formula("Ti50$"),
            Err(CompositionError::Parse { .. })
        ));
    }

    #[test]
    fn test_unbalanced_parens_rejected() {
        assert!(parse_formula("(TiZr").is_err());
    }
}
