//! CSS parsing into [`DeclarationBlock`] and [`StyleSheet`] values.
//!
//! The grammar is deliberately flat: a stylesheet is a sequence of
//! `selector { property: value; ... }` rules with no nesting, at-rules or
//! variables. Values are taken verbatim up to the next `;` or `}` so that
//! `calc(100% + 15px)` and `rgba(0, 0, 0, 0.1)` survive untouched.
//!
//! ## Example
//!
//! ```rust
//! use bcss::parser::parse_declaration_block;
//!
//! let block =
//!     parse_declaration_block("top: 20px; left: 50%; transform: translateX(-50%)").unwrap();
//! assert_eq!(block.get("transform"), Some("translateX(-50%)"));
//! ```

use crate::BcssError;
use crate::types::{Declaration, DeclarationBlock, Rule, StyleSheet};

use nom::{
    IResult,
    bytes::complete::take_while1,
    character::complete::{char, multispace0},
    combinator::opt,
    multi::many0,
    sequence::{delimited, preceded},
};

/// Parses a stylesheet made of flat rules.
pub fn parse_stylesheet(source: &str) -> Result<StyleSheet, BcssError> {
    let source = strip_comments(source);

    let (remaining, rules) =
        many0(parse_rule)(source.as_str()).map_err(|e| BcssError::InvalidSyntax(e.to_string()))?;

    if !remaining.trim().is_empty() {
        return Err(BcssError::InvalidSyntax(format!(
            "Unexpected tokens at end of stylesheet: {}",
            remaining.trim()
        )));
    }

    Ok(rules.into_iter().collect())
}

/// Parses the body of a `style` attribute.
pub fn parse_declaration_block(source: &str) -> Result<DeclarationBlock, BcssError> {
    let source = strip_comments(source);

    let (remaining, declarations) = parse_declarations(source.as_str())
        .map_err(|e| BcssError::InvalidSyntax(e.to_string()))?;

    if !remaining.trim().is_empty() {
        return Err(BcssError::InvalidSyntax(format!(
            "Unexpected tokens in declaration block: {}",
            remaining.trim()
        )));
    }

    Ok(declarations.into_iter().collect())
}

/// Top-level parser for a rule (e.g. `.tooltip { padding: 15px; }`).
pub fn parse_rule(input: &str) -> IResult<&str, Rule> {
    let (input, _) = multispace0(input)?;
    let (input, selector) = take_while1(|c: char| c != '{' && c != '}')(input)?;

    let (input, declarations) = delimited(
        char('{'),
        parse_declarations,
        preceded(multispace0, char('}')),
    )(input)?;

    Ok((
        input,
        Rule::new(selector.trim(), declarations.into_iter().collect()),
    ))
}

fn parse_declarations(input: &str) -> IResult<&str, Vec<Declaration>> {
    many0(parse_single_declaration)(input)
}

/// Parses `property: value` with an optional trailing `;`.
pub fn parse_single_declaration(input: &str) -> IResult<&str, Declaration> {
    let (input, _) = multispace0(input)?;
    let (input, property) = parse_property(input)?;
    let (input, _) = delimited(multispace0, char(':'), multispace0)(input)?;
    let (input, value) = take_while1(|c: char| c != ';' && c != '}')(input)?;
    let (input, _) = opt(char(';'))(input)?;
    let (input, _) = multispace0(input)?;

    Ok((input, Declaration::new(property, value.trim())))
}

fn parse_property(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '-')(input)
}

/// Remove `/* ... */` comments. An unterminated comment runs to the end.
fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;
    while let Some(start) = rest.find("/*") {
        out.push_str(&rest[..start]);
        match rest[start + 2..].find("*/") {
            Some(end) => rest = &rest[start + 2 + end + 2..],
            None => {
                rest = "";
                break;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_comments() {
        assert_eq!(strip_comments("a /* b */ c"), "a  c");
        assert_eq!(strip_comments("a /* open"), "a ");
        assert_eq!(strip_comments("plain"), "plain");
    }

    #[test]
    fn test_single_declaration_keeps_value_verbatim() {
        let (rest, decl) = parse_single_declaration("bottom: calc(100% + 15px); left: 0").unwrap();
        assert_eq!(decl.property, "bottom");
        assert_eq!(decl.value, "calc(100% + 15px)");
        assert_eq!(rest, "left: 0");
    }

    #[test]
    fn test_rule_with_pseudo_element_selector() {
        let (_, rule) = parse_rule(".tooltip::after { content: \"\"; width: 12px; }").unwrap();
        assert_eq!(rule.selector, ".tooltip::after");
        assert_eq!(rule.block.get("content"), Some("\"\""));
        assert_eq!(rule.block.get("width"), Some("12px"));
    }
}
