//! Error types for BCSS parsing.

use thiserror::Error;

/// Errors that can occur while parsing CSS source.
///
/// # Examples
///
/// ```rust
/// use bcss::parser::parse_declaration_block;
///
/// // A property without a value is rejected
/// assert!(parse_declaration_block("width:").is_err());
/// ```
#[derive(Error, Debug)]
pub enum BcssError {
    /// Invalid CSS syntax was encountered during parsing.
    ///
    /// The string describes what was unexpected.
    #[error("CSS syntax error: {0}")]
    InvalidSyntax(String),
}
