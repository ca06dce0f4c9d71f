//! CSS color values.
//!
//! Colors come from two places: palette tables compiled into the crate, and
//! attribute overrides supplied by the page. Neither is parsed; any string the
//! page passes (`#0af`, `rebeccapurple`, `var(--brand)`) reaches the
//! stylesheet untouched.

use std::fmt;

/// An uninterpreted CSS color.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CssColor(String);

impl CssColor {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CssColor {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for CssColor {
    fn from(value: String) -> Self {
        Self(value)
    }
}
