//! # BCSS - style values for the bubble widget
//!
//! Structured CSS for a floating toggle button and its popover. Styles are
//! built as values, rendered to CSS text only at the host boundary, and can be
//! parsed back from text when a host hands us inline styles.
//!
//! - **Types**: opaque lengths and colors, edge insets, rectangles, palettes
//! - **Declarations**: ordered property/value blocks and selector rules
//! - **Parsing**: declaration blocks and flat stylesheets from CSS source
//!
//! ## Quick Start
//!
//! ```rust
//! use bcss::parser::parse_stylesheet;
//!
//! let sheet = parse_stylesheet(".tooltip { padding: 15px; border-radius: 12px; }")
//!     .expect("valid CSS");
//! let rule = sheet.rule(".tooltip").unwrap();
//! assert_eq!(rule.block.get("padding"), Some("15px"));
//! ```
//!
//! ## Modules
//!
//! - [`parser`]: CSS parsing into [`StyleSheet`](types::StyleSheet)
//! - [`types`]: lengths, colors, geometry, palettes and declarations
//! - [`error`]: error type for parsing failures

pub mod error;
pub mod parser;
pub mod types;

pub use error::BcssError;
pub use types::{
    CssColor, Declaration, DeclarationBlock, EdgeInsets, Inset, Length, Palette, Rect, Rule,
    Size, StyleSheet,
};
