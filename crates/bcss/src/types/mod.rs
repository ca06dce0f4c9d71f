pub mod color;
pub mod declaration;
pub mod geometry;
pub mod theme;

pub use color::CssColor;
pub use declaration::{Declaration, DeclarationBlock, Rule, StyleSheet};
pub use geometry::{EdgeInsets, Inset, Length, Rect, Size};
pub use theme::Palette;
