//! Lengths, edge insets and measured boxes.
//!
//! Lengths are kept exactly as the caller wrote them. `"50px"`, `"3rem"` and
//! `"banana"` are all valid [`Length`] values; whatever the browser makes of
//! them is the caller's business. Arithmetic is expressed with `calc()` so the
//! host resolves units, never this crate.

use std::fmt;

/// An uninterpreted CSS length such as `50px` or `80vw`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Length(String);

impl Length {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn px(value: i32) -> Self {
        Self(format!("{value}px"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `calc(<self> * <factor>)`, e.g. a glyph at half the button size.
    pub fn scaled(&self, factor: f64) -> String {
        format!("calc({} * {})", self.0, factor)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Length {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Length {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// The value of one of the `top`/`right`/`bottom`/`left` properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inset {
    /// `auto`, releases a previously pinned edge.
    Auto,
    /// `0`
    Zero,
    /// A whole number of pixels.
    Px(i32),
    /// A percentage of the containing block.
    Percent(i32),
    /// `calc(100% + <gap>)`: just past the far side of the containing block.
    Beyond(Length),
}

impl fmt::Display for Inset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inset::Auto => f.write_str("auto"),
            Inset::Zero => f.write_str("0"),
            Inset::Px(px) => write!(f, "{px}px"),
            Inset::Percent(pct) => write!(f, "{pct}%"),
            Inset::Beyond(gap) => write!(f, "calc(100% + {gap})"),
        }
    }
}

/// Per-edge insets of a positioned box. `None` leaves the edge unset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EdgeInsets {
    pub top: Option<Inset>,
    pub right: Option<Inset>,
    pub bottom: Option<Inset>,
    pub left: Option<Inset>,
}

impl EdgeInsets {
    pub fn top(mut self, inset: Inset) -> Self {
        self.top = Some(inset);
        self
    }

    pub fn right(mut self, inset: Inset) -> Self {
        self.right = Some(inset);
        self
    }

    pub fn bottom(mut self, inset: Inset) -> Self {
        self.bottom = Some(inset);
        self
    }

    pub fn left(mut self, inset: Inset) -> Self {
        self.left = Some(inset);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.right.is_none() && self.bottom.is_none() && self.left.is_none()
    }

    /// Set edges in CSS order (`top`, `right`, `bottom`, `left`).
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Inset)> {
        [
            ("top", &self.top),
            ("right", &self.right),
            ("bottom", &self.bottom),
            ("left", &self.left),
        ]
        .into_iter()
        .filter_map(|(name, inset)| inset.as_ref().map(|inset| (name, inset)))
    }
}

/// Viewport dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A measured bounding box in viewport coordinates.
///
/// Mirrors what a layout engine reports for an element: the origin may be
/// negative when the box starts off-screen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// True when the box lies entirely within `0..viewport`.
    pub fn fits_within(&self, viewport: Size) -> bool {
        self.left() >= 0.0
            && self.top() >= 0.0
            && self.right() <= viewport.width
            && self.bottom() <= viewport.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inset_renders_css() {
        assert_eq!(Inset::Auto.to_string(), "auto");
        assert_eq!(Inset::Zero.to_string(), "0");
        assert_eq!(Inset::Px(-6).to_string(), "-6px");
        assert_eq!(Inset::Percent(50).to_string(), "50%");
        assert_eq!(
            Inset::Beyond(Length::px(15)).to_string(),
            "calc(100% + 15px)"
        );
    }

    #[test]
    fn test_length_is_not_interpreted() {
        let length = Length::from("not-a-length");
        assert_eq!(length.as_str(), "not-a-length");
        assert_eq!(length.scaled(0.5), "calc(not-a-length * 0.5)");
    }

    #[test]
    fn test_edge_insets_iterate_in_css_order() {
        let insets = EdgeInsets::default()
            .left(Inset::Zero)
            .bottom(Inset::Px(20));
        let names: Vec<_> = insets.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["bottom", "left"]);
        assert!(EdgeInsets::default().is_empty());
    }

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(-10.0, 5.0, 200.0, 100.0);
        assert_eq!(rect.right(), 190.0);
        assert_eq!(rect.bottom(), 105.0);
        assert!(!rect.fits_within(Size::new(800.0, 600.0)));
        assert!(Rect::new(0.0, 0.0, 800.0, 600.0).fits_within(Size::new(800.0, 600.0)));
    }
}
