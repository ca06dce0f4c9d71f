//! Anchor, popover and caret geometry, plus post-layout viewport correction.
//!
//! The host element is `position: fixed` and sized by the button, so every
//! popover and caret offset is relative to the button's box. A popover that
//! opens upward sits `calc(100% + spacing)` above the button's bottom edge,
//! i.e. `spacing` clear of its top edge.

use bcss::{DeclarationBlock, EdgeInsets, Inset, Length, Rect, Size};
use bitflags::bitflags;

use crate::attributes::{Placement, Position, Side};

/// Distance between the button and the viewport edges it is anchored to.
pub const ANCHOR_INSET: i32 = 20;
/// Side length of the caret square before rotation.
pub const CARET_SIZE: i32 = 12;
/// How far along its edge the caret sits from the popover's start corner.
pub const CARET_INSET: i32 = 15;
/// Distance kept from the anchor's edge when a correction flips the popover.
pub const ANCHOR_CLEARANCE: i32 = 60;

/// How a box is centered on the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Centering {
    #[default]
    None,
    /// `transform: translateX(-50%)`
    Translate,
    /// `margin-left: <px>`, for boxes whose transform is already taken.
    Margin(i32),
}

/// Offsets for one positioned box.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoxPlacement {
    pub insets: EdgeInsets,
    pub centering: Centering,
}

impl BoxPlacement {
    fn new(insets: EdgeInsets) -> Self {
        Self {
            insets,
            centering: Centering::None,
        }
    }

    fn centered(mut self, centering: Centering) -> Self {
        self.centering = centering;
        self
    }

    /// Write edges and centering into `block`.
    pub fn write(&self, block: &mut DeclarationBlock) {
        for (edge, inset) in self.insets.iter() {
            block.set(edge, inset);
        }
        match self.centering {
            Centering::None => {}
            Centering::Translate => block.set("transform", "translateX(-50%)"),
            Centering::Margin(px) => block.set("margin-left", Inset::Px(px)),
        }
    }

    pub fn to_declarations(&self) -> DeclarationBlock {
        let mut block = DeclarationBlock::new();
        self.write(&mut block);
        block
    }
}

/// Button anchor in the viewport.
pub fn anchor(position: Position) -> BoxPlacement {
    let inset = Inset::Px(ANCHOR_INSET);
    match position {
        Position::TopLeft => {
            BoxPlacement::new(EdgeInsets::default().top(inset.clone()).left(inset))
        }
        Position::TopRight => {
            BoxPlacement::new(EdgeInsets::default().top(inset.clone()).right(inset))
        }
        Position::BottomLeft => {
            BoxPlacement::new(EdgeInsets::default().bottom(inset.clone()).left(inset))
        }
        Position::BottomRight => {
            BoxPlacement::new(EdgeInsets::default().bottom(inset.clone()).right(inset))
        }
        Position::Top => {
            BoxPlacement::new(EdgeInsets::default().top(inset).left(Inset::Percent(50)))
                .centered(Centering::Translate)
        }
        Position::Bottom => {
            BoxPlacement::new(EdgeInsets::default().bottom(inset).left(Inset::Percent(50)))
                .centered(Centering::Translate)
        }
    }
}

/// Popover offsets relative to the button.
pub fn popover(placement: Placement, spacing: &Length) -> BoxPlacement {
    let beyond = Inset::Beyond(spacing.clone());
    match placement {
        Placement::Keyword(Position::Bottom) => {
            BoxPlacement::new(EdgeInsets::default().bottom(beyond).left(Inset::Percent(50)))
                .centered(Centering::Translate)
        }
        Placement::Keyword(Position::Top) => {
            BoxPlacement::new(EdgeInsets::default().top(beyond).left(Inset::Percent(50)))
                .centered(Centering::Translate)
        }
        Placement::Keyword(position) if position.is_top() => {
            BoxPlacement::new(EdgeInsets::default().top(beyond).left(Inset::Zero))
        }
        Placement::Keyword(_) => {
            BoxPlacement::new(EdgeInsets::default().bottom(beyond).left(Inset::Zero))
        }
        Placement::Side(Side::Left) => {
            BoxPlacement::new(EdgeInsets::default().right(beyond).top(Inset::Zero))
        }
        Placement::Side(Side::Right) => {
            BoxPlacement::new(EdgeInsets::default().left(beyond).top(Inset::Zero))
        }
    }
}

/// Caret offsets relative to the popover.
///
/// The caret always straddles the popover edge that faces the button.
pub fn caret(placement: Placement) -> BoxPlacement {
    let half = Inset::Px(-CARET_SIZE / 2);
    let along = Inset::Px(CARET_INSET);
    match placement {
        // Popover above the button: caret on its bottom edge.
        Placement::Keyword(Position::Bottom) => {
            BoxPlacement::new(EdgeInsets::default().bottom(half).left(Inset::Percent(50)))
                .centered(Centering::Margin(-CARET_SIZE / 2))
        }
        Placement::Keyword(Position::Top) => {
            BoxPlacement::new(EdgeInsets::default().top(half).left(Inset::Percent(50)))
                .centered(Centering::Margin(-CARET_SIZE / 2))
        }
        Placement::Keyword(position) if position.is_top() => {
            BoxPlacement::new(EdgeInsets::default().top(half).left(along))
        }
        Placement::Keyword(_) => {
            BoxPlacement::new(EdgeInsets::default().bottom(half).left(along))
        }
        Placement::Side(Side::Left) => {
            BoxPlacement::new(EdgeInsets::default().right(half).top(along))
        }
        Placement::Side(Side::Right) => {
            BoxPlacement::new(EdgeInsets::default().left(half).top(along))
        }
    }
}

/// Anchor, popover and caret placement for one configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementGeometry {
    pub anchor: BoxPlacement,
    pub popover: BoxPlacement,
    pub caret: BoxPlacement,
}

impl PlacementGeometry {
    pub fn resolve(position: Position, placement: Placement, spacing: &Length) -> Self {
        Self {
            anchor: anchor(position),
            popover: popover(placement, spacing),
            caret: caret(placement),
        }
    }
}

bitflags! {
    /// Viewport edges a measured popover crosses.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Overflow: u8 {
        const RIGHT = 1 << 0;
        const LEFT = 1 << 1;
        const BOTTOM = 1 << 2;
        const TOP = 1 << 3;
    }
}

impl Overflow {
    pub fn detect(rect: Rect, viewport: Size) -> Self {
        let mut overflow = Overflow::empty();
        overflow.set(Overflow::RIGHT, rect.right() > viewport.width);
        overflow.set(Overflow::LEFT, rect.left() < 0.0);
        overflow.set(Overflow::BOTTOM, rect.bottom() > viewport.height);
        overflow.set(Overflow::TOP, rect.top() < 0.0);
        overflow
    }
}

/// Popover overrides that pull an overflowing popover back on screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewportCorrection {
    pub overflow: Overflow,
    pub insets: EdgeInsets,
    pub clear_transform: bool,
}

impl ViewportCorrection {
    /// Compute the correction for a popover measured at `rect`.
    ///
    /// Each crossed edge is handled on its own; when both horizontal (or both
    /// vertical) edges are crossed the start edge wins.
    pub fn compute(rect: Rect, viewport: Size) -> Self {
        if rect.fits_within(viewport) {
            return ViewportCorrection::default();
        }
        let overflow = Overflow::detect(rect, viewport);
        let mut correction = ViewportCorrection {
            overflow,
            ..Default::default()
        };

        if overflow.contains(Overflow::RIGHT) {
            correction.insets.left = Some(Inset::Auto);
            correction.insets.right = Some(Inset::Zero);
            correction.clear_transform = true;
        }
        if overflow.contains(Overflow::LEFT) {
            correction.insets.left = Some(Inset::Zero);
            correction.insets.right = Some(Inset::Auto);
            correction.clear_transform = true;
        }
        if overflow.contains(Overflow::BOTTOM) {
            correction.insets.top = Some(Inset::Auto);
            correction.insets.bottom = Some(Inset::Px(ANCHOR_CLEARANCE));
        }
        if overflow.contains(Overflow::TOP) {
            correction.insets.top = Some(Inset::Px(ANCHOR_CLEARANCE));
            correction.insets.bottom = Some(Inset::Auto);
        }

        correction
    }

    pub fn is_empty(&self) -> bool {
        self.overflow.is_empty()
    }

    pub fn to_declarations(&self) -> DeclarationBlock {
        let mut block = DeclarationBlock::new();
        for (edge, inset) in self.insets.iter() {
            block.set(edge, inset);
        }
        if self.clear_transform {
            block.set("transform", "none");
        }
        block
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn css(placement: &BoxPlacement) -> String {
        placement.to_declarations().to_css()
    }

    #[test]
    fn test_anchor_corners() {
        assert_eq!(css(&anchor(Position::TopLeft)), "top: 20px; left: 20px;");
        assert_eq!(css(&anchor(Position::TopRight)), "top: 20px; right: 20px;");
        assert_eq!(css(&anchor(Position::BottomLeft)), "bottom: 20px; left: 20px;");
        assert_eq!(css(&anchor(Position::BottomRight)), "right: 20px; bottom: 20px;");
    }

    #[test]
    fn test_anchor_centered() {
        assert_eq!(
            css(&anchor(Position::Top)),
            "top: 20px; left: 50%; transform: translateX(-50%);"
        );
        assert_eq!(
            css(&anchor(Position::Bottom)),
            "bottom: 20px; left: 50%; transform: translateX(-50%);"
        );
    }

    #[test]
    fn test_popover_opens_away_from_anchor_edge() {
        let spacing = Length::px(15);
        assert_eq!(
            css(&popover(Placement::Keyword(Position::BottomRight), &spacing)),
            "bottom: calc(100% + 15px); left: 0;"
        );
        assert_eq!(
            css(&popover(Placement::Keyword(Position::TopLeft), &spacing)),
            "top: calc(100% + 15px); left: 0;"
        );
        assert_eq!(
            css(&popover(Placement::Keyword(Position::Top), &spacing)),
            "top: calc(100% + 15px); left: 50%; transform: translateX(-50%);"
        );
        assert_eq!(
            css(&popover(Placement::Side(Side::Left), &spacing)),
            "top: 0; right: calc(100% + 15px);"
        );
        assert_eq!(
            css(&popover(Placement::Side(Side::Right), &spacing)),
            "top: 0; left: calc(100% + 15px);"
        );
    }

    #[test]
    fn test_caret_faces_button() {
        assert_eq!(
            css(&caret(Placement::Keyword(Position::Bottom))),
            "bottom: -6px; left: 50%; margin-left: -6px;"
        );
        assert_eq!(
            css(&caret(Placement::Keyword(Position::TopRight))),
            "top: -6px; left: 15px;"
        );
        assert_eq!(
            css(&caret(Placement::Keyword(Position::BottomLeft))),
            "bottom: -6px; left: 15px;"
        );
        assert_eq!(
            css(&caret(Placement::Side(Side::Left))),
            "top: 15px; right: -6px;"
        );
        assert_eq!(
            css(&caret(Placement::Side(Side::Right))),
            "top: 15px; left: -6px;"
        );
    }

    #[test]
    fn test_no_correction_inside_viewport() {
        let correction = ViewportCorrection::compute(
            Rect::new(10.0, 10.0, 200.0, 100.0),
            Size::new(800.0, 600.0),
        );
        assert!(correction.is_empty());
        assert!(correction.insets.is_empty());
        assert!(correction.to_declarations().is_empty());
    }

    #[test]
    fn test_right_and_bottom_combine() {
        let correction = ViewportCorrection::compute(
            Rect::new(700.0, 550.0, 200.0, 100.0),
            Size::new(800.0, 600.0),
        );

        assert_eq!(correction.overflow, Overflow::RIGHT | Overflow::BOTTOM);
        assert_eq!(
            correction.to_declarations().to_css(),
            "top: auto; right: 0; bottom: 60px; left: auto; transform: none;"
        );
    }

    #[test]
    fn test_left_and_top_combine() {
        let correction = ViewportCorrection::compute(
            Rect::new(-40.0, -5.0, 200.0, 100.0),
            Size::new(800.0, 600.0),
        );

        assert_eq!(correction.overflow, Overflow::LEFT | Overflow::TOP);
        assert_eq!(correction.insets.left, Some(Inset::Zero));
        assert_eq!(correction.insets.right, Some(Inset::Auto));
        assert_eq!(correction.insets.top, Some(Inset::Px(ANCHOR_CLEARANCE)));
        assert_eq!(correction.insets.bottom, Some(Inset::Auto));
        assert!(correction.clear_transform);
    }

    #[test]
    fn test_vertical_only_keeps_transform() {
        let correction = ViewportCorrection::compute(
            Rect::new(100.0, 580.0, 200.0, 100.0),
            Size::new(800.0, 600.0),
        );
        assert_eq!(correction.overflow, Overflow::BOTTOM);
        assert!(!correction.clear_transform);
        assert!(!correction.to_declarations().contains("transform"));
    }

    #[test]
    fn test_wider_than_viewport_pins_left() {
        let correction = ViewportCorrection::compute(
            Rect::new(-10.0, 10.0, 900.0, 100.0),
            Size::new(800.0, 600.0),
        );
        assert_eq!(correction.overflow, Overflow::LEFT | Overflow::RIGHT);
        assert_eq!(correction.insets.left, Some(Inset::Zero));
        assert_eq!(correction.insets.right, Some(Inset::Auto));
    }
}
