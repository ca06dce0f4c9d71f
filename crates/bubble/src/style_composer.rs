//! Configuration to style declarations.
//!
//! [`compose`] is pure: the same [`Config`] always yields the same
//! [`WidgetStyles`], and the widget applies the result by replacing
//! everything it applied before. The static part of the styling lives in
//! [`BASE_CSS`] and is installed once per widget.

use bcss::{DeclarationBlock, Length, StyleSheet};

use crate::attributes::{Animation, Config, Embed};
use crate::placement::PlacementGeometry;

/// Rules that never change with configuration.
pub const BASE_CSS: &str = r#"
:host {
    position: fixed;
    z-index: 1000;
}
.bubble-container {
    position: relative;
}
.bubble-container.active .tooltip {
    display: block;
}
.bubble-btn {
    border: none;
    cursor: pointer;
    display: flex;
    align-items: center;
    justify-content: center;
}
.tooltip {
    display: none;
    position: absolute;
    border-radius: 12px;
    max-width: 80vw;
    z-index: 1001;
}
.tooltip::after {
    content: "";
    position: absolute;
    width: 12px;
    height: 12px;
    transform: rotate(45deg);
    z-index: 1000;
}
.content-iframe {
    width: 100%;
    border: none;
    overflow: hidden;
}
"#;

pub const HOVER_SELECTOR: &str = ".bubble-btn:hover";
pub const CARET_SELECTOR: &str = ".tooltip::after";

/// Named insertion point for page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub name: &'static str,
    /// Text shown when the page provides nothing for the slot.
    pub fallback: Option<String>,
}

/// The iframe shown instead of the `content` slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedFrame {
    pub src: String,
    pub allow: String,
    pub sandbox: String,
    pub loading: &'static str,
    pub class: &'static str,
    pub style: DeclarationBlock,
}

/// What the popover body renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Slot(Slot),
    Embed(EmbedFrame),
}

/// Every dynamic style the widget applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetStyles {
    /// Inline style of the host element: the anchor.
    pub host: DeclarationBlock,
    pub button: DeclarationBlock,
    /// Inline style of the popover before any viewport correction.
    pub popover: DeclarationBlock,
    /// Hover and caret rules.
    pub sheet: StyleSheet,
    pub icon: Slot,
    pub body: Body,
}

/// Build the styles for `config`.
pub fn compose(config: &Config) -> WidgetStyles {
    let geometry = PlacementGeometry::resolve(config.position, config.placement, &config.spacing);

    let host = geometry.anchor.to_declarations();
    let button = button_block(config);

    let mut popover = DeclarationBlock::new()
        .with("background-color", &config.colors.tooltip)
        .with("color", &config.colors.text)
        .with("width", &config.tooltip_width)
        .with("padding", &config.spacing)
        .with("box-shadow", format!("0 4px 12px {}", config.colors.shadow));
    geometry.popover.write(&mut popover);

    let mut caret = DeclarationBlock::new().with("background-color", &config.colors.tooltip);
    geometry.caret.write(&mut caret);

    let sheet = StyleSheet::new()
        .with_rule(
            HOVER_SELECTOR,
            DeclarationBlock::new().with("transform", hover_transform(config.animation)),
        )
        .with_rule(CARET_SELECTOR, caret);

    let body = match &config.embed {
        Some(embed) => Body::Embed(embed_frame(embed)),
        None => Body::Slot(Slot {
            name: "content",
            fallback: None,
        }),
    };

    WidgetStyles {
        host,
        button,
        popover,
        sheet,
        icon: Slot {
            name: "icon",
            fallback: config.icon.clone(),
        },
        body,
    }
}

fn button_block(config: &Config) -> DeclarationBlock {
    let size: &Length = &config.button_size;
    DeclarationBlock::new()
        .with("width", size)
        .with("height", size)
        .with("border-radius", &config.button_radius)
        .with("background-color", &config.colors.button)
        .with("box-shadow", format!("0 2px 5px {}", config.colors.shadow))
        .with("font-size", size.scaled(0.5))
        .with("transition", "transform 0.3s ease")
}

/// Transform applied while the button is hovered.
pub fn hover_transform(animation: Animation) -> &'static str {
    match animation {
        Animation::Scale => "scale(1.1)",
        Animation::Rotate => "rotate(180deg)",
        Animation::Bounce => "translateY(-5px)",
        Animation::None => "none",
    }
}

// allow and sandbox are handed to the frame as written; the embedded
// document enforces them.
fn embed_frame(embed: &Embed) -> EmbedFrame {
    EmbedFrame {
        src: embed.src.clone(),
        allow: embed.allow.clone(),
        sandbox: embed.sandbox.clone(),
        loading: "lazy",
        class: "content-iframe",
        style: DeclarationBlock::new()
            .with("width", "100%")
            .with("height", &embed.height)
            .with("border", "none"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::{Attributes, resolve};

    #[test]
    fn test_base_css_parses() {
        let sheet = bcss::parser::parse_stylesheet(BASE_CSS).unwrap();
        assert_eq!(sheet.len(), 7);
        assert_eq!(sheet.rule(":host").unwrap().block.get("position"), Some("fixed"));
    }

    #[test]
    fn test_default_button() {
        let styles = compose(&Config::default());
        insta::assert_snapshot!(
            styles.button.to_css(),
            @"width: 50px; height: 50px; border-radius: 50%; background-color: #fff; box-shadow: 0 2px 5px rgba(0, 0, 0, 0.2); font-size: calc(50px * 0.5); transition: transform 0.3s ease;"
        );
    }

    #[test]
    fn test_default_popover() {
        let styles = compose(&Config::default());
        insta::assert_snapshot!(
            styles.popover.to_css(),
            @"background-color: #fff; color: #000; width: 200px; padding: 15px; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.2); bottom: calc(100% + 15px); left: 0;"
        );
        assert_eq!(styles.host.to_css(), "right: 20px; bottom: 20px;");
    }

    #[test]
    fn test_hover_transforms() {
        assert_eq!(hover_transform(Animation::Scale), "scale(1.1)");
        assert_eq!(hover_transform(Animation::Rotate), "rotate(180deg)");
        assert_eq!(hover_transform(Animation::Bounce), "translateY(-5px)");
        assert_eq!(hover_transform(Animation::None), "none");

        let styles = compose(&resolve(&Attributes::new().with("animation", "spin")));
        assert_eq!(
            styles.sheet.rule(HOVER_SELECTOR).unwrap().block.get("transform"),
            Some("scale(1.1)")
        );
    }

    #[test]
    fn test_caret_uses_popover_color() {
        let styles = compose(&resolve(&Attributes::new().with("tooltip-color", "#123456")));
        let caret = &styles.sheet.rule(CARET_SELECTOR).unwrap().block;
        assert_eq!(caret.get("background-color"), Some("#123456"));
        assert_eq!(styles.popover.get("background-color"), Some("#123456"));
    }

    #[test]
    fn test_embed_tokens_pass_through() {
        let attributes = Attributes::new()
            .with("src", "https://example.com/widget")
            .with("allow", "camera; microphone")
            .with("sandbox", "allow-scripts <weird>")
            .with("iframe-height", "420px");
        let styles = compose(&resolve(&attributes));

        let Body::Embed(frame) = styles.body else {
            panic!("expected embed body");
        };
        assert_eq!(frame.allow, "camera; microphone");
        assert_eq!(frame.sandbox, "allow-scripts <weird>");
        assert_eq!(frame.loading, "lazy");
        assert_eq!(frame.style.to_css(), "width: 100%; height: 420px; border: none;");
    }

    #[test]
    fn test_compose_is_idempotent() {
        let config = resolve(
            &Attributes::new()
                .with("position", "top")
                .with("theme", "dark")
                .with("animation", "bounce"),
        );
        let first = compose(&config);
        let second = compose(&config);

        assert_eq!(first, second);
        assert_eq!(first.sheet.to_css(), second.sheet.to_css());
        assert_eq!(first.popover.to_css(), second.popover.to_css());
    }
}
