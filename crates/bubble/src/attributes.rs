//! Attribute resolution: raw string attributes to a typed [`Config`].
//!
//! Every default the widget knows about lives in this module. Resolution never
//! fails: unknown keywords normalize to their defaults, lengths and colors are
//! passed through untouched, and an empty attribute counts as absent.

use std::collections::BTreeMap;

use bcss::{CssColor, Length, Palette};

/// Attribute names the widget reacts to.
pub const OBSERVED_ATTRIBUTES: [&str; 16] = [
    "position",
    "theme",
    "icon",
    "button-size",
    "button-radius",
    "tooltip-width",
    "spacing",
    "button-color",
    "tooltip-color",
    "text-color",
    "shadow-color",
    "animation",
    "src",
    "iframe-height",
    "allow",
    "sandbox",
];

pub const DEFAULT_BUTTON_SIZE: &str = "50px";
pub const DEFAULT_BUTTON_RADIUS: &str = "50%";
pub const DEFAULT_TOOLTIP_WIDTH: &str = "200px";
pub const DEFAULT_SPACING: &str = "15px";
pub const DEFAULT_IFRAME_HEIGHT: &str = "300px";
pub const DEFAULT_SANDBOX: &str = "allow-scripts allow-same-origin allow-forms allow-popups";

/// The raw, string-keyed configuration surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    values: BTreeMap<String, String>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Set an attribute. Returns `true` if the stored value changed.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> bool {
        let value = value.into();
        let previous = self.values.insert(name.into(), value.clone());
        previous.as_deref() != Some(value.as_str())
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.values.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// The value of `name` unless it is missing, empty or only whitespace.
    fn non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|value| !value.trim().is_empty())
    }

    fn length_or(&self, name: &str, default: &str) -> Length {
        Length::from(self.non_empty(name).unwrap_or(default))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (name, value) in iter {
            attributes.set(name, value);
        }
        attributes
    }
}

/// Where the toggle button is anchored in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Position {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
    Top,
    Bottom,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
        Position::Top,
        Position::Bottom,
    ];

    /// Exact keyword match; anything else is `None`.
    pub fn parse(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == keyword)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopRight => "top-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomRight => "bottom-right",
            Position::Top => "top",
            Position::Bottom => "bottom",
        }
    }

    /// Whether the anchor sits on the top edge of the viewport.
    pub fn is_top(&self) -> bool {
        matches!(self, Position::TopLeft | Position::TopRight | Position::Top)
    }

    /// Whether the anchor is horizontally centered.
    pub fn is_centered(&self) -> bool {
        matches!(self, Position::Top | Position::Bottom)
    }
}

/// Horizontal direction for positions outside the keyword set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// How the popover is laid out relative to the button.
///
/// The six keywords map one-to-one. A string naming neither `top` nor
/// `bottom` is a side placement; any other unrecognized string behaves like
/// `bottom-right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    Keyword(Position),
    Side(Side),
}

impl Default for Placement {
    fn default() -> Self {
        Placement::Keyword(Position::default())
    }
}

impl Placement {
    pub fn classify(raw: Option<&str>) -> Self {
        let Some(raw) = raw.filter(|raw| !raw.is_empty()) else {
            return Placement::default();
        };
        if let Some(position) = Position::parse(raw) {
            return Placement::Keyword(position);
        }
        if raw.contains("top") || raw.contains("bottom") {
            Placement::default()
        } else if raw.contains("left") {
            Placement::Side(Side::Left)
        } else {
            Placement::Side(Side::Right)
        }
    }
}

/// The `theme` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    /// A page-defined theme; colors come from overrides or the light palette.
    Custom(String),
}

impl Theme {
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") | Some("light") => Theme::Light,
            Some("dark") => Theme::Dark,
            Some(other) => Theme::Custom(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Custom(name) => name,
        }
    }

    /// The palette used for colors without an override.
    pub fn palette(&self) -> &'static Palette {
        Palette::get(self.name()).unwrap_or_else(Palette::light)
    }
}

/// Hover effect applied to the toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Animation {
    #[default]
    Scale,
    Rotate,
    Bounce,
    None,
}

impl Animation {
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw {
            Some("rotate") => Animation::Rotate,
            Some("bounce") => Animation::Bounce,
            Some("none") => Animation::None,
            _ => Animation::Scale,
        }
    }
}

/// Colors after overrides and palette fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColors {
    pub button: CssColor,
    pub tooltip: CssColor,
    pub text: CssColor,
    pub shadow: CssColor,
}

impl ThemeColors {
    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            button: palette.button.into(),
            tooltip: palette.tooltip.into(),
            text: palette.text.into(),
            shadow: palette.shadow.into(),
        }
    }
}

/// An external document shown in place of the `content` slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Embed {
    pub src: String,
    pub allow: String,
    pub sandbox: String,
    pub height: Length,
}

/// Fully resolved widget configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub position: Position,
    pub placement: Placement,
    pub theme: Theme,
    pub icon: Option<String>,
    pub button_size: Length,
    pub button_radius: Length,
    pub tooltip_width: Length,
    pub spacing: Length,
    pub colors: ThemeColors,
    pub animation: Animation,
    /// `Some` only when `src` is non-empty.
    pub embed: Option<Embed>,
}

impl Default for Config {
    fn default() -> Self {
        resolve(&Attributes::default())
    }
}

/// Resolve raw attributes into a [`Config`].
pub fn resolve(attributes: &Attributes) -> Config {
    let raw_position = attributes.non_empty("position");
    let theme = Theme::resolve(attributes.non_empty("theme"));
    let palette = theme.palette();

    let color = |name: &str, fallback: &'static str| -> CssColor {
        attributes
            .non_empty(name)
            .map(CssColor::from)
            .unwrap_or_else(|| fallback.into())
    };
    let colors = ThemeColors {
        button: color("button-color", palette.button),
        tooltip: color("tooltip-color", palette.tooltip),
        text: color("text-color", palette.text),
        shadow: color("shadow-color", palette.shadow),
    };

    let embed = attributes.non_empty("src").map(|src| Embed {
        src: src.to_string(),
        allow: attributes.get("allow").unwrap_or_default().to_string(),
        sandbox: attributes
            .non_empty("sandbox")
            .unwrap_or(DEFAULT_SANDBOX)
            .to_string(),
        height: attributes.length_or("iframe-height", DEFAULT_IFRAME_HEIGHT),
    });

    Config {
        position: raw_position.and_then(Position::parse).unwrap_or_default(),
        placement: Placement::classify(raw_position),
        theme,
        icon: attributes.non_empty("icon").map(str::to_string),
        button_size: attributes.length_or("button-size", DEFAULT_BUTTON_SIZE),
        button_radius: attributes.length_or("button-radius", DEFAULT_BUTTON_RADIUS),
        tooltip_width: attributes.length_or("tooltip-width", DEFAULT_TOOLTIP_WIDTH),
        spacing: attributes.length_or("spacing", DEFAULT_SPACING),
        colors,
        animation: Animation::resolve(attributes.non_empty("animation")),
        embed,
    }
}
