//! Named color palettes.
//!
//! A palette assigns a color to each of the four surfaces the widget paints:
//!
//! | Slot      | Used for                                  |
//! |-----------|-------------------------------------------|
//! | `button`  | Toggle button background                  |
//! | `tooltip` | Popover background and caret fill         |
//! | `text`    | Popover foreground                        |
//! | `shadow`  | Button and popover drop shadows           |
//!
//! Only `light` and `dark` exist. Any other theme name is a custom theme that
//! relies on explicit color overrides, falling back to `light`.

use phf::phf_map;

/// The four colors a theme provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub button: &'static str,
    pub tooltip: &'static str,
    pub text: &'static str,
    pub shadow: &'static str,
}

pub const LIGHT: Palette = Palette {
    button: "#fff",
    tooltip: "#fff",
    text: "#000",
    shadow: "rgba(0, 0, 0, 0.2)",
};

pub const DARK: Palette = Palette {
    button: "#333",
    tooltip: "#444",
    text: "#fff",
    shadow: "rgba(0, 0, 0, 0.5)",
};

static PALETTES: phf::Map<&'static str, Palette> = phf_map! {
    "light" => LIGHT,
    "dark" => DARK,
};

impl Palette {
    /// Look up a built-in palette by theme name.
    pub fn get(name: &str) -> Option<&'static Palette> {
        PALETTES.get(name)
    }

    /// The fallback palette for unknown and custom themes.
    pub fn light() -> &'static Palette {
        &LIGHT
    }

    pub fn dark() -> &'static Palette {
        &DARK
    }
}
