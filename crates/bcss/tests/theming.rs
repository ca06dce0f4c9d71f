use bcss::Palette;
use bcss::types::theme::{DARK, LIGHT};

#[test]
fn test_light_palette_values() {
    let light = Palette::light();
    assert_eq!(light.button, "#fff");
    assert_eq!(light.tooltip, "#fff");
    assert_eq!(light.text, "#000");
    assert_eq!(*light, LIGHT);
}

#[test]
fn test_dark_palette_values() {
    let dark = Palette::get("dark").expect("dark palette");
    assert_eq!(dark.button, "#333");
    assert_eq!(dark.tooltip, "#444");
    assert_eq!(dark.text, "#fff");
    assert_eq!(*dark, DARK);
    assert_eq!(Palette::dark(), dark);
}

#[test]
fn test_unknown_theme_has_no_palette() {
    for name in ["", "solarized", "LIGHT", " dark"] {
        assert!(Palette::get(name).is_none(), "{name:?} should not be a palette");
    }
}
