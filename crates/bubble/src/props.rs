//! Helpers for framework adapters.
//!
//! Component frameworks pass configuration as camelCase props and expect a
//! callback rather than a DOM event. Adapters use these helpers to translate
//! names in both directions and to unwrap the toggle notification. Placement
//! and styling stay in the widget.

use crate::attributes::Attributes;
use crate::message::{MessageEnvelope, ToggleEvent};

/// `buttonSize` → `button-size`.
///
/// A dash is inserted before an uppercase letter that follows a lowercase
/// letter or a digit; everything is lowercased.
pub fn to_attribute_name(prop: &str) -> String {
    let mut out = String::with_capacity(prop.len() + 4);
    let mut previous: Option<char> = None;
    for c in prop.chars() {
        if c.is_ascii_uppercase()
            && previous.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit())
        {
            out.push('-');
        }
        out.push(c.to_ascii_lowercase());
        previous = Some(c);
    }
    out
}

/// `button-size` → `buttonSize`.
pub fn to_prop_name(attribute: &str) -> String {
    let mut out = String::with_capacity(attribute.len());
    for (i, part) in attribute.split('-').filter(|part| !part.is_empty()).enumerate() {
        if i == 0 {
            out.push_str(part);
            continue;
        }
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Build attributes from camelCase props, skipping props that are unset.
pub fn attributes_from_props<I, K, V>(props: I) -> Attributes
where
    I: IntoIterator<Item = (K, Option<V>)>,
    K: AsRef<str>,
    V: Into<String>,
{
    props
        .into_iter()
        .filter_map(|(name, value)| value.map(|value| (to_attribute_name(name.as_ref()), value)))
        .collect()
}

/// Hand the open state of a toggle notification to an adapter callback.
pub fn forward_toggle<F>(envelope: &MessageEnvelope<ToggleEvent>, callback: &mut F)
where
    F: FnMut(bool),
{
    callback(envelope.message.is_open);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::OBSERVED_ATTRIBUTES;
    use crate::message::TOGGLE_EVENT;

    #[test]
    fn test_attribute_names() {
        assert_eq!(to_attribute_name("buttonSize"), "button-size");
        assert_eq!(to_attribute_name("iframeHeight"), "iframe-height");
        assert_eq!(to_attribute_name("position"), "position");
        assert_eq!(to_attribute_name("h2Color"), "h2-color");
        assert_eq!(to_attribute_name("HTMLWidth"), "htmlwidth");
    }

    #[test]
    fn test_names_round_trip_for_observed_attributes() {
        for attribute in OBSERVED_ATTRIBUTES {
            assert_eq!(to_attribute_name(&to_prop_name(attribute)), attribute);
        }
        assert_eq!(to_prop_name("tooltip-width"), "tooltipWidth");
    }

    #[test]
    fn test_unset_props_are_skipped() {
        let attributes = attributes_from_props([
            ("position", Some("top")),
            ("buttonColor", Some("#f00")),
            ("shadowColor", None),
        ]);

        assert_eq!(attributes.get("position"), Some("top"));
        assert_eq!(attributes.get("button-color"), Some("#f00"));
        assert_eq!(attributes.get("shadow-color"), None);
    }

    #[test]
    fn test_forward_toggle() {
        let mut seen = Vec::new();
        let envelope =
            MessageEnvelope::new(ToggleEvent::new(true), TOGGLE_EVENT, None, "BubbleWidget");
        forward_toggle(&envelope, &mut |open| seen.push(open));
        assert_eq!(seen, vec![true]);
    }
}
