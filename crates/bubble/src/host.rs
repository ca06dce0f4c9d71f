//! The rendering environment the widget drives.
//!
//! A [`Host`] owns the real element tree: a host element, a container with
//! the toggle button and the popover, two content slots and a stylesheet.
//! The widget never touches layout itself; it hands the host complete style
//! values and asks it for measurements.

use bcss::{DeclarationBlock, Rect, Size, StyleSheet};

use crate::listeners::ListenerRegistry;
use crate::message::{MessageEnvelope, ToggleEvent};
use crate::style_composer::{Body, Slot};

/// Elements that carry an inline style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    /// The fixed-position host element.
    Host,
    Button,
    Popover,
}

pub trait Host {
    /// Registry the host uses to route resize and document interactions.
    fn listeners(&self) -> &ListenerRegistry;

    /// Install the static stylesheet. Called once, at construction.
    fn install_base_sheet(&mut self, sheet: &StyleSheet);

    /// Replace the whole dynamic stylesheet with `sheet`.
    fn replace_dynamic_sheet(&mut self, sheet: &StyleSheet);

    /// Replace the inline style of `part` with `block`.
    fn apply_inline(&mut self, part: Part, block: &DeclarationBlock);

    /// Accessible label of the toggle button.
    fn set_label(&mut self, label: &str);

    fn render_icon(&mut self, icon: &Slot);

    fn render_body(&mut self, body: &Body);

    /// Show or hide the popover (the container's `active` class).
    fn set_open(&mut self, open: bool);

    /// Bounding box of the popover after layout, `None` if it is not laid out.
    fn measure_popover(&self) -> Option<Rect>;

    fn viewport(&self) -> Size;

    /// Dispatch a notification to the page.
    fn dispatch(&mut self, envelope: MessageEnvelope<ToggleEvent>);
}
