//! An in-memory [`Host`] for tests.
//!
//! [`TestHost`] records everything the widget applies and answers
//! measurement queries from fields the test controls.
//!
//! ```ignore
//! use bubble::testing::TestHost;
//!
//! let mut widget = BubbleWidget::new(TestHost::new())?;
//! widget.attach();
//! widget.host_mut().popover_rect = Some(Rect::new(700.0, 100.0, 200.0, 120.0));
//! widget.activate();
//! widget.tick();
//! assert_eq!(widget.host().inline(Part::Popover).get("right"), Some("0"));
//! ```

use std::collections::HashMap;

use bcss::{DeclarationBlock, Rect, Size, StyleSheet};

use crate::host::{Host, Part};
use crate::listeners::{GlobalTrigger, ListenerRegistry};
use crate::message::{MessageEnvelope, ToggleEvent};
use crate::style_composer::{Body, Slot};

/// One observable side effect, in the order the widget caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    InstallBaseSheet,
    ReplaceDynamicSheet,
    ApplyInline(Part),
    SetLabel(String),
    RenderIcon,
    RenderBody,
    SetOpen(bool),
    Dispatch(bool),
}

pub struct TestHost {
    listeners: ListenerRegistry,
    pub base_sheet: Option<StyleSheet>,
    pub dynamic_sheet: StyleSheet,
    pub inline: HashMap<Part, DeclarationBlock>,
    pub label: Option<String>,
    pub icon: Option<Slot>,
    pub body: Option<Body>,
    pub open: bool,
    /// What `measure_popover` reports; `None` means not laid out.
    pub popover_rect: Option<Rect>,
    pub viewport: Size,
    pub events: Vec<MessageEnvelope<ToggleEvent>>,
    pub calls: Vec<HostCall>,
}

impl TestHost {
    pub fn new() -> Self {
        Self {
            listeners: ListenerRegistry::new(),
            base_sheet: None,
            dynamic_sheet: StyleSheet::new(),
            inline: HashMap::new(),
            label: None,
            icon: None,
            body: None,
            open: false,
            popover_rect: None,
            viewport: Size::new(1024.0, 768.0),
            events: Vec::new(),
            calls: Vec::new(),
        }
    }

    pub fn with_viewport(mut self, width: f64, height: f64) -> Self {
        self.viewport = Size::new(width, height);
        self
    }

    /// Current inline style of `part`; empty if never applied.
    pub fn inline(&self, part: Part) -> DeclarationBlock {
        self.inline.get(&part).cloned().unwrap_or_default()
    }

    pub fn listener_count(&self, trigger: GlobalTrigger) -> usize {
        self.listeners.count(trigger)
    }

    /// Open states carried by dispatched notifications.
    pub fn toggle_states(&self) -> Vec<bool> {
        self.events.iter().map(|env| env.message.is_open).collect()
    }

    pub fn count_calls(&self, call: &HostCall) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl Default for TestHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for TestHost {
    fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    fn install_base_sheet(&mut self, sheet: &StyleSheet) {
        self.calls.push(HostCall::InstallBaseSheet);
        self.base_sheet = Some(sheet.clone());
    }

    fn replace_dynamic_sheet(&mut self, sheet: &StyleSheet) {
        self.calls.push(HostCall::ReplaceDynamicSheet);
        self.dynamic_sheet = sheet.clone();
    }

    fn apply_inline(&mut self, part: Part, block: &DeclarationBlock) {
        self.calls.push(HostCall::ApplyInline(part));
        self.inline.insert(part, block.clone());
    }

    fn set_label(&mut self, label: &str) {
        self.calls.push(HostCall::SetLabel(label.to_string()));
        self.label = Some(label.to_string());
    }

    fn render_icon(&mut self, icon: &Slot) {
        self.calls.push(HostCall::RenderIcon);
        self.icon = Some(icon.clone());
    }

    fn render_body(&mut self, body: &Body) {
        self.calls.push(HostCall::RenderBody);
        self.body = Some(body.clone());
    }

    fn set_open(&mut self, open: bool) {
        self.calls.push(HostCall::SetOpen(open));
        self.open = open;
    }

    fn measure_popover(&self) -> Option<Rect> {
        self.popover_rect
    }

    fn viewport(&self) -> Size {
        self.viewport
    }

    fn dispatch(&mut self, envelope: MessageEnvelope<ToggleEvent>) {
        self.calls.push(HostCall::Dispatch(envelope.message.is_open));
        self.events.push(envelope);
    }
}
