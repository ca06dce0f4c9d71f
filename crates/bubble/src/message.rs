//! Outbound notifications.
//!
//! The widget announces every button activation with a [`ToggleEvent`]
//! wrapped in a [`MessageEnvelope`]. The envelope carries the DOM dispatch
//! flags so a host can re-emit it as a native event that crosses shadow
//! boundaries, and adapters can `map` it into their own callback shape.

/// Event name used when the host re-dispatches the notification.
pub const TOGGLE_EVENT: &str = "bubble-toggle";

/// Payload of the toggle notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleEvent {
    pub is_open: bool,
}

impl ToggleEvent {
    pub fn new(is_open: bool) -> Self {
        Self { is_open }
    }
}

/// Envelope wrapping a message with source metadata and propagation flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEnvelope<M> {
    /// The actual message payload.
    pub message: M,

    /// Event name for hosts that dispatch by name.
    pub name: &'static str,

    /// Optional ID of the widget that produced this message.
    pub sender_id: Option<String>,

    /// Type name of the widget that produced this message.
    pub sender_type: String,

    /// Whether the event crosses shadow roots.
    pub composed: bool,

    bubbling: bool,
}

impl<M> MessageEnvelope<M> {
    /// Create a bubbling, composed envelope.
    pub fn new(message: M, name: &'static str, sender_id: Option<&str>, sender_type: &str) -> Self {
        Self {
            message,
            name,
            sender_id: sender_id.map(String::from),
            sender_type: sender_type.to_string(),
            composed: true,
            bubbling: true,
        }
    }

    /// Stop this message from bubbling further.
    pub fn stop(&mut self) {
        self.bubbling = false;
    }

    pub fn is_bubbling(&self) -> bool {
        self.bubbling
    }

    /// Transform the payload while preserving envelope metadata.
    pub fn map<N, F>(self, f: F) -> MessageEnvelope<N>
    where
        F: FnOnce(M) -> N,
    {
        MessageEnvelope {
            message: f(self.message),
            name: self.name,
            sender_id: self.sender_id,
            sender_type: self.sender_type,
            composed: self.composed,
            bubbling: self.bubbling,
        }
    }
}
