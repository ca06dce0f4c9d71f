//! # Bubble - a floating toggle button with a popover
//!
//! The widget core: it resolves string attributes into a typed
//! configuration, composes the styles for the button, popover and caret,
//! anchors the button in the viewport, and keeps the open popover on screen.
//! Rendering is delegated to a [`Host`], which owns the element tree and the
//! layout engine.
//!
//! ## Modules
//!
//! - [`attributes`]: attribute map, keywords and [`Config`] resolution
//! - [`style_composer`]: pure configuration-to-style composition
//! - [`placement`]: anchor, popover and caret geometry, viewport correction
//! - [`toggle`]: open/closed state machine
//! - [`widget`]: [`BubbleWidget`], the composition root
//! - [`host`]: the [`Host`] trait
//! - [`listeners`]: owned subscriptions to global triggers
//! - [`context`]: work deferred to the next tick
//! - [`message`]: the toggle notification
//! - [`props`]: naming helpers for framework adapters
//! - [`testing`]: an in-memory host

pub mod attributes;
pub mod context;
pub mod error;
pub mod host;
pub mod listeners;
mod log_init;
pub mod message;
pub mod placement;
pub mod props;
pub mod style_composer;
pub mod testing;
pub mod toggle;
pub mod widget;

pub use attributes::{Animation, Attributes, Config, Placement, Position, Side, Theme, resolve};
pub use error::{BubbleError, Result};
pub use host::{Host, Part};
pub use listeners::{GlobalTrigger, ListenerRegistry, Subscription};
pub use log_init::init_logger;
pub use message::{MessageEnvelope, TOGGLE_EVENT, ToggleEvent};
pub use placement::{Overflow, PlacementGeometry, ViewportCorrection};
pub use style_composer::{Body, EmbedFrame, Slot, WidgetStyles, compose};
pub use toggle::{Hit, ToggleState};
pub use widget::BubbleWidget;

pub use bcss;
// Re-export the log crate so hosts can use bubble::log::info!, etc.
pub use log;
