//! A floating toggle button that reveals a popover and keeps it on screen.
//!
//! This crate bundles the widget core ([`bubble`]) with its style types
//! ([`bcss`]). Hosts implement [`Host`] for their rendering environment and
//! drive a [`BubbleWidget`] from their event loop:
//!
//! ```ignore
//! let mut widget = BubbleWidget::new(my_host)?;
//! widget.set_attribute("position", "top-right");
//! widget.attach();
//!
//! // on button click
//! widget.activate();
//! // after the next layout pass
//! widget.tick();
//! // on window resize
//! widget.viewport_resized();
//! ```

pub use bcss;
pub use bubble::*;

pub mod prelude {
    pub use bubble::{
        Attributes, BubbleWidget, Config, Hit, Host, Part, Position, ToggleEvent, ToggleState,
    };
}
