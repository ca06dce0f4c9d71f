//! The bubble widget: a floating toggle button with a popover.
//!
//! [`BubbleWidget`] ties the pieces together. Attribute changes run
//! resolution and composition and reapply every dynamic style; button
//! activations and document interactions drive the toggle state; the host's
//! tick runs deferred viewport corrections.
//!
//! ```ignore
//! let mut widget = BubbleWidget::new(host)?;
//! widget.set_attribute("position", "top-left");
//! widget.attach();
//! widget.activate();   // opens, schedules a correction
//! widget.tick();       // after layout: measure and correct
//! ```

use bcss::parser::parse_stylesheet;

use crate::attributes::{Attributes, Config, resolve};
use crate::context::{Task, TaskQueue};
use crate::error::Result;
use crate::host::{Host, Part};
use crate::listeners::{GlobalTrigger, Subscription};
use crate::message::{MessageEnvelope, TOGGLE_EVENT, ToggleEvent};
use crate::placement::ViewportCorrection;
use crate::style_composer::{BASE_CSS, WidgetStyles, compose};
use crate::toggle::{Hit, ToggleController, ToggleState};

/// Accessible label of the toggle button.
pub const TOGGLE_LABEL: &str = "Toggle widget";

const TYPE_NAME: &str = "BubbleWidget";

pub struct BubbleWidget<H: Host> {
    host: H,
    id: Option<String>,
    attributes: Attributes,
    config: Config,
    styles: WidgetStyles,
    toggle: ToggleController,
    tasks: TaskQueue,
    /// A `CorrectPlacement` task is queued and not yet drained.
    correction_pending: bool,
    subscriptions: Vec<Subscription>,
    attached: bool,
    /// Correction currently layered over the popover's base style.
    correction: Option<ViewportCorrection>,
}

impl<H: Host> BubbleWidget<H> {
    /// Create a detached widget and install the base stylesheet on `host`.
    pub fn new(host: H) -> Result<Self> {
        Self::with_attributes(host, Attributes::new())
    }

    pub fn with_attributes(mut host: H, attributes: Attributes) -> Result<Self> {
        let base = parse_stylesheet(BASE_CSS)?;
        host.install_base_sheet(&base);
        host.set_label(TOGGLE_LABEL);

        let config = resolve(&attributes);
        let styles = compose(&config);

        let mut widget = Self {
            host,
            id: None,
            attributes,
            config,
            styles,
            toggle: ToggleController::new(),
            tasks: TaskQueue::new(),
            correction_pending: false,
            subscriptions: Vec::new(),
            attached: false,
            correction: None,
        };
        widget.apply_styles();
        Ok(widget)
    }

    /// Identify this widget in outgoing notifications.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Connect to the document: restyle, start closed and subscribe to
    /// global triggers. Attaching twice is a no-op.
    pub fn attach(&mut self) {
        if self.attached {
            return;
        }
        self.attached = true;
        self.toggle.reset();
        self.host.set_open(false);
        self.restyle();

        let listeners = self.host.listeners();
        self.subscriptions = vec![
            listeners.subscribe(GlobalTrigger::Resize),
            listeners.subscribe(GlobalTrigger::DocumentInteraction),
        ];
        log::debug!("{} attached ({} listeners)", TYPE_NAME, self.subscriptions.len());
    }

    /// Disconnect: close, release global listeners and drop pending
    /// corrections.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        if self.toggle.is_open() {
            self.toggle.reset();
            self.host.set_open(false);
        }
        self.subscriptions.clear();
        self.correction_pending = false;
        let dropped = self.tasks.clear();
        log::debug!("{} detached, dropped {} pending task(s)", TYPE_NAME, dropped);
    }

    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        if self.attributes.set(name, value) {
            self.restyle();
        }
    }

    pub fn remove_attribute(&mut self, name: &str) {
        if self.attributes.remove(name).is_some() {
            self.restyle();
        }
    }

    /// The toggle button was activated.
    pub fn activate(&mut self) {
        if !self.attached {
            return;
        }
        let activation = self.toggle.activate();
        let is_open = activation.state.is_open();
        self.host.set_open(is_open);
        if activation.schedule_correction {
            self.schedule_correction();
        }
        log::debug!("{} toggled open={}", TYPE_NAME, is_open);

        let envelope = MessageEnvelope::new(
            ToggleEvent::new(is_open),
            TOGGLE_EVENT,
            self.id.as_deref(),
            TYPE_NAME,
        );
        self.host.dispatch(envelope);
    }

    /// A document-wide interaction landed inside or outside the widget.
    pub fn document_interaction(&mut self, hit: Hit) {
        if !self.is_listening(GlobalTrigger::DocumentInteraction) {
            return;
        }
        if self.toggle.dismiss(hit) {
            self.host.set_open(false);
            log::debug!("{} dismissed by outside interaction", TYPE_NAME);
        }
    }

    /// The viewport was resized.
    pub fn viewport_resized(&mut self) {
        if !self.is_listening(GlobalTrigger::Resize) {
            return;
        }
        self.correct_placement();
    }

    /// Run work deferred to this tick. Returns the number of tasks taken.
    pub fn tick(&mut self) -> usize {
        let tasks = self.tasks.drain();
        self.correction_pending = false;
        if !self.attached {
            return tasks.len();
        }
        if tasks.contains(&Task::CorrectPlacement) {
            self.correct_placement();
        }
        tasks.len()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn styles(&self) -> &WidgetStyles {
        &self.styles
    }

    pub fn state(&self) -> ToggleState {
        self.toggle.state()
    }

    pub fn is_open(&self) -> bool {
        self.toggle.is_open()
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// The correction in effect, if the last measurement found overflow.
    pub fn correction(&self) -> Option<&ViewportCorrection> {
        self.correction.as_ref()
    }

    fn is_listening(&self, trigger: GlobalTrigger) -> bool {
        self.subscriptions
            .iter()
            .any(|sub| sub.trigger() == trigger && sub.is_active())
    }

    fn restyle(&mut self) {
        self.config = resolve(&self.attributes);
        self.styles = compose(&self.config);
        self.apply_styles();
        log::trace!("{} restyled: {:?}", TYPE_NAME, self.config.position);

        if self.attached && self.toggle.is_open() {
            self.schedule_correction();
        }
    }

    /// Queue a correction for the next tick unless one is already queued.
    fn schedule_correction(&mut self) {
        if !self.correction_pending {
            self.tasks.post(Task::CorrectPlacement);
            self.correction_pending = true;
        }
    }

    /// Replace every dynamic style on the host with the current composition.
    fn apply_styles(&mut self) {
        self.correction = None;
        self.host.apply_inline(Part::Host, &self.styles.host);
        self.host.apply_inline(Part::Button, &self.styles.button);
        self.host.apply_inline(Part::Popover, &self.styles.popover);
        self.host.replace_dynamic_sheet(&self.styles.sheet);
        self.host.render_icon(&self.styles.icon);
        self.host.render_body(&self.styles.body);
    }

    /// Measure the popover at its base placement and pin it inside the
    /// viewport. Does nothing while closed or before the popover is laid out.
    fn correct_placement(&mut self) {
        if !self.toggle.is_open() {
            return;
        }
        if self.correction.take().is_some() {
            self.host.apply_inline(Part::Popover, &self.styles.popover);
        }
        let Some(rect) = self.host.measure_popover() else {
            log::trace!("{} correction skipped: popover not laid out", TYPE_NAME);
            return;
        };

        let correction = ViewportCorrection::compute(rect, self.host.viewport());
        if correction.is_empty() {
            return;
        }
        log::debug!("{} popover overflow {:?}", TYPE_NAME, correction.overflow);

        let mut block = self.styles.popover.clone();
        block.merge(&correction.to_declarations());
        self.host.apply_inline(Part::Popover, &block);
        self.correction = Some(correction);
    }
}
