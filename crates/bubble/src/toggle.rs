//! Open/closed state of the popover.

/// Whether the popover is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleState {
    #[default]
    Closed,
    Open,
}

impl ToggleState {
    pub fn is_open(self) -> bool {
        self == ToggleState::Open
    }

    fn flipped(self) -> Self {
        match self {
            ToggleState::Closed => ToggleState::Open,
            ToggleState::Open => ToggleState::Closed,
        }
    }
}

/// Where a document-wide interaction landed relative to the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Inside,
    Outside,
}

/// Result of a button activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activation {
    pub state: ToggleState,
    /// Set when the popover just opened and needs a post-layout correction.
    pub schedule_correction: bool,
}

/// The toggle state machine.
#[derive(Debug, Clone, Default)]
pub struct ToggleController {
    state: ToggleState,
}

impl ToggleController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ToggleState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Flip the state in response to the button.
    pub fn activate(&mut self) -> Activation {
        self.state = self.state.flipped();
        Activation {
            state: self.state,
            schedule_correction: self.state.is_open(),
        }
    }

    /// Close on an outside interaction. Returns `true` if the state changed.
    pub fn dismiss(&mut self, hit: Hit) -> bool {
        if hit == Hit::Outside && self.state.is_open() {
            self.state = ToggleState::Closed;
            true
        } else {
            false
        }
    }

    /// Back to the initial state, used when the widget is attached.
    pub fn reset(&mut self) {
        self.state = ToggleState::Closed;
    }
}
