//! Deferred work for the widget.
//!
//! Viewport correction needs a measured popover, and the popover is only
//! measurable after the host has committed the layout that shows it. Work
//! posted here is held until the host's next tick calls
//! [`BubbleWidget::tick`](crate::widget::BubbleWidget::tick).

use tokio::sync::mpsc;

/// Work the widget defers to the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Measure the open popover and pull it back inside the viewport.
    CorrectPlacement,
}

/// A queue of [`Task`]s drained once per tick.
///
/// Clone the sender via [`sender`](Self::sender) to post from host callbacks
/// such as layout observers.
pub struct TaskQueue {
    sender: mpsc::UnboundedSender<Task>,
    receiver: mpsc::UnboundedReceiver<Task>,
}

impl TaskQueue {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self { sender, receiver }
    }

    /// Post a task for the next tick.
    pub fn post(&self, task: Task) {
        // The receiver lives as long as `self`, so sending cannot fail here.
        let _ = self.sender.send(task);
    }

    /// Take every task posted so far.
    pub fn drain(&mut self) -> Vec<Task> {
        let mut tasks = Vec::new();
        while let Ok(task) = self.receiver.try_recv() {
            tasks.push(task);
        }
        tasks
    }

    /// Discard pending tasks. Returns how many were dropped.
    pub fn clear(&mut self) -> usize {
        self.drain().len()
    }
}

impl Default for TaskQueue {
    fn default() -> Self {
        Self::new()
    }
}
