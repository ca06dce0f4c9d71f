//! Document-wide listener subscriptions.
//!
//! The host owns a [`ListenerRegistry`] and routes viewport resizes and
//! document interactions to whoever holds a live [`Subscription`]. A
//! subscription unregisters itself when dropped, so a widget releases its
//! global listeners simply by dropping its handles on detach.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Global triggers a widget can listen to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalTrigger {
    /// The viewport changed size.
    Resize,
    /// A pointer interaction anywhere in the document.
    DocumentInteraction,
}

/// Identifier of a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Debug, Default)]
struct RegistryInner {
    next_id: u64,
    active: Vec<(ListenerId, GlobalTrigger)>,
}

/// Shared registry of live global listeners.
///
/// Cloning yields another handle to the same registry.
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    inner: Rc<RefCell<RegistryInner>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, trigger: GlobalTrigger) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = ListenerId(inner.next_id);
        inner.next_id += 1;
        inner.active.push((id, trigger));
        log::trace!("listener {:?} subscribed to {:?}", id, trigger);

        Subscription {
            id,
            trigger,
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// Live listeners for `trigger`.
    pub fn count(&self, trigger: GlobalTrigger) -> usize {
        self.inner
            .borrow()
            .active
            .iter()
            .filter(|(_, t)| *t == trigger)
            .count()
    }

    /// Live listeners across all triggers.
    pub fn total(&self) -> usize {
        self.inner.borrow().active.len()
    }

    pub fn is_active(&self, id: ListenerId) -> bool {
        self.inner.borrow().active.iter().any(|(live, _)| *live == id)
    }
}

/// An owned listener registration, released on drop.
#[derive(Debug)]
pub struct Subscription {
    id: ListenerId,
    trigger: GlobalTrigger,
    registry: Weak<RefCell<RegistryInner>>,
}

impl Subscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    pub fn trigger(&self) -> GlobalTrigger {
        self.trigger
    }

    /// Whether the registry still routes events to this subscription.
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|inner| ListenerRegistry { inner }.is_active(self.id))
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.registry.upgrade() {
            inner.borrow_mut().active.retain(|(live, _)| *live != self.id);
            log::trace!("listener {:?} released from {:?}", self.id, self.trigger);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribe_and_drop() {
        let registry = ListenerRegistry::new();
        let resize = registry.subscribe(GlobalTrigger::Resize);
        let click = registry.subscribe(GlobalTrigger::DocumentInteraction);

        assert_eq!(registry.total(), 2);
        assert_eq!(registry.count(GlobalTrigger::Resize), 1);
        assert!(resize.is_active());
        assert_ne!(resize.id(), click.id());

        let id = resize.id();
        drop(resize);
        assert!(!registry.is_active(id));
        assert_eq!(registry.count(GlobalTrigger::Resize), 0);
        assert_eq!(registry.total(), 1);

        drop(click);
        assert_eq!(registry.total(), 0);
    }

    #[test]
    fn test_subscription_outliving_registry() {
        let registry = ListenerRegistry::new();
        let subscription = registry.subscribe(GlobalTrigger::Resize);
        drop(registry);

        assert!(!subscription.is_active());
        drop(subscription);
    }
}
