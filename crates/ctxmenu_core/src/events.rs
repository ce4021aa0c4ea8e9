//! Window-level event listeners
//!
//! [`EventDispatcher`] plays the role of the window as an event target. Menus
//! attach dismissal listeners to it while they are visible. Every attachment
//! returns a [`ListenerGuard`] that detaches on drop, so a torn-down menu can
//! never be called back.
//!
//! The host forwards events with [`EventDispatcher::dispatch`] after they have
//! finished bubbling through the menu elements. Events whose propagation was
//! stopped on the way never reach the window.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use crate::input::{EventKind, WindowEvent};

new_key_type! {
    /// Unique identifier for a window listener
    pub struct ListenerId;
}

/// Callback for window events
pub type Listener = Rc<dyn Fn(&WindowEvent)>;

#[derive(Default)]
struct Listeners {
    entries: SlotMap<ListenerId, (EventKind, Listener)>,
    by_kind: FxHashMap<EventKind, SmallVec<[ListenerId; 4]>>,
}

impl Listeners {
    fn remove(&mut self, id: ListenerId) -> bool {
        let Some((kind, _)) = self.entries.remove(id) else {
            return false;
        };

        if let Some(ids) = self.by_kind.get_mut(&kind) {
            ids.retain(|other| *other != id);
            if ids.is_empty() {
                self.by_kind.remove(&kind);
            }
        }
        true
    }
}

/// Window event target
#[derive(Clone, Default)]
pub struct EventDispatcher {
    listeners: Rc<RefCell<Listeners>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a listener for one event kind
    pub fn add_listener<F>(&self, kind: EventKind, listener: F) -> ListenerGuard
    where
        F: Fn(&WindowEvent) + 'static,
    {
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.entries.insert((kind, Rc::new(listener)));
        listeners.by_kind.entry(kind).or_default().push(id);
        tracing::trace!("add {:?} listener {:?}", kind, id);

        ListenerGuard {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    /// Deliver an event to the listeners for its kind
    ///
    /// Returns `false` without calling anything if the event's propagation
    /// was stopped before it reached the window. Stopping propagation from a
    /// window listener does not skip the remaining listeners for the kind.
    pub fn dispatch(&self, event: &WindowEvent) -> bool {
        if event.is_propagation_stopped() {
            tracing::trace!("{:?} stopped before reaching the window", event.kind());
            return false;
        }

        let kind = event.kind();
        let ids: SmallVec<[ListenerId; 4]> = match self.listeners.borrow().by_kind.get(&kind) {
            Some(ids) => ids.clone(),
            None => return true,
        };

        for id in ids {
            let listener = self
                .listeners
                .borrow()
                .entries
                .get(id)
                .map(|(_, listener)| Rc::clone(listener));
            if let Some(listener) = listener {
                listener(event);
            }
        }
        true
    }

    /// Number of listeners attached for a kind
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners
            .borrow()
            .by_kind
            .get(&kind)
            .map_or(0, |ids| ids.len())
    }
}

impl fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("listeners", &self.listeners.borrow().entries.len())
            .finish()
    }
}

/// Attachment handle returned by [`EventDispatcher::add_listener`]
///
/// Detaches on drop; [`ListenerGuard::remove`] is idempotent.
#[must_use = "dropping a ListenerGuard detaches its listener"]
#[derive(Debug)]
pub struct ListenerGuard {
    id: ListenerId,
    listeners: Weak<RefCell<Listeners>>,
}

impl ListenerGuard {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    pub fn remove(&self) {
        if let Some(listeners) = self.listeners.upgrade() {
            if listeners.borrow_mut().remove(self.id) {
                tracing::trace!("remove listener {:?}", self.id);
            }
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.remove();
    }
}
