//! Visibility coordination between independent menus
//!
//! A [`VisibilityCoordinator`] is a small publish/subscribe registry. Menus
//! subscribe to two channels: [`Channel::Show`] addressed to their own
//! [`MenuId`], and [`Channel::HideAll`]. A menu that receives a show
//! notification first publishes `HideAll`, which is what keeps at most one
//! menu visible at a time.
//!
//! Fan-out is synchronous and follows registration order. Handlers may
//! publish, subscribe or unsubscribe from inside a fan-out; a handler that
//! is removed mid-fan-out is not invoked afterwards.
//!
//! # Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use ctxmenu_core::coordinator::{Channel, VisibilityCoordinator};
//! use ctxmenu_core::input::PointerEvent;
//!
//! let coordinator = VisibilityCoordinator::new();
//! let shown = Rc::new(Cell::new(0));
//!
//! let counter = shown.clone();
//! let subscription = coordinator.subscribe(Channel::show("files"), move |_| {
//!     counter.set(counter.get() + 1);
//! });
//!
//! coordinator.show("files", &PointerEvent::context_menu(10.0, 10.0));
//! assert_eq!(shown.get(), 1);
//!
//! subscription.unsubscribe();
//! subscription.unsubscribe();
//! coordinator.show("files", &PointerEvent::context_menu(10.0, 10.0));
//! assert_eq!(shown.get(), 1);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use crate::input::TriggerEvent;

/// Identifier of a menu instance: a string or a number
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MenuId {
    Name(String),
    Number(i64),
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuId::Name(name) => f.write_str(name),
            MenuId::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for MenuId {
    fn from(name: &str) -> Self {
        MenuId::Name(name.to_string())
    }
}

impl From<String> for MenuId {
    fn from(name: String) -> Self {
        MenuId::Name(name)
    }
}

impl From<i64> for MenuId {
    fn from(n: i64) -> Self {
        MenuId::Number(n)
    }
}

impl From<i32> for MenuId {
    fn from(n: i32) -> Self {
        MenuId::Number(n.into())
    }
}

/// Notification channel
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Close every menu
    HideAll,
    /// Open the menu with this identifier
    Show(MenuId),
}

impl Channel {
    /// Show channel for a menu identifier
    pub fn show(id: impl Into<MenuId>) -> Self {
        Channel::Show(id.into())
    }
}

new_key_type! {
    /// Unique identifier for a registered handler
    pub struct SubscriberId;
}

/// Handler invoked on publish; receives the trigger for show notifications
pub type Handler = Rc<dyn Fn(Option<&TriggerEvent>)>;

#[derive(Default)]
struct Registry {
    handlers: SlotMap<SubscriberId, (Channel, Handler)>,
    /// Registration order per channel
    channels: FxHashMap<Channel, SmallVec<[SubscriberId; 4]>>,
}

impl Registry {
    fn remove(&mut self, id: SubscriberId) -> bool {
        let Some((channel, _)) = self.handlers.remove(id) else {
            return false;
        };

        if let Some(ids) = self.channels.get_mut(&channel) {
            ids.retain(|other| *other != id);
            if ids.is_empty() {
                self.channels.remove(&channel);
            }
        }
        true
    }
}

/// Publish/subscribe registry for menu visibility
///
/// Cloning is cheap and yields a handle to the same registry. The
/// application's menu root owns one and hands clones to every menu.
#[derive(Clone, Default)]
pub struct VisibilityCoordinator {
    registry: Rc<RefCell<Registry>>,
}

impl VisibilityCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler on a channel
    ///
    /// The handler stays registered until the returned [`Subscription`] is
    /// unsubscribed or dropped.
    pub fn subscribe<F>(&self, channel: Channel, handler: F) -> Subscription
    where
        F: Fn(Option<&TriggerEvent>) + 'static,
    {
        let mut registry = self.registry.borrow_mut();
        let id = registry
            .handlers
            .insert((channel.clone(), Rc::new(handler)));
        tracing::trace!("subscribe {:?} on {:?}", id, channel);
        registry.channels.entry(channel).or_default().push(id);

        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Invoke every handler registered on `channel`, in registration order
    pub fn publish(&self, channel: &Channel, payload: Option<&TriggerEvent>) {
        // Snapshot so handlers can (un)subscribe while we iterate
        let ids: SmallVec<[SubscriberId; 4]> = match self.registry.borrow().channels.get(channel) {
            Some(ids) => ids.clone(),
            None => return,
        };

        tracing::debug!("publish {:?} to {} subscriber(s)", channel, ids.len());

        for id in ids {
            let handler = self
                .registry
                .borrow()
                .handlers
                .get(id)
                .map(|(_, handler)| Rc::clone(handler));
            if let Some(handler) = handler {
                handler(payload);
            }
        }
    }

    /// Ask the menu `id` to open for `trigger`
    pub fn show(&self, id: impl Into<MenuId>, trigger: &TriggerEvent) {
        self.publish(&Channel::Show(id.into()), Some(trigger));
    }

    /// Close every menu
    pub fn hide_all(&self) {
        self.publish(&Channel::HideAll, None);
    }

    /// Number of handlers registered on a channel
    pub fn subscriber_count(&self, channel: &Channel) -> usize {
        self.registry
            .borrow()
            .channels
            .get(channel)
            .map_or(0, |ids| ids.len())
    }
}

impl fmt::Debug for VisibilityCoordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.registry.borrow();
        f.debug_struct("VisibilityCoordinator")
            .field("channels", &registry.channels.len())
            .field("handlers", &registry.handlers.len())
            .finish()
    }
}

/// Registration handle returned by [`VisibilityCoordinator::subscribe`]
///
/// Unsubscribes on drop. Calling [`Subscription::unsubscribe`] more than
/// once is a no-op.
#[must_use = "dropping a Subscription unsubscribes its handler"]
#[derive(Debug)]
pub struct Subscription {
    id: SubscriberId,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// Remove the handler from its channel
    pub fn unsubscribe(&self) {
        if let Some(registry) = self.registry.upgrade() {
            if registry.borrow_mut().remove(self.id) {
                tracing::trace!("unsubscribe {:?}", self.id);
            }
        }
    }

    /// Whether the handler is still registered
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.borrow().handlers.contains_key(self.id))
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
