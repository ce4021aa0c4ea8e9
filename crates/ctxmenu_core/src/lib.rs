//! ctxmenu core
//!
//! Foundational pieces shared by the menu widgets:
//!
//! - **Input**: pointer, touch, keyboard and window events with a
//!   stop-propagation flag
//! - **Geometry**: points, sizes and rectangles in client coordinates
//! - **Metrics**: [`Viewport`] and [`Measure`] capabilities implemented by the host
//! - **Visibility coordination**: a publish/subscribe registry that keeps at
//!   most one menu open
//! - **Event dispatch**: window-level listeners held by RAII guards
//!
//! # Example
//!
//! ```
//! use ctxmenu_core::{Channel, EventDispatcher, EventKind, PointerEvent, VisibilityCoordinator};
//!
//! let coordinator = VisibilityCoordinator::new();
//! let window = EventDispatcher::new();
//!
//! let _open = coordinator.subscribe(Channel::show("editor"), |trigger| {
//!     assert!(trigger.is_some());
//! });
//! let _close = window.add_listener(EventKind::Click, |_| {});
//!
//! coordinator.show("editor", &PointerEvent::context_menu(120.0, 80.0));
//! window.dispatch(&PointerEvent::click(0.0, 0.0).into());
//! ```

pub mod coordinator;
pub mod events;
pub mod geometry;
pub mod input;
pub mod metrics;
pub mod props;
pub mod state;

pub use coordinator::{Channel, MenuId, Subscription, SubscriberId, VisibilityCoordinator};
pub use events::{EventDispatcher, ListenerGuard, ListenerId};
pub use geometry::{Point, Rect, Size};
pub use input::{
    EventKind, Key, KeyboardEvent, Modifiers, MouseButton, PointerEvent, TouchPoint, TriggerEvent,
    WindowEvent,
};
pub use metrics::{Measure, Viewport};
pub use props::{merge_props, Props};
pub use state::StateTransitions;
