//! Input event types for pointer, touch, keyboard and window events
//!
//! These mirror the subset of DOM-style events the menus consume: client
//! coordinates (which may be missing), the event type, the pressed button,
//! modifier state, changed touches and a propagation flag.

use std::cell::Cell;

use serde::Deserialize;
use smallvec::SmallVec;

use crate::geometry::Size;
use crate::props::Props;

/// Event type, the equivalent of a DOM event's `type` string
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    MouseDown,
    MouseUp,
    Click,
    ContextMenu,
    TouchStart,
    TouchEnd,
    KeyDown,
    KeyUp,
    Resize,
    Scroll,
}

/// Mouse buttons
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button
    #[default]
    Left,
    /// Middle button (scroll wheel click)
    Middle,
    /// Secondary button
    Right,
    /// Back button (side button)
    Back,
    /// Forward button (side button)
    Forward,
    /// Other button with index
    Other(u16),
}

/// Modifier key state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    /// Shift key is held
    pub shift: bool,
    /// Control key is held
    pub ctrl: bool,
    /// Alt key is held (Option on macOS)
    pub alt: bool,
    /// Meta key is held (Command on macOS, Windows key on Windows)
    pub meta: bool,
}

impl Modifiers {
    /// Only ctrl held
    pub const CTRL: Modifiers = Modifiers {
        shift: false,
        ctrl: true,
        alt: false,
        meta: false,
    };
}

/// Key codes the menus care about
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub enum Key {
    Enter,
    Escape,
    Space,
    Tab,
    Backspace,
    Delete,
    Home,
    End,
    Left,
    Right,
    Up,
    Down,

    // Character input
    Char(char),

    Unknown,
}

/// A single touch point from a touch event's `changedTouches`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    /// Unique identifier for this touch
    pub id: u64,
    pub client_x: f32,
    pub client_y: f32,
}

impl TouchPoint {
    pub fn new(id: u64, client_x: f32, client_y: f32) -> Self {
        Self {
            id,
            client_x,
            client_y,
        }
    }
}

/// Pointer or touch event
///
/// Used both as the trigger that opens a menu and as a window-level
/// dismissal event. Coordinates are optional because some platforms emit
/// `touchend` without them.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub kind: EventKind,
    pub client_x: Option<f32>,
    pub client_y: Option<f32>,
    pub button: MouseButton,
    pub modifiers: Modifiers,
    pub changed_touches: SmallVec<[TouchPoint; 2]>,
    /// Caller-supplied payload forwarded to item callbacks
    pub data: Props,
    propagation_stopped: Cell<bool>,
}

/// The input event that opened a menu
pub type TriggerEvent = PointerEvent;

impl PointerEvent {
    /// Create a pointer event at the given client position
    pub fn new(kind: EventKind, client_x: f32, client_y: f32) -> Self {
        Self {
            kind,
            client_x: Some(client_x),
            client_y: Some(client_y),
            button: MouseButton::Left,
            modifiers: Modifiers::default(),
            changed_touches: SmallVec::new(),
            data: Props::new(),
            propagation_stopped: Cell::new(false),
        }
    }

    /// `contextmenu` event (secondary button)
    pub fn context_menu(client_x: f32, client_y: f32) -> Self {
        Self::new(EventKind::ContextMenu, client_x, client_y).with_button(MouseButton::Right)
    }

    /// `mousedown` event with the given button
    pub fn mouse_down(client_x: f32, client_y: f32, button: MouseButton) -> Self {
        Self::new(EventKind::MouseDown, client_x, client_y).with_button(button)
    }

    /// Primary-button `click` event
    pub fn click(client_x: f32, client_y: f32) -> Self {
        Self::new(EventKind::Click, client_x, client_y)
    }

    /// `touchend` event without client coordinates
    pub fn touch_end(changed_touches: impl IntoIterator<Item = TouchPoint>) -> Self {
        Self {
            kind: EventKind::TouchEnd,
            client_x: None,
            client_y: None,
            button: MouseButton::Left,
            modifiers: Modifiers::default(),
            changed_touches: changed_touches.into_iter().collect(),
            data: Props::new(),
            propagation_stopped: Cell::new(false),
        }
    }

    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.button = button;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Attach payload data forwarded to item callbacks
    pub fn with_data(mut self, data: Props) -> Self {
        self.data = data;
        self
    }

    /// Client position with missing axes left as `None`
    pub fn client_position(&self) -> (Option<f32>, Option<f32>) {
        (self.client_x, self.client_y)
    }

    /// Whether this event came from the secondary button or a ctrl-click
    ///
    /// Some browsers emit `click`/`mousedown` alongside `contextmenu` for the
    /// same gesture (Firefox on right click, Safari on ctrl + trackpad).
    pub fn is_secondary(&self) -> bool {
        self.button == MouseButton::Right || self.modifiers.ctrl
    }

    /// Stop the event from reaching window-level listeners
    pub fn stop_propagation(&self) {
        self.propagation_stopped.set(true);
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped.get()
    }
}

/// Keyboard event
#[derive(Clone, Debug)]
pub struct KeyboardEvent {
    pub kind: EventKind,
    pub key: Key,
    pub modifiers: Modifiers,
    propagation_stopped: Cell<bool>,
}

impl KeyboardEvent {
    /// `keydown` event for the given key
    pub fn key_down(key: Key) -> Self {
        Self {
            kind: EventKind::KeyDown,
            key,
            modifiers: Modifiers::default(),
            propagation_stopped: Cell::new(false),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn stop_propagation(&self) {
        self.propagation_stopped.set(true);
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped.get()
    }
}

/// Events delivered to window-level listeners
#[derive(Clone, Debug)]
pub enum WindowEvent {
    Pointer(PointerEvent),
    Keyboard(KeyboardEvent),
    /// Viewport was resized to the given inner size
    Resize(Size),
    /// Document scrolled
    Scroll,
}

impl WindowEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            WindowEvent::Pointer(e) => e.kind,
            WindowEvent::Keyboard(e) => e.kind,
            WindowEvent::Resize(_) => EventKind::Resize,
            WindowEvent::Scroll => EventKind::Scroll,
        }
    }

    pub fn is_propagation_stopped(&self) -> bool {
        match self {
            WindowEvent::Pointer(e) => e.is_propagation_stopped(),
            WindowEvent::Keyboard(e) => e.is_propagation_stopped(),
            WindowEvent::Resize(_) | WindowEvent::Scroll => false,
        }
    }
}

impl From<PointerEvent> for WindowEvent {
    fn from(event: PointerEvent) -> Self {
        WindowEvent::Pointer(event)
    }
}

impl From<KeyboardEvent> for WindowEvent {
    fn from(event: KeyboardEvent) -> Self {
        WindowEvent::Keyboard(event)
    }
}
