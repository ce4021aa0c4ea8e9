//! Context menu instances
//!
//! A [`Menu`] is mounted once and then toggles between [`MenuState::Hidden`]
//! and [`MenuState::Visible`] in response to notifications from the
//! [`VisibilityCoordinator`] and to window events.
//!
//! # Lifecycle
//!
//! ```text
//!            Show(id)                      HideAll / dismissal / drop
//! Hidden ─────────────────▶ Visible ─────────────────────────────▶ Hidden
//!          publish HideAll,
//!          capture trigger,
//!          clamp to viewport,
//!          attach dismissal listeners
//! ```
//!
//! Dismissal listeners live on the window ([`EventDispatcher`]) only while
//! the menu is visible: `resize`, `contextmenu`, `mousedown`, `click`,
//! `scroll` and `keydown` (Enter/Escape by default). The `mousedown` listener
//! is detached while the pointer is over the menu body.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use ctxmenu_core::{
    Channel, EventDispatcher, EventKind, ListenerGuard, Measure, MenuId, Point, PointerEvent,
    StateTransitions, Subscription, TriggerEvent, Viewport, VisibilityCoordinator, WindowEvent,
};
use smallvec::SmallVec;

use crate::config::MenuConfig;
use crate::entry::{entry_at, entry_at_mut, mount_entries, MenuEntry, MountedEntry};
use crate::position::{clamp_to_viewport, resolve_trigger_position, SubmenuPlacement};
use crate::root::MenuRoot;

// =============================================================================
// MenuState - FSM for menu visibility
// =============================================================================

/// Event codes for the menu state machine
pub mod menu_events {
    /// Open the menu (Hidden -> Visible)
    pub const SHOW: u32 = 30001;
    /// Close the menu (Visible -> Hidden)
    pub const HIDE: u32 = 30002;
}

/// Visibility of a menu
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum MenuState {
    #[default]
    Hidden,
    Visible,
}

impl MenuState {
    pub fn is_visible(&self) -> bool {
        matches!(self, MenuState::Visible)
    }
}

impl StateTransitions for MenuState {
    fn on_event(&self, event: u32) -> Option<Self> {
        use menu_events::*;
        use MenuState::*;

        match (self, event) {
            (Hidden, SHOW) => Some(Visible),
            (Visible, HIDE) => Some(Hidden),
            _ => None,
        }
    }
}

// =============================================================================
// Menu
// =============================================================================

#[derive(Default)]
struct Visibility {
    state: MenuState,
    /// Anchor after clamping
    position: Point,
    /// Event that last opened the menu
    trigger: Option<Rc<TriggerEvent>>,
    entries: Vec<MountedEntry>,
    /// Pointer is over the menu body
    hovered: bool,
}

struct DismissListeners {
    window: SmallVec<[ListenerGuard; 5]>,
    /// Detached while hovered
    mouse_down: Option<ListenerGuard>,
}

struct MenuInner {
    id: MenuId,
    config: Rc<MenuConfig>,
    coordinator: VisibilityCoordinator,
    window: EventDispatcher,
    viewport: Rc<dyn Viewport>,
    surface: Rc<dyn Measure>,
    entries: Vec<MenuEntry>,
    visibility: RefCell<Visibility>,
    dismiss: RefCell<Option<DismissListeners>>,
}

impl MenuInner {
    fn show(self: &Rc<Self>, trigger: &TriggerEvent) {
        // The opening event must not reach the listeners attached below
        trigger.stop_propagation();
        self.coordinator.hide_all();

        let trigger = Rc::new(trigger.clone());
        let anchor = resolve_trigger_position(&trigger);
        let entries = mount_entries(&self.entries, &trigger, &self.config.submenu_arrow);

        {
            let mut vis = self.visibility.borrow_mut();
            let Some(next) = vis.state.on_event(menu_events::SHOW) else {
                tracing::warn!("menu {} still visible after hide-all, ignoring show", self.id);
                return;
            };
            vis.state = next;
            vis.position = anchor;
            vis.trigger = Some(trigger);
            vis.entries = entries;
            vis.hovered = false;
        }

        self.reposition();
        self.bind_dismiss_listeners();

        tracing::debug!(
            "menu {} shown at {:?}",
            self.id,
            self.visibility.borrow().position
        );
    }

    /// Clamp the anchor against the measured element and current viewport
    fn reposition(&self) {
        let viewport = self.viewport.inner_size();
        let size = self.surface.offset_size();
        let mut vis = self.visibility.borrow_mut();
        vis.position = clamp_to_viewport(vis.position, size, viewport);
    }

    fn hide(&self) {
        let listeners = self.dismiss.borrow_mut().take();
        drop(listeners);

        let mut vis = self.visibility.borrow_mut();
        if let Some(next) = vis.state.on_event(menu_events::HIDE) {
            vis.state = next;
            vis.entries.clear();
            vis.hovered = false;
            tracing::debug!("menu {} hidden", self.id);
        }
    }

    fn handle_window_event(&self, event: &WindowEvent) {
        match event {
            WindowEvent::Keyboard(key) => {
                if self.config.is_dismiss_key(&key.key) {
                    self.hide();
                }
            }
            WindowEvent::Pointer(pointer) => {
                // The gesture that opened the menu also fires mousedown/click
                if pointer.is_secondary() && pointer.kind != EventKind::ContextMenu {
                    tracing::trace!("menu {} ignores secondary {:?}", self.id, pointer.kind);
                    return;
                }
                self.hide();
            }
            WindowEvent::Resize(_) | WindowEvent::Scroll => self.hide(),
        }
    }

    fn dismiss_listener(self: &Rc<Self>) -> impl Fn(&WindowEvent) + 'static {
        let menu: Weak<MenuInner> = Rc::downgrade(self);
        move |event| {
            if let Some(menu) = menu.upgrade() {
                menu.handle_window_event(event);
            }
        }
    }

    fn bind_dismiss_listeners(self: &Rc<Self>) {
        let mut kinds: SmallVec<[EventKind; 5]> =
            SmallVec::from_slice(&[EventKind::ContextMenu, EventKind::Click, EventKind::KeyDown]);
        if self.config.dismiss_on_resize {
            kinds.push(EventKind::Resize);
        }
        if self.config.dismiss_on_scroll {
            kinds.push(EventKind::Scroll);
        }

        let window = kinds
            .into_iter()
            .map(|kind| self.window.add_listener(kind, self.dismiss_listener()))
            .collect();

        let hovered = self.visibility.borrow().hovered;
        let mouse_down = (!hovered).then(|| self.attach_mouse_down());

        *self.dismiss.borrow_mut() = Some(DismissListeners { window, mouse_down });
    }

    fn attach_mouse_down(self: &Rc<Self>) -> ListenerGuard {
        self.window.add_listener(EventKind::MouseDown, self.dismiss_listener())
    }

    fn pointer_enter(&self) {
        {
            let mut vis = self.visibility.borrow_mut();
            if !vis.state.is_visible() {
                return;
            }
            vis.hovered = true;
        }

        let detached = self
            .dismiss
            .borrow_mut()
            .as_mut()
            .and_then(|listeners| listeners.mouse_down.take());
        drop(detached);
    }

    fn pointer_leave(self: &Rc<Self>) {
        {
            let mut vis = self.visibility.borrow_mut();
            if !vis.state.is_visible() {
                return;
            }
            vis.hovered = false;
        }

        let detached = self
            .dismiss
            .borrow()
            .as_ref()
            .is_some_and(|listeners| listeners.mouse_down.is_none());
        if detached {
            let guard = self.attach_mouse_down();
            if let Some(listeners) = self.dismiss.borrow_mut().as_mut() {
                listeners.mouse_down = Some(guard);
            }
        }
    }
}

/// A mounted context menu
///
/// Dropping the menu unsubscribes it from the coordinator and detaches any
/// window listeners it holds.
pub struct Menu {
    inner: Rc<MenuInner>,
    subscriptions: SmallVec<[Subscription; 2]>,
}

impl Menu {
    pub(crate) fn mount(
        root: &MenuRoot,
        id: MenuId,
        entries: Vec<MenuEntry>,
        surface: Rc<dyn Measure>,
    ) -> Self {
        let coordinator = root.coordinator().clone();
        let show_channel = Channel::Show(id.clone());

        if coordinator.subscriber_count(&show_channel) > 0 {
            tracing::warn!("menu id {} is already mounted", id);
        }

        let inner = Rc::new(MenuInner {
            id,
            config: root.shared_config(),
            coordinator: coordinator.clone(),
            window: root.window().clone(),
            viewport: root.viewport(),
            surface,
            entries,
            visibility: RefCell::new(Visibility::default()),
            dismiss: RefCell::new(None),
        });

        let on_show = Rc::downgrade(&inner);
        let on_hide = Rc::downgrade(&inner);
        let mut subscriptions = SmallVec::new();
        subscriptions.push(coordinator.subscribe(show_channel, move |trigger| {
            if let (Some(menu), Some(trigger)) = (on_show.upgrade(), trigger) {
                menu.show(trigger);
            }
        }));
        subscriptions.push(coordinator.subscribe(Channel::HideAll, move |_| {
            if let Some(menu) = on_hide.upgrade() {
                menu.hide();
            }
        }));

        tracing::debug!("mounted menu {}", inner.id);
        Self {
            inner,
            subscriptions,
        }
    }

    pub fn id(&self) -> &MenuId {
        &self.inner.id
    }

    pub fn state(&self) -> MenuState {
        self.inner.visibility.borrow().state
    }

    pub fn is_visible(&self) -> bool {
        self.state().is_visible()
    }

    /// Anchor after clamping to the viewport
    pub fn position(&self) -> Point {
        self.inner.visibility.borrow().position
    }

    /// Where the host should draw the menu's top-left corner
    pub fn render_position(&self) -> Point {
        self.position().offset(0.0, self.inner.config.offset_y)
    }

    /// Event that last opened the menu
    pub fn trigger(&self) -> Option<Rc<TriggerEvent>> {
        self.inner.visibility.borrow().trigger.clone()
    }

    /// Rows mounted for the current trigger; empty while hidden
    pub fn entries(&self) -> Ref<'_, [MountedEntry]> {
        Ref::map(self.inner.visibility.borrow(), |vis| vis.entries.as_slice())
    }

    /// Row at an index path through nested submenus
    pub fn entry(&self, path: &[usize]) -> Option<Ref<'_, MountedEntry>> {
        Ref::filter_map(self.inner.visibility.borrow(), |vis| {
            entry_at(&vis.entries, path)
        })
        .ok()
    }

    /// Route a click on the row at `path`
    ///
    /// Items run their click handling; submenu label rows swallow the click.
    /// Afterwards the host forwards `click` to the window, where it closes
    /// the menu unless propagation was stopped. Returns whether an item
    /// callback ran.
    pub fn click_item(&self, path: &[usize], click: &PointerEvent) -> bool {
        let item = {
            let vis = self.inner.visibility.borrow();
            if !vis.state.is_visible() {
                return false;
            }
            match entry_at(&vis.entries, path) {
                Some(MountedEntry::Item(item)) => item.clone(),
                Some(MountedEntry::Submenu(submenu)) => {
                    submenu.handle_label_click(click);
                    return false;
                }
                _ => return false,
            }
        };

        // No borrow held: callbacks may open or close menus
        item.handle_click(click)
    }

    /// Pointer entered or left the row of the submenu at `path`
    pub fn hover_submenu(&self, path: &[usize], hovered: bool) {
        let mut vis = self.inner.visibility.borrow_mut();
        if let Some(MountedEntry::Submenu(submenu)) = entry_at_mut(&mut vis.entries, path) {
            submenu.set_hovered(hovered);
        }
    }

    /// Resolve the expansion side of the submenu at `path` once it is measurable
    pub fn measure_submenu(
        &self,
        path: &[usize],
        element: &dyn Measure,
    ) -> Option<SubmenuPlacement> {
        let viewport = self.inner.viewport.inner_size();
        let mut vis = self.inner.visibility.borrow_mut();
        match entry_at_mut(&mut vis.entries, path) {
            Some(MountedEntry::Submenu(submenu)) => Some(submenu.measure(element, viewport)),
            _ => None,
        }
    }

    /// Pointer entered the menu body
    pub fn pointer_enter(&self) {
        self.inner.pointer_enter();
    }

    /// Pointer left the menu body
    pub fn pointer_leave(&self) {
        self.inner.pointer_leave();
    }

    /// Close the menu
    pub fn hide(&self) {
        self.inner.hide();
    }
}

impl fmt::Debug for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vis = self.inner.visibility.borrow();
        f.debug_struct("Menu")
            .field("id", &self.inner.id)
            .field("state", &vis.state)
            .field("position", &vis.position)
            .field("entries", &vis.entries.len())
            .finish()
    }
}

impl Drop for Menu {
    fn drop(&mut self) {
        for subscription in &self.subscriptions {
            subscription.unsubscribe();
        }
        self.inner.hide();
        tracing::debug!("unmounted menu {}", self.inner.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;
    use crate::submenu::Submenu;
    use crate::position::HorizontalSide;
    use ctxmenu_core::{Key, KeyboardEvent, Modifiers, MouseButton, Rect, Size};
    use serde_json::{json, Value};
    use std::cell::Cell;

    fn root() -> MenuRoot {
        MenuRoot::new(Rc::new(Size::new(800.0, 600.0)))
    }

    fn surface(width: f32, height: f32) -> Rc<dyn Measure> {
        Rc::new(Rect::new(0.0, 0.0, width, height))
    }

    fn mount(root: &MenuRoot, id: &str, entries: Vec<MenuEntry>) -> Menu {
        Menu::mount(root, id.into(), entries, surface(200.0, 100.0))
    }

    fn open(root: &MenuRoot, id: &str, x: f32, y: f32) {
        let event = PointerEvent::context_menu(x, y);
        root.show(id, &event);
        // The host keeps bubbling the opening event up to the window
        root.dispatch(&event.into());
    }

    #[test]
    fn test_state_transitions() {
        assert_eq!(MenuState::Hidden.on_event(menu_events::SHOW), Some(MenuState::Visible));
        assert_eq!(MenuState::Visible.on_event(menu_events::HIDE), Some(MenuState::Hidden));
        assert_eq!(MenuState::Hidden.on_event(menu_events::HIDE), None);
        assert_eq!(MenuState::Visible.on_event(menu_events::SHOW), None);
    }

    #[test]
    fn test_show_fits_inside_viewport() {
        let root = root();
        let menu = mount(&root, "ctx1", vec![]);
        assert!(!menu.is_visible());

        open(&root, "ctx1", 500.0, 500.0);
        assert!(menu.is_visible());
        assert_eq!(menu.position(), Point::new(500.0, 500.0));
        assert_eq!(menu.render_position(), Point::new(500.0, 501.0));
    }

    #[test]
    fn test_show_clamps_by_overflow() {
        let root = root();
        let menu = Menu::mount(&root, "ctx1".into(), vec![], surface(400.0, 200.0));

        open(&root, "ctx1", 500.0, 500.0);
        assert!(menu.is_visible());
        assert_eq!(menu.position(), Point::new(400.0, 400.0));
    }

    #[test]
    fn test_showing_one_menu_hides_the_other() {
        let root = root();
        let a = mount(&root, "a", vec![]);
        let b = mount(&root, "b", vec![]);

        open(&root, "a", 10.0, 10.0);
        assert!(a.is_visible());
        assert!(!b.is_visible());

        open(&root, "b", 20.0, 20.0);
        assert!(!a.is_visible());
        assert!(b.is_visible());

        open(&root, "a", 30.0, 30.0);
        assert!(a.is_visible());
        assert!(!b.is_visible());
        assert_eq!(a.position(), Point::new(30.0, 30.0));
    }

    #[test]
    fn test_reopen_while_visible_moves_menu() {
        let root = root();
        let menu = mount(&root, "m", vec![]);

        open(&root, "m", 10.0, 10.0);
        open(&root, "m", 50.0, 60.0);
        assert!(menu.is_visible());
        assert_eq!(menu.position(), Point::new(50.0, 60.0));
        // No listeners leaked from the first opening
        assert_eq!(root.window().listener_count(EventKind::Click), 1);
        assert_eq!(root.window().listener_count(EventKind::MouseDown), 1);
    }

    #[test]
    fn test_opening_event_does_not_dismiss() {
        let root = root();
        let menu = mount(&root, "m", vec![]);

        let event = PointerEvent::context_menu(100.0, 100.0);
        root.show("m", &event);
        assert!(event.is_propagation_stopped());
        assert!(!root.dispatch(&event.into()));
        assert!(menu.is_visible());
    }

    #[test]
    fn test_right_mousedown_keeps_menu_then_left_click_closes() {
        let root = root();
        let menu = mount(&root, "m", vec![]);
        open(&root, "m", 100.0, 100.0);

        root.dispatch(&PointerEvent::mouse_down(100.0, 100.0, MouseButton::Right).into());
        assert!(menu.is_visible());

        root.dispatch(&PointerEvent::click(100.0, 100.0).with_button(MouseButton::Right).into());
        assert!(menu.is_visible());

        root.dispatch(&PointerEvent::click(700.0, 20.0).into());
        assert!(!menu.is_visible());
    }

    #[test]
    fn test_host_window_listener_stopping_click_still_dismisses() {
        let root = root();
        let _host = root.window().add_listener(EventKind::Click, |event| {
            if let WindowEvent::Pointer(pointer) = event {
                pointer.stop_propagation();
            }
        });
        let menu = mount(&root, "m", vec![]);
        open(&root, "m", 100.0, 100.0);

        root.dispatch(&PointerEvent::click(500.0, 500.0).into());
        assert!(!menu.is_visible());
    }

    #[test]
    fn test_infinite_trigger_is_clamped_into_viewport() {
        let root = root();
        let menu = mount(&root, "m", vec![]);

        open(&root, "m", f32::INFINITY, 10.0);
        assert!(menu.is_visible());
        assert_eq!(menu.position(), Point::new(0.0, 10.0));
    }

    #[test]
    fn test_ctrl_click_does_not_dismiss() {
        let root = root();
        let menu = mount(&root, "m", vec![]);
        open(&root, "m", 100.0, 100.0);

        root.dispatch(&PointerEvent::click(5.0, 5.0).with_modifiers(Modifiers::CTRL).into());
        assert!(menu.is_visible());
    }

    #[test]
    fn test_another_contextmenu_dismisses() {
        let root = root();
        let menu = mount(&root, "m", vec![]);
        open(&root, "m", 100.0, 100.0);

        root.dispatch(&PointerEvent::context_menu(300.0, 300.0).into());
        assert!(!menu.is_visible());
    }

    #[test]
    fn test_window_dismissal_triggers() {
        let triggers: Vec<WindowEvent> = vec![
            WindowEvent::Resize(Size::new(640.0, 480.0)),
            WindowEvent::Scroll,
            PointerEvent::mouse_down(1.0, 1.0, MouseButton::Left).into(),
            KeyboardEvent::key_down(Key::Escape).into(),
            KeyboardEvent::key_down(Key::Enter).into(),
        ];

        for event in triggers {
            let root = root();
            let menu = mount(&root, "m", vec![]);
            open(&root, "m", 100.0, 100.0);

            root.dispatch(&event);
            assert!(!menu.is_visible(), "{:?} should dismiss", event.kind());
        }
    }

    #[test]
    fn test_other_keys_do_not_dismiss() {
        let root = root();
        let menu = mount(&root, "m", vec![]);
        open(&root, "m", 100.0, 100.0);

        root.dispatch(&KeyboardEvent::key_down(Key::Char('a')).into());
        root.dispatch(&KeyboardEvent::key_down(Key::Down).into());
        assert!(menu.is_visible());
    }

    #[test]
    fn test_listeners_detached_when_hidden() {
        let root = root();
        let menu = mount(&root, "m", vec![]);
        let window = root.window().clone();

        open(&root, "m", 100.0, 100.0);
        for kind in [
            EventKind::Resize,
            EventKind::ContextMenu,
            EventKind::MouseDown,
            EventKind::Click,
            EventKind::Scroll,
            EventKind::KeyDown,
        ] {
            assert_eq!(window.listener_count(kind), 1, "{:?}", kind);
        }

        root.hide_all();
        assert!(!menu.is_visible());
        for kind in [
            EventKind::Resize,
            EventKind::MouseDown,
            EventKind::Click,
            EventKind::KeyDown,
        ] {
            assert_eq!(window.listener_count(kind), 0, "{:?}", kind);
        }
    }

    #[test]
    fn test_hover_detaches_mousedown_only() {
        let root = root();
        let menu = mount(&root, "m", vec![]);
        open(&root, "m", 100.0, 100.0);

        menu.pointer_enter();
        assert_eq!(root.window().listener_count(EventKind::MouseDown), 0);
        assert_eq!(root.window().listener_count(EventKind::Click), 1);

        root.dispatch(&PointerEvent::mouse_down(120.0, 110.0, MouseButton::Left).into());
        assert!(menu.is_visible());

        menu.pointer_leave();
        assert_eq!(root.window().listener_count(EventKind::MouseDown), 1);
        root.dispatch(&PointerEvent::mouse_down(700.0, 500.0, MouseButton::Left).into());
        assert!(!menu.is_visible());
    }

    #[test]
    fn test_hover_while_hidden_is_ignored() {
        let root = root();
        let menu = mount(&root, "m", vec![]);

        menu.pointer_enter();
        menu.pointer_leave();
        assert_eq!(root.window().listener_count(EventKind::MouseDown), 0);
    }

    #[test]
    fn test_enabled_item_click_closes_menu() {
        let root = root();
        let clicked = Rc::new(Cell::new(0));
        let clicked_in_item = clicked.clone();
        let menu = mount(
            &root,
            "m",
            vec![Item::new("Copy")
                .on_click(move |_| clicked_in_item.set(clicked_in_item.get() + 1))
                .into()],
        );
        open(&root, "m", 100.0, 100.0);
        menu.pointer_enter();

        let click = PointerEvent::click(110.0, 110.0);
        assert!(menu.click_item(&[0], &click));
        root.dispatch(&click.into());

        assert_eq!(clicked.get(), 1);
        assert!(!menu.is_visible());
    }

    #[test]
    fn test_disabled_item_click_keeps_menu_open() {
        let root = root();
        let clicked = Rc::new(Cell::new(0));
        let clicked_in_item = clicked.clone();
        let menu = mount(
            &root,
            "m",
            vec![Item::new("Delete")
                .disabled(true)
                .on_click(move |_| clicked_in_item.set(clicked_in_item.get() + 1))
                .into()],
        );
        open(&root, "m", 100.0, 100.0);
        menu.pointer_enter();

        let click = PointerEvent::click(110.0, 110.0);
        assert!(!menu.click_item(&[0], &click));
        assert!(click.is_propagation_stopped());
        root.dispatch(&click.into());

        assert_eq!(clicked.get(), 0);
        assert!(menu.is_visible());
    }

    #[test]
    fn test_dont_close_on_click_keeps_menu_open() {
        let root = root();
        let menu = mount(
            &root,
            "m",
            vec![Item::new("Pin").dont_close_on_click(true).into()],
        );
        open(&root, "m", 100.0, 100.0);

        let click = PointerEvent::click(110.0, 110.0);
        assert!(menu.click_item(&[0], &click));
        root.dispatch(&click.into());
        assert!(menu.is_visible());
    }

    #[test]
    fn test_item_receives_trigger_data() {
        let root = root();
        let seen: Rc<RefCell<Option<Value>>> = Rc::new(RefCell::new(None));
        let seen_in_item = seen.clone();
        let menu = mount(
            &root,
            "rows",
            vec![Item::new("Inspect")
                .on_click(move |ev| *seen_in_item.borrow_mut() = ev.props.get("row").cloned())
                .into()],
        );

        let Value::Object(data) = json!({ "row": 12 }) else {
            unreachable!()
        };
        root.show("rows", &PointerEvent::context_menu(40.0, 40.0).with_data(data));
        menu.click_item(&[0], &PointerEvent::click(45.0, 45.0));

        assert_eq!(*seen.borrow(), Some(json!(12)));
    }

    #[test]
    fn test_item_callback_may_open_another_menu() {
        let root = root();
        let opener = root.clone();
        let first = mount(
            &root,
            "first",
            vec![Item::new("Open second")
                .on_click(move |_| opener.show("second", &PointerEvent::context_menu(5.0, 5.0)))
                .into()],
        );
        let second = mount(&root, "second", vec![]);

        open(&root, "first", 100.0, 100.0);
        first.click_item(&[0], &PointerEvent::click(110.0, 110.0));

        assert!(!first.is_visible());
        assert!(second.is_visible());
    }

    #[test]
    fn test_submenu_label_click_and_placement() {
        let root = root();
        let menu = mount(
            &root,
            "m",
            vec![
                Item::new("Open").into(),
                MenuEntry::Separator,
                Submenu::new("Share").item(Item::new("Email")).into(),
            ],
        );
        open(&root, "m", 100.0, 100.0);

        let click = PointerEvent::click(110.0, 130.0);
        assert!(!menu.click_item(&[2], &click));
        assert!(click.is_propagation_stopped());
        root.dispatch(&click.into());
        assert!(menu.is_visible());

        menu.hover_submenu(&[2], true);
        assert!(menu
            .entry(&[2])
            .is_some_and(|entry| entry.as_submenu().is_some_and(|s| s.is_expanded())));

        let bounds = Rect::new(700.0, 120.0, 180.0, 60.0);
        let placement = menu.measure_submenu(&[2], &bounds);
        assert_eq!(placement.map(|p| p.horizontal), Some(HorizontalSide::End));
        assert_eq!(menu.measure_submenu(&[0], &bounds), None);
    }

    #[test]
    fn test_nested_item_click_closes_menu() {
        let root = root();
        let clicked = Rc::new(Cell::new(false));
        let clicked_in_item = clicked.clone();
        let menu = mount(
            &root,
            "m",
            vec![Submenu::new("Share")
                .item(Item::new("Email").on_click(move |_| clicked_in_item.set(true)))
                .into()],
        );
        open(&root, "m", 100.0, 100.0);
        menu.pointer_enter();
        menu.hover_submenu(&[0], true);

        let click = PointerEvent::click(320.0, 110.0);
        assert!(menu.click_item(&[0, 0], &click));
        root.dispatch(&click.into());

        assert!(clicked.get());
        assert!(!menu.is_visible());
    }

    #[test]
    fn test_entries_cleared_when_hidden() {
        let root = root();
        let menu = mount(&root, "m", vec![Item::new("Copy").into()]);
        assert!(menu.entries().is_empty());

        open(&root, "m", 10.0, 10.0);
        assert_eq!(menu.entries().len(), 1);

        menu.hide();
        assert!(menu.entries().is_empty());
        assert!(!menu.click_item(&[0], &PointerEvent::click(0.0, 0.0)));
    }

    #[test]
    fn test_drop_unsubscribes_and_detaches() {
        let root = root();
        let menu = mount(&root, "m", vec![]);
        open(&root, "m", 100.0, 100.0);
        drop(menu);

        assert_eq!(root.coordinator().subscriber_count(&Channel::show("m")), 0);
        assert_eq!(root.coordinator().subscriber_count(&Channel::HideAll), 0);
        assert_eq!(root.window().listener_count(EventKind::Click), 0);

        // Nothing left to call back into
        open(&root, "m", 100.0, 100.0);
        root.dispatch(&PointerEvent::click(0.0, 0.0).into());
    }

    #[test]
    fn test_viewport_resize_is_used_on_next_show() {
        let viewport = Rc::new(Cell::new(Size::new(800.0, 600.0)));
        let root = MenuRoot::new(viewport.clone());
        let menu = Menu::mount(&root, "m".into(), vec![], surface(200.0, 100.0));

        viewport.set(Size::new(400.0, 300.0));
        root.dispatch(&WindowEvent::Resize(viewport.get()));
        open(&root, "m", 350.0, 250.0);

        assert_eq!(menu.position(), Point::new(200.0, 200.0));
    }
}
