//! Per-window menu context
//!
//! [`MenuRoot`] bundles what every menu in one window shares: the visibility
//! coordinator, the window-level event dispatcher, the viewport and the
//! [`MenuConfig`]. It is cheap to clone and is usually created once by the
//! host alongside its window.

use std::fmt;
use std::rc::Rc;

use ctxmenu_core::{
    EventDispatcher, Measure, MenuId, Size, TriggerEvent, Viewport, VisibilityCoordinator,
    WindowEvent,
};

use crate::builder::MenuBuilder;
use crate::config::MenuConfig;
use crate::entry::MenuEntry;
use crate::menu::Menu;

#[derive(Clone)]
pub struct MenuRoot {
    coordinator: VisibilityCoordinator,
    window: EventDispatcher,
    viewport: Rc<dyn Viewport>,
    config: Rc<MenuConfig>,
}

impl MenuRoot {
    /// Create a root with the default config
    pub fn new(viewport: Rc<dyn Viewport>) -> Self {
        Self::with_config(viewport, MenuConfig::default())
    }

    pub fn with_config(viewport: Rc<dyn Viewport>, config: MenuConfig) -> Self {
        Self {
            coordinator: VisibilityCoordinator::new(),
            window: EventDispatcher::new(),
            viewport,
            config: Rc::new(config),
        }
    }

    pub fn coordinator(&self) -> &VisibilityCoordinator {
        &self.coordinator
    }

    /// Dispatcher the host feeds window-level events into
    pub fn window(&self) -> &EventDispatcher {
        &self.window
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    pub(crate) fn shared_config(&self) -> Rc<MenuConfig> {
        Rc::clone(&self.config)
    }

    pub(crate) fn viewport(&self) -> Rc<dyn Viewport> {
        Rc::clone(&self.viewport)
    }

    pub fn viewport_size(&self) -> Size {
        self.viewport.inner_size()
    }

    /// Open the menu mounted under `id` at the trigger's position
    ///
    /// Any other visible menu closes first. Unknown ids are a no-op.
    pub fn show(&self, id: impl Into<MenuId>, trigger: &TriggerEvent) {
        self.coordinator.show(id, trigger);
    }

    /// Close every visible menu
    pub fn hide_all(&self) {
        self.coordinator.hide_all();
    }

    /// Forward a window-level event to the attached listeners
    pub fn dispatch(&self, event: &WindowEvent) -> bool {
        self.window.dispatch(event)
    }

    /// Mount a menu under `id`
    ///
    /// `surface` measures the rendered menu element and is read each time
    /// the menu opens.
    pub fn mount(
        &self,
        id: impl Into<MenuId>,
        entries: Vec<MenuEntry>,
        surface: Rc<dyn Measure>,
    ) -> Menu {
        Menu::mount(self, id.into(), entries, surface)
    }

    /// Start building a menu mounted under `id`
    pub fn menu(&self, id: impl Into<MenuId>) -> MenuBuilder {
        MenuBuilder::new(id)
    }
}

impl fmt::Debug for MenuRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuRoot")
            .field("coordinator", &self.coordinator)
            .field("window", &self.window)
            .field("viewport", &self.viewport.inner_size())
            .field("config", &self.config)
            .finish()
    }
}
