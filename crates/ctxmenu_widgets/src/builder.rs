//! Fluent construction of menus
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use ctxmenu_core::{PointerEvent, Rect, Size};
//! use ctxmenu_widgets::{context_menu, MenuRoot};
//!
//! let root = MenuRoot::new(Rc::new(Size::new(1024.0, 768.0)));
//! let menu = context_menu("editor")
//!     .item("Cut", |_| println!("Cut"))
//!     .item("Copy", |_| println!("Copy"))
//!     .separator()
//!     .item_disabled("Paste")
//!     .submenu("Share", |sub| sub.item("Email", |_| {}).item("Link", |_| {}))
//!     .mount(&root, Rc::new(Rect::new(0.0, 0.0, 180.0, 120.0)));
//!
//! root.show("editor", &PointerEvent::context_menu(40.0, 40.0));
//! assert!(menu.is_visible());
//! assert_eq!(menu.entries().len(), 5);
//! ```

use std::rc::Rc;

use ctxmenu_core::{Measure, MenuId};

use crate::disabled::ItemEvent;
use crate::entry::MenuEntry;
use crate::item::Item;
use crate::menu::Menu;
use crate::root::MenuRoot;
use crate::submenu::Submenu;

/// Builder for a top-level menu
#[derive(Debug)]
pub struct MenuBuilder {
    id: MenuId,
    entries: Vec<MenuEntry>,
}

impl MenuBuilder {
    pub fn new(id: impl Into<MenuId>) -> Self {
        Self {
            id: id.into(),
            entries: Vec::new(),
        }
    }

    /// Add a menu item
    pub fn item<F>(mut self, label: impl Into<String>, on_click: F) -> Self
    where
        F: Fn(&ItemEvent<'_>) + 'static,
    {
        self.entries.push(Item::new(label).on_click(on_click).into());
        self
    }

    /// Add a disabled menu item
    pub fn item_disabled(mut self, label: impl Into<String>) -> Self {
        self.entries.push(Item::new(label).disabled(true).into());
        self
    }

    /// Add a separator line
    pub fn separator(mut self) -> Self {
        self.entries.push(MenuEntry::Separator);
        self
    }

    /// Add a submenu
    pub fn submenu<F>(mut self, label: impl Into<String>, builder: F) -> Self
    where
        F: FnOnce(SubmenuBuilder) -> SubmenuBuilder,
    {
        let sub = builder(SubmenuBuilder::new(label));
        self.entries.push(sub.submenu.into());
        self
    }

    /// Add a raw menu item
    pub fn add_item(mut self, item: Item) -> Self {
        self.entries.push(item.into());
        self
    }

    /// Add a raw submenu
    pub fn add_submenu(mut self, submenu: Submenu) -> Self {
        self.entries.push(submenu.into());
        self
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Mount the menu on `root`
    pub fn mount(self, root: &MenuRoot, surface: Rc<dyn Measure>) -> Menu {
        Menu::mount(root, self.id, self.entries, surface)
    }
}

/// Builder for submenu entries
#[derive(Debug)]
pub struct SubmenuBuilder {
    submenu: Submenu,
}

impl SubmenuBuilder {
    fn new(label: impl Into<String>) -> Self {
        Self {
            submenu: Submenu::new(label),
        }
    }

    /// Add a menu item
    pub fn item<F>(mut self, label: impl Into<String>, on_click: F) -> Self
    where
        F: Fn(&ItemEvent<'_>) + 'static,
    {
        self.submenu = self.submenu.item(Item::new(label).on_click(on_click));
        self
    }

    /// Add a disabled menu item
    pub fn item_disabled(mut self, label: impl Into<String>) -> Self {
        self.submenu = self.submenu.item(Item::new(label).disabled(true));
        self
    }

    /// Add a separator
    pub fn separator(mut self) -> Self {
        self.submenu = self.submenu.separator();
        self
    }

    /// Add a nested submenu
    pub fn submenu<F>(mut self, label: impl Into<String>, builder: F) -> Self
    where
        F: FnOnce(SubmenuBuilder) -> SubmenuBuilder,
    {
        let nested = builder(SubmenuBuilder::new(label));
        self.submenu = self.submenu.submenu(nested.submenu);
        self
    }

    /// Render a custom arrow on the submenu row
    pub fn arrow(mut self, arrow: impl Into<String>) -> Self {
        self.submenu = self.submenu.arrow(arrow);
        self
    }

    /// Disable the whole submenu
    pub fn disabled(mut self) -> Self {
        self.submenu = self.submenu.disabled(true);
        self
    }
}

/// Create a menu builder
pub fn context_menu(id: impl Into<MenuId>) -> MenuBuilder {
    MenuBuilder::new(id)
}
