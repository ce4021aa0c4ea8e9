//! # ctxmenu widgets
//!
//! Headless context menus built on `ctxmenu_core` primitives.
//!
//! The host owns rendering and input. It mounts menus on a [`MenuRoot`],
//! forwards window-level events through [`MenuRoot::dispatch`] and draws
//! whatever [`Menu::entries`] and [`Menu::render_position`] report.
//!
//! - **Menu** - one open at a time, clamped to the viewport, closed by
//!   clicks, scrolls, resizes and Enter/Escape
//! - **Item** - actionable row with static or computed disabled state
//! - **Submenu** - nested row that expands on hover toward the side with room
//!
//! ## Example
//!
//! ```
//! use std::rc::Rc;
//! use ctxmenu_core::{PointerEvent, Rect, Size};
//! use ctxmenu_widgets::prelude::*;
//!
//! let root = MenuRoot::new(Rc::new(Size::new(800.0, 600.0)));
//! let menu = root.mount(
//!     "files",
//!     vec![
//!         Item::new("Open").on_click(|ev| println!("open {:?}", ev.props)).into(),
//!         MenuEntry::Separator,
//!         Item::new("Delete").disabled(true).into(),
//!     ],
//!     Rc::new(Rect::new(0.0, 0.0, 200.0, 90.0)),
//! );
//!
//! let trigger = PointerEvent::context_menu(780.0, 20.0);
//! root.show("files", &trigger);
//! root.dispatch(&trigger.into());
//!
//! assert!(menu.is_visible());
//! assert_eq!(menu.position().x, 600.0);
//! ```

pub mod builder;
pub mod config;
pub mod disabled;
pub mod entry;
pub mod error;
pub mod item;
pub mod menu;
pub mod position;
pub mod root;
pub mod submenu;

pub use builder::{context_menu, MenuBuilder, SubmenuBuilder};
pub use config::MenuConfig;
pub use disabled::{Disabled, DisabledPredicate, ItemEvent};
pub use entry::{MenuEntry, MountedEntry};
pub use error::{MenuError, Result};
pub use item::{ClickHandler, Item, MountedItem};
pub use menu::{menu_events, Menu, MenuState};
pub use position::{
    clamp_to_viewport, resolve_submenu_side, resolve_trigger_position, HorizontalSide,
    SubmenuPlacement, VerticalSide,
};
pub use root::MenuRoot;
pub use submenu::{MountedSubmenu, Submenu};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::builder::context_menu;
    pub use crate::{
        Disabled, Item, ItemEvent, Menu, MenuConfig, MenuEntry, MenuRoot, MenuState,
        MountedEntry, Submenu,
    };
}
