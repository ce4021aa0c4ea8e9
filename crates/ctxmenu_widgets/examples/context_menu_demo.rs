//! Context Menu Demo
//!
//! Drives two menus through a scripted session the way a host window would:
//! right-click opens a menu, a second right-click elsewhere swaps menus,
//! clicking an item runs its callback and Escape closes whatever is open.
//!
//! Features demonstrated:
//! - Menus mounted on a shared `MenuRoot`
//! - Trigger data flowing into item callbacks
//! - Disabled items computed from the trigger
//! - Viewport clamping and submenu side detection
//!
//! Run with: RUST_LOG=debug cargo run -p ctxmenu_widgets --example context_menu_demo

use std::cell::Cell;
use std::rc::Rc;

use anyhow::Result;
use ctxmenu_core::{Key, KeyboardEvent, PointerEvent, Rect, Size, Viewport};
use ctxmenu_widgets::prelude::*;
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"
offset_y = 1.0
dismiss_keys = ["Escape"]
submenu_arrow = "›"
"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let viewport = Rc::new(Cell::new(Size::new(900.0, 700.0)));
    let root = MenuRoot::with_config(viewport.clone(), MenuConfig::from_toml_str(CONFIG)?);

    let files = root.mount(
        "files",
        vec![
            Item::new("Open")
                .on_click(|ev| tracing::info!("open file {}", ev.props["file"]))
                .into(),
            Item::new("Rename")
                .disabled_when(|ev| ev.props.get("readonly") == Some(&json!(true)))
                .into(),
            MenuEntry::Separator,
            Submenu::new("Share")
                .item(Item::new("Email").on_click(|ev| {
                    tracing::info!("email {}", ev.props["file"]);
                }))
                .item(Item::new("Copy link"))
                .into(),
        ],
        Rc::new(Rect::new(0.0, 0.0, 220.0, 140.0)),
    );

    let canvas = context_menu("canvas")
        .item("Paste", |_| tracing::info!("paste"))
        .item_disabled("Undo")
        .mount(&root, Rc::new(Rect::new(0.0, 0.0, 180.0, 80.0)));

    // Right-click a read-only file near the bottom-right corner
    let Value::Object(data) = json!({ "file": "notes.txt", "readonly": true }) else {
        anyhow::bail!("trigger data must be an object");
    };
    let trigger = PointerEvent::context_menu(850.0, 650.0).with_data(data);
    root.show("files", &trigger);
    root.dispatch(&trigger.into());
    tracing::info!(
        "files visible={} at {:?} (viewport {:?})",
        files.is_visible(),
        files.render_position(),
        viewport.inner_size()
    );
    for entry in files.entries().iter() {
        match entry {
            MountedEntry::Item(item) => {
                tracing::info!("  {} disabled={}", item.label(), item.is_disabled())
            }
            MountedEntry::Separator => tracing::info!("  ----"),
            MountedEntry::Submenu(submenu) => {
                tracing::info!("  {} {}", submenu.label(), submenu.arrow())
            }
        }
    }

    // Hover the submenu row and let the host report where it was laid out
    files.hover_submenu(&[3], true);
    let placement = files.measure_submenu(&[3], &Rect::new(750.0, 600.0, 180.0, 60.0));
    tracing::info!("share submenu placement {:?}", placement);

    // Right-click the canvas: the file menu closes
    let trigger = PointerEvent::context_menu(100.0, 100.0);
    root.show("canvas", &trigger);
    root.dispatch(&trigger.into());
    tracing::info!(
        "files visible={} canvas visible={}",
        files.is_visible(),
        canvas.is_visible()
    );

    // Click "Paste" then let the click bubble to the window
    canvas.pointer_enter();
    let click = PointerEvent::click(110.0, 105.0);
    canvas.click_item(&[0], &click);
    root.dispatch(&click.into());
    tracing::info!("canvas visible after paste={}", canvas.is_visible());

    // Reopen and dismiss with Escape
    root.show("canvas", &PointerEvent::context_menu(300.0, 200.0));
    root.dispatch(&KeyboardEvent::key_down(Key::Escape).into());
    tracing::info!("canvas visible after escape={}", canvas.is_visible());

    Ok(())
}
