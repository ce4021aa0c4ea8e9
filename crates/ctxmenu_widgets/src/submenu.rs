//! Nested menus anchored to a parent row
//!
//! Submenus never talk to the visibility coordinator. They exist while their
//! parent menu is visible and expand while the pointer hovers their row.
//! Which side they expand toward is decided once, the first time the host
//! measures them, and is not revisited on resize.

use std::fmt;
use std::rc::Rc;

use ctxmenu_core::{Measure, PointerEvent, Size, TriggerEvent};

use crate::disabled::{Disabled, ItemEvent};
use crate::entry::{mount_entries, MenuEntry, MountedEntry};
use crate::item::Item;
use crate::position::{resolve_submenu_side, SubmenuPlacement};

/// A submenu declaration
#[derive(Clone)]
pub struct Submenu {
    label: String,
    /// Custom arrow; `None` uses the configured default
    arrow: Option<String>,
    disabled: Disabled,
    entries: Vec<MenuEntry>,
}

impl fmt::Debug for Submenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Submenu")
            .field("label", &self.label)
            .field("arrow", &self.arrow)
            .field("disabled", &self.disabled)
            .field("entries", &self.entries.len())
            .finish()
    }
}

impl Submenu {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            arrow: None,
            disabled: Disabled::default(),
            entries: Vec::new(),
        }
    }

    /// Render a custom arrow instead of the default
    pub fn arrow(mut self, arrow: impl Into<String>) -> Self {
        self.arrow = Some(arrow.into());
        self
    }

    pub fn disabled(mut self, disabled: impl Into<Disabled>) -> Self {
        self.disabled = disabled.into();
        self
    }

    pub fn disabled_when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&ItemEvent<'_>) -> bool + 'static,
    {
        self.disabled = Disabled::when(predicate);
        self
    }

    /// Add an item
    pub fn item(mut self, item: Item) -> Self {
        self.entries.push(MenuEntry::Item(item));
        self
    }

    /// Add a separator
    pub fn separator(mut self) -> Self {
        self.entries.push(MenuEntry::Separator);
        self
    }

    /// Add a nested submenu
    pub fn submenu(mut self, submenu: Submenu) -> Self {
        self.entries.push(MenuEntry::Submenu(submenu));
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub(crate) fn mount(&self, trigger: &Rc<TriggerEvent>, default_arrow: &str) -> MountedSubmenu {
        let is_disabled = self.disabled.resolve(&ItemEvent {
            event: trigger,
            props: &trigger.data,
        });

        MountedSubmenu {
            label: self.label.clone(),
            arrow: self
                .arrow
                .clone()
                .unwrap_or_else(|| default_arrow.to_string()),
            is_disabled,
            entries: mount_entries(&self.entries, trigger, default_arrow),
            placement: None,
            expanded: false,
        }
    }
}

/// A submenu instantiated for one opening of its parent menu
#[derive(Clone, Debug)]
pub struct MountedSubmenu {
    label: String,
    arrow: String,
    is_disabled: bool,
    entries: Vec<MountedEntry>,
    placement: Option<SubmenuPlacement>,
    expanded: bool,
}

impl MountedSubmenu {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn arrow(&self) -> &str {
        &self.arrow
    }

    pub fn is_disabled(&self) -> bool {
        self.is_disabled
    }

    pub fn entries(&self) -> &[MountedEntry] {
        &self.entries
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [MountedEntry] {
        &mut self.entries
    }

    /// Whether the nested list is currently shown
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Pointer entered or left the submenu row
    pub fn set_hovered(&mut self, hovered: bool) {
        self.expanded = hovered && !self.is_disabled;
        if !self.expanded {
            for entry in &mut self.entries {
                if let MountedEntry::Submenu(nested) = entry {
                    nested.set_hovered(false);
                }
            }
        }
    }

    /// Clicks on the label row never reach the parent menu
    pub fn handle_label_click(&self, click: &PointerEvent) {
        click.stop_propagation();
    }

    /// Resolve the expansion side from the mounted submenu's bounds
    ///
    /// Only the first call measures. Later calls return the stored placement.
    pub fn measure(&mut self, element: &dyn Measure, viewport: Size) -> SubmenuPlacement {
        if let Some(placement) = self.placement {
            return placement;
        }

        let placement = resolve_submenu_side(element.bounding_rect(), viewport);
        tracing::debug!("submenu {:?} placed {:?}", self.label, placement);
        self.placement = Some(placement);
        placement
    }

    /// Current placement; the default side until measured
    pub fn placement(&self) -> SubmenuPlacement {
        self.placement.unwrap_or_default()
    }

    pub fn is_measured(&self) -> bool {
        self.placement.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::{HorizontalSide, VerticalSide};
    use ctxmenu_core::Rect;
    use std::cell::Cell;

    fn trigger() -> Rc<TriggerEvent> {
        Rc::new(PointerEvent::context_menu(0.0, 0.0))
    }

    #[test]
    fn test_default_arrow_and_custom_arrow() {
        let mounted = Submenu::new("More").mount(&trigger(), "▶");
        assert_eq!(mounted.arrow(), "▶");

        let mounted = Submenu::new("More").arrow(">").mount(&trigger(), "▶");
        assert_eq!(mounted.arrow(), ">");
    }

    #[test]
    fn test_label_click_stops_propagation() {
        let mounted = Submenu::new("More").mount(&trigger(), "▶");
        let click = PointerEvent::click(0.0, 0.0);
        mounted.handle_label_click(&click);
        assert!(click.is_propagation_stopped());
    }

    #[test]
    fn test_disabled_submenu_does_not_expand() {
        let mut mounted = Submenu::new("More")
            .disabled_when(|ev| ev.event.client_x == Some(0.0))
            .item(Item::new("Nested"))
            .mount(&trigger(), "▶");

        assert!(mounted.is_disabled());
        mounted.set_hovered(true);
        assert!(!mounted.is_expanded());
    }

    #[test]
    fn test_hover_expands_and_collapses_nested() {
        let mut mounted = Submenu::new("Outer")
            .submenu(Submenu::new("Inner").item(Item::new("Leaf")))
            .mount(&trigger(), "▶");

        mounted.set_hovered(true);
        if let MountedEntry::Submenu(inner) = &mut mounted.entries_mut()[0] {
            inner.set_hovered(true);
        }
        mounted.set_hovered(false);

        assert!(!mounted.is_expanded());
        match &mounted.entries()[0] {
            MountedEntry::Submenu(inner) => assert!(!inner.is_expanded()),
            other => panic!("unexpected entry {:?}", other),
        }
    }

    #[test]
    fn test_placement_is_measured_once() {
        let mut mounted = Submenu::new("More").mount(&trigger(), "▶");
        let viewport = Size::new(800.0, 600.0);
        assert!(!mounted.is_measured());
        assert_eq!(mounted.placement(), SubmenuPlacement::default());

        let bounds = Cell::new(Rect::new(700.0, 500.0, 200.0, 200.0));
        let placement = mounted.measure(&bounds, viewport);
        assert_eq!(placement.horizontal, HorizontalSide::End);
        assert_eq!(placement.vertical, VerticalSide::Bottom);

        // Later measurements do not re-evaluate
        bounds.set(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(mounted.measure(&bounds, viewport), placement);
        assert_eq!(mounted.placement(), placement);
    }
}
