//! Actionable menu rows
//!
//! An [`Item`] is the declaration a menu is built from. When the menu opens,
//! each item is mounted against the trigger into a [`MountedItem`], which
//! resolves the disabled flag once and carries the merged props its click
//! callback receives.

use std::fmt;
use std::rc::Rc;

use ctxmenu_core::{merge_props, PointerEvent, Props, TriggerEvent};

use crate::disabled::{Disabled, ItemEvent};

/// Click callback for an item
pub type ClickHandler = Rc<dyn Fn(&ItemEvent<'_>)>;

/// A menu item declaration
#[derive(Clone)]
pub struct Item {
    /// Display label
    label: String,
    /// Data passed to the click callback, merged over the trigger's data
    data: Props,
    /// Static or computed disabled flag
    disabled: Disabled,
    /// Keep the menu open after a click
    dont_close_on_click: bool,
    /// Click handler
    on_click: Option<ClickHandler>,
}

impl fmt::Debug for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("label", &self.label)
            .field("data", &self.data)
            .field("disabled", &self.disabled)
            .field("dont_close_on_click", &self.dont_close_on_click)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

impl Item {
    /// Create a new menu item
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            data: Props::new(),
            disabled: Disabled::default(),
            dont_close_on_click: false,
            on_click: None,
        }
    }

    /// Set the click handler
    pub fn on_click<F>(mut self, f: F) -> Self
    where
        F: Fn(&ItemEvent<'_>) + 'static,
    {
        self.on_click = Some(Rc::new(f));
        self
    }

    /// Attach item-local data
    pub fn data(mut self, data: Props) -> Self {
        self.data = data;
        self
    }

    /// Mark as disabled (or not)
    pub fn disabled(mut self, disabled: impl Into<Disabled>) -> Self {
        self.disabled = disabled.into();
        self
    }

    /// Compute the disabled flag from the trigger when the menu opens
    pub fn disabled_when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&ItemEvent<'_>) -> bool + 'static,
    {
        self.disabled = Disabled::when(predicate);
        self
    }

    /// Keep the menu open when this item is clicked
    pub fn dont_close_on_click(mut self, keep_open: bool) -> Self {
        self.dont_close_on_click = keep_open;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn mount(&self, trigger: &Rc<TriggerEvent>) -> MountedItem {
        let props = merge_props(&trigger.data, &self.data);
        let is_disabled = self.disabled.resolve(&ItemEvent {
            event: trigger,
            props: &props,
        });

        MountedItem {
            label: self.label.clone(),
            is_disabled,
            dont_close_on_click: self.dont_close_on_click,
            props,
            trigger: Rc::clone(trigger),
            on_click: self.on_click.clone(),
        }
    }
}

/// An item instantiated for one opening of its menu
#[derive(Clone)]
pub struct MountedItem {
    label: String,
    is_disabled: bool,
    dont_close_on_click: bool,
    props: Props,
    trigger: Rc<TriggerEvent>,
    on_click: Option<ClickHandler>,
}

impl fmt::Debug for MountedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MountedItem")
            .field("label", &self.label)
            .field("is_disabled", &self.is_disabled)
            .field("dont_close_on_click", &self.dont_close_on_click)
            .field("props", &self.props)
            .finish()
    }
}

impl MountedItem {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_disabled(&self) -> bool {
        self.is_disabled
    }

    /// Trigger data overlaid with the item's data
    pub fn props(&self) -> &Props {
        &self.props
    }

    /// Handle a click on this row
    ///
    /// Disabled items and `dont_close_on_click` items stop the click so it
    /// never reaches the window listener that closes the menu. Enabled items
    /// run their callback with the trigger and merged props.
    ///
    /// Returns whether the callback ran.
    pub fn handle_click(&self, click: &PointerEvent) -> bool {
        if self.is_disabled || self.dont_close_on_click {
            click.stop_propagation();
        }

        if self.is_disabled {
            return false;
        }

        if let Some(ref on_click) = self.on_click {
            on_click(&ItemEvent {
                event: &self.trigger,
                props: &self.props,
            });
        }
        true
    }
}
