//! Static or computed disabled state for items and submenus

use std::fmt;
use std::rc::Rc;

use ctxmenu_core::{Props, TriggerEvent};

/// What item callbacks and disabled predicates receive
#[derive(Clone, Copy, Debug)]
pub struct ItemEvent<'a> {
    /// The event that opened the menu
    pub event: &'a TriggerEvent,
    /// Trigger data overlaid with the item's own data
    pub props: &'a Props,
}

/// Predicate deciding whether an entry is disabled
pub type DisabledPredicate = Rc<dyn Fn(&ItemEvent<'_>) -> bool>;

/// Disabled flag, either fixed or computed from the trigger
///
/// Resolved once when the entry is mounted for a trigger.
#[derive(Clone)]
pub enum Disabled {
    Static(bool),
    Predicate(DisabledPredicate),
}

impl Disabled {
    /// Compute the flag from a predicate
    pub fn when<F>(predicate: F) -> Self
    where
        F: Fn(&ItemEvent<'_>) -> bool + 'static,
    {
        Disabled::Predicate(Rc::new(predicate))
    }

    pub fn resolve(&self, ctx: &ItemEvent<'_>) -> bool {
        match self {
            Disabled::Static(disabled) => *disabled,
            Disabled::Predicate(predicate) => predicate(ctx),
        }
    }
}

impl Default for Disabled {
    fn default() -> Self {
        Disabled::Static(false)
    }
}

impl From<bool> for Disabled {
    fn from(disabled: bool) -> Self {
        Disabled::Static(disabled)
    }
}

impl fmt::Debug for Disabled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Disabled::Static(disabled) => f.debug_tuple("Static").field(disabled).finish(),
            Disabled::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}
