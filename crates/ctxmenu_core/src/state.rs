//! Event-driven state transitions
//!
//! Widget state machines are plain `Copy` enums that map an event code to
//! the next state. Unknown events leave the state unchanged.

use std::hash::Hash;

/// Trait for state types that react to event codes
///
/// # Example
///
/// ```
/// use ctxmenu_core::state::StateTransitions;
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// enum Toggle {
///     Off,
///     On,
/// }
///
/// impl StateTransitions for Toggle {
///     fn on_event(&self, event: u32) -> Option<Self> {
///         match (self, event) {
///             (Toggle::Off, 1) => Some(Toggle::On),
///             (Toggle::On, 2) => Some(Toggle::Off),
///             _ => None,
///         }
///     }
/// }
///
/// assert_eq!(Toggle::Off.on_event(1), Some(Toggle::On));
/// assert_eq!(Toggle::Off.on_event(2), None);
/// ```
pub trait StateTransitions:
    Clone + Copy + PartialEq + Eq + Hash + std::fmt::Debug + 'static
{
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: u32) -> Option<Self>;
}
