//! Caller-supplied payload data carried by triggers and items
//!
//! Payloads are free-form JSON objects. A menu item sees the shallow union of
//! the data attached to the trigger and its own data, with the item's keys
//! replacing the trigger's on collision.

use serde_json::{Map, Value};

/// Free-form payload attached to a trigger or an item
pub type Props = Map<String, Value>;

/// Shallow-merge `overlay` on top of `base`
///
/// Keys present in both keep the value from `overlay`.
pub fn merge_props(base: &Props, overlay: &Props) -> Props {
    let mut merged = base.clone();
    for (key, value) in overlay {
        merged.insert(key.clone(), value.clone());
    }
    merged
}
