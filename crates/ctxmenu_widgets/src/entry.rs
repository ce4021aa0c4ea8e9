//! Menu entries: items, separators and submenus

use std::rc::Rc;

use ctxmenu_core::TriggerEvent;

use crate::item::{Item, MountedItem};
use crate::submenu::{MountedSubmenu, Submenu};

/// A declared row of a menu
#[derive(Clone, Debug)]
pub enum MenuEntry {
    Item(Item),
    Separator,
    Submenu(Submenu),
}

impl From<Item> for MenuEntry {
    fn from(item: Item) -> Self {
        MenuEntry::Item(item)
    }
}

impl From<Submenu> for MenuEntry {
    fn from(submenu: Submenu) -> Self {
        MenuEntry::Submenu(submenu)
    }
}

/// A row mounted for the trigger that opened the menu
#[derive(Clone, Debug)]
pub enum MountedEntry {
    Item(MountedItem),
    Separator,
    Submenu(MountedSubmenu),
}

impl MountedEntry {
    pub fn is_separator(&self) -> bool {
        matches!(self, MountedEntry::Separator)
    }

    pub fn as_item(&self) -> Option<&MountedItem> {
        match self {
            MountedEntry::Item(item) => Some(item),
            _ => None,
        }
    }

    pub fn as_submenu(&self) -> Option<&MountedSubmenu> {
        match self {
            MountedEntry::Submenu(submenu) => Some(submenu),
            _ => None,
        }
    }
}

pub(crate) fn mount_entries(
    entries: &[MenuEntry],
    trigger: &Rc<TriggerEvent>,
    default_arrow: &str,
) -> Vec<MountedEntry> {
    entries
        .iter()
        .map(|entry| match entry {
            MenuEntry::Item(item) => MountedEntry::Item(item.mount(trigger)),
            MenuEntry::Separator => MountedEntry::Separator,
            MenuEntry::Submenu(submenu) => {
                MountedEntry::Submenu(submenu.mount(trigger, default_arrow))
            }
        })
        .collect()
}

/// Look up a row by its index path through nested submenus
pub(crate) fn entry_at<'a>(
    entries: &'a [MountedEntry],
    path: &[usize],
) -> Option<&'a MountedEntry> {
    let (first, rest) = path.split_first()?;
    let entry = entries.get(*first)?;
    if rest.is_empty() {
        return Some(entry);
    }
    match entry {
        MountedEntry::Submenu(submenu) => entry_at(submenu.entries(), rest),
        _ => None,
    }
}

pub(crate) fn entry_at_mut<'a>(
    entries: &'a mut [MountedEntry],
    path: &[usize],
) -> Option<&'a mut MountedEntry> {
    let (first, rest) = path.split_first()?;
    let entry = entries.get_mut(*first)?;
    if rest.is_empty() {
        return Some(entry);
    }
    match entry {
        MountedEntry::Submenu(submenu) => entry_at_mut(submenu.entries_mut(), rest),
        _ => None,
    }
}
