//! Menu configuration
//!
//! Every field has a default, so an empty document is a valid config:
//!
//! ```toml
//! offset_y = 1.0
//! dismiss_keys = ["Enter", "Escape"]
//! dismiss_on_resize = true
//! dismiss_on_scroll = true
//! submenu_arrow = "▶"
//! ```

use std::fs;
use std::path::Path;

use ctxmenu_core::Key;
use serde::Deserialize;

use crate::error::{MenuError, Result};

/// Behavior shared by every menu mounted on a [`MenuRoot`](crate::MenuRoot)
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Added to the resolved `y` when rendering, so the pointer tip sits above the first row
    pub offset_y: f32,
    /// Keys that close a visible menu
    pub dismiss_keys: Vec<Key>,
    pub dismiss_on_resize: bool,
    pub dismiss_on_scroll: bool,
    /// Arrow rendered on submenu rows without a custom one
    pub submenu_arrow: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            offset_y: 1.0,
            dismiss_keys: vec![Key::Enter, Key::Escape],
            dismiss_on_resize: true,
            dismiss_on_scroll: true,
            submenu_arrow: "▶".to_string(),
        }
    }
}

impl MenuConfig {
    /// Parse a config from TOML text
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a TOML config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| MenuError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("loaded menu config from {}", path.display());
        Self::from_toml_str(&source)
    }

    pub fn is_dismiss_key(&self, key: &Key) -> bool {
        self.dismiss_keys.contains(key)
    }
}
