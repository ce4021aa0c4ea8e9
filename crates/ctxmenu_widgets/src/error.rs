//! Error types for ctxmenu_widgets

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the widget layer
///
/// Menu operations themselves cannot fail; only loading configuration can.
#[derive(Error, Debug)]
pub enum MenuError {
    /// Failed to read a configuration file
    #[error("Failed to read menu config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration is not valid TOML or has wrong field types
    #[error("Invalid menu config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result type for ctxmenu_widgets operations
pub type Result<T> = std::result::Result<T, MenuError>;
