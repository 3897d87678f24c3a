//! Theme error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading skins or resolving styles
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Skin file could not be read
    #[error("failed to read skin file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Skin file is not valid TOML or does not match the skin layout
    #[error("invalid skin file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Skin could not be written back to TOML
    #[error("failed to serialize skin: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// No style with this id
    #[error("unknown style `{0}`")]
    UnknownStyle(String),

    /// `extends` names a style the skin does not define
    #[error("style `{style}` extends unknown style `{parent}`")]
    UnknownParent { style: String, parent: String },

    /// No built-in skin with this id
    #[error("unknown skin preset `{0}`")]
    UnknownPreset(String),

    /// Following `extends` leads back to this style
    #[error("style inheritance cycle through `{0}`")]
    InheritanceCycle(String),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
