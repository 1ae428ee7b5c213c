//! Error types for SPROUT_PAD.

use std::io;

/// Errors produced by the SPROUT_PAD shell.
#[derive(Debug, thiserror::Error)]
pub enum PadError {
    #[error("scene error: {0}")]
    Scene(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("platform error: {0}")]
    Platform(String),

    #[error("capture error: {0}")]
    Capture(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, PadError>;
