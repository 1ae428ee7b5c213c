//! Shell configuration loaded from an optional `pad.toml`.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use sprout_types::error::{PadError, Result};

/// Top-level shell configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PadConfig {
    /// Name shown in the header greeting.
    #[serde(default = "default_owner")]
    pub owner_name: String,
    /// Directory holding the per-key preference files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_width")]
    pub screen_width: u32,
    #[serde(default = "default_height")]
    pub screen_height: u32,
    /// Event-loop ticks per second; screen timers count in frames.
    #[serde(default = "default_fps")]
    pub fps: u32,
    #[serde(default = "default_title")]
    pub window_title: String,
}

fn default_owner() -> String {
    "Explorer".to_string()
}
fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}
fn default_width() -> u32 {
    800
}
fn default_height() -> u32 {
    600
}
fn default_fps() -> u32 {
    30
}
fn default_title() -> String {
    "SPROUT_PAD".to_string()
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            owner_name: default_owner(),
            data_dir: default_data_dir(),
            screen_width: default_width(),
            screen_height: default_height(),
            fps: default_fps(),
            window_title: default_title(),
        }
    }
}

impl PadConfig {
    /// Load from a TOML file. Malformed content is a config error.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| PadError::Config(format!("{}: {e}", path.display())))?;
        toml::from_str(&raw).map_err(|e| PadError::Config(format!("{}: {e}", path.display())))
    }

    /// Load from the file if it exists, otherwise defaults. Parse failures
    /// still surface -- a present-but-broken config should not be ignored.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.is_file() {
            Self::from_file(path)
        } else {
            log::info!("config: {} not found, using defaults", path.display());
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = PadConfig::default();
        assert_eq!(c.owner_name, "Explorer");
        assert_eq!(c.screen_width, 800);
        assert_eq!(c.screen_height, 600);
        assert_eq!(c.fps, 30);
        assert_eq!(c.window_title, "SPROUT_PAD");
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let c: PadConfig = toml::from_str("owner_name = \"Mai\"").unwrap();
        assert_eq!(c.owner_name, "Mai");
        assert_eq!(c.screen_width, 800);
    }

    #[test]
    fn full_toml() {
        let c: PadConfig = toml::from_str(
            r#"
owner_name = "Thuy"
data_dir = "/var/lib/sproutpad"
screen_width = 1024
screen_height = 768
fps = 60
window_title = "Pad"
"#,
        )
        .unwrap();
        assert_eq!(c.owner_name, "Thuy");
        assert_eq!(c.data_dir, PathBuf::from("/var/lib/sproutpad"));
        assert_eq!(c.fps, 60);
    }

    #[test]
    fn missing_file_is_defaults() {
        let c = PadConfig::load_or_default(Path::new("/nonexistent/pad.toml")).unwrap();
        assert_eq!(c.owner_name, "Explorer");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pad.toml");
        std::fs::write(&path, "this is [[[not toml").unwrap();
        let err = PadConfig::load_or_default(&path).unwrap_err();
        assert!(format!("{err}").contains("config error"));
    }
}
