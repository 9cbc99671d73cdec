//! Configuration options for vizbridge.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Options {
    /// Whether to automatically recompute scene extents when structures are
    /// registered or removed.
    pub auto_compute_scene_extents: bool,

    /// Whether to log a warning when registering a structure replaces an
    /// existing one of the same name.
    pub warn_on_replace: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            auto_compute_scene_extents: true,
            warn_on_replace: true,
        }
    }
}

impl Options {
    /// Saves these options as JSON.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads options from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_json_round_trip() {
        let options = Options {
            auto_compute_scene_extents: false,
            warn_on_replace: true,
        };

        let dir = std::env::temp_dir().join("vizbridge_options_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("options.json");

        options.save_to_file(&path).unwrap();
        let loaded = Options::load_from_file(&path).unwrap();
        assert!(!loaded.auto_compute_scene_extents);
        assert!(loaded.warn_on_replace);

        std::fs::remove_file(&path).ok();
    }
}
