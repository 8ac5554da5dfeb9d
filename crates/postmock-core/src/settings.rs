use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PostmockError, Result};

pub const DEFAULT_CAPTION: &str = "Transform your memories into a beautiful Mosaic Wall\n\
Perfect for home & office decor\nDM to Order";

pub const DEFAULT_HASHTAGS: &str = "#PhysicalMosaicWall #MosaicWall #HomeDecor #WallArt \
#InteriorDesign #Memories #CustomArt";

/// User-editable post defaults with process-wide lifetime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub caption: String,
    pub hashtags: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            caption: DEFAULT_CAPTION.to_string(),
            hashtags: DEFAULT_HASHTAGS.to_string(),
        }
    }
}

/// On-disk TOML store. Loaded once at startup, written on every change.
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the user config directory.
    pub fn default_location() -> Self {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join("postmock").join("settings.toml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read persisted settings, falling back to built-in defaults when the
    /// file is missing or unreadable.
    pub fn load_or_default(&self) -> Settings {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => toml::from_str(&text).unwrap_or_else(|e| {
                tracing::warn!(path = %self.path.display(), error = %e, "settings file unreadable, using defaults");
                Settings::default()
            }),
            Err(_) => Settings::default(),
        }
    }

    /// Persist the settings, creating the parent directory on first write.
    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let text = toml::to_string_pretty(settings)
            .map_err(|e| PostmockError::Settings(e.to_string()))?;
        std::fs::write(&self.path, text)?;
        Ok(())
    }
}
