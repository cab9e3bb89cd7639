//! Durable user preferences.
//!
//! Only the theme survives a restart. It is stored as a small JSON document
//! (`{"theme":"dark"}`) under the platform config directory.

use super::ThemeMode;
use crate::error::{PulseError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

/// Preferences persisted between sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub theme: ThemeMode,
}

/// Storage backend for [`Preferences`].
pub trait PreferenceStore: Send {
    /// Read stored preferences. A missing document is not an error.
    fn load(&self) -> Result<Preferences>;

    /// Write preferences, replacing whatever was stored.
    fn save(&mut self, preferences: &Preferences) -> Result<()>;

    /// Human-readable location for diagnostics.
    fn describe(&self) -> String;
}

/// Load the stored theme, falling back to the default on any failure.
pub fn load_theme(store: &dyn PreferenceStore) -> ThemeMode {
    match store.load() {
        Ok(prefs) => prefs.theme,
        Err(e) => {
            tracing::warn!("Could not read preferences from {}: {e}", store.describe());
            ThemeMode::default()
        }
    }
}

/// JSON file backed preference store.
///
/// With no path (no resolvable config directory) the store reads defaults and
/// silently skips writes.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: Option<PathBuf>,
}

impl FilePreferenceStore {
    /// Store at an explicit location.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Store at `<config_dir>/fraud-pulse/preferences.json`.
    #[must_use]
    pub fn at_default_location() -> Self {
        Self {
            path: Self::default_path(),
        }
    }

    /// Get the default path to the preferences file.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("fraud-pulse").join("preferences.json"))
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Result<Preferences> {
        let Some(path) = &self.path else {
            return Ok(Preferences::default());
        };
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Preferences::default());
            }
            Err(e) => return Err(PulseError::preferences(Some(path.clone()), e)),
        };
        serde_json::from_str(&content).map_err(|e| {
            PulseError::preferences(
                Some(path.clone()),
                std::io::Error::new(std::io::ErrorKind::InvalidData, e),
            )
        })
    }

    fn save(&mut self, preferences: &Preferences) -> Result<()> {
        let Some(path) = &self.path else {
            tracing::debug!("No config directory; theme preference not saved");
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| PulseError::preferences(Some(path.clone()), e))?;
        }
        let json = serde_json::to_string_pretty(preferences).map_err(|e| {
            PulseError::preferences(
                Some(path.clone()),
                std::io::Error::new(std::io::ErrorKind::InvalidData, e),
            )
        })?;
        std::fs::write(path, json).map_err(|e| PulseError::preferences(Some(path.clone()), e))
    }

    fn describe(&self) -> String {
        self.path
            .as_ref()
            .map_or_else(|| "<no config dir>".to_string(), |p| p.display().to_string())
    }
}

/// In-memory store used with `--no-persist` and in tests.
///
/// Clones share the same slot, so a handle kept outside the dashboard sees
/// every write.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    slot: Arc<Mutex<Option<Preferences>>>,
}

impl MemoryPreferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with preferences.
    #[must_use]
    pub fn with(preferences: Preferences) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(preferences))),
        }
    }

    /// Last saved preferences, if any were saved or seeded.
    #[must_use]
    pub fn stored(&self) -> Option<Preferences> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Result<Preferences> {
        Ok(self.stored().unwrap_or_default())
    }

    fn save(&mut self, preferences: &Preferences) -> Result<()> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(*preferences);
        Ok(())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}
