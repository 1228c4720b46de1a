// SecuroPass Settings Engine
// Persists VaultSettings as pretty JSON and resolves where the ciphertext map lives.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info};

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::settings::{VaultSettings, STORE_FILE_NAME};

/// Trait defining the settings engine interface.
///
/// Keys are dot paths into the settings tree, e.g. `generator.length`.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<VaultSettings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn get_settings(&self) -> &VaultSettings;
    fn get_value(&self, key: &str) -> Result<Value, SettingsError>;
    fn set_value(&mut self, key: &str, value: Value) -> Result<(), SettingsError>;
    fn reset(&mut self) -> Result<(), SettingsError>;
    fn get_config_path(&self) -> &str;
    fn resolve_store_path(&self) -> PathBuf;
}

/// Settings engine backed by a JSON file.
pub struct SettingsEngine {
    config_path: String,
    settings: VaultSettings,
}

impl SettingsEngine {
    /// Uses `path_override` if given, otherwise `settings.json` in the
    /// platform config directory. Nothing is read until [`load`](SettingsEngineTrait::load).
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = path_override.unwrap_or_else(|| {
            platform::get_config_dir()
                .join("settings.json")
                .to_string_lossy()
                .into_owned()
        });

        Self {
            config_path,
            settings: VaultSettings::default(),
        }
    }

    fn tree(&self) -> Result<Value, SettingsError> {
        serde_json::to_value(&self.settings)
            .map_err(|e| SettingsError::SerializationError(e.to_string()))
    }

    fn pointer(key: &str) -> Result<String, SettingsError> {
        if key.is_empty() || key.split('.').any(str::is_empty) {
            return Err(SettingsError::InvalidKey(format!("'{}'", key)));
        }
        Ok(format!("/{}", key.replace('.', "/")))
    }
}

impl SettingsEngineTrait for SettingsEngine {
    /// A missing file yields defaults; a malformed one is a `SerializationError`.
    fn load(&mut self) -> Result<VaultSettings, SettingsError> {
        let content = match fs::read_to_string(&self.config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.config_path, "No settings file, using defaults");
                self.settings = VaultSettings::default();
                return Ok(self.settings.clone());
            }
            Err(e) => {
                return Err(SettingsError::IoError(format!(
                    "Failed to read {}: {}",
                    self.config_path, e
                )))
            }
        };

        self.settings = serde_json::from_str(&content).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to parse {}: {}", self.config_path, e))
        })?;
        Ok(self.settings.clone())
    }

    fn save(&self) -> Result<(), SettingsError> {
        let path = Path::new(&self.config_path);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                SettingsError::IoError(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.settings)
            .map_err(|e| SettingsError::SerializationError(e.to_string()))?;
        fs::write(path, json).map_err(|e| {
            SettingsError::IoError(format!("Failed to write {}: {}", self.config_path, e))
        })
    }

    fn get_settings(&self) -> &VaultSettings {
        &self.settings
    }

    fn get_value(&self, key: &str) -> Result<Value, SettingsError> {
        let pointer = Self::pointer(key)?;
        self.tree()?
            .pointer(&pointer)
            .cloned()
            .ok_or_else(|| SettingsError::InvalidKey(format!("'{}'", key)))
    }

    /// Replaces one value and writes the file.
    ///
    /// The whole tree is deserialized again before anything is kept, so a value
    /// of the wrong shape is rejected with `InvalidValue` and leaves the
    /// current settings as they were.
    fn set_value(&mut self, key: &str, value: Value) -> Result<(), SettingsError> {
        let pointer = Self::pointer(key)?;
        let mut tree = self.tree()?;

        let slot = tree
            .pointer_mut(&pointer)
            .ok_or_else(|| SettingsError::InvalidKey(format!("'{}'", key)))?;
        *slot = value;

        self.settings = serde_json::from_value(tree)
            .map_err(|e| SettingsError::InvalidValue(format!("{}: {}", key, e)))?;
        self.save()?;

        info!(key = %key, "Setting updated");
        Ok(())
    }

    fn reset(&mut self) -> Result<(), SettingsError> {
        self.settings = VaultSettings::default();
        self.save()?;
        info!(path = %self.config_path, "Settings reset to defaults");
        Ok(())
    }

    fn get_config_path(&self) -> &str {
        &self.config_path
    }

    /// The configured store path, or `sp.json` in the platform data directory.
    fn resolve_store_path(&self) -> PathBuf {
        match self.settings.storage.store_path.as_deref() {
            Some(p) if !p.is_empty() => PathBuf::from(p),
            _ => platform::get_data_dir().join(STORE_FILE_NAME),
        }
    }
}
