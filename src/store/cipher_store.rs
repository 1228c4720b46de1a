//! Durable ciphertext map for SecuroPass.
//!
//! The store is a single JSON object mapping identifiers to ciphertext tokens.
//! Every write replaces the whole file through a temporary file in the same
//! directory that is renamed over the target, so readers never see a
//! half-written map.

use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::types::errors::VaultError;

/// Identifier -> ciphertext token.
pub type CipherMap = BTreeMap<String, String>;

/// JSON file holding every stored ciphertext.
#[derive(Debug, Clone)]
pub struct CipherStore {
    path: PathBuf,
}

impl CipherStore {
    /// Binds the store to `path`. Nothing is read or created until first use.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the file backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole map.
    ///
    /// A missing file or one that does not hold a JSON object of strings reads
    /// as an empty map. Any other read failure is an `IoError`.
    pub fn load(&self) -> Result<CipherMap, VaultError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Cipher store absent, starting empty");
                return Ok(CipherMap::new());
            }
            Err(e) => {
                return Err(VaultError::IoError(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        match serde_json::from_slice::<CipherMap>(&bytes) {
            Ok(map) => Ok(map),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Cipher store malformed, treating as empty");
                Ok(CipherMap::new())
            }
        }
    }

    /// Replaces the file with `map`.
    pub fn write(&self, map: &CipherMap) -> Result<(), VaultError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|e| {
            VaultError::IoError(format!("Failed to create {}: {}", dir.display(), e))
        })?;

        let json = serde_json::to_vec(map)
            .map_err(|e| VaultError::IoError(format!("Failed to serialize cipher store: {}", e)))?;

        let mut tmp = NamedTempFile::new_in(&dir)
            .map_err(|e| VaultError::IoError(format!("Failed to create temp file: {}", e)))?;
        tmp.write_all(&json)
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| VaultError::IoError(format!("Failed to write temp file: {}", e)))?;
        tmp.persist(&self.path).map_err(|e| {
            VaultError::IoError(format!("Failed to replace {}: {}", self.path.display(), e))
        })?;

        debug!(path = %self.path.display(), entries = map.len(), "Cipher store written");
        Ok(())
    }

    /// Looks up one ciphertext.
    pub fn get(&self, identifier: &str) -> Result<Option<String>, VaultError> {
        Ok(self.load()?.remove(identifier))
    }
}
