//! Secret-store backends holding the per-credential encryption keys.
//!
//! [`KeyringSecretStore`] files keys in the OS credential vault (Secret
//! Service fronted by a keyutils cache on Linux, Keychain on macOS,
//! Credential Manager on Windows). [`InMemorySecretStore`] keeps them in
//! process memory and is meant for tests and embedders without a keyring.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::types::errors::SecretStoreError;

/// Trait for secret-store backends.
///
/// Keys are addressed by a fixed application `scope` and the credential
/// identifier.
pub trait SecretStore: Send + Sync {
    /// Stores `value`, replacing any previous value for the same address.
    fn set_secret(&self, scope: &str, identifier: &str, value: &str)
        -> Result<(), SecretStoreError>;

    /// Returns the stored value, or `None` if nothing is stored.
    fn get_secret(&self, scope: &str, identifier: &str)
        -> Result<Option<String>, SecretStoreError>;

    /// Removes the stored value. Removing a missing value succeeds.
    fn delete_secret(&self, scope: &str, identifier: &str) -> Result<(), SecretStoreError>;
}

impl<T: SecretStore + ?Sized> SecretStore for Arc<T> {
    fn set_secret(
        &self,
        scope: &str,
        identifier: &str,
        value: &str,
    ) -> Result<(), SecretStoreError> {
        (**self).set_secret(scope, identifier, value)
    }

    fn get_secret(
        &self,
        scope: &str,
        identifier: &str,
    ) -> Result<Option<String>, SecretStoreError> {
        (**self).get_secret(scope, identifier)
    }

    fn delete_secret(&self, scope: &str, identifier: &str) -> Result<(), SecretStoreError> {
        (**self).delete_secret(scope, identifier)
    }
}

impl<T: SecretStore + ?Sized> SecretStore for Box<T> {
    fn set_secret(
        &self,
        scope: &str,
        identifier: &str,
        value: &str,
    ) -> Result<(), SecretStoreError> {
        (**self).set_secret(scope, identifier, value)
    }

    fn get_secret(
        &self,
        scope: &str,
        identifier: &str,
    ) -> Result<Option<String>, SecretStoreError> {
        (**self).get_secret(scope, identifier)
    }

    fn delete_secret(&self, scope: &str, identifier: &str) -> Result<(), SecretStoreError> {
        (**self).delete_secret(scope, identifier)
    }
}

/// Process-local secret store.
#[derive(Debug, Default)]
pub struct InMemorySecretStore {
    entries: Mutex<HashMap<(String, String), String>>,
}

impl InMemorySecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<(String, String), String>>, SecretStoreError>
    {
        self.entries
            .lock()
            .map_err(|_| SecretStoreError::Backend("In-memory store lock poisoned".to_string()))
    }
}

impl SecretStore for InMemorySecretStore {
    fn set_secret(
        &self,
        scope: &str,
        identifier: &str,
        value: &str,
    ) -> Result<(), SecretStoreError> {
        self.lock()?
            .insert((scope.to_string(), identifier.to_string()), value.to_string());
        Ok(())
    }

    fn get_secret(
        &self,
        scope: &str,
        identifier: &str,
    ) -> Result<Option<String>, SecretStoreError> {
        Ok(self
            .lock()?
            .get(&(scope.to_string(), identifier.to_string()))
            .cloned())
    }

    fn delete_secret(&self, scope: &str, identifier: &str) -> Result<(), SecretStoreError> {
        self.lock()?
            .remove(&(scope.to_string(), identifier.to_string()));
        Ok(())
    }
}

/// OS keyring backend using the `keyring` crate.
#[cfg(feature = "keychain")]
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyringSecretStore;

#[cfg(feature = "keychain")]
impl KeyringSecretStore {
    pub fn new() -> Self {
        Self
    }

    fn entry(scope: &str, identifier: &str) -> Result<keyring::Entry, SecretStoreError> {
        keyring::Entry::new(scope, identifier).map_err(|e| {
            SecretStoreError::Backend(format!("Failed to open keyring entry: {}", e))
        })
    }
}

#[cfg(feature = "keychain")]
impl SecretStore for KeyringSecretStore {
    fn set_secret(
        &self,
        scope: &str,
        identifier: &str,
        value: &str,
    ) -> Result<(), SecretStoreError> {
        Self::entry(scope, identifier)?
            .set_password(value)
            .map_err(|e| SecretStoreError::Backend(format!("Failed to store key: {}", e)))
    }

    fn get_secret(
        &self,
        scope: &str,
        identifier: &str,
    ) -> Result<Option<String>, SecretStoreError> {
        match Self::entry(scope, identifier)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(SecretStoreError::Backend(format!(
                "Failed to read key: {}",
                e
            ))),
        }
    }

    fn delete_secret(&self, scope: &str, identifier: &str) -> Result<(), SecretStoreError> {
        match Self::entry(scope, identifier)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(SecretStoreError::Backend(format!(
                "Failed to delete key: {}",
                e
            ))),
        }
    }
}
