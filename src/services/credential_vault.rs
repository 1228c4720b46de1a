//! Credential Vault for SecuroPass.
//!
//! Each secret is sealed with its own freshly generated AES-256-GCM key. The key
//! goes to the secret store under the credential identifier; the ciphertext goes
//! to the shared JSON map under the same identifier. Neither store alone is
//! enough to recover a secret.
//!
//! Saving twice under one identifier replaces the key, so ciphertexts issued
//! under the old key can no longer be opened.

use std::sync::{Mutex, MutexGuard};

use tracing::{debug, info, warn};
use zeroize::Zeroizing;

use crate::services::crypto_service::{CryptoService, CryptoServiceTrait};
use crate::store::{CipherStore, SecretStore};
use crate::types::credential::{EncryptedData, RevealedCredential};
use crate::types::errors::{CryptoError, VaultError};
use crate::types::settings::DEFAULT_SERVICE_NAME;

/// The cause inside a crypto error, without the variant's own prefix.
fn crypto_detail(err: CryptoError) -> String {
    match err {
        CryptoError::Encryption(msg) | CryptoError::Decryption(msg) => msg,
        other => other.to_string(),
    }
}

/// Trait defining credential vault operations.
pub trait CredentialVaultTrait {
    fn save(&self, identifier: &str, secret: &str) -> Result<(), VaultError>;
    fn retrieve(&self, identifier: &str) -> Result<String, VaultError>;
    fn delete(&self, identifier: &str) -> Result<(), VaultError>;
    fn list_identifiers(&self) -> Result<Vec<String>, VaultError>;
    fn contains(&self, identifier: &str) -> Result<bool, VaultError>;
    fn reveal_all(&self) -> Result<Vec<RevealedCredential>, VaultError>;
}

/// Vault backed by a [`SecretStore`] for keys and a [`CipherStore`] for ciphertexts.
pub struct CredentialVault<S: SecretStore> {
    secrets: S,
    ciphers: CipherStore,
    crypto: CryptoService,
    scope: String,
    // Serializes read-modify-write cycles on the cipher file within this process.
    write_lock: Mutex<()>,
}

impl<S: SecretStore> CredentialVault<S> {
    pub fn new(secrets: S, ciphers: CipherStore) -> Self {
        Self {
            secrets,
            ciphers,
            crypto: CryptoService::new(),
            scope: DEFAULT_SERVICE_NAME.to_string(),
            write_lock: Mutex::new(()),
        }
    }

    /// Files keys under `scope` instead of the default application name.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn cipher_store(&self) -> &CipherStore {
        &self.ciphers
    }

    pub fn secret_store(&self) -> &S {
        &self.secrets
    }

    fn check_identifier(identifier: &str) -> Result<(), VaultError> {
        if identifier.trim().is_empty() {
            return Err(VaultError::InvalidIdentifier(
                "Identifier cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, ()>, VaultError> {
        self.write_lock
            .lock()
            .map_err(|_| VaultError::IoError("Vault lock poisoned".to_string()))
    }

    /// Opens one ciphertext token with the stored key text.
    fn open_token(
        &self,
        identifier: &str,
        key_text: &str,
        token: &str,
    ) -> Result<String, VaultError> {
        let opened = CryptoService::decode_key(key_text)
            .and_then(|key| {
                EncryptedData::from_token(token)
                    .and_then(|encrypted| self.crypto.decrypt_aes256gcm(&encrypted, &key))
            })
            .map_err(|e| VaultError::DecryptionFailed(crypto_detail(e)))
            .and_then(|plaintext| {
                String::from_utf8(plaintext)
                    .map_err(|e| VaultError::DecryptionFailed(e.to_string()))
            });

        if let Err(ref e) = opened {
            warn!(identifier = %identifier, error = %e, "Stored credential failed authentication");
        }
        opened
    }

    /// Puts back the key that was current before a failed save.
    fn restore_key(&self, identifier: &str, previous: Option<&str>) {
        let restored = match previous {
            Some(key_text) => self.secrets.set_secret(&self.scope, identifier, key_text),
            None => self.secrets.delete_secret(&self.scope, identifier),
        };
        if let Err(e) = restored {
            warn!(identifier = %identifier, error = %e, "Could not roll back key after failed save");
        }
    }

    fn lookup_key(&self, identifier: &str) -> Result<String, VaultError> {
        match self.secrets.get_secret(&self.scope, identifier)? {
            Some(key) => Ok(key),
            None => {
                debug!(identifier = %identifier, "No key in secret store");
                Err(VaultError::KeyNotFound(identifier.to_string()))
            }
        }
    }
}

impl<S: SecretStore> CredentialVaultTrait for CredentialVault<S> {
    fn save(&self, identifier: &str, secret: &str) -> Result<(), VaultError> {
        Self::check_identifier(identifier)?;

        let key = self
            .crypto
            .generate_key()
            .map_err(|e| VaultError::EncryptionFailed(crypto_detail(e)))?;
        let token = self
            .crypto
            .encrypt_aes256gcm(secret.as_bytes(), &key)
            .map_err(|e| VaultError::EncryptionFailed(crypto_detail(e)))?
            .to_token();

        let _guard = self.lock()?;

        // Nothing is touched until the map is known to be readable.
        let mut map = self.ciphers.load()?;
        let previous_key = self
            .secrets
            .get_secret(&self.scope, identifier)?
            .map(Zeroizing::new);

        self.secrets
            .set_secret(&self.scope, identifier, &CryptoService::encode_key(&key))?;

        let replaced = map.insert(identifier.to_string(), token).is_some();
        if let Err(e) = self.ciphers.write(&map) {
            self.restore_key(identifier, previous_key.as_deref().map(String::as_str));
            return Err(e);
        }

        info!(identifier = %identifier, replaced, "Credential saved");
        Ok(())
    }

    fn retrieve(&self, identifier: &str) -> Result<String, VaultError> {
        Self::check_identifier(identifier)?;
        let _guard = self.lock()?;

        let key_text = Zeroizing::new(self.lookup_key(identifier)?);
        let token = self
            .ciphers
            .get(identifier)?
            .ok_or_else(|| VaultError::RecordNotFound(identifier.to_string()))?;

        self.open_token(identifier, &key_text, &token)
    }

    fn delete(&self, identifier: &str) -> Result<(), VaultError> {
        Self::check_identifier(identifier)?;
        let _guard = self.lock()?;

        self.secrets.delete_secret(&self.scope, identifier)?;

        let mut map = self.ciphers.load()?;
        if map.remove(identifier).is_some() {
            self.ciphers.write(&map)?;
            info!(identifier = %identifier, "Credential deleted");
        } else {
            debug!(identifier = %identifier, "Delete of absent credential");
        }
        Ok(())
    }

    fn list_identifiers(&self) -> Result<Vec<String>, VaultError> {
        Ok(self.ciphers.load()?.into_keys().collect())
    }

    fn contains(&self, identifier: &str) -> Result<bool, VaultError> {
        Ok(self.ciphers.load()?.contains_key(identifier))
    }

    fn reveal_all(&self) -> Result<Vec<RevealedCredential>, VaultError> {
        let _guard = self.lock()?;
        let map = self.ciphers.load()?;

        Ok(map
            .into_iter()
            .map(|(identifier, token)| {
                let secret = self
                    .lookup_key(&identifier)
                    .map(Zeroizing::new)
                    .and_then(|key_text| self.open_token(&identifier, &key_text, &token))
                    .map_err(|e| e.to_string());
                RevealedCredential { identifier, secret }
            })
            .collect())
    }
}
