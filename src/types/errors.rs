use std::fmt;

// === CryptoError ===

/// Errors related to cryptographic operations.
#[derive(Debug)]
pub enum CryptoError {
    /// Encryption operation failed.
    Encryption(String),
    /// Decryption operation failed.
    Decryption(String),
    /// Failed to generate random bytes.
    RandomGeneration(String),
    /// The provided key is invalid.
    InvalidKey(String),
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptoError::Encryption(msg) => write!(f, "Encryption failed: {}", msg),
            CryptoError::Decryption(msg) => write!(f, "Decryption failed: {}", msg),
            CryptoError::RandomGeneration(msg) => {
                write!(f, "Random generation failed: {}", msg)
            }
            CryptoError::InvalidKey(msg) => write!(f, "Invalid key: {}", msg),
        }
    }
}

impl std::error::Error for CryptoError {}

// === GeneratorError ===

/// Errors related to password generation.
#[derive(Debug, PartialEq, Eq)]
pub enum GeneratorError {
    /// Length, phrase or bank selection is out of range.
    InvalidPreferences(String),
    /// Sampling without replacement needs more distinct characters than the bank has.
    InsufficientBankSize { bank: usize, length: usize },
    /// The secure random source failed.
    RandomGeneration(String),
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorError::InvalidPreferences(msg) => {
                write!(f, "Invalid generation preferences: {}", msg)
            }
            GeneratorError::InsufficientBankSize { bank, length } => write!(
                f,
                "Character bank of {} cannot supply {} distinct characters",
                bank, length
            ),
            GeneratorError::RandomGeneration(msg) => {
                write!(f, "Random generation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for GeneratorError {}

impl From<CryptoError> for GeneratorError {
    fn from(err: CryptoError) -> Self {
        GeneratorError::RandomGeneration(err.to_string())
    }
}

// === SecretStoreError ===

/// Errors raised by a secret-store backend.
#[derive(Debug)]
pub enum SecretStoreError {
    /// The backend could not be reached or rejected the request.
    Backend(String),
}

impl fmt::Display for SecretStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecretStoreError::Backend(msg) => write!(f, "Secret store error: {}", msg),
        }
    }
}

impl std::error::Error for SecretStoreError {}

// === VaultError ===

/// Errors related to credential vault operations.
#[derive(Debug)]
pub enum VaultError {
    /// The identifier is empty or otherwise unusable as a key.
    InvalidIdentifier(String),
    /// No key for the identifier in the secret store.
    KeyNotFound(String),
    /// No ciphertext for the identifier in the durable store.
    RecordNotFound(String),
    /// Key generation or sealing failed while saving.
    EncryptionFailed(String),
    /// Authentication failed: wrong key, corruption or tampering.
    DecryptionFailed(String),
    /// File or secret-store transport failure.
    IoError(String),
}

impl VaultError {
    /// True for the two "no such saved credential" outcomes.
    pub fn is_not_found(&self) -> bool {
        matches!(self, VaultError::KeyNotFound(_) | VaultError::RecordNotFound(_))
    }
}

impl fmt::Display for VaultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VaultError::InvalidIdentifier(msg) => write!(f, "Invalid identifier: {}", msg),
            VaultError::KeyNotFound(id) => {
                write!(f, "No saved credential or key unavailable: {}", id)
            }
            VaultError::RecordNotFound(id) => write!(f, "No saved credential: {}", id),
            VaultError::EncryptionFailed(msg) => write!(f, "Encryption failed: {}", msg),
            VaultError::DecryptionFailed(msg) => write!(f, "Decryption failed: {}", msg),
            VaultError::IoError(msg) => write!(f, "Vault I/O error: {}", msg),
        }
    }
}

impl std::error::Error for VaultError {}

impl From<SecretStoreError> for VaultError {
    fn from(err: SecretStoreError) -> Self {
        VaultError::IoError(err.to_string())
    }
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
