use securopass::types::errors::*;

// === CryptoError Tests ===

#[test]
fn crypto_error_display_variants() {
    assert_eq!(
        CryptoError::Encryption("data too large".to_string()).to_string(),
        "Encryption failed: data too large"
    );
    assert_eq!(
        CryptoError::Decryption("invalid tag".to_string()).to_string(),
        "Decryption failed: invalid tag"
    );
    assert_eq!(
        CryptoError::RandomGeneration("entropy exhausted".to_string()).to_string(),
        "Random generation failed: entropy exhausted"
    );
    assert_eq!(
        CryptoError::InvalidKey("wrong length".to_string()).to_string(),
        "Invalid key: wrong length"
    );
}

#[test]
fn crypto_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(CryptoError::InvalidKey("k".to_string()));
    assert!(err.source().is_none());
}

// === GeneratorError Tests ===

#[test]
fn generator_error_display_variants() {
    assert_eq!(
        GeneratorError::InvalidPreferences("length 0".to_string()).to_string(),
        "Invalid generation preferences: length 0"
    );
    assert_eq!(
        GeneratorError::InsufficientBankSize { bank: 26, length: 30 }.to_string(),
        "Character bank of 26 cannot supply 30 distinct characters"
    );
    assert_eq!(
        GeneratorError::RandomGeneration("rng down".to_string()).to_string(),
        "Random generation failed: rng down"
    );
}

#[test]
fn generator_error_from_crypto_error() {
    let err: GeneratorError = CryptoError::RandomGeneration("no entropy".to_string()).into();
    assert_eq!(
        err,
        GeneratorError::RandomGeneration("Random generation failed: no entropy".to_string())
    );
}

// === SecretStoreError Tests ===

#[test]
fn secret_store_error_display() {
    assert_eq!(
        SecretStoreError::Backend("locked".to_string()).to_string(),
        "Secret store error: locked"
    );
}

// === VaultError Tests ===

#[test]
fn vault_error_display_variants() {
    assert_eq!(
        VaultError::InvalidIdentifier("empty".to_string()).to_string(),
        "Invalid identifier: empty"
    );
    assert_eq!(
        VaultError::KeyNotFound("alice".to_string()).to_string(),
        "No saved credential or key unavailable: alice"
    );
    assert_eq!(
        VaultError::RecordNotFound("bob".to_string()).to_string(),
        "No saved credential: bob"
    );
    assert_eq!(
        VaultError::EncryptionFailed("seal".to_string()).to_string(),
        "Encryption failed: seal"
    );
    assert_eq!(
        VaultError::DecryptionFailed("tag".to_string()).to_string(),
        "Decryption failed: tag"
    );
    assert_eq!(
        VaultError::IoError("disk full".to_string()).to_string(),
        "Vault I/O error: disk full"
    );
}

#[test]
fn vault_error_not_found_classification() {
    assert!(VaultError::KeyNotFound("a".to_string()).is_not_found());
    assert!(VaultError::RecordNotFound("a".to_string()).is_not_found());
    assert!(!VaultError::DecryptionFailed("a".to_string()).is_not_found());
    assert!(!VaultError::IoError("a".to_string()).is_not_found());
    assert!(!VaultError::InvalidIdentifier("a".to_string()).is_not_found());
}

#[test]
fn vault_error_from_secret_store_error() {
    let err: VaultError = SecretStoreError::Backend("dbus".to_string()).into();
    match err {
        VaultError::IoError(msg) => assert_eq!(msg, "Secret store error: dbus"),
        other => panic!("expected IoError, got {:?}", other),
    }
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("file not found".to_string()).to_string(),
        "Settings I/O error: file not found"
    );
    assert_eq!(
        SettingsError::SerializationError("invalid json".to_string()).to_string(),
        "Settings serialization error: invalid json"
    );
    assert_eq!(
        SettingsError::InvalidKey("foo.bar".to_string()).to_string(),
        "Invalid settings key: foo.bar"
    );
    assert_eq!(
        SettingsError::InvalidValue("expected bool".to_string()).to_string(),
        "Invalid settings value: expected bool"
    );
}

#[test]
fn all_errors_are_debug() {
    let debug = format!("{:?}", VaultError::KeyNotFound("x".to_string()));
    assert!(debug.contains("KeyNotFound"));
    let debug = format!("{:?}", SettingsError::InvalidKey("y".to_string()));
    assert!(debug.contains("InvalidKey"));
}
