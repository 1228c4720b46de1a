//! Integration-level unit tests for the SettingsEngine public API.
//!
//! These tests exercise the SettingsEngine through its public trait interface,
//! validating default loading, value persistence, reset behavior and how the
//! ciphertext store path is resolved.

use std::path::PathBuf;

use securopass::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use securopass::types::credential::SamplingPolicy;
use securopass::types::errors::SettingsError;
use securopass::types::settings::{VaultSettings, STORE_FILE_NAME};
use tempfile::TempDir;

/// Helper: create a SettingsEngine backed by a temp directory that lives for the
/// duration of the test (the caller holds the `TempDir` handle).
fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    let path = dir
        .path()
        .join("settings.json")
        .to_string_lossy()
        .to_string();
    SettingsEngine::new(Some(path))
}

/// With no config file on disk, `load()` returns the built-in defaults.
#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let settings = engine.load().unwrap();

    assert_eq!(settings, VaultSettings::default());
    assert_eq!(settings.generator.length, 16);
    assert_eq!(settings.storage.service_name, "SecuroPass");
}

/// A value set through one engine is visible to a fresh engine on the same file.
#[test]
fn test_set_value_persists_changes() {
    let dir = TempDir::new().unwrap();

    {
        let mut engine = engine_in_temp(&dir);
        engine.load().unwrap();
        engine
            .set_value("generator.length", serde_json::json!(24))
            .unwrap();
        engine
            .set_value("generator.sampling", serde_json::json!("WithoutReplacement"))
            .unwrap();
    }

    let mut engine2 = engine_in_temp(&dir);
    let loaded = engine2.load().unwrap();
    assert_eq!(loaded.generator.length, 24);
    assert_eq!(loaded.generator.sampling, SamplingPolicy::WithoutReplacement);
}

#[test]
fn test_reset_restores_defaults() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    engine
        .set_value("generator.symbols", serde_json::json!(false))
        .unwrap();
    engine
        .set_value("storage.service_name", serde_json::json!("Work"))
        .unwrap();
    engine.reset().unwrap();

    assert_eq!(*engine.get_settings(), VaultSettings::default());

    let mut reread = engine_in_temp(&dir);
    assert_eq!(reread.load().unwrap(), VaultSettings::default());
}

#[test]
fn test_unknown_key_rejected() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    assert!(matches!(
        engine.set_value("generator.colour", serde_json::json!(1)),
        Err(SettingsError::InvalidKey(_))
    ));
    assert!(matches!(
        engine.set_value("", serde_json::json!(1)),
        Err(SettingsError::InvalidKey(_))
    ));
}

#[test]
fn test_wrong_type_rejected_and_state_kept() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    assert!(matches!(
        engine.set_value("generator.length", serde_json::json!("long")),
        Err(SettingsError::InvalidValue(_))
    ));
    assert_eq!(engine.get_settings().generator.length, 16);
}

#[test]
fn test_malformed_config_is_serialization_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("settings.json"), "not json").unwrap();

    let mut engine = engine_in_temp(&dir);
    assert!(matches!(
        engine.load(),
        Err(SettingsError::SerializationError(_))
    ));
}

#[test]
fn test_store_path_resolution() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    let default_path = engine.resolve_store_path();
    assert_eq!(
        default_path.file_name().and_then(|n| n.to_str()),
        Some(STORE_FILE_NAME)
    );

    let custom = dir.path().join("elsewhere.json");
    engine
        .set_value(
            "storage.store_path",
            serde_json::json!(custom.to_string_lossy()),
        )
        .unwrap();
    assert_eq!(engine.resolve_store_path(), custom);

    // An empty string falls back to the default location.
    engine
        .set_value("storage.store_path", serde_json::json!(""))
        .unwrap();
    assert_eq!(engine.resolve_store_path(), default_path);
}

#[test]
fn test_config_path_is_reported() {
    let dir = TempDir::new().unwrap();
    let engine = engine_in_temp(&dir);
    assert_eq!(
        PathBuf::from(engine.get_config_path()),
        dir.path().join("settings.json")
    );
}

/// Values written with `set_value` read back through `get_value` and survive
/// a fresh engine on the same file.
#[test]
fn test_get_value_reflects_set_value() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    engine
        .set_value("storage.service_name", serde_json::json!("Work"))
        .unwrap();
    assert_eq!(
        engine.get_value("storage.service_name").unwrap(),
        serde_json::json!("Work")
    );

    let mut reread = engine_in_temp(&dir);
    reread.load().unwrap();
    assert_eq!(
        reread.get_value("storage.service_name").unwrap(),
        serde_json::json!("Work")
    );
    assert!(matches!(
        reread.get_value("storage.missing"),
        Err(SettingsError::InvalidKey(_))
    ));
}
