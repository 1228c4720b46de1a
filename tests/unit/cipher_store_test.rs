//! Integration-level unit tests for the CipherStore file format and failure modes.

use std::fs;

use securopass::store::cipher_store::CipherMap;
use securopass::store::CipherStore;
use securopass::types::errors::VaultError;
use tempfile::TempDir;

fn sample_map() -> CipherMap {
    let mut map = CipherMap::new();
    map.insert("github".to_string(), "AQID".to_string());
    map.insert("email".to_string(), "BAUG".to_string());
    map
}

#[test]
fn test_file_is_a_flat_json_object() {
    let dir = TempDir::new().unwrap();
    let store = CipherStore::open(dir.path().join("sp.json"));
    store.write(&sample_map()).unwrap();

    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!({ "email": "BAUG", "github": "AQID" })
    );
}

#[test]
fn test_reads_file_written_by_hand() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sp.json");
    fs::write(&path, r#"{"alice":"token-1"}"#).unwrap();

    let store = CipherStore::open(&path);
    assert_eq!(store.get("alice").unwrap().as_deref(), Some("token-1"));
}

#[test]
fn test_malformed_contents_read_as_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sp.json");
    let store = CipherStore::open(&path);

    for contents in ["", "garbage", "[1,2,3]", r#"{"alice": 5}"#] {
        fs::write(&path, contents).unwrap();
        assert!(
            store.load().unwrap().is_empty(),
            "contents {contents:?} should read as empty"
        );
    }
}

#[test]
fn test_write_replaces_previous_contents() {
    let dir = TempDir::new().unwrap();
    let store = CipherStore::open(dir.path().join("sp.json"));
    store.write(&sample_map()).unwrap();

    let mut smaller = CipherMap::new();
    smaller.insert("only".to_string(), "one".to_string());
    store.write(&smaller).unwrap();

    assert_eq!(store.load().unwrap(), smaller);
}

#[test]
fn test_directory_in_place_of_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sp.json");
    fs::create_dir(&path).unwrap();
    let store = CipherStore::open(&path);

    assert!(matches!(store.load(), Err(VaultError::IoError(_))));
    assert!(matches!(
        store.write(&CipherMap::new()),
        Err(VaultError::IoError(_))
    ));
}
