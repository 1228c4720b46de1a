// SecuroPass platform paths for macOS
// Config and data: ~/Library/Application Support/SecuroPass

use std::env;
use std::path::PathBuf;

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns the configuration directory for SecuroPass on macOS.
pub fn get_config_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("SecuroPass")
}

/// Returns the data directory for SecuroPass on macOS (same as config).
pub fn get_data_dir() -> PathBuf {
    get_config_dir()
}
