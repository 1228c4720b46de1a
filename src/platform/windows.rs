// SecuroPass platform paths for Windows
// Config and data: %APPDATA%/SecuroPass

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for SecuroPass on Windows.
/// `%APPDATA%/SecuroPass`
pub fn get_config_dir() -> PathBuf {
    let appdata = env::var("APPDATA")
        .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("SecuroPass")
}

/// Returns the data directory for SecuroPass on Windows (same as config).
pub fn get_data_dir() -> PathBuf {
    get_config_dir()
}
