// SecuroPass platform paths for Linux
// Config: ~/.config/securopass
// Data:   ~/.local/share/securopass

use std::env;
use std::path::PathBuf;

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns the configuration directory for SecuroPass on Linux.
/// Uses `$XDG_CONFIG_HOME/securopass` if set, otherwise `~/.config/securopass`.
pub fn get_config_dir() -> PathBuf {
    match env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join("securopass"),
        _ => home_dir().join(".config").join("securopass"),
    }
}

/// Returns the data directory for SecuroPass on Linux.
/// Uses `$XDG_DATA_HOME/securopass` if set, otherwise `~/.local/share/securopass`.
pub fn get_data_dir() -> PathBuf {
    match env::var("XDG_DATA_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join("securopass"),
        _ => home_dir().join(".local").join("share").join("securopass"),
    }
}
