// src/infra/paths.rs - Config file location
//
// WEATHERBOT_HOME overrides the config directory. When unset, config
// lives in ~/.weatherbot/.

use std::path::PathBuf;

/// Returns the WEATHERBOT_HOME override, if set.
fn weatherbot_home() -> Option<PathBuf> {
    std::env::var_os("WEATHERBOT_HOME").map(PathBuf::from)
}

/// Configuration directory: $WEATHERBOT_HOME/ or ~/.weatherbot/
pub fn config_dir() -> Option<PathBuf> {
    if let Some(home) = weatherbot_home() {
        return Some(home);
    }
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().join(".weatherbot"))
}

/// Config file path
pub fn config_file_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}
