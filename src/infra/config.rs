// src/infra/config.rs - Configuration loading (TOML)

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::infra::paths;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub weather: WeatherConfig,

    #[serde(default)]
    pub telegram: TelegramConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub base_url: String,
    /// Language for condition text in current-weather replies.
    pub lang: String,
    pub timeout_secs: u64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.weatherapi.com/v1".into(),
            lang: "en".into(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TelegramConfig {
    pub api_base: String,
    /// Long-poll timeout passed to getUpdates.
    pub poll_timeout_secs: u64,
    /// Register /start and /help with setMyCommands on startup.
    pub register_commands: bool,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.telegram.org".into(),
            poll_timeout_secs: 30,
            register_commands: true,
        }
    }
}

impl Config {
    /// Load config from file, falling back to defaults.
    pub fn load() -> anyhow::Result<Self> {
        match paths::config_file_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_reasonable() {
        let c = Config::default();
        assert_eq!(c.weather.base_url, "https://api.weatherapi.com/v1");
        assert_eq!(c.weather.lang, "en");
        assert_eq!(c.weather.timeout_secs, 10);
        assert_eq!(c.telegram.api_base, "https://api.telegram.org");
        assert_eq!(c.telegram.poll_timeout_secs, 30);
        assert!(c.telegram.register_commands);
    }

    #[test]
    fn test_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.weather.timeout_secs, 10);
        assert_eq!(config.telegram.poll_timeout_secs, 30);
    }

    #[test]
    fn test_parse_partial_section() {
        let toml_str = r#"
[weather]
lang = "ru"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.weather.lang, "ru");
        assert_eq!(config.weather.base_url, "https://api.weatherapi.com/v1");
        assert_eq!(config.weather.timeout_secs, 10);
    }

    #[test]
    fn test_parse_full_toml() {
        let toml_str = r#"
[weather]
base_url = "http://localhost:8080/v1"
lang = "de"
timeout_secs = 5

[telegram]
api_base = "http://localhost:8081"
poll_timeout_secs = 50
register_commands = false
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.weather.base_url, "http://localhost:8080/v1");
        assert_eq!(config.weather.lang, "de");
        assert_eq!(config.weather.timeout_secs, 5);
        assert_eq!(config.telegram.api_base, "http://localhost:8081");
        assert_eq!(config.telegram.poll_timeout_secs, 50);
        assert!(!config.telegram.register_commands);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[telegram]\npoll_timeout_secs = 5").unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.telegram.poll_timeout_secs, 5);
        assert_eq!(config.weather.lang, "en");
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = Config::load_from(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let result: Result<Config, _> = toml::from_str("[weather\nlang = ");
        assert!(result.is_err());
    }
}
