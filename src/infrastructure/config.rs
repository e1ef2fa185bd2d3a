use std::path::PathBuf;
use std::time::Duration;

use config::ConfigError;
use serde::Deserialize;

use crate::{core::state::DEFAULT_INITIAL_ROWS, infrastructure::relay, utils};

const CONFIG: &str = include_str!("../../.config/config.json5");

const CONFIG_FILES: [(&str, config::FileFormat); 5] = [
    ("config.json5", config::FileFormat::Json5),
    ("config.json", config::FileFormat::Json),
    ("config.yaml", config::FileFormat::Yaml),
    ("config.toml", config::FileFormat::Toml),
    ("config.ini", config::FileFormat::Ini),
];

#[derive(Clone, Deserialize)]
pub struct Config {
    /// Hex secret key used to prefill the form
    #[serde(default)]
    pub privatekey: String,
    /// Relay URL used to prefill the form
    #[serde(default)]
    pub relay: String,
    #[serde(default = "default_initial_rows")]
    pub initial_rows: usize,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

fn default_initial_rows() -> usize {
    DEFAULT_INITIAL_ROWS
}

fn default_connect_timeout_secs() -> u64 {
    relay::DEFAULT_CONNECT_TIMEOUT_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            privatekey: String::new(),
            relay: String::new(),
            initial_rows: default_initial_rows(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

// Keeps the private key out of logs and panic reports
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("privatekey", &"[REDACTED]")
            .field("relay", &self.relay)
            .field("initial_rows", &self.initial_rows)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

impl Config {
    /// Loads the embedded defaults, then any config file found in the config directory
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_from(utils::get_config_dir())
    }

    pub fn load_from(config_dir: PathBuf) -> Result<Self, ConfigError> {
        let default_config: Config = json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))?;
        let mut builder = config::Config::builder()
            .set_default("privatekey", default_config.privatekey)?
            .set_default("relay", default_config.relay)?
            .set_default("initial_rows", default_config.initial_rows as u64)?
            .set_default("connect_timeout_secs", default_config.connect_timeout_secs)?;

        let mut found_config = false;
        for (file, format) in &CONFIG_FILES {
            let path = config_dir.join(file);
            if path.exists() {
                found_config = true;
            }
            builder = builder.add_source(config::File::from(path).format(*format).required(false));
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        builder.build()?.try_deserialize()
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn temp_config_dir(name: &str) -> std::io::Result<PathBuf> {
        let dir = std::env::temp_dir().join(format!(
            "nostform-config-test-{name}-{}",
            std::process::id()
        ));
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    #[test]
    fn test_embedded_defaults_parse() -> color_eyre::Result<()> {
        let config: Config = json5::from_str(CONFIG)?;

        assert_eq!(config.initial_rows, 2);
        assert_eq!(config.connect_timeout_secs, 10);
        assert!(config.privatekey.is_empty());
        assert!(config.relay.is_empty());

        Ok(())
    }

    #[test]
    fn test_load_without_files_uses_defaults() -> color_eyre::Result<()> {
        let dir = temp_config_dir("empty")?;

        let config = Config::load_from(dir.clone())?;

        assert_eq!(config.initial_rows, 2);
        assert_eq!(config.connect_timeout(), Duration::from_secs(10));

        fs::remove_dir_all(dir)?;
        Ok(())
    }

    #[test]
    fn test_user_file_overrides_defaults() -> color_eyre::Result<()> {
        let dir = temp_config_dir("override")?;
        fs::write(
            dir.join("config.json5"),
            r#"{ relay: "wss://relay.example.com", initial_rows: 5 }"#,
        )?;

        let config = Config::load_from(dir.clone())?;

        assert_eq!(config.relay, "wss://relay.example.com");
        assert_eq!(config.initial_rows, 5);
        assert_eq!(config.connect_timeout_secs, 10);

        fs::remove_dir_all(dir)?;
        Ok(())
    }

    #[test]
    fn test_debug_redacts_private_key() {
        let config = Config {
            privatekey: "deadbeef".to_string(),
            ..Default::default()
        };

        let debug = format!("{config:?}");

        assert!(!debug.contains("deadbeef"));
        assert!(debug.contains("[REDACTED]"));
    }
}
