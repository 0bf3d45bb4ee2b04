use std::path::PathBuf;

use battwatch_bridge::config::Config;
use directories::ProjectDirs;
use tokio::{
    fs::{OpenOptions, create_dir_all, read_to_string},
    io::AsyncWriteExt,
};

/// Errors that can occur while loading the application configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to determine the user's configuration directory. This usually
    /// occurs when required environment variables are missing (e.g., `$HOME`
    /// on Unix).
    #[error("failed to obtain user's directories")]
    DirectoriesNotFound,
    /// An I/O error occurred while reading or writing the configuration file.
    #[error("failed to read config: {0}")]
    IoError(#[from] std::io::Error),
    /// The configuration file contains invalid TOML or does not match the expected structure.
    #[error("failed to deserialize config: {0}")]
    DeserializeError(#[from] toml::de::Error),
    /// Failed to serialize the default configuration to TOML.
    #[error("failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

fn config_path() -> Result<PathBuf, ConfigError> {
    match ProjectDirs::from("dev", "battwatch", "battwatch") {
        Some(path) => Ok(path.config_dir().join("config.toml")),
        None => Err(ConfigError::DirectoriesNotFound),
    }
}

/// Loads the application configuration from disk, writing a default
/// `config.toml` on first run.
pub async fn load_config() -> Result<Config, ConfigError> {
    let config_path = config_path()?;

    log::info!("Loading configuration from {config_path:?}");
    if config_path.exists() {
        let contents = read_to_string(config_path).await?;
        let config: Config = toml::from_str(&contents)?;
        return Ok(config);
    }

    let config = Config::default();
    if let Some(parent) = config_path.parent() {
        create_dir_all(parent).await?;
    }

    let contents = toml::to_string_pretty(&config)?;
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(config_path)
        .await?;
    file.write_all(contents.as_bytes()).await?;
    file.sync_all().await?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use battwatch_bridge::config::Config;

    #[test]
    fn default_config_round_trips_through_toml() {
        let serialized = toml::to_string_pretty(&Config::default()).expect("serializes");
        let parsed: Config = toml::from_str(&serialized).expect("parses back");

        assert_eq!(parsed.battery.supply_name, "BAT0");
        assert_eq!(parsed.battery.poll_interval_secs, 2);
        assert_eq!(parsed.notifier.usb_current_threshold_ma, 100);
        assert_eq!(parsed.notifier.debounce_secs, 5);
        assert_eq!(parsed.low_battery.unlocked_interval_secs, 300);
        assert_eq!(parsed.low_battery.locked_interval_secs, 1800);
        assert!(parsed.led.device.is_none());
    }
}
