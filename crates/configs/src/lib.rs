//! # configs
//!
//! Layered settings: built-in defaults, then an optional `hicki.toml`, then
//! `HICKI__*` environment variables (`__` separates nesting levels, e.g.
//! `HICKI__STORAGE__DATA_DIR`). A `.env` file is loaded first when present.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Points at an explicit settings file instead of `./hicki.toml`.
pub const CONFIG_PATH_ENV: &str = "HICKI_CONFIG";

const ENV_PREFIX: &str = "HICKI";
const ENV_SEPARATOR: &str = "__";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid setting {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    pub storage: StorageSettings,
    pub identity: IdentitySettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StorageSettings {
    /// Directory the file slot writes into
    pub data_dir: PathBuf,
    /// Slot key of the listings snapshot
    pub items_key: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IdentitySettings {
    pub current_user_id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LogSettings {
    /// `EnvFilter` directive, e.g. `info,services=debug`
    pub filter: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Settings {
    /// Loads `.env`, then the layered sources from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "loaded .env"),
            Err(err) if err.not_found() => {}
            Err(err) => debug!(error = %err, "ignoring unreadable .env"),
        }
        let file = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
        Self::build(file.as_deref(), None)
    }

    /// Builds settings from an optional explicit file and, when `env` is
    /// given, that map in place of the process environment.
    pub fn build(
        file: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let file_source = match file {
            Some(path) => File::from(path).required(true),
            None => File::with_name("hicki").required(false),
        };

        let settings: Settings = Config::builder()
            .set_default("storage.data_dir", "./data")?
            .set_default("storage.items_key", "items.v1")?
            .set_default("identity.current_user_id", "u_me")?
            .set_default("log.filter", "info")?
            .set_default("log.json", false)?
            .add_source(file_source)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true)
                    .source(env),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.items_key.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "storage.items_key",
                reason: "must not be empty".into(),
            });
        }
        if self.identity.current_user_id.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "identity.current_user_id",
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}
