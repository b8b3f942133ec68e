//! Configuration loader for roster-rs
//!
//! `ConfigLoader` stacks TOML files and environment variables with the
//! `config` crate and hands back validated `Settings`.

use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};

use crate::config::environment::Environment as AppEnvironment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable for configuration directory
const CONFIG_DIR_ENV: &str = "ROSTER_CONFIG_DIR";

/// Environment variable for specific configuration file
const CONFIG_FILE_ENV: &str = "ROSTER_CONFIG_FILE";

/// Plain connection string variable, used when no layer sets `database.url`
pub const MONGO_URI_ENV: &str = "MONGO_URI";

/// Default configuration directory
const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "ROSTER";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Layered configuration loader
///
/// Sources, lowest priority first:
/// 1. `default.toml` (required)
/// 2. `{environment}.toml` (optional)
/// 3. `local.toml` (optional)
/// 4. `ROSTER_*` environment variables
///
/// A single file given through `ROSTER_CONFIG_FILE` or [`ConfigLoader::from_file`]
/// replaces steps 1-3.
#[derive(Debug)]
pub struct ConfigLoader {
    config_dir: PathBuf,
    config_file: Option<PathBuf>,
    environment: AppEnvironment,
}

impl ConfigLoader {
    /// Create a loader from `ROSTER_CONFIG_DIR`, `ROSTER_CONFIG_FILE` and `ROSTER_APP_ENV`.
    ///
    /// # Errors
    ///
    /// Returns an error if both `ROSTER_CONFIG_DIR` and `ROSTER_CONFIG_FILE` are set.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = std::env::var(CONFIG_DIR_ENV).ok().map(PathBuf::from);
        let config_file = std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from);

        if config_file.is_some() && config_dir.is_some() {
            return Err(ConfigError::ConflictingSources(
                "ROSTER_CONFIG_DIR and ROSTER_CONFIG_FILE cannot both be set. \
                 Use ROSTER_CONFIG_DIR for layered configuration or \
                 ROSTER_CONFIG_FILE for a single configuration file."
                    .to_string(),
            ));
        }

        Ok(Self {
            config_dir: config_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR)),
            config_file,
            environment: AppEnvironment::from_env(),
        })
    }

    /// Create a loader that reads exactly one file (plus environment overrides).
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            config_file: Some(path.into()),
            environment: AppEnvironment::from_env(),
        }
    }

    /// Override the environment used to pick `{environment}.toml`.
    pub fn with_environment(mut self, environment: AppEnvironment) -> Self {
        self.environment = environment;
        self
    }

    pub fn environment(&self) -> AppEnvironment {
        self.environment
    }

    /// Load, apply the `MONGO_URI` fallback and validate.
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing, parsing fails or the
    /// merged settings do not validate.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let settings = self.load_unvalidated()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and apply the `MONGO_URI` fallback without validating, for
    /// callers that apply further overrides first.
    pub fn load_unvalidated(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        let mut settings: Settings = config.try_deserialize().map_err(|e| {
            ConfigError::Parse(format!("Failed to deserialize configuration: {}", e))
        })?;

        if settings.database.url.is_empty()
            && let Ok(uri) = std::env::var(MONGO_URI_ENV)
            && !uri.is_empty()
        {
            settings.database.url = uri;
        }

        Ok(settings)
    }

    fn build_config(&self) -> Result<Config, ConfigError> {
        let builder = Config::builder();

        let builder = match &self.config_file {
            Some(config_file) => Self::add_file_source(builder, config_file, true)?,
            None => self.build_layered_config(builder)?,
        };

        // ROSTER_SERVER__PORT -> server.port
        let builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR)
                .ignore_empty(true)
                .try_parsing(true),
        );

        builder.build().map_err(ConfigError::from)
    }

    fn build_layered_config(
        &self,
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let default_path = self.config_dir.join("default.toml");
        let builder = Self::add_file_source(builder, &default_path, true)?;

        let env_path = self
            .config_dir
            .join(format!("{}.toml", self.environment.as_str()));
        let builder = Self::add_file_source(builder, &env_path, false)?;

        let local_path = self.config_dir.join("local.toml");
        Self::add_file_source(builder, &local_path, false)
    }

    fn add_file_source(
        builder: ConfigBuilder<DefaultState>,
        path: &Path,
        required: bool,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        if required && !path.exists() {
            return Err(ConfigError::MissingFile {
                path: path.to_path_buf(),
            });
        }

        let name = path.to_str().ok_or_else(|| {
            ConfigError::Parse(format!("Non UTF-8 configuration path: {}", path.display()))
        })?;

        Ok(builder.add_source(File::new(name, FileFormat::Toml).required(required)))
    }
}
