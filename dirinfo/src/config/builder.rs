//! Configuration builder.

use std::env;
use std::path::PathBuf;

use crate::config::environment::{EnvironmentConfig, CONFIG_ENV};
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds the effective configuration from all sources.
///
/// # Examples
///
/// ```
/// use dirinfo::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config { width: Some(72), ..Default::default() })
///     .build()
///     .unwrap();
/// assert_eq!(config.width, Some(72));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config_file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder that reads the user config file and the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `path` instead of the default user config file.
    #[must_use]
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Do not read any configuration file.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `DIRINFO_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Apply `config` on top of every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// The configuration file the builder would read, if any.
    ///
    /// An explicit file wins over `DIRINFO_CONFIG`, which wins over
    /// `~/.dirinfo/config.yaml`.
    #[must_use]
    pub fn config_path(&self) -> Option<PathBuf> {
        if self.skip_files {
            return None;
        }
        if let Some(ref path) = self.config_file {
            return Some(path.clone());
        }
        if !self.skip_env {
            if let Some(path) = env::var_os(CONFIG_ENV) {
                return Some(PathBuf::from(path));
            }
        }
        ConfigLoader::user_config_path()
    }

    /// Load, merge and validate the configuration.
    ///
    /// Precedence, lowest to highest: defaults, configuration file,
    /// environment variables, programmatic overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read or parsed,
    /// if an environment variable is invalid, or if validation fails.
    pub fn build(&self) -> Result<Config> {
        let mut sources = Vec::new();
        if let Some(path) = self.config_path() {
            if let Some(source) = ConfigLoader::load_optional(&path)? {
                log::debug!("loaded configuration from {}", source.path.display());
                sources.push(source);
            }
        }

        let mut config = ConfigMerger::merge(sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}
