//! Configuration system for dirinfo.
//!
//! This module provides layered configuration with support for:
//! - A YAML configuration file (`~/.dirinfo/config.yaml`, or the file named
//!   by `DIRINFO_CONFIG`)
//! - Environment variable overrides (`DIRINFO_*`)
//! - Programmatic configuration via builder pattern
//! - Validation
//!
//! # Configuration Precedence
//!
//! Highest to lowest:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`DIRINFO_WIDTH`, `DIRINFO_TIME_FORMAT`,
//!    `DIRINFO_PRESERVE_CASE`)
//! 3. Configuration file
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use dirinfo::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! println!("width override: {:?}", config.width);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::Config;
pub use validator::ConfigValidator;
