//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use dirinfo::config::{Config, ConfigMerger};
///
/// let low = Config { width: Some(60), ..Default::default() };
/// let high = Config { width: Some(100), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.width, Some(100));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources given from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target; fields set in `source` win.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.width.is_some() {
            target.width = source.width;
        }

        if source.timestamp_format.is_some() {
            target.timestamp_format.clone_from(&source.timestamp_format);
        }

        if source.preserve_case.is_some() {
            target.preserve_case = source.preserve_case;
        }
    }
}
