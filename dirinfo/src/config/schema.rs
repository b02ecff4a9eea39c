//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Complete configuration structure.
///
/// Every field is optional so that sources can be layered; unset fields fall
/// back to built-in defaults when the listing options are derived.
///
/// # Examples
///
/// ```
/// use dirinfo::config::Config;
///
/// let config: Config = serde_yaml::from_str("width: 100\npreserve_case: true\n").unwrap();
/// assert_eq!(config.width, Some(100));
/// assert_eq!(config.preserve_case, Some(true));
/// assert_eq!(config.timestamp_format, None);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Fixed output width in columns, overriding the terminal query.
    pub width: Option<usize>,

    /// `strftime` format for timestamps.
    pub timestamp_format: Option<String>,

    /// Keep the argument's case instead of lower-casing it.
    pub preserve_case: Option<bool>,
}
