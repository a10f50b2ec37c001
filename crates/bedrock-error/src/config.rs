// Failure policy configuration
// Construction-time policy shared by every failure type, loadable from TOML

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Whether freshly constructed failures record suppressed failures.
pub const DEFAULT_SUPPRESSION: bool = false;

/// Whether freshly constructed failures capture a backtrace.
pub const DEFAULT_WRITABLE: bool = true;

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The TOML document could not be parsed into the requested type
    #[error("Configuration parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Suppression and trace policy applied when a failure is constructed.
///
/// ```toml
/// suppression = true
/// writable = false
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FailurePolicy {
    /// Record failures attached through `suppress`
    pub suppression: bool,
    /// Capture a backtrace at construction
    pub writable: bool,
}

impl Default for FailurePolicy {
    fn default() -> Self {
        Self {
            suppression: DEFAULT_SUPPRESSION,
            writable: DEFAULT_WRITABLE,
        }
    }
}

impl FailurePolicy {
    pub fn new(suppression: bool, writable: bool) -> Self {
        Self { suppression, writable }
    }

    /// Parse a policy from a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        load_toml(source)
    }
}

/// Deserialize any configuration type from a TOML document.
pub fn load_toml<T: DeserializeOwned>(source: &str) -> Result<T, ConfigError> {
    Ok(toml::from_str(source)?)
}
