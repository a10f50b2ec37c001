// Purpose: Tracing subscriber setup for applications and tests

use std::sync::Once;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

use bedrock_error::{load_toml, ConfigError};

/// Environment variable read before the configured directives.
pub const LOG_ENV: &str = "BEDROCK_LOG";

static TEST_INIT: Once = Once::new();

/// Subscriber settings.
///
/// ```toml
/// directives = "bedrock_function=debug,info"
/// json = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Filter directives used when `BEDROCK_LOG` is not set
    pub directives: String,
    /// Emit JSON lines instead of the compact format
    pub json: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            directives: "info".to_string(),
            json: false,
        }
    }
}

impl TelemetryConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        load_toml(source)
    }

    /// Filter from `BEDROCK_LOG`, falling back to the configured directives.
    pub fn filter(&self) -> Result<EnvFilter> {
        match EnvFilter::try_from_env(LOG_ENV) {
            Ok(filter) => Ok(filter),
            Err(_) => Ok(EnvFilter::try_new(&self.directives)?),
        }
    }
}

//-----------------------------------------------------------------------------
// Tracing Initialization
//-----------------------------------------------------------------------------

/// Installs the global tracing subscriber.
///
/// Bedrock only emits events, never spans, so no span events are configured.
/// Fails if the directives are invalid or a global subscriber is already set.
pub fn init_tracing(config: &TelemetryConfig) -> Result<()> {
    let subscriber = Registry::default().with(config.filter()?);

    if config.json {
        let layer = fmt::layer().json().flatten_event(true);
        tracing::subscriber::set_global_default(subscriber.with(layer))?;
    } else {
        let layer = fmt::layer().compact().with_target(true);
        tracing::subscriber::set_global_default(subscriber.with(layer))?;
    }

    Ok(())
}

/// Initialize debug-level logging routed through the test writer, once per
/// test binary. Later calls do nothing.
pub fn init_test_logging() {
    TEST_INIT.call_once(|| {
        let filter = TelemetryConfig {
            directives: "debug".to_string(),
            json: false,
        }
        .filter()
        .unwrap_or_else(|_| EnvFilter::new("debug"));
        let subscriber = Registry::default().with(filter).with(fmt::layer().with_test_writer());
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_test_logging_is_idempotent() {
        init_test_logging();
        init_test_logging();
        tracing::debug!("Test logging initialized");
    }

    #[test]
    fn test_init_tracing_rejects_second_subscriber() {
        init_test_logging();
        let config = TelemetryConfig {
            json: true,
            ..TelemetryConfig::default()
        };
        assert!(init_tracing(&config).is_err());
    }

    #[test]
    fn test_config_from_toml() {
        let config = TelemetryConfig::from_toml_str("directives = \"bedrock_function=debug,warn\"").unwrap();
        assert_eq!(config.directives, "bedrock_function=debug,warn");
        assert!(!config.json);
        assert_eq!(TelemetryConfig::from_toml_str("").unwrap(), TelemetryConfig::default());
    }

    #[test]
    fn test_invalid_directives_rejected() {
        if std::env::var_os(LOG_ENV).is_some() {
            return;
        }
        let config = TelemetryConfig {
            directives: "bedrock=notalevel".to_string(),
            json: false,
        };
        assert!(config.filter().is_err());
    }
}
