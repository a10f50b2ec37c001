// Environment access
// Process-level facilities: core count, exit and halt

use std::convert::Infallible;
use std::io::Write;
use std::num::NonZeroUsize;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use bedrock_error::{environment_failure, load_toml, ConfigError, SoftResult};

/// Status used by [`Environment::exit_default`] unless configured otherwise.
pub const DEFAULT_EXIT_STATUS: i32 = 0;

/// Status used by [`Environment::halt_default`] unless configured otherwise.
pub const DEFAULT_HALT_STATUS: i32 = 0;

/// Default statuses for exit and halt.
///
/// ```toml
/// exit_status = 0
/// halt_status = 3
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    pub exit_status: i32,
    pub halt_status: i32,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            exit_status: DEFAULT_EXIT_STATUS,
            halt_status: DEFAULT_HALT_STATUS,
        }
    }
}

impl EnvironmentConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        load_toml(source)
    }
}

/// Access to the running process.
///
/// Every method has a default; implementors usually override
/// [`Environment::authorize_exit`] to restrict termination, or
/// [`Environment::config`] to change the default statuses.
pub trait Environment: Send + Sync {
    fn config(&self) -> EnvironmentConfig {
        EnvironmentConfig::default()
    }

    /// Number of cores available to the process, at least one.
    fn available_cores(&self) -> usize {
        std::thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1)
    }

    /// Decide whether the process may terminate with `code`.
    /// The rejection becomes the cause of the resulting failure.
    fn authorize_exit(&self, _code: i32) -> anyhow::Result<()> {
        Ok(())
    }

    /// Terminate the process after flushing standard output and error.
    ///
    /// Only returns if termination was refused.
    fn exit(&self, code: i32) -> SoftResult<Infallible> {
        self.authorize_exit(code).map_err(environment_failure)?;
        tracing::info!(code, "Exiting process");
        flush_logged("stdout", &mut std::io::stdout());
        flush_logged("stderr", &mut std::io::stderr());
        std::process::exit(code)
    }

    fn exit_default(&self) -> SoftResult<Infallible> {
        self.exit(self.config().exit_status)
    }

    /// Terminate the process immediately, without flushing buffered output.
    ///
    /// Only returns if termination was refused.
    fn halt(&self, code: i32) -> SoftResult<Infallible> {
        self.authorize_exit(code).map_err(environment_failure)?;
        tracing::warn!(code, "Halting process");
        std::process::exit(code)
    }

    fn halt_default(&self) -> SoftResult<Infallible> {
        self.halt(self.config().halt_status)
    }
}

/// Flush `stream`, logging a failure instead of dropping it.
/// Returns whether the flush succeeded.
pub(crate) fn flush_logged(name: &str, stream: &mut dyn Write) -> bool {
    match stream.flush() {
        Ok(()) => true,
        Err(error) => {
            tracing::warn!(stream = name, %error, "Failed to flush before exit");
            false
        }
    }
}

/// The environment with every default behaviour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultEnvironment {
    config: EnvironmentConfig,
}

impl DefaultEnvironment {
    pub fn new(config: EnvironmentConfig) -> Self {
        Self { config }
    }
}

impl Environment for DefaultEnvironment {
    fn config(&self) -> EnvironmentConfig {
        self.config
    }
}

static DEFAULT_ENVIRONMENT: Lazy<DefaultEnvironment> = Lazy::new(DefaultEnvironment::default);

/// The process-wide default environment, created on first use.
pub fn default_environment() -> &'static DefaultEnvironment {
    &DEFAULT_ENVIRONMENT
}

#[cfg(test)]
mod tests {
    use super::*;
    use bedrock_error::{SoftKind, Throwable};
    use std::sync::atomic::{AtomicI32, Ordering};

    /// Refuses every termination and remembers the last requested code.
    struct Sandbox {
        requested: AtomicI32,
        config: EnvironmentConfig,
    }

    impl Environment for Sandbox {
        fn config(&self) -> EnvironmentConfig {
            self.config
        }

        fn authorize_exit(&self, code: i32) -> anyhow::Result<()> {
            self.requested.store(code, Ordering::SeqCst);
            anyhow::bail!("termination with status {code} is not permitted")
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "reader went away"))
        }
    }

    #[test]
    fn test_flush_failure_is_reported() {
        crate::init_test_logging();
        assert!(!flush_logged("stdout", &mut BrokenPipe));
        assert!(flush_logged("buffer", &mut Vec::<u8>::new()));
    }

    fn sandbox() -> Sandbox {
        Sandbox {
            requested: AtomicI32::new(-1),
            config: EnvironmentConfig { exit_status: 4, halt_status: 9 },
        }
    }

    #[test]
    fn test_denied_exit_wraps_cause() {
        let env = sandbox();
        let failure = env.exit(2).unwrap_err();
        assert_eq!(failure.kind(), SoftKind::Environment);
        assert_eq!(
            failure.chained_cause().map(|c| c.to_string()),
            Some("termination with status 2 is not permitted".to_string())
        );
    }

    #[test]
    fn test_defaults_use_config() {
        let env = sandbox();
        assert!(env.exit_default().is_err());
        assert_eq!(env.requested.load(Ordering::SeqCst), 4);
        assert!(env.halt_default().is_err());
        assert_eq!(env.requested.load(Ordering::SeqCst), 9);
    }

    #[test]
    fn test_available_cores() {
        assert!(default_environment().available_cores() >= 1);
    }

    #[test]
    fn test_default_environment_is_shared() {
        assert!(std::ptr::eq(default_environment(), default_environment()));
        assert_eq!(default_environment().config(), EnvironmentConfig::default());
    }

    #[test]
    fn test_config_from_toml() {
        let config = EnvironmentConfig::from_toml_str("halt_status = 3").unwrap();
        assert_eq!(config, EnvironmentConfig { exit_status: 0, halt_status: 3 });
        assert!(EnvironmentConfig::from_toml_str("exit_status = \"x\"").is_err());
    }
}
