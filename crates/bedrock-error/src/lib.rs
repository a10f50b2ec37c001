// Bedrock Failure Taxonomy
// Central location for failure kinds, failure types, and handling utilities

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

// Re-export common error handling tools for convenience
pub use anyhow;
pub use thiserror;

// Module structure
mod common;
mod config;
mod conversion;
mod failure;
mod kind;
mod macros;
mod report;
mod traits;

// Public exports (Consolidated)
pub use common::*;
pub use config::{load_toml, ConfigError, FailurePolicy, DEFAULT_SUPPRESSION, DEFAULT_WRITABLE};
pub use conversion::{ExternalError, IntoCause};
pub use failure::{SoftFailure, StrictFailure};
pub use kind::{fill_template, SoftKind, StrictKind};
pub use report::FailureReport;
pub use traits::Throwable;

#[doc(hidden)]
pub mod __private {
    pub use tracing;
}

/// Whether the calling code is forced to acknowledge a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Checking {
    /// Unchecked: may propagate through any soft channel with `?`.
    Soft,
    /// Checked: must be acknowledged before it can travel further.
    Strict,
}

impl fmt::Display for Checking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Checking::Soft => write!(f, "soft"),
            Checking::Strict => write!(f, "strict"),
        }
    }
}

/// How severe a failure is considered to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Severity {
    /// Expected to be recovered from by a caller.
    Exception,
    /// Severe enough that the recommended response is process termination.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Exception => write!(f, "exception"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A chained or suppressed failure. Shared so that the suppressed list can
/// be read while other threads keep appending to it.
pub type Cause = Arc<dyn StdError + Send + Sync + 'static>;

/// Result type for operations that may fail softly
pub type SoftResult<T> = std::result::Result<T, SoftFailure>;

/// Result type for operations whose failures must be acknowledged
pub type StrictResult<T> = std::result::Result<T, StrictFailure>;
