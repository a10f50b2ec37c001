// Cause conversion utilities
// Provides tools for turning foreign errors and plain text into chainable causes

use std::error::Error as StdError;
use std::sync::Arc;

use thiserror::Error;

use crate::{Cause, Throwable};

/// Trait for converting any error-like value into a [`Cause`]
pub trait IntoCause {
    /// Convert the value into a shareable cause
    fn into_cause(self) -> Cause;
}

// Implement for anything that already implements Throwable
impl<E: Throwable> IntoCause for E {
    fn into_cause(self) -> Cause {
        Arc::new(self)
    }
}

impl IntoCause for Cause {
    fn into_cause(self) -> Cause {
        self
    }
}

impl IntoCause for Box<dyn StdError + Send + Sync + 'static> {
    fn into_cause(self) -> Cause {
        Arc::from(self)
    }
}

impl IntoCause for std::io::Error {
    fn into_cause(self) -> Cause {
        Arc::new(self)
    }
}

impl IntoCause for serde_json::Error {
    fn into_cause(self) -> Cause {
        Arc::new(self)
    }
}

impl IntoCause for anyhow::Error {
    fn into_cause(self) -> Cause {
        let boxed: Box<dyn StdError + Send + Sync + 'static> = self.into();
        Arc::from(boxed)
    }
}

impl IntoCause for ExternalError {
    fn into_cause(self) -> Cause {
        Arc::new(self)
    }
}

// Implement for string types
impl IntoCause for String {
    fn into_cause(self) -> Cause {
        Arc::new(ExternalError(self))
    }
}

impl IntoCause for &str {
    fn into_cause(self) -> Cause {
        Arc::new(ExternalError(self.to_string()))
    }
}

/// A cause that originates outside the taxonomy and only carries text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ExternalError(pub String);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SoftFailure, SoftKind};

    #[test]
    fn test_text_causes() {
        assert_eq!("plain".into_cause().to_string(), "plain");
        assert_eq!(String::from("owned").into_cause().to_string(), "owned");
    }

    #[test]
    fn test_io_cause_keeps_message() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "no access");
        assert_eq!(io.into_cause().to_string(), "no access");
    }

    #[test]
    fn test_anyhow_cause() {
        let cause = anyhow::anyhow!("from anyhow").into_cause();
        assert_eq!(cause.to_string(), "from anyhow");
    }

    #[test]
    fn test_failure_cause_downcasts() {
        let cause = SoftFailure::new(SoftKind::Get).into_cause();
        let failure = cause.downcast_ref::<SoftFailure>().expect("soft failure");
        assert_eq!(failure.kind(), SoftKind::Get);
    }
}
