// Failure traits
// The interface every Bedrock failure exposes to diagnostics and callers

use std::any::Any;
use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;

use crate::report::FailureReport;
use crate::{Cause, Checking, Severity};

/// Base trait for all failures in the Bedrock crates.
pub trait Throwable: StdError + fmt::Debug + fmt::Display + Send + Sync + Any + 'static {
    /// Returns a unique static string code for this failure's kind.
    fn error_code(&self) -> &'static str;

    /// Human-readable name of the failure's kind.
    fn kind_name(&self) -> &'static str;

    /// The message given at construction, if any.
    fn message(&self) -> Option<&str>;

    /// The failure this one wraps, if any.
    fn chained_cause(&self) -> Option<&Cause>;

    fn checking(&self) -> Checking;

    fn severity(&self) -> Severity;

    /// Whether failures attached later are recorded.
    fn is_suppression_enabled(&self) -> bool;

    /// Whether a backtrace was captured at construction.
    fn is_writable(&self) -> bool;

    fn backtrace(&self) -> Option<&Backtrace>;

    /// A snapshot of the failures attached so far, in attachment order.
    fn suppressed(&self) -> Vec<Cause>;

    /// Indicates whether callers are expected to recover from this failure.
    fn is_recoverable(&self) -> bool {
        self.severity() == Severity::Exception
    }

    /// Captures a serializable snapshot for logs and diagnostics.
    fn report(&self) -> FailureReport
    where
        Self: Sized,
    {
        FailureReport::capture(self)
    }

    /// Returns this failure as a `&dyn Any` to allow downcasting.
    fn as_any(&self) -> &dyn Any;
}
