// Failure types
// The soft (unchecked) and strict (checked) failure carriers and their constructor matrix

use std::any::Any;
use std::backtrace::Backtrace;
use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

use parking_lot::Mutex;

use crate::config::{FailurePolicy, DEFAULT_SUPPRESSION, DEFAULT_WRITABLE};
use crate::conversion::IntoCause;
use crate::kind::{fill_template, SoftKind, StrictKind};
use crate::{Cause, Checking, Severity, SoftResult, Throwable};

/// State shared by both failure types. Message and cause never change after
/// construction; only the suppressed list grows.
#[derive(Debug)]
struct Trace {
    message: Option<Cow<'static, str>>,
    cause: Option<Cause>,
    suppression: bool,
    backtrace: Option<Backtrace>,
    suppressed: Mutex<Vec<Cause>>,
}

impl Trace {
    fn new(message: Option<Cow<'static, str>>, cause: Option<Cause>, suppression: bool, writable: bool) -> Self {
        Self {
            message,
            cause,
            suppression,
            backtrace: writable.then(Backtrace::capture),
            suppressed: Mutex::new(Vec::new()),
        }
    }

    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn StdError + 'static))
    }
}

/// Generates the public constructor matrix, `Display`, `Error` and
/// `Throwable` for a failure type wrapping a [`Trace`].
macro_rules! failure_type {
    ($failure:ident, $kind:ty) => {
        impl $failure {
            /// Construct with the kind's canned default message.
            pub fn new(kind: $kind) -> Self {
                Self::from_parts(
                    kind,
                    kind.default_message().map(Cow::Borrowed),
                    None,
                    DEFAULT_SUPPRESSION,
                    DEFAULT_WRITABLE,
                )
            }

            pub fn with_message(kind: $kind, message: impl Into<Cow<'static, str>>) -> Self {
                Self::from_parts(kind, Some(message.into()), None, DEFAULT_SUPPRESSION, DEFAULT_WRITABLE)
            }

            pub fn with_cause(kind: $kind, cause: impl IntoCause) -> Self {
                Self::from_parts(
                    kind,
                    kind.default_message().map(Cow::Borrowed),
                    Some(cause.into_cause()),
                    DEFAULT_SUPPRESSION,
                    DEFAULT_WRITABLE,
                )
            }

            pub fn with_message_and_cause(
                kind: $kind,
                message: impl Into<Cow<'static, str>>,
                cause: impl IntoCause,
            ) -> Self {
                Self::from_parts(
                    kind,
                    Some(message.into()),
                    Some(cause.into_cause()),
                    DEFAULT_SUPPRESSION,
                    DEFAULT_WRITABLE,
                )
            }

            /// Construct with the default message under an explicit suppression/trace policy.
            pub fn with_policy(kind: $kind, policy: FailurePolicy) -> Self {
                Self::from_parts(
                    kind,
                    kind.default_message().map(Cow::Borrowed),
                    None,
                    policy.suppression,
                    policy.writable,
                )
            }

            /// Construct with the kind's template filled with the offending entity's name.
            /// Kinds without a template fall back to their default message.
            pub fn templated(kind: $kind, subject: &str) -> Self {
                Self::templated_with(kind, &[subject])
            }

            /// Like [`Self::templated`] for two-subject templates such as equality checks.
            pub fn templated_pair(kind: $kind, primary: &str, secondary: &str) -> Self {
                Self::templated_with(kind, &[primary, secondary])
            }

            fn templated_with(kind: $kind, subjects: &[&str]) -> Self {
                let message = match kind.template() {
                    Some(template) => Some(Cow::Owned(fill_template(template, subjects))),
                    None => kind.default_message().map(Cow::Borrowed),
                };
                Self::from_parts(kind, message, None, DEFAULT_SUPPRESSION, DEFAULT_WRITABLE)
            }

            /// The single constructor every public constructor delegates to.
            pub(crate) fn from_parts(
                kind: $kind,
                message: Option<Cow<'static, str>>,
                cause: Option<Cause>,
                suppression: bool,
                writable: bool,
            ) -> Self {
                Self {
                    kind,
                    trace: Trace::new(message, cause, suppression, writable),
                }
            }

            pub fn kind(&self) -> $kind {
                self.kind
            }
        }

        impl fmt::Display for $failure {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match &self.trace.message {
                    Some(message) => f.write_str(message),
                    None => f.write_str(self.kind.name()),
                }
            }
        }

        impl StdError for $failure {
            fn source(&self) -> Option<&(dyn StdError + 'static)> {
                self.trace.source()
            }
        }

        impl Throwable for $failure {
            fn error_code(&self) -> &'static str {
                self.kind.code()
            }

            fn kind_name(&self) -> &'static str {
                self.kind.name()
            }

            fn message(&self) -> Option<&str> {
                self.trace.message.as_deref()
            }

            fn chained_cause(&self) -> Option<&Cause> {
                self.trace.cause.as_ref()
            }

            fn checking(&self) -> Checking {
                self.kind.checking()
            }

            fn severity(&self) -> Severity {
                self.kind.severity()
            }

            fn is_suppression_enabled(&self) -> bool {
                self.trace.suppression
            }

            fn is_writable(&self) -> bool {
                self.trace.backtrace.is_some()
            }

            fn backtrace(&self) -> Option<&Backtrace> {
                self.trace.backtrace.as_ref()
            }

            fn suppressed(&self) -> Vec<Cause> {
                self.trace.suppressed.lock().clone()
            }

            fn as_any(&self) -> &dyn Any {
                self
            }
        }
    };
}

//-----------------------------------------------------------------------------
// Soft failures
//-----------------------------------------------------------------------------

/// An unchecked failure. Every fallible operation in the Bedrock crates
/// returns one of these, so it travels through `?` without ceremony.
#[derive(Debug)]
pub struct SoftFailure {
    kind: SoftKind,
    trace: Trace,
}

failure_type!(SoftFailure, SoftKind);

impl SoftFailure {
    /// Whether this failure's kind is `ancestor` or one of its descendants.
    pub fn is(&self, ancestor: SoftKind) -> bool {
        self.kind.is_a(ancestor)
    }

    /// Attach secondary failures for diagnostics.
    ///
    /// `None` is rejected with a null failure. When suppression is disabled
    /// the failures are discarded. Returns how many failures were recorded.
    /// Appends from concurrent callers are serialized.
    pub fn suppress<I>(&self, failures: Option<I>) -> SoftResult<usize>
    where
        I: IntoIterator,
        I::Item: IntoCause,
    {
        let failures = failures.ok_or_else(|| SoftFailure::templated(SoftKind::Null, "suppressed failures"))?;
        Ok(self.append(failures.into_iter().map(IntoCause::into_cause)))
    }

    /// Attach a single secondary failure. Returns whether it was recorded.
    pub fn attach(&self, failure: impl IntoCause) -> bool {
        self.append(std::iter::once(failure.into_cause())) > 0
    }

    fn append(&self, failures: impl Iterator<Item = Cause>) -> usize {
        if !self.trace.suppression {
            return 0;
        }
        // Caller iterators run before the lock is taken
        let collected: Vec<Cause> = failures.collect();
        let recorded = collected.len();
        let mut suppressed = self.trace.suppressed.lock();
        suppressed.extend(collected);
        tracing::debug!(code = self.kind.code(), recorded, total = suppressed.len(), "Suppressed failures attached");
        recorded
    }
}

//-----------------------------------------------------------------------------
// Strict failures
//-----------------------------------------------------------------------------

/// A checked failure.
///
/// There is deliberately no conversion into [`SoftFailure`]: a strict failure
/// has to be acknowledged, for example with [`StrictFailure::soften`], before
/// it can continue through a soft channel.
#[must_use = "strict failures must be acknowledged"]
#[derive(Debug)]
pub struct StrictFailure {
    kind: StrictKind,
    trace: Trace,
}

failure_type!(StrictFailure, StrictKind);

impl StrictFailure {
    /// Acknowledge this failure by wrapping it as the cause of a soft failure.
    pub fn soften(self, kind: SoftKind) -> SoftFailure {
        SoftFailure::with_cause(kind, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_argument_uses_default_message() {
        for kind in SoftKind::ALL {
            let failure = SoftFailure::new(kind);
            assert_eq!(failure.message(), kind.default_message());
            assert!(failure.chained_cause().is_none());
            assert!(!failure.is_suppression_enabled());
            assert!(failure.is_writable());
        }
    }

    #[test]
    fn test_message_overrides_default() {
        let failure = SoftFailure::with_message(SoftKind::Null, "the consumer mustn't be null");
        assert_eq!(failure.message(), Some("the consumer mustn't be null"));
        assert_eq!(failure.to_string(), "the consumer mustn't be null");
    }

    #[test]
    fn test_cause_keeps_default_message() {
        let failure = SoftFailure::with_cause(SoftKind::Environment, "denied");
        assert_eq!(failure.message(), SoftKind::Environment.default_message());
        assert_eq!(failure.source().map(|s| s.to_string()), Some("denied".to_string()));
    }

    #[test]
    fn test_message_and_cause() {
        let inner = SoftFailure::new(SoftKind::Get);
        let failure = SoftFailure::with_message_and_cause(SoftKind::Supply, "no value", inner);
        assert_eq!(failure.message(), Some("no value"));
        assert_eq!(failure.chained_cause().map(|c| c.to_string()), Some("Failed to get the object".to_string()));
    }

    #[test]
    fn test_base_without_message_displays_kind() {
        let failure = SoftFailure::new(SoftKind::Exception);
        assert_eq!(failure.message(), None);
        assert_eq!(failure.to_string(), "soft exception");
    }

    #[test]
    fn test_templated() {
        let failure = SoftFailure::templated(SoftKind::Utility, "the Validator type");
        assert_eq!(failure.message(), Some("the Validator type must not be created"));

        let pair = SoftFailure::templated_pair(SoftKind::NotEqual, "left", "right");
        assert_eq!(pair.message(), Some("left must be equal to the right"));

        let base = SoftFailure::templated(SoftKind::Error, "ignored");
        assert_eq!(base.message(), None);
    }

    #[test]
    fn test_suppress_rejects_none() {
        let failure = SoftFailure::with_policy(SoftKind::Function, FailurePolicy::new(true, false));
        let err = failure.suppress(None::<Vec<SoftFailure>>).unwrap_err();
        assert_eq!(err.kind(), SoftKind::Null);
        assert_eq!(err.message(), Some("The suppressed failures should not be null"));
    }

    #[test]
    fn test_suppress_appends_when_enabled() {
        let failure = SoftFailure::with_policy(SoftKind::Function, FailurePolicy::new(true, false));
        let recorded = failure
            .suppress(Some(vec![SoftFailure::new(SoftKind::Get), SoftFailure::new(SoftKind::Set)]))
            .unwrap();
        assert_eq!(recorded, 2);
        assert!(failure.attach("third"));

        let messages: Vec<String> = failure.suppressed().iter().map(|s| s.to_string()).collect();
        assert_eq!(messages, vec!["Failed to get the object", "Failed to set the object", "third"]);
    }

    #[test]
    fn test_suppress_ignored_when_disabled() {
        let failure = SoftFailure::new(SoftKind::Function);
        assert_eq!(failure.suppress(Some(["a", "b"])).unwrap(), 0);
        assert!(!failure.attach("c"));
        assert!(failure.suppressed().is_empty());
    }

    #[test]
    fn test_suppress_iterator_may_inspect_failure() {
        let failure = SoftFailure::with_policy(SoftKind::Function, FailurePolicy::new(true, false));
        failure.attach("a");

        let fresh = ["a", "b"]
            .into_iter()
            .filter(|item| !failure.suppressed().iter().any(|s| s.to_string() == *item));
        assert_eq!(failure.suppress(Some(fresh)).unwrap(), 1);

        let nested = ["c"].into_iter().inspect(|_| {
            failure.attach("nested");
        });
        assert_eq!(failure.suppress(Some(nested)).unwrap(), 1);

        let messages: Vec<String> = failure.suppressed().iter().map(|s| s.to_string()).collect();
        assert_eq!(messages, vec!["a", "b", "nested", "c"]);
    }

    #[test]
    fn test_policy_disables_trace() {
        let failure = SoftFailure::with_policy(SoftKind::Call, FailurePolicy::new(false, false));
        assert!(!failure.is_writable());
        assert!(failure.backtrace().is_none());
    }

    #[test]
    fn test_strict_soften() {
        let strict = StrictFailure::with_message(StrictKind::Exception, "must handle");
        assert_eq!(strict.checking(), Checking::Strict);
        let soft = strict.soften(SoftKind::Uncaught);
        assert_eq!(soft.checking(), Checking::Soft);
        assert_eq!(soft.message(), Some("Failed to catch the exception or error"));
        assert_eq!(soft.source().map(|s| s.to_string()), Some("must handle".to_string()));
    }

    #[test]
    fn test_concurrent_suppress() {
        use std::sync::Arc;

        let failure = Arc::new(SoftFailure::with_policy(SoftKind::Function, FailurePolicy::new(true, false)));
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let failure = Arc::clone(&failure);
                std::thread::spawn(move || {
                    for j in 0..50 {
                        failure.attach(format!("{i}-{j}"));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(failure.suppressed().len(), 400);
    }
}
