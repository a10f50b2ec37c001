// Common failure utilities and helper functions
// Provides the failures most often raised across the codebase

use crate::conversion::IntoCause;
use crate::{SoftFailure, SoftKind};

/// Create a null failure naming the absent value, e.g. "The consumer should not be null"
pub fn null_failure(name: &str) -> SoftFailure {
    SoftFailure::templated(SoftKind::Null, name)
}

/// Create a failure for a value that had to be absent
pub fn not_null_failure(name: &str) -> SoftFailure {
    SoftFailure::templated(SoftKind::NotNull, name)
}

/// Create a failure for two values that had to differ
pub fn equal_failure(primary: &str, secondary: &str) -> SoftFailure {
    SoftFailure::templated_pair(SoftKind::Equal, primary, secondary)
}

/// Create a failure for two values that had to be equal
pub fn not_equal_failure(primary: &str, secondary: &str) -> SoftFailure {
    SoftFailure::templated_pair(SoftKind::NotEqual, primary, secondary)
}

/// Create the failure raised when a non-instantiable type is instantiated
pub fn utility_failure(type_name: &str) -> SoftFailure {
    SoftFailure::templated(SoftKind::Utility, type_name)
}

/// Create the failure raised when a singleton is created twice
pub fn singleton_failure(name: &str) -> SoftFailure {
    SoftFailure::templated(SoftKind::Singleton, name)
}

/// Wrap a lower-level rejection of an environment operation
pub fn environment_failure(cause: impl IntoCause) -> SoftFailure {
    SoftFailure::with_cause(SoftKind::Environment, cause)
}

/// Create a failure for a capability operation that could not complete
pub fn operation_failure(kind: SoftKind, subject: &str) -> SoftFailure {
    SoftFailure::templated(kind, subject)
}
