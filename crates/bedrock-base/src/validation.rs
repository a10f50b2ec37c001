// Argument validation
// Checks that hand the validated value back or fail with a validation-family failure

use bedrock_error::{equal_failure, not_equal_failure, not_null_failure, null_failure, SoftResult};

/// Subject used by the `Null` template when no name is given.
const UNNAMED_NULL: &str = "passed instance of the class";

/// Subject used by the `NotNull` template when no name is given.
const UNNAMED_NOT_NULL: &str = "The passed instance of the class";

const UNNAMED_PRIMARY: &str = "The passed primary instance";
const UNNAMED_SECONDARY: &str = "passed secondary instance";

/// Return the value, or fail with a `Null` failure if it is absent.
pub fn not_null<T>(instance: Option<T>) -> SoftResult<T> {
    instance.ok_or_else(|| null_failure(UNNAMED_NULL))
}

/// Like [`not_null`], naming the value in the failure message.
pub fn not_null_named<T>(instance: Option<T>, name: &str) -> SoftResult<T> {
    instance.ok_or_else(|| null_failure(name))
}

/// Succeed only if the value is absent; a present value is a `NotNull` failure.
pub fn is_null<T>(instance: Option<T>) -> SoftResult<()> {
    match instance {
        None => Ok(()),
        Some(_) => Err(not_null_failure(UNNAMED_NOT_NULL)),
    }
}

pub fn is_null_named<T>(instance: Option<T>, name: &str) -> SoftResult<()> {
    match instance {
        None => Ok(()),
        Some(_) => Err(not_null_failure(name)),
    }
}

/// Return `primary` if it equals `secondary`, otherwise fail with a `NotEqual` failure.
///
/// Two absent values are equal.
pub fn equals<T: PartialEq>(primary: T, secondary: T) -> SoftResult<T> {
    equals_named(primary, secondary, UNNAMED_PRIMARY, UNNAMED_SECONDARY)
}

pub fn equals_named<T: PartialEq>(
    primary: T,
    secondary: T,
    primary_name: &str,
    secondary_name: &str,
) -> SoftResult<T> {
    if primary != secondary {
        return Err(not_equal_failure(primary_name, secondary_name));
    }
    Ok(primary)
}

/// Return `primary` if it differs from `secondary`, otherwise fail with an `Equal` failure.
pub fn not_equals<T: PartialEq>(primary: T, secondary: T) -> SoftResult<T> {
    not_equals_named(primary, secondary, UNNAMED_PRIMARY, UNNAMED_SECONDARY)
}

pub fn not_equals_named<T: PartialEq>(
    primary: T,
    secondary: T,
    primary_name: &str,
    secondary_name: &str,
) -> SoftResult<T> {
    if primary == secondary {
        return Err(equal_failure(primary_name, secondary_name));
    }
    Ok(primary)
}
