// Failure handling macros
// Provides macros for simplified failure construction and handling

/// Create a soft failure of the given kind with a formatted message
#[macro_export]
macro_rules! soft_failure {
    ($kind:expr) => {
        $crate::SoftFailure::new($kind)
    };
    ($kind:expr, $($arg:tt)+) => {
        $crate::SoftFailure::with_message($kind, ::std::format!($($arg)+))
    };
}

/// Return early with a soft failure if a condition is not satisfied
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $kind:expr) => {
        if !($cond) {
            return ::std::result::Result::Err($crate::SoftFailure::new($kind).into());
        }
    };
    ($cond:expr, $kind:expr, $($arg:tt)+) => {
        if !($cond) {
            return ::std::result::Result::Err($crate::soft_failure!($kind, $($arg)+).into());
        }
    };
}

/// Bail early with a soft failure
#[macro_export]
macro_rules! bail {
    ($kind:expr) => {
        return ::std::result::Result::Err($crate::SoftFailure::new($kind).into())
    };
    ($kind:expr, $($arg:tt)+) => {
        return ::std::result::Result::Err($crate::soft_failure!($kind, $($arg)+).into())
    };
}

/// Log a failure with its code and kind at error level
#[macro_export]
macro_rules! log_failure {
    ($failure:expr) => {{
        let failure = &$failure;
        $crate::__private::tracing::error!(
            code = $crate::Throwable::error_code(failure),
            kind = $crate::Throwable::kind_name(failure),
            "{}",
            failure
        );
    }};
    ($failure:expr, $message:expr) => {{
        let failure = &$failure;
        $crate::__private::tracing::error!(
            code = $crate::Throwable::error_code(failure),
            kind = $crate::Throwable::kind_name(failure),
            "{}: {}",
            $message,
            failure
        );
    }};
}
