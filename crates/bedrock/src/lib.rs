// Bedrock
// Umbrella crate over the failure taxonomy, the capability layer and the base utilities

// Failure taxonomy
// Soft and strict failures, kinds, reports and failure macros
pub use bedrock_error as error;

// Capability layer
// Single-method actions, callbacks, consumers, suppliers, functions,
// predicates and conditions with their combinators
pub use bedrock_function as function;

// Base utilities
// Validation, boolean conditions, soft primitives, singletons, environment and telemetry
pub use bedrock_base as base;

pub use bedrock_base::{
    default_environment, init_test_logging, init_tracing, Environment, Singleton, SoftBoolean, SoftNumber,
    SoftPrimitive, TelemetryConfig,
};
pub use bedrock_error::{
    Checking, FailurePolicy, FailureReport, Severity, SoftFailure, SoftKind, SoftResult, StrictFailure, StrictKind,
    StrictResult, Throwable,
};
pub use bedrock_function::{Action, Callback, Condition, Consumer, Function, Predicate, Supplier};

/// Everything needed to write and compose capabilities in one import.
pub mod prelude {
    pub use bedrock_error::{SoftFailure, SoftKind, SoftResult, Throwable};
    pub use bedrock_function::{Action, Callback, Condition, Consumer, Function, Predicate, Supplier};
}
