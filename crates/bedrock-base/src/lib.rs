// Bedrock Base
// Validation and condition helpers, soft primitives, singletons and environment access

pub mod conditions;
pub mod environment;
pub mod singleton;
pub mod soft;
pub mod telemetry;
pub mod validation;

pub use environment::{default_environment, DefaultEnvironment, Environment, EnvironmentConfig};
pub use singleton::Singleton;
pub use soft::{
    SoftBoolean, SoftByte, SoftDouble, SoftFloat, SoftInteger, SoftLong, SoftNumber, SoftPrimitive, SoftShort, Wide,
};
pub use telemetry::{init_test_logging, init_tracing, TelemetryConfig};
