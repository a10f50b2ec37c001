// Failure reports
// Serializable snapshots of failures for structured logs

use serde::{Deserialize, Serialize};

use crate::{Checking, Severity, Throwable};

/// Standard failure snapshot for serialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureReport {
    pub code: String,
    pub kind: String,
    pub checking: Checking,
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Display text of each cause, outermost first
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub causes: Vec<String>,
    /// Display text of each suppressed failure, in attachment order
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub suppressed: Vec<String>,
}

impl FailureReport {
    pub fn capture(failure: &dyn Throwable) -> Self {
        let mut causes = Vec::new();
        let mut current = failure.source();
        while let Some(cause) = current {
            causes.push(cause.to_string());
            current = cause.source();
        }

        Self {
            code: failure.error_code().to_string(),
            kind: failure.kind_name().to_string(),
            checking: failure.checking(),
            severity: failure.severity(),
            message: failure.message().map(str::to_string),
            causes,
            suppressed: failure.suppressed().iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
