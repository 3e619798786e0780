use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    AuthError,
    PhoneFormatError,
    ServiceUnavailable,
    QuotaExceeded,
    NetworkError,
    Unknown,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ClassifiedError {
    pub kind: FailureKind,
    pub severity: Severity,
    pub message: String,
}

impl ClassifiedError {
    pub fn new(
        kind: FailureKind,
        severity: Severity,
        message: &str,
    ) -> Self {
        Self {
            kind,
            severity,
            message: message.to_string(),
        }
    }

    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }
}
