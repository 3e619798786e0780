use crate::channel_client::RawSendError;
use crate::classified_error::{ClassifiedError, FailureKind, Severity};

// First match wins: credential and account failures must never be masked by
// the more generic rules below them.
const CLASSIFICATION_RULES: &[(&[&str], FailureKind, Severity)] = &[
    (&["unauthorized", "invalid_credentials"], FailureKind::AuthError, Severity::Critical),
    (&["account_suspended"], FailureKind::AuthError, Severity::Critical),
    (&["quota", "limit"], FailureKind::QuotaExceeded, Severity::High),
    (&["service_unavailable", "timeout"], FailureKind::ServiceUnavailable, Severity::High),
    (&["invalid_phone", "format"], FailureKind::PhoneFormatError, Severity::Medium),
    (&["network", "connection"], FailureKind::NetworkError, Severity::Low),
];

pub struct FailureClassifier;

impl FailureClassifier {
    pub fn classify(raw_error: &RawSendError) -> ClassifiedError {
        let normalized = raw_error.message.to_lowercase();

        for (patterns, kind, severity) in CLASSIFICATION_RULES {
            if patterns.iter().any(|pattern| normalized.contains(pattern)) {
                return ClassifiedError::new(*kind, *severity, &raw_error.message);
            }
        }

        ClassifiedError::new(FailureKind::Unknown, Severity::Low, &raw_error.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_classify_credential_failures_as_critical() {
        let classified = FailureClassifier::classify(&RawSendError::new("401 Unauthorized"));
        assert_eq!(FailureKind::AuthError, classified.kind);
        assert_eq!(Severity::Critical, classified.severity);

        let classified = FailureClassifier::classify(&RawSendError::new("invalid_credentials"));
        assert_eq!(FailureKind::AuthError, classified.kind);
        assert_eq!(Severity::Critical, classified.severity);

        let classified = FailureClassifier::classify(&RawSendError::new("account_suspended: contact support"));
        assert_eq!(FailureKind::AuthError, classified.kind);
        assert_eq!(Severity::Critical, classified.severity);
    }

    #[test]
    fn should_classify_quota_and_availability_failures() {
        let classified = FailureClassifier::classify(&RawSendError::new("Daily quota exceeded"));
        assert_eq!(FailureKind::QuotaExceeded, classified.kind);
        assert_eq!(Severity::High, classified.severity);

        let classified = FailureClassifier::classify(&RawSendError::new("rate limit reached"));
        assert_eq!(FailureKind::QuotaExceeded, classified.kind);

        let classified = FailureClassifier::classify(&RawSendError::new("503 service_unavailable"));
        assert_eq!(FailureKind::ServiceUnavailable, classified.kind);
        assert_eq!(Severity::High, classified.severity);

        let classified = FailureClassifier::classify(&RawSendError::new("timeout: request timed out"));
        assert_eq!(FailureKind::ServiceUnavailable, classified.kind);
    }

    #[test]
    fn should_classify_phone_and_network_failures() {
        let classified = FailureClassifier::classify(&RawSendError::new("invalid_phone number"));
        assert_eq!(FailureKind::PhoneFormatError, classified.kind);
        assert_eq!(Severity::Medium, classified.severity);

        let classified = FailureClassifier::classify(&RawSendError::new("Bad recipient format"));
        assert_eq!(FailureKind::PhoneFormatError, classified.kind);

        let classified = FailureClassifier::classify(&RawSendError::new("network unreachable"));
        assert_eq!(FailureKind::NetworkError, classified.kind);
        assert_eq!(Severity::Low, classified.severity);

        let classified = FailureClassifier::classify(&RawSendError::new("connection refused"));
        assert_eq!(FailureKind::NetworkError, classified.kind);
    }

    #[test]
    fn should_fall_back_to_unknown() {
        let classified = FailureClassifier::classify(&RawSendError::new("something odd happened"));
        assert_eq!(FailureKind::Unknown, classified.kind);
        assert_eq!(Severity::Low, classified.severity);
        assert_eq!("something odd happened", classified.message);
    }

    #[test]
    fn should_let_earlier_rules_win() {
        // Both the credential rule and the availability rule match; the
        // credential rule must win.
        let classified = FailureClassifier::classify(&RawSendError::new("unauthorized: gateway timeout"));
        assert_eq!(FailureKind::AuthError, classified.kind);
        assert_eq!(Severity::Critical, classified.severity);
    }

    #[test]
    fn should_be_deterministic_for_the_same_input() {
        let raw_error = RawSendError::new("Daily quota exceeded");
        assert_eq!(FailureClassifier::classify(&raw_error), FailureClassifier::classify(&raw_error));
    }
}
