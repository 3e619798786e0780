use crate::classified_error::{ClassifiedError, FailureKind};
use crate::notification::Recipient;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub enum AttemptOutcome {
    Success,
    Failure(FailureKind),
}

#[derive(Serialize, Debug, Clone)]
pub struct DeliveryAttempt {
    pub attempt_number: u32,
    pub timestamp: DateTime<Utc>,
    pub outcome: AttemptOutcome,
}

impl DeliveryAttempt {
    pub fn success(attempt_number: u32) -> Self {
        Self {
            attempt_number,
            timestamp: Utc::now(),
            outcome: AttemptOutcome::Success,
        }
    }

    pub fn failure(
        attempt_number: u32,
        kind: FailureKind,
    ) -> Self {
        Self {
            attempt_number,
            timestamp: Utc::now(),
            outcome: AttemptOutcome::Failure(kind),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct DeliveryOutcome {
    pub recipient: Recipient,
    pub success: bool,
    pub attempts: Vec<DeliveryAttempt>,
    pub final_error: Option<ClassifiedError>,
}

impl DeliveryOutcome {
    pub fn delivered(
        recipient: Recipient,
        attempts: Vec<DeliveryAttempt>,
    ) -> Self {
        Self {
            recipient,
            success: true,
            attempts,
            final_error: None,
        }
    }

    pub fn failed(
        recipient: Recipient,
        attempts: Vec<DeliveryAttempt>,
        final_error: ClassifiedError,
    ) -> Self {
        Self {
            recipient,
            success: false,
            attempts,
            final_error: Some(final_error),
        }
    }

    // A failure gated before any network attempt: no attempts are recorded.
    pub fn rejected(
        recipient: Recipient,
        final_error: ClassifiedError,
    ) -> Self {
        Self::failed(recipient, vec![], final_error)
    }
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct DispatchResult {
    pub outcomes: Vec<DeliveryOutcome>,
    pub total_sent: usize,
    pub total_failed: usize,
    pub errors: Vec<String>,
}

impl DispatchResult {
    pub fn aggregate(outcomes: Vec<DeliveryOutcome>) -> Self {
        let total_sent = outcomes.iter().filter(|it| it.success).count();
        let total_failed = outcomes.len() - total_sent;
        let errors = outcomes
            .iter()
            .filter_map(|it| it.final_error.as_ref())
            .map(|error| error.message.clone())
            .filter(|message| !message.is_empty())
            .collect();

        Self {
            outcomes,
            total_sent,
            total_failed,
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classified_error::{FailureKind, Severity};
    use crate::notification::Recipient;

    #[test]
    fn should_keep_totals_consistent_with_outcome_count() {
        let outcomes = vec![
            DeliveryOutcome::delivered(Recipient::sms("+224111111111"), vec![DeliveryAttempt::success(1)]),
            DeliveryOutcome::rejected(
                Recipient::sms("abc"),
                ClassifiedError::new(FailureKind::PhoneFormatError, Severity::Medium, "invalid phone"),
            ),
            DeliveryOutcome::delivered(Recipient::sms("+224222222222"), vec![DeliveryAttempt::success(1)]),
        ];

        let result = DispatchResult::aggregate(outcomes);

        assert_eq!(3, result.outcomes.len());
        assert_eq!(2, result.total_sent);
        assert_eq!(1, result.total_failed);
        assert_eq!(result.outcomes.len(), result.total_sent + result.total_failed);
        assert_eq!(vec!["invalid phone".to_string()], result.errors);
    }

    #[test]
    fn should_filter_empty_error_messages() {
        let outcomes = vec![DeliveryOutcome::rejected(
            Recipient::sms("abc"),
            ClassifiedError::new(FailureKind::PhoneFormatError, Severity::Medium, ""),
        )];

        let result = DispatchResult::aggregate(outcomes);

        assert_eq!(1, result.total_failed);
        assert!(result.errors.is_empty());
    }
}
