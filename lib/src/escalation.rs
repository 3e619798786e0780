use crate::app_state::AppState;
use crate::channel_client::RawSendError;
use crate::classified_error::ClassifiedError;
use crate::notification::NotificationRequest;
use async_trait::async_trait;
use chrono::Utc;
use tracing::instrument;
use tracing::log::{error, warn};

#[async_trait]
pub trait AlertChannel: Send + Sync {
    async fn alert(
        &self,
        text: &str,
    ) -> Result<(), RawSendError>;
}

pub struct EscalationNotifier;

impl EscalationNotifier {
    // Best-effort side channel: an alert failure is logged and swallowed,
    // never surfaced to the dispatch caller.
    #[instrument(skip_all, name = "escalate")]
    pub async fn escalate(
        app_state: &AppState,
        classified_error: &ClassifiedError,
        request: &NotificationRequest,
    ) {
        error!("Critical notification failure for context {} with cause {}", request.context, classified_error.message);

        let alert_channel = if let Some(alert_channel) = &app_state.alert_channel {
            alert_channel
        } else {
            warn!("No alert channel configured, skipping operator alert for context {}", request.context);
            return;
        };

        let alert_text = Self::alert_text(classified_error, request);

        if let Err(alert_error) = alert_channel.alert(&alert_text).await {
            error!("Failed to send operator alert for context {} with cause {}", request.context, alert_error);
        }
    }

    // Recipient addresses are deliberately absent: only the count is safe to
    // push into an operator channel.
    pub fn alert_text(
        classified_error: &ClassifiedError,
        request: &NotificationRequest,
    ) -> String {
        format!(
            "[{}] Critical notification failure: kind={:?} cause={} dispatch_id={} recipients={} at={}",
            request.context,
            classified_error.kind,
            classified_error.message,
            request.dispatch_id,
            request.recipients.len(),
            Utc::now().to_rfc3339(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classified_error::{FailureKind, Severity};
    use crate::notification::NotificationRequest;

    #[test]
    fn should_redact_recipient_addresses_from_the_alert() {
        let request = NotificationRequest::sms("partnership-submission", "Confirmation", vec!["+224621234567", "+224621234568"]);
        let classified_error = ClassifiedError::new(FailureKind::AuthError, Severity::Critical, "401 Unauthorized");

        let alert_text = EscalationNotifier::alert_text(&classified_error, &request);

        assert!(alert_text.contains("partnership-submission"));
        assert!(alert_text.contains("AuthError"));
        assert!(alert_text.contains("401 Unauthorized"));
        assert!(alert_text.contains("recipients=2"));
        assert!(!alert_text.contains("+224621234567"));
        assert!(!alert_text.contains("+224621234568"));
    }
}
