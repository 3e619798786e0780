use crate::app_state::AppState;
use crate::channel_client::ChannelClient;
use crate::delivery::{DeliveryAttempt, DeliveryOutcome};
use crate::failure_classifier::FailureClassifier;
use crate::notification::Recipient;
use std::time::Duration;
use tracing::instrument;
use tracing::log::{error, info};
use uuid::Uuid;

pub struct RetryScheduler;

impl RetryScheduler {
    #[instrument(skip_all, name = "deliver_with_retry")]
    pub async fn deliver(
        app_state: &AppState,
        client: &dyn ChannelClient,
        recipient: &Recipient,
        normalized_address: &str,
        body: &str,
        dispatch_id: Uuid,
    ) -> DeliveryOutcome {
        let mut attempts = vec![];
        let mut attempt_number = 1;

        loop {
            match client.send(normalized_address, body, dispatch_id).await {
                Ok(message_id) => {
                    attempts.push(DeliveryAttempt::success(attempt_number));
                    info!("Delivered notification {} on attempt {} with gateway message id {}", dispatch_id, attempt_number, message_id);
                    return DeliveryOutcome::delivered(recipient.clone(), attempts);
                },
                Err(raw_error) => {
                    let classified_error = FailureClassifier::classify(&raw_error);
                    attempts.push(DeliveryAttempt::failure(attempt_number, classified_error.kind));
                    error!(
                        "Attempt {} of {} failed for notification {} with cause {}",
                        attempt_number, app_state.max_attempts, dispatch_id, raw_error
                    );

                    if attempt_number >= app_state.max_attempts {
                        return DeliveryOutcome::failed(recipient.clone(), attempts, classified_error);
                    }

                    tokio::time::sleep(Self::backoff_delay(app_state.backoff_base_ms, attempt_number)).await;
                    attempt_number += 1;
                },
            }
        }
    }

    // Delay grows linearly with the attempt number, not by doubling.
    pub fn backoff_delay(
        backoff_base_ms: u64,
        attempt_number: u32,
    ) -> Duration {
        Duration::from_millis(backoff_base_ms.saturating_mul(attempt_number as u64))
    }
}
