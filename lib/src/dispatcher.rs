use crate::address_validator::AddressValidator;
use crate::app_state::AppState;
use crate::channel_client::RawSendError;
use crate::classified_error::{ClassifiedError, FailureKind, Severity};
use crate::delivery::{DeliveryOutcome, DispatchResult};
use crate::dispatcher_resources::DispatcherResources;
use crate::error::NotificationDispatcherError;
use crate::escalation::EscalationNotifier;
use crate::failure_classifier::FailureClassifier;
use crate::notification::{NotificationRequest, Recipient};
use crate::retry_scheduler::RetryScheduler;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;
use tracing::log::{error, info};
use uuid::Uuid;

pub struct NotificationDispatcher {
    resources: DispatcherResources,
}

impl NotificationDispatcher {
    pub fn new(resources: DispatcherResources) -> Self {
        Self { resources }
    }

    #[instrument(skip_all, name = "dispatch")]
    pub async fn dispatch(
        &self,
        request: NotificationRequest,
    ) -> Result<DispatchResult, NotificationDispatcherError> {
        if request.recipients.is_empty() {
            return Err(NotificationDispatcherError::new(
                "Empty recipient list",
                &format!("Nothing to dispatch for context {}", request.context),
            ));
        }

        if request.body.trim().is_empty() {
            return Err(NotificationDispatcherError::new(
                "Empty message body",
                &format!("Nothing to dispatch for context {}", request.context),
            ));
        }

        info!("Dispatching notification {} for context {} to {} recipient(s)", request.dispatch_id, request.context, request.recipients.len());

        let app_state = Arc::new(AppState::from_resources(&self.resources));

        let mut handles = vec![];
        for recipient in request.recipients.clone() {
            let task_state = app_state.clone();
            let body = request.body.clone();
            let dispatch_id = request.dispatch_id;

            let handle = tokio::spawn(async move { Self::deliver_to_recipient(task_state, recipient, body, dispatch_id).await });
            handles.push(handle);
        }

        let mut outcomes = vec![];
        for (recipient, handle) in request.recipients.iter().zip(handles) {
            match handle.await {
                Ok(outcome) => outcomes.push(outcome),
                Err(join_error) => {
                    error!("Delivery task failed for notification {} with cause {}", request.dispatch_id, join_error);
                    outcomes.push(DeliveryOutcome::rejected(
                        recipient.clone(),
                        ClassifiedError::new(FailureKind::Unknown, Severity::High, &format!("Delivery task failed: {join_error}")),
                    ));
                },
            }
        }

        for outcome in &outcomes {
            if let Some(final_error) = &outcome.final_error {
                if final_error.is_critical() {
                    EscalationNotifier::escalate(&app_state, final_error, &request).await;
                }
            }
        }

        Ok(DispatchResult::aggregate(outcomes))
    }

    async fn deliver_to_recipient(
        app_state: Arc<AppState>,
        recipient: Recipient,
        body: String,
        dispatch_id: Uuid,
    ) -> DeliveryOutcome {
        if let Err(validation_error) = AddressValidator::check_length(&app_state, &body, &recipient.channel) {
            return DeliveryOutcome::rejected(recipient, validation_error.classified());
        }

        let normalized_address = match AddressValidator::validate(&app_state, &recipient) {
            Ok(normalized_address) => normalized_address,
            Err(validation_error) => return DeliveryOutcome::rejected(recipient, validation_error.classified()),
        };

        let client = if let Some(client) = app_state.client_for(&recipient.channel) {
            client
        } else {
            let classified_error = ClassifiedError::new(FailureKind::Unknown, Severity::High, &format!("No channel client registered for {:?}", recipient.channel));
            return DeliveryOutcome::rejected(recipient, classified_error);
        };

        let deadline = Duration::from_millis(app_state.dispatch_timeout_ms);
        let delivery = RetryScheduler::deliver(&app_state, client.as_ref(), &recipient, &normalized_address, &body, dispatch_id);

        match tokio::time::timeout(deadline, delivery).await {
            Ok(outcome) => outcome,
            Err(_) => {
                let raw_error = RawSendError::new(&format!("timeout: dispatch deadline of {}ms exceeded", app_state.dispatch_timeout_ms));
                DeliveryOutcome::rejected(recipient, FailureClassifier::classify(&raw_error))
            },
        }
    }
}
