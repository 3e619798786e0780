use crate::channel_client::RawSendError;
use crate::error::NotificationDispatcherError;
use crate::escalation::AlertChannel;
use crate::http_gateway::HttpGateway;
use async_trait::async_trait;
use serde::Serialize;

pub struct WebhookAlertChannel {
    http_gateway: HttpGateway,
    webhook_url: String,
}

#[derive(Serialize)]
struct AlertPayload<'a> {
    text: &'a str,
}

impl WebhookAlertChannel {
    pub fn new(
        webhook_url: &str,
        request_timeout_in_millis: u64,
    ) -> Result<Self, NotificationDispatcherError> {
        Ok(Self {
            http_gateway: HttpGateway::new(request_timeout_in_millis)?,
            webhook_url: webhook_url.to_string(),
        })
    }
}

#[async_trait]
impl AlertChannel for WebhookAlertChannel {
    async fn alert(
        &self,
        text: &str,
    ) -> Result<(), RawSendError> {
        let result = self.http_gateway.client.post(&self.webhook_url).json(&AlertPayload { text }).send().await;

        match result {
            Ok(response) => {
                if response.status().is_success() {
                    Ok(())
                } else {
                    Err(RawSendError::new(&format!("Alert webhook returned status {}", response.status())))
                }
            },
            Err(error) => Err(RawSendError::from_transport(error)),
        }
    }
}
