use crate::channel_client::{ChannelClient, RawSendError};
use crate::error::NotificationDispatcherError;
use crate::http_gateway::HttpGateway;
use crate::notification::Channel;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub struct EmailGatewayClient {
    http_gateway: HttpGateway,
    base_url: String,
    api_key: String,
    from_address: String,
}

#[derive(Serialize)]
struct EmailSendRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    body: &'a str,
}

#[derive(Deserialize)]
struct EmailSendResponse {
    message_id: String,
}

impl EmailGatewayClient {
    pub fn new(
        base_url: &str,
        api_key: &str,
        from_address: &str,
        request_timeout_in_millis: u64,
    ) -> Result<Self, NotificationDispatcherError> {
        Ok(Self {
            http_gateway: HttpGateway::new(request_timeout_in_millis)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            from_address: from_address.to_string(),
        })
    }
}

#[async_trait]
impl ChannelClient for EmailGatewayClient {
    fn channel(&self) -> Channel {
        Channel::Email
    }

    async fn send(
        &self,
        address: &str,
        body: &str,
        dispatch_id: Uuid,
    ) -> Result<String, RawSendError> {
        let result = self
            .http_gateway
            .client
            .post(format!("{}/v1/mail", self.base_url))
            .bearer_auth(&self.api_key)
            .header("x-dispatch-id", dispatch_id.to_string())
            .json(&EmailSendRequest {
                from: &self.from_address,
                to: address,
                subject: "Notification",
                body,
            })
            .send()
            .await;

        match result {
            Ok(response) => {
                if response.status().is_success() {
                    let parsed = response
                        .json::<EmailSendResponse>()
                        .await
                        .map_err(|error| RawSendError::new(&format!("Unexpected gateway response body: {error}")))?;
                    Ok(parsed.message_id)
                } else {
                    let status = response.status();
                    let response_body = response.text().await.unwrap_or("unknown".to_string());
                    Err(RawSendError::from_gateway_response(status, &response_body))
                }
            },
            Err(error) => Err(RawSendError::from_transport(error)),
        }
    }
}
