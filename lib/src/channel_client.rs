use crate::notification::Channel;
use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct RawSendError {
    pub message: String,
}

impl RawSendError {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    // Gateways wrap the failure cause in a JSON envelope more often than
    // not; fall back to the raw body text.
    pub fn from_gateway_response(
        status: reqwest::StatusCode,
        response_body: &str,
    ) -> Self {
        let cause = serde_json::from_str::<serde_json::Value>(response_body)
            .ok()
            .and_then(|value| value.get("error").and_then(|it| it.as_str()).map(|it| it.to_string()))
            .unwrap_or(response_body.to_string());

        Self::new(&format!("Gateway returned status {status}: {cause}"))
    }

    // Gateway SDK transport failures are free text; pin the prefixes the
    // classifier keys on before the original cause.
    pub fn from_transport(error: reqwest_middleware::Error) -> Self {
        match &error {
            reqwest_middleware::Error::Reqwest(reqwest_error) if reqwest_error.is_timeout() => Self::new(&format!("timeout: {error}")),
            reqwest_middleware::Error::Reqwest(reqwest_error) if reqwest_error.is_connect() => Self::new(&format!("connection: {error}")),
            _ => Self::new(&format!("network: {error}")),
        }
    }
}

impl std::error::Error for RawSendError {}

impl fmt::Display for RawSendError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[async_trait]
pub trait ChannelClient: Send + Sync {
    fn channel(&self) -> Channel;

    async fn send(
        &self,
        address: &str,
        body: &str,
        dispatch_id: Uuid,
    ) -> Result<String, RawSendError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_unwrap_json_error_envelopes() {
        let raw_error = RawSendError::from_gateway_response(reqwest::StatusCode::TOO_MANY_REQUESTS, r#"{"error":"Daily quota exceeded"}"#);
        assert!(raw_error.message.contains("429"));
        assert!(raw_error.message.contains("Daily quota exceeded"));
        assert!(!raw_error.message.contains('{'));
    }

    #[test]
    fn should_keep_plain_text_bodies() {
        let raw_error = RawSendError::from_gateway_response(reqwest::StatusCode::SERVICE_UNAVAILABLE, "503 service_unavailable");
        assert!(raw_error.message.contains("service_unavailable"));
    }
}
