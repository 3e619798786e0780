use crate::channel_client::ChannelClient;
use crate::dispatcher_resources::DispatcherResources;
use crate::escalation::AlertChannel;
use crate::notification::Channel;
use std::sync::Arc;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_BACKOFF_BASE_MS: u64 = 2000;
pub const DEFAULT_DISPATCH_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_SMS_MAX_LENGTH: u32 = 160;
pub const DEFAULT_COUNTRY_PREFIX: &str = "+224";
pub const DEFAULT_ACCEPTED_COUNTRY_PREFIXES: &[&str] = &["+224", "+221", "+223", "+225"];

#[derive(Clone)]
pub struct AppState {
    pub sms_client: Arc<dyn ChannelClient>,
    pub email_client: Option<Arc<dyn ChannelClient>>,
    pub alert_channel: Option<Arc<dyn AlertChannel>>,
    pub max_attempts: u32,
    pub backoff_base_ms: u64,
    pub dispatch_timeout_ms: u64,
    pub sms_max_length: u32,
    pub default_country_prefix: String,
    pub accepted_country_prefixes: Vec<String>,
}

impl AppState {
    pub fn from_resources(resources: &DispatcherResources) -> Self {
        Self {
            sms_client: resources.sms_client.clone(),
            email_client: resources.email_client.clone(),
            alert_channel: resources.alert_channel.clone(),
            max_attempts: resources.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS),
            backoff_base_ms: resources.backoff_base_ms.unwrap_or(DEFAULT_BACKOFF_BASE_MS),
            dispatch_timeout_ms: resources.dispatch_timeout_ms.unwrap_or(DEFAULT_DISPATCH_TIMEOUT_MS),
            sms_max_length: resources.sms_max_length.unwrap_or(DEFAULT_SMS_MAX_LENGTH),
            default_country_prefix: resources.default_country_prefix.clone().unwrap_or(DEFAULT_COUNTRY_PREFIX.to_string()),
            accepted_country_prefixes: resources
                .accepted_country_prefixes
                .clone()
                .unwrap_or(DEFAULT_ACCEPTED_COUNTRY_PREFIXES.iter().map(|it| it.to_string()).collect()),
        }
    }

    pub fn client_for(
        &self,
        channel: &Channel,
    ) -> Option<Arc<dyn ChannelClient>> {
        match channel {
            Channel::Sms => Some(self.sms_client.clone()),
            Channel::Email => self.email_client.clone(),
        }
    }
}
