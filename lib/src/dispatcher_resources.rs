use crate::app_state::{DEFAULT_ACCEPTED_COUNTRY_PREFIXES, DEFAULT_BACKOFF_BASE_MS, DEFAULT_COUNTRY_PREFIX, DEFAULT_DISPATCH_TIMEOUT_MS, DEFAULT_MAX_ATTEMPTS, DEFAULT_SMS_MAX_LENGTH};
use crate::channel_client::ChannelClient;
use crate::environment::Environment;
use crate::escalation::AlertChannel;
use std::sync::Arc;

#[derive(Clone)]
pub struct DispatcherResources {
    pub sms_client: Arc<dyn ChannelClient>,
    pub email_client: Option<Arc<dyn ChannelClient>>,
    pub alert_channel: Option<Arc<dyn AlertChannel>>,
    pub max_attempts: Option<u32>,
    pub backoff_base_ms: Option<u64>,
    pub dispatch_timeout_ms: Option<u64>,
    pub sms_max_length: Option<u32>,
    pub default_country_prefix: Option<String>,
    pub accepted_country_prefixes: Option<Vec<String>>,
}

impl DispatcherResources {
    pub fn new(sms_client: Arc<dyn ChannelClient>) -> Self {
        Self {
            sms_client,
            email_client: None,
            alert_channel: None,
            max_attempts: None,
            backoff_base_ms: None,
            dispatch_timeout_ms: None,
            sms_max_length: None,
            default_country_prefix: None,
            accepted_country_prefixes: None,
        }
    }

    pub fn with_email_client(
        self,
        email_client: Arc<dyn ChannelClient>,
    ) -> Self {
        Self {
            email_client: Some(email_client),
            ..self
        }
    }

    pub fn with_alert_channel(
        self,
        alert_channel: Arc<dyn AlertChannel>,
    ) -> Self {
        Self {
            alert_channel: Some(alert_channel),
            ..self
        }
    }

    pub fn with_max_attempts(
        self,
        max_attempts: u32,
    ) -> Self {
        Self {
            max_attempts: Some(max_attempts),
            ..self
        }
    }

    pub fn with_backoff_base_ms(
        self,
        backoff_base_ms: u64,
    ) -> Self {
        Self {
            backoff_base_ms: Some(backoff_base_ms),
            ..self
        }
    }

    pub fn with_dispatch_timeout_ms(
        self,
        dispatch_timeout_ms: u64,
    ) -> Self {
        Self {
            dispatch_timeout_ms: Some(dispatch_timeout_ms),
            ..self
        }
    }

    pub fn with_sms_max_length(
        self,
        sms_max_length: u32,
    ) -> Self {
        Self {
            sms_max_length: Some(sms_max_length),
            ..self
        }
    }

    pub fn with_default_country_prefix(
        self,
        default_country_prefix: &str,
    ) -> Self {
        Self {
            default_country_prefix: Some(default_country_prefix.to_string()),
            ..self
        }
    }

    pub fn with_accepted_country_prefixes(
        self,
        accepted_country_prefixes: Vec<String>,
    ) -> Self {
        Self {
            accepted_country_prefixes: Some(accepted_country_prefixes),
            ..self
        }
    }

    // Environment values win over anything already configured; unset
    // variables keep the configured value or the default.
    pub fn with_env_overrides(self) -> Self {
        let accepted_country_prefixes = Environment::string(
            "NOTIFICATION_ACCEPTED_COUNTRY_PREFIXES",
            &self
                .accepted_country_prefixes
                .clone()
                .unwrap_or(DEFAULT_ACCEPTED_COUNTRY_PREFIXES.iter().map(|it| it.to_string()).collect())
                .join(","),
        );

        Self {
            max_attempts: Some(Environment::u32("NOTIFICATION_MAX_ATTEMPTS", self.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS))),
            backoff_base_ms: Some(Environment::u64("NOTIFICATION_BACKOFF_BASE_MS", self.backoff_base_ms.unwrap_or(DEFAULT_BACKOFF_BASE_MS))),
            dispatch_timeout_ms: Some(Environment::u64("NOTIFICATION_DISPATCH_TIMEOUT_MS", self.dispatch_timeout_ms.unwrap_or(DEFAULT_DISPATCH_TIMEOUT_MS))),
            sms_max_length: Some(Environment::u32("NOTIFICATION_SMS_MAX_LENGTH", self.sms_max_length.unwrap_or(DEFAULT_SMS_MAX_LENGTH))),
            default_country_prefix: Some(Environment::string(
                "NOTIFICATION_DEFAULT_COUNTRY_PREFIX",
                &self.default_country_prefix.clone().unwrap_or(DEFAULT_COUNTRY_PREFIX.to_string()),
            )),
            accepted_country_prefixes: Some(accepted_country_prefixes.split(',').map(|it| it.trim().to_string()).filter(|it| !it.is_empty()).collect()),
            ..self
        }
    }
}
