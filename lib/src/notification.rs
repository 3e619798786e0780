use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Sms,
    Email,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Recipient {
    pub address: String,
    pub channel: Channel,
}

impl Recipient {
    pub fn sms(address: &str) -> Self {
        Self {
            address: address.to_string(),
            channel: Channel::Sms,
        }
    }

    pub fn email(address: &str) -> Self {
        Self {
            address: address.to_string(),
            channel: Channel::Email,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NotificationRequest {
    pub dispatch_id: Uuid,
    pub body: String,
    pub recipients: Vec<Recipient>,
    pub context: String,
}

impl NotificationRequest {
    pub fn new(
        context: &str,
        body: &str,
        recipients: Vec<Recipient>,
    ) -> Self {
        Self {
            dispatch_id: Uuid::now_v7(),
            body: body.to_string(),
            recipients,
            context: context.to_string(),
        }
    }

    pub fn sms(
        context: &str,
        body: &str,
        phone_numbers: Vec<&str>,
    ) -> Self {
        Self::new(context, body, phone_numbers.into_iter().map(Recipient::sms).collect())
    }
}
