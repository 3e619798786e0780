use crate::app_state::AppState;
use crate::notification::{Channel, Recipient};
use crate::validation::ValidationError;
use regex::Regex;
use std::sync::OnceLock;

static LOCAL_PHONE_PATTERN: OnceLock<Regex> = OnceLock::new();
static INTERNATIONAL_PHONE_PATTERN: OnceLock<Regex> = OnceLock::new();
static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn local_phone_pattern() -> &'static Regex {
    LOCAL_PHONE_PATTERN.get_or_init(|| Regex::new(r"^0\d{9}$").expect("Failed to compile local phone pattern"))
}

fn international_phone_pattern() -> &'static Regex {
    INTERNATIONAL_PHONE_PATTERN.get_or_init(|| Regex::new(r"^\+\d{10,14}$").expect("Failed to compile international phone pattern"))
}

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("Failed to compile email pattern"))
}

pub struct AddressValidator;

impl AddressValidator {
    // Must run before any attempt is scheduled: a rejected address makes
    // zero network calls.
    pub fn validate(
        app_state: &AppState,
        recipient: &Recipient,
    ) -> Result<String, ValidationError> {
        match recipient.channel {
            Channel::Sms => Self::validate_phone(app_state, &recipient.address),
            Channel::Email => Self::validate_email(&recipient.address),
        }
    }

    pub fn check_length(
        app_state: &AppState,
        body: &str,
        channel: &Channel,
    ) -> Result<(), ValidationError> {
        let max_length = match channel {
            Channel::Sms => app_state.sms_max_length as usize,
            Channel::Email => return Ok(()),
        };

        let length = body.chars().count();
        if length > max_length {
            return Err(ValidationError::MessageTooLong {
                length,
                max_length,
                channel: "sms".to_string(),
            });
        }

        Ok(())
    }

    fn validate_phone(
        app_state: &AppState,
        address: &str,
    ) -> Result<String, ValidationError> {
        let stripped = address.split_whitespace().collect::<String>();

        if local_phone_pattern().is_match(&stripped) {
            return Ok(format!("{}{}", app_state.default_country_prefix, &stripped[1..]));
        }

        if international_phone_pattern().is_match(&stripped) && app_state.accepted_country_prefixes.iter().any(|prefix| stripped.starts_with(prefix)) {
            return Ok(stripped);
        }

        Err(ValidationError::InvalidPhoneFormat {
            address: address.to_string(),
            default_prefix: app_state.default_country_prefix.clone(),
        })
    }

    fn validate_email(address: &str) -> Result<String, ValidationError> {
        let stripped = address.trim();

        if email_pattern().is_match(stripped) {
            return Ok(stripped.to_string());
        }

        Err(ValidationError::InvalidEmailFormat {
            address: address.to_string(),
        })
    }
}
