use crate::classified_error::{ClassifiedError, FailureKind, Severity};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid phone number '{address}': expected local format 0XXXXXXXXX or international format {default_prefix}XXXXXXXXX")]
    InvalidPhoneFormat { address: String, default_prefix: String },
    #[error("Invalid email address '{address}'")]
    InvalidEmailFormat { address: String },
    #[error("Message body of {length} characters exceeds the {max_length} character maximum for {channel}")]
    MessageTooLong { length: usize, max_length: usize, channel: String },
}

impl ValidationError {
    pub fn classified(&self) -> ClassifiedError {
        match self {
            ValidationError::InvalidPhoneFormat { .. } | ValidationError::InvalidEmailFormat { .. } => {
                ClassifiedError::new(FailureKind::PhoneFormatError, Severity::Medium, &self.to_string())
            },
            ValidationError::MessageTooLong { .. } => ClassifiedError::new(FailureKind::Unknown, Severity::Medium, &self.to_string()),
        }
    }
}
