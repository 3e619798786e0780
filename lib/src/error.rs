use std::fmt;

#[derive(Debug)]
pub struct NotificationDispatcherError {
    pub cause: String,
    pub message: Option<String>,
}

impl NotificationDispatcherError {
    pub fn new(
        cause: &str,
        message: &str,
    ) -> Self {
        Self {
            cause: cause.to_string(),
            message: Some(message.to_string()),
        }
    }
}

impl std::error::Error for NotificationDispatcherError {}

impl fmt::Display for NotificationDispatcherError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.cause)
    }
}
