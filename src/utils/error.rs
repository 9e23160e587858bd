use crate::domain::model::FieldError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("API request failed: {0}")]
    Api(#[from] reqwest::Error),

    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid time '{value}', expected HH:MM")]
    InvalidTime { value: String },

    #[error("Invalid {field} selection: {reason}")]
    InvalidSelection { field: String, reason: String },

    #[error("Booking could not be created: {message}")]
    SubmissionFailed { message: String },

    #[error("Booking form is invalid: {}", summarize(.errors))]
    ValidationFailed { errors: Vec<FieldError> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl BookingError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            BookingError::ValidationFailed { .. } | BookingError::InvalidSelection { .. } => {
                ErrorSeverity::Low
            }
            BookingError::Api(_)
            | BookingError::Http { .. }
            | BookingError::SubmissionFailed { .. } => ErrorSeverity::Medium,
            BookingError::Serialization(_) | BookingError::InvalidTime { .. } => {
                ErrorSeverity::High
            }
            BookingError::Io(_)
            | BookingError::ConfigError { .. }
            | BookingError::InvalidConfigValueError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BookingError::Api(_) | BookingError::Http { .. } => {
                "The reservation service could not be reached".to_string()
            }
            BookingError::ValidationFailed { errors } => {
                let lines: Vec<String> = errors.iter().map(|e| format!("  - {}", e.message)).collect();
                format!("Please fix the booking form:\n{}", lines.join("\n"))
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BookingError::Api(_) | BookingError::Http { .. } => {
                "Check your network connection and the --base-url value, then try again"
            }
            BookingError::ValidationFailed { .. } => "Fill in every required field and resubmit",
            BookingError::SubmissionFailed { .. } => {
                "Try again in a moment, or call the branch to book by phone"
            }
            BookingError::InvalidSelection { .. } => {
                "Run the `options` command to list the choices that are currently available"
            }
            BookingError::InvalidTime { .. } => "Use the 24-hour HH:MM format, e.g. 09:30",
            BookingError::Serialization(_) => "The API returned data in an unexpected shape",
            BookingError::Io(_) => "Check that the config file exists and is readable",
            BookingError::ConfigError { .. } | BookingError::InvalidConfigValueError { .. } => {
                "Review the config file and CLI flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, BookingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_failure_lists_every_field() {
        let err = BookingError::ValidationFailed {
            errors: vec![
                FieldError::new("phone", "Enter a valid phone number"),
                FieldError::new("time", "Choose a time"),
            ],
        };

        assert_eq!(
            err.to_string(),
            "Booking form is invalid: phone: Enter a valid phone number; time: Choose a time"
        );
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert!(err.user_friendly_message().contains("  - Choose a time"));
    }

    #[test]
    fn test_config_errors_are_critical() {
        let err = BookingError::InvalidConfigValueError {
            field: "api.base_url".to_string(),
            value: "ftp://salon".to_string(),
            reason: "expected http or https".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
