use crate::domain::model::Language;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BmiError {
    /// Either field was empty, non-numeric or outside its valid range.
    #[error("Invalid input: height and weight must be numbers within range")]
    InvalidInput,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Storage error: {message}")]
    StorageError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Storage,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BmiError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BmiError::InvalidInput => ErrorCategory::Input,
            BmiError::IoError(_)
            | BmiError::SerializationError(_)
            | BmiError::StorageError { .. } => ErrorCategory::Storage,
            BmiError::ConfigError { .. }
            | BmiError::ConfigValidationError { .. }
            | BmiError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    /// Bad input from the user rather than a fault in the tool.
    pub fn is_user_error(&self) -> bool {
        self.category() == ErrorCategory::Input
    }

    /// Fixed message shown in the acknowledgment dialog.
    pub fn user_friendly_message(&self) -> String {
        self.localized_message(Language::En)
    }

    pub fn localized_message(&self, lang: Language) -> String {
        match (self, lang) {
            (BmiError::InvalidInput, Language::En) => {
                "Please enter your height and weight correctly".to_string()
            }
            (BmiError::InvalidInput, Language::Ko) => {
                "키와 몸무게를 정확하게 입력해주세요".to_string()
            }
            (other, _) => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => {
                "Use a height between 100 and 200 cm and a weight between 40 and 200 kg"
            }
            ErrorCategory::Storage => "Check that the store file is readable, writable and valid JSON",
            ErrorCategory::Configuration => "Check the configuration file and command line flags",
        }
    }
}

pub type Result<T> = std::result::Result<T, BmiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_messages() {
        let err = BmiError::InvalidInput;
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.is_user_error());
        assert_eq!(
            err.user_friendly_message(),
            "Please enter your height and weight correctly"
        );
        assert_eq!(
            err.localized_message(Language::Ko),
            "키와 몸무게를 정확하게 입력해주세요"
        );
    }

    #[test]
    fn test_storage_errors_are_critical() {
        let err = BmiError::StorageError {
            message: "boom".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Storage);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(!err.is_user_error());
        assert_eq!(err.user_friendly_message(), "Storage error: boom");
    }
}
