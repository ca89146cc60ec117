use crate::domain::model::Language;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NumerologyError {
    #[error("Missing required input: {field}")]
    MissingRequiredInput { field: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
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
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl NumerologyError {
    pub fn missing(field: &str) -> Self {
        NumerologyError::MissingRequiredInput {
            field: field.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            NumerologyError::MissingRequiredInput { .. } => ErrorCategory::Input,
            NumerologyError::ConfigValidationError { .. }
            | NumerologyError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            NumerologyError::IoError(_) | NumerologyError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 給使用者看的訊息，缺少姓名或生日時依語言顯示
    pub fn user_friendly_message(&self, lang: Language) -> String {
        match self {
            NumerologyError::MissingRequiredInput { .. } => match lang {
                Language::Hindi => "कृपया अपना नाम और जन्म तिथि भरें".to_string(),
                Language::English => "Please enter your name and date of birth.".to_string(),
            },
            NumerologyError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            NumerologyError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            NumerologyError::IoError(e) => format!("Could not read input: {}", e),
            NumerologyError::SerializationError(e) => format!("Could not encode report: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            NumerologyError::MissingRequiredInput { .. } => {
                "Provide both a name and a date of birth (e.g. --name \"Asha\" --dob 1990-01-01)"
            }
            NumerologyError::ConfigValidationError { .. } => {
                "Check that the TOML file is well formed and contains [person]"
            }
            NumerologyError::InvalidConfigValueError { .. } => {
                "Use language \"hi\" or \"en\" and format \"text\" or \"json\""
            }
            NumerologyError::IoError(_) => "Make sure the file exists and is readable",
            NumerologyError::SerializationError(_) => "Retry with --format text",
        }
    }
}

pub type Result<T> = std::result::Result<T, NumerologyError>;
