use crate::domain::model::ConversionError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RomanError {
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("Invalid Number {input}; expected {expected}")]
    MalformedInput { expected: String, input: String },

    /// An integer too large for `i64`, kept as the text the user typed.
    #[error("Invalid Number {input}; out of range")]
    NumberOutOfRange { input: String },

    #[error("Invalid Option; expected input is 1 or 2")]
    InvalidOption(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Conversion,
    UserInput,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code used by the binaries.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl RomanError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RomanError::Conversion(_) | RomanError::NumberOutOfRange { .. } => {
                ErrorCategory::Conversion
            }
            RomanError::MalformedInput { .. } | RomanError::InvalidOption(_) => {
                ErrorCategory::UserInput
            }
            RomanError::ConfigError { .. }
            | RomanError::ConfigValidationError { .. }
            | RomanError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            RomanError::IoError(_) | RomanError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::UserInput => ErrorSeverity::Medium,
            ErrorCategory::Conversion => ErrorSeverity::High,
            ErrorCategory::Configuration | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Conversion and input errors already read as prompt output, so they
    /// pass through unchanged.
    pub fn user_friendly_message(&self) -> String {
        match self {
            RomanError::Conversion(_)
            | RomanError::NumberOutOfRange { .. }
            | RomanError::MalformedInput { .. }
            | RomanError::InvalidOption(_) => self.to_string(),
            RomanError::IoError(e) => format!("Could not read or write the console: {}", e),
            RomanError::SerializationError(e) => format!("Could not format the result: {}", e),
            RomanError::ConfigError { .. }
            | RomanError::ConfigValidationError { .. }
            | RomanError::InvalidConfigValueError { .. } => {
                format!("Configuration problem: {}", self)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            RomanError::Conversion(ConversionError::InvalidNumber(_))
            | RomanError::NumberOutOfRange { .. } => {
                "Enter a whole number from 1 to 4999".to_string()
            }
            RomanError::Conversion(ConversionError::InvalidNumeral(_)) => {
                "Enter an uppercase numeral in standard subtractive form, e.g. MCMXCIX".to_string()
            }
            RomanError::MalformedInput { expected, .. } => format!("Enter {}", expected),
            RomanError::InvalidOption(_) => "Press 1 or 2".to_string(),
            RomanError::IoError(_) => "Check that stdin and stdout are still open".to_string(),
            RomanError::SerializationError(_) => "Retry without --json".to_string(),
            RomanError::ConfigError { .. } | RomanError::ConfigValidationError { .. } => {
                "Check that the config file exists and is valid TOML".to_string()
            }
            RomanError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of {} in the config file", field)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RomanError>;
