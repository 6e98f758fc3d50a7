use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration value: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown form field: {name}")]
    UnknownFieldError { name: String },

    #[error("Invalid color value: {value}")]
    InvalidColorError { value: String },

    #[error("No navigation link at index {index} ({available} available)")]
    UnknownTabError { index: usize, available: usize },

    #[error("No FAQ item at index {index} ({available} available)")]
    UnknownFaqItemError { index: usize, available: usize },

    #[error("Preference storage error: {message}")]
    StorageError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Storage,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PageError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PageError::ConfigError { .. }
            | PageError::MissingConfigError { .. }
            | PageError::InvalidConfigValueError { .. }
            | PageError::TomlParseError(_) => ErrorCategory::Configuration,
            PageError::StorageError { .. } | PageError::TomlSerializeError(_) => {
                ErrorCategory::Storage
            }
            PageError::UnknownFieldError { .. }
            | PageError::InvalidColorError { .. }
            | PageError::UnknownTabError { .. }
            | PageError::UnknownFaqItemError { .. } => ErrorCategory::Input,
            PageError::IoError(_) | PageError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // a rejected event leaves the rest of the page untouched
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Storage => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PageError::IoError(_) => {
                "Check that the file exists and that you have permission to read it".to_string()
            }
            PageError::TomlParseError(_) => {
                "Check the TOML syntax of the configuration or session file".to_string()
            }
            PageError::MissingConfigError { field } => {
                format!("Add a value for '{}' to the configuration", field)
            }
            PageError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}' in the configuration", field)
            }
            PageError::UnknownFieldError { .. } => format!(
                "Use one of: {}",
                crate::domain::model::FieldId::ALL
                    .iter()
                    .map(|f| f.key())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            PageError::InvalidColorError { .. } => {
                "Colors must be written as #rrggbb hex values".to_string()
            }
            PageError::UnknownTabError { .. } | PageError::UnknownFaqItemError { .. } => {
                "Check the indices used in the session script against the page layout".to_string()
            }
            PageError::StorageError { .. } | PageError::TomlSerializeError(_) => {
                "Check the preference file location or delete the corrupted file".to_string()
            }
            PageError::ConfigError { .. } | PageError::SerializationError(_) => {
                "Re-run with --verbose for more details".to_string()
            }
        }
    }

    /// Process exit code for the CLI. 0 and 1 are reserved for the form verdict.
    pub fn exit_code(&self) -> i32 {
        2
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Storage => format!("Could not access saved preferences: {}", self),
            ErrorCategory::Input => format!("Invalid page event: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, PageError>;
