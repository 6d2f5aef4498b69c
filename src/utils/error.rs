use thiserror::Error;

#[derive(Error, Debug)]
pub enum TurnError {
    #[error("No valid names found in the input")]
    EmptyInput,

    #[error("Counters store is corrupt: {message}")]
    CorruptStore { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Storage error: {message}")]
    StorageError { message: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid normalization rule '{token}': {source}")]
    InvalidRule {
        token: String,
        #[source]
        source: regex::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// The user needs to change their input; nothing went wrong internally.
    Low,
    Medium,
    High,
    Critical,
}

impl TurnError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TurnError::EmptyInput => ErrorSeverity::Low,
            TurnError::CorruptStore { .. } => ErrorSeverity::Medium,
            TurnError::ConfigValidationError { .. }
            | TurnError::InvalidConfigValueError { .. }
            | TurnError::InvalidRule { .. }
            | TurnError::SerializationError(_) => ErrorSeverity::High,
            TurnError::IoError(_) | TurnError::StorageError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TurnError::EmptyInput => "No valid names found. Please paste a list.".to_string(),
            TurnError::CorruptStore { .. } => {
                "Saved standings could not be read; they may be damaged.".to_string()
            }
            TurnError::IoError(e) => format!("Could not access the counters file: {}", e),
            TurnError::SerializationError(e) => format!("Could not encode the counters: {}", e),
            TurnError::StorageError { message } => format!("Storage failure: {}", message),
            TurnError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            TurnError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value for '{}' is invalid: {}", field, reason)
            }
            TurnError::InvalidRule { token, .. } => {
                format!("Normalization rule '{}' cannot be used", token)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TurnError::EmptyInput => "Provide one name per line",
            TurnError::CorruptStore { .. } => {
                "Run `reset` to start over, or set store.on_corrupt = \"discard\""
            }
            TurnError::IoError(_) | TurnError::StorageError { .. } => {
                "Check that the store path exists and is writable"
            }
            TurnError::SerializationError(_) => "Report this as a bug",
            TurnError::ConfigValidationError { .. }
            | TurnError::InvalidConfigValueError { .. }
            | TurnError::InvalidRule { .. } => "Fix the configuration file and try again",
        }
    }
}

pub type Result<T> = std::result::Result<T, TurnError>;
