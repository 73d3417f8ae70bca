use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Batch store is full ({capacity} batches)")]
    CapacityExceeded { capacity: usize },
}

impl RegistryError {
    /// Short message suitable for a terminal user.
    pub fn user_friendly_message(&self) -> String {
        match self {
            RegistryError::IoError(e) => format!("I/O failure: {}", e),
            RegistryError::ConfigError { message } => {
                format!("Could not load configuration: {}", message)
            }
            RegistryError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            RegistryError::InvalidConfigValueError { field, value, .. } => {
                format!("Configuration field '{}' has an invalid value '{}'", field, value)
            }
            RegistryError::CapacityExceeded { capacity } => {
                format!("No room for more batches (limit {})", capacity)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RegistryError::IoError(_) => "Check that stdin/stdout are readable and writable",
            RegistryError::ConfigError { .. } => {
                "Make sure the config file exists and is valid TOML"
            }
            RegistryError::ConfigValidationError { .. }
            | RegistryError::InvalidConfigValueError { .. } => {
                "Fix the reported field in the config file or on the command line"
            }
            RegistryError::CapacityExceeded { .. } => {
                "Raise max_batches or retire unused batches"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
