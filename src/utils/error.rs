use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrokerError {
    #[error("Missing {0} in path parameters")]
    MissingPathParameter(&'static str),

    #[error("{0}")]
    NotFound(String),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{context}: {message}")]
    ProviderError { context: String, message: String },
}

impl BrokerError {
    pub fn provider(context: impl Into<String>, err: impl std::fmt::Display) -> Self {
        BrokerError::ProviderError {
            context: context.into(),
            message: err.to_string(),
        }
    }

    /// HTTP status this error renders as at the handler boundary.
    pub fn status_code(&self) -> u16 {
        match self {
            BrokerError::MissingPathParameter(_) => 400,
            BrokerError::NotFound(_) => 404,
            _ => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, BrokerError>;
