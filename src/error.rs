use std::io;

/// Custom error type for gitlab_bot operations
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid GitLab payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    #[error("Mattermost delivery failed: {0}")]
    Delivery(#[from] reqwest::Error),

    #[error("Mattermost rejected the message with status {status}: {body}")]
    DeliveryRejected { status: u16, body: String },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Helper type for Results that use RelayError
pub type Result<T> = std::result::Result<T, RelayError>;
