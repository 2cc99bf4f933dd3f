//! City source error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CityError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl CityError {
    /// Short message for logs and status lines.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Network error. Check your connection.".to_string(),
            Self::Api { status, .. } if *status >= 500 => {
                "The city service is having trouble. Try scrolling again later.".to_string()
            }
            Self::Api { status, .. } => format!("City request rejected ({})", status),
            Self::InvalidEndpoint(_) => "City endpoint is misconfigured".to_string(),
            Self::Parse(_) => "Unexpected response from the city service".to_string(),
        }
    }
}
