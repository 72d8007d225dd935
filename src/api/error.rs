// ABOUTME: Error types for the REST clients
// Distinguishes transport failures, error statuses, and maintenance mode (503)

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Service is under maintenance")]
    Maintenance,

    #[error("Request failed with status {}{}", .status, detail(.message))]
    Status { status: u16, message: Option<String> },

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

fn detail(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

impl ApiError {
    pub fn is_maintenance(&self) -> bool {
        matches!(self, ApiError::Maintenance)
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Maintenance => Some(503),
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Http(e) => e.status().map(|s| s.as_u16()),
            ApiError::Decode(_) | ApiError::InvalidUrl(_) => None,
        }
    }

    /// Text to show the user: the server's message if it sent one, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}
