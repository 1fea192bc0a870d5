use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    // Raised before any network call is made
    #[error("Missing {field}: select a valid station and date")]
    InvalidRequest { field: &'static str },

    #[error("Invalid forecast endpoint '{0}'")]
    InvalidBaseUrl(String),

    #[error("Network request failed for {0}")]
    Transport(String, #[source] reqwest::Error),

    #[error("{}", remote_message(.status.as_u16(), .message.as_deref()))]
    Remote {
        url: String,
        status: reqwest::StatusCode,
        message: Option<String>,
    },

    #[error("Malformed forecast response from {url}")]
    MalformedResponse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid timestamp '{value}' in forecast response, expected HH:MM:SS")]
    InvalidTimestamp { value: String },
}

fn remote_message(status: u16, message: Option<&str>) -> String {
    match message {
        Some(message) => format!("Failed to fetch data ({}): {}", status, message),
        None => format!("Failed to fetch data ({})", status),
    }
}

impl FetchError {
    /// HTTP status for [`FetchError::Remote`], `None` for every other kind.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            FetchError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}
