use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlacesError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Non-2xx HTTP response. `endpoint` is the request path; the query
    /// string is dropped because it carries the API key.
    #[error("unexpected HTTP status {status} from {endpoint}")]
    UnexpectedStatus { status: u16, endpoint: String },

    /// The JSON envelope reported a status other than `OK`/`ZERO_RESULTS`.
    #[error("places API returned {status}: {}", .message.as_deref().unwrap_or("no error message"))]
    Status {
        status: String,
        message: Option<String>,
    },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl PlacesError {
    /// The provider status string, if this error came from the JSON envelope.
    #[must_use]
    pub fn api_status(&self) -> Option<&str> {
        match self {
            PlacesError::Status { status, .. } => Some(status),
            _ => None,
        }
    }
}
