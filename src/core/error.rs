use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum MarketError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A response body could not be decoded as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The upstream API answered, but reported a non-success status in its payload.
    #[error("API error {code}: {message}")]
    Api {
        /// Machine-readable error code reported by the API (may be empty).
        code: String,
        /// Human-readable message reported by the API (may be empty).
        message: String,
    },

    /// The data received from the API was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// A request parameter was outside its accepted range.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// An invalid date range was provided (start must not be after end).
    #[error("invalid date range: start must not be after end")]
    InvalidDates,

    /// Reading or writing a delimited table failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A local file-system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Required configuration was missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<tempfile::PersistError> for MarketError {
    fn from(e: tempfile::PersistError) -> Self {
        MarketError::Io(e.error)
    }
}
