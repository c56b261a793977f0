use thiserror::Error;

/// Provider failures. These never leave the weather lookup; they are logged
/// and replaced by the fallback snapshot.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("weather request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("weather provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unknown location '{0}'")]
    UnknownLocation(String),

    #[error("malformed forecast entry: {0}")]
    Malformed(String),
}
