use thiserror::Error;

pub type Result<T> = std::result::Result<T, StatusClientError>;

#[derive(Debug, Error)]
pub enum StatusClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for StatusClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            StatusClientError::Decode(err.to_string())
        } else {
            StatusClientError::Network(err.to_string())
        }
    }
}
