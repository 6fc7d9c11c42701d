//! Error types for brewtrack-fetch

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FetchError>;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {code} from {url}")]
    Status { code: u16, url: String },

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}
