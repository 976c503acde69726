use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("not signed in or session expired")]
    Unauthorized,

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}
