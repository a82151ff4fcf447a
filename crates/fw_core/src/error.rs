use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Unexpected upstream payload: {0}")]
    Payload(String),

    #[error("Missing credential: {0}")]
    MissingCredential(&'static str),

    #[error("Inference error: {0}")]
    Inference(String),
}

pub type Result<T> = std::result::Result<T, Error>;
