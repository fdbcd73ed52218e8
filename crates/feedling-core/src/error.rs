use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("invalid number of arguments")]
    InvalidArgCount,

    #[error("command not found")]
    UnknownCommand,

    #[error("feed not found: {0}")]
    NotFound(String),

    #[error("network error: {0}")]
    Network(reqwest::Error),

    #[error("unexpected status: {0}")]
    UnexpectedStatus(reqwest::StatusCode),

    #[error("error reading response body: {0}")]
    Read(reqwest::Error),

    #[error("malformed feed document: {0}")]
    MalformedDocument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
