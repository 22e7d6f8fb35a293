use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid address {address:?}: {source}")]
    Address {
        address: String,
        source: url::ParseError,
    },

    #[error("not found: {0}")]
    NotFound(String),
}

pub type FetchResult<T> = Result<T, FetchError>;
