//! Error types for Murmur

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unserializable value for field '{field}': {source}")]
    Unserializable {
        field: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid lexicon: {0}")]
    Lexicon(String),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
