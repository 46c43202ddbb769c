use std::path::PathBuf;

use reqwest::StatusCode;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0} was not found")]
    NotFound(String),

    #[error("Modrinth responded with {status}: {body}")]
    Api {
        status: StatusCode,
        body: serde_json::Value,
    },

    #[error("Couldn't open {} for upload, {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0}")]
    Config(String),

    #[error("{0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Error while parsing json, {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// A lookup that came back empty, for whatever reason the api gave.
#[derive(thiserror::Error, Debug)]
#[error("{0} was not found")]
pub struct NotFound(pub String);

impl From<NotFound> for Error {
    fn from(value: NotFound) -> Self {
        Error::NotFound(value.0)
    }
}
