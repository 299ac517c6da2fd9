use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SitemapError {
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("File is not valid UTF-8: {}", .0.display())]
    InvalidUtf8(PathBuf),
    #[error("Character {ch:?} cannot be written to XML (in {value:?})")]
    InvalidXmlChar { ch: char, value: String },
    #[error("Could not parse config file {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SitemapError {
    /// Wraps an I/O error with the path that produced it.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SitemapError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SitemapError>;
