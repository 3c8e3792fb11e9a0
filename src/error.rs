use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Venues file '{}' does not exist", .0.display())]
    MissingFile(PathBuf),

    #[error("Couldn't read venues file '{}': {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Venues file is not valid TOML: {0}")]
    InvalidFormat(#[from] toml::de::Error),

    #[error("Venue #{index} is missing the required field '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("Venue '{venue}' has an unknown type '{value}'. Expected 'html' or 'js'")]
    UnknownSourceType { venue: String, value: String },

    #[error("Invalid config '{name}': {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Fetch(String),

    #[error("request timed out after {0}s")]
    Timeout(u64),

    #[error("couldn't parse listing: {0}")]
    Parse(String),
}
