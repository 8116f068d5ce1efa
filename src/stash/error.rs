use thiserror::Error;

#[derive(Error, Debug)]
pub enum StashError {
    #[error("no content to stash")]
    EmptyContent,

    #[error("{what} {value} is out of range: from 1 to {max}")]
    OutOfRange {
        what: &'static str,
        value: i64,
        max: usize,
    },

    #[error("could not determine the home directory")]
    NoHomeDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, StashError>;
