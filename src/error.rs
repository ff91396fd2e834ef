use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "Encountered an IO error while writing to a log sink ({})",
        .0.kind()
    )]
    Io(#[from] io::Error),

    #[error("Failed to serialize a log record ({0})")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to parse the logging configuration ({0})")]
    Config(#[from] serde_yaml::Error),
}
