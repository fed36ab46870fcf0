use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompdocError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// Carries the clipboard's own failure text, shown to the user verbatim.
    #[error("{0}")]
    Clipboard(String),

    #[error("Channel error: {0}")]
    Channel(String),
}

pub type Result<T> = std::result::Result<T, CompdocError>;
