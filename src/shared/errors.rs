use thiserror::Error;

/// Errors raised by the persistence layer.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File access failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to create directory: {0}")]
    Directory(String),
}

impl StorageError {
    pub fn directory(msg: impl Into<String>) -> Self {
        StorageError::Directory(msg.into())
    }
}
