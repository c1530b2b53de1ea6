use crate::shared::errors::StorageError;
use thiserror::Error;

/// Top-level error type for board operations.
///
/// Validation failures and operations on vanished ids are not errors; they
/// resolve to no-ops at the store boundary. Only conflicts the caller must
/// hear about and persistence failures surface here.
#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Tag already exists: {0}")]
    DuplicateTag(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
