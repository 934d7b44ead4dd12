use thiserror::Error;

use vitanova_core::error::CoreError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Serialization(#[from] CoreError),

    #[error("store read error: {0}")]
    Read(String),

    #[error("store write error: {0}")]
    Write(String),
}
