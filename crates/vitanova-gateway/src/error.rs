use thiserror::Error;

use vitanova_screening::error::ScreeningError;
use vitanova_store::error::StoreError;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Entry-form validation that should have been resolved before the
    /// mutation. Never reaches the store.
    #[error(transparent)]
    Screening(#[from] ScreeningError),

    /// The referenced record does not exist (or is not the actor's).
    #[error("record not found")]
    NotFound,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl GatewayError {
    /// The message shown to the user. Validation errors carry their own
    /// specific text; persistence and unexpected failures collapse into a
    /// generic retry suggestion while the cause stays in the logs.
    pub fn user_message(&self) -> String {
        match self {
            GatewayError::Screening(e) => e.to_string(),
            GatewayError::NotFound => "We couldn't find that record.".to_string(),
            GatewayError::Store(_) | GatewayError::Unexpected(_) => {
                "Something went wrong on our end. Please try again.".to_string()
            }
        }
    }
}
