use thiserror::Error;

use vitanova_store::error::StoreError;

#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Sign-up with an email that already has an account. Carries its own
    /// distinct user-facing message.
    #[error(
        "An account with this email already exists. Please try logging in \
         or use a different email address."
    )]
    DuplicateAccount { email: String },

    #[error("Invalid credentials or user does not exist.")]
    AccountNotFound,

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
