//! vitanova-directory
//!
//! The account directory: sign-up, login, password reset, and counselor
//! availability updates, all as whole-document read-modify-writes against
//! the store.
//!
//! There is no security model here. Lookups are by email + role, passwords
//! are stored in plaintext, and the sign-up verification code accepts any
//! value — the directory stands in for a demo backend.

pub mod error;
pub mod flows;
pub mod validate;

pub use error::DirectoryError;
pub use flows::{login, reset_password, sign_up, update_availability, NewAccount};
