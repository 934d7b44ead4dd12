//! vitanova-store
//!
//! The record store: whole-document persistence behind a storage port,
//! default seeding for missing or unreadable state, and owner-scoped
//! query views.
//!
//! There is no locking. Every operation is read-whole-document,
//! mutate-in-memory, write-whole-document; two concurrent writers (two
//! processes over the same file) can race and silently overwrite each
//! other. That is an accepted, documented limitation of the demo backend,
//! not a bug to fix here.

pub mod error;
pub mod port;
pub mod query;
pub mod state;
