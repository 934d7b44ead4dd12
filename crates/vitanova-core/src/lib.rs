//! vitanova-core
//!
//! Pure domain types and the persisted document aggregate.
//! No I/O dependency — this is the shared vocabulary of the Vitanova system.

pub mod calendar;
pub mod document;
pub mod error;
pub mod models;
pub mod seed;
