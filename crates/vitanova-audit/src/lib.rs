//! vitanova-audit
//!
//! Structured audit events for gateway mutations, emitted through
//! `tracing`.

pub mod events;

pub use events::AuditEvent;
