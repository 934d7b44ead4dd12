//! vitanova-gateway
//!
//! The mutation gateway: every write the presentation layer can make goes
//! through here as a whole-document read-modify-write. The gateway injects
//! the acting account as the owner reference, persists the updated
//! document, emits an audit event, and returns the created or changed
//! record.
//!
//! Within one process mutations are strictly serialized — each one loads a
//! fresh document and saves it before returning, and there is no
//! preemption between the two. Cross-process races are the store's
//! documented gap.

pub mod error;
mod gateway;

pub use error::GatewayError;
pub use gateway::Gateway;
