//! Whole-document load and save.

use tracing::{error, warn};

use vitanova_core::document::Document;

use crate::error::StoreError;
use crate::port::StoragePort;

/// Load the document, seeding defaults when the store is empty or
/// unreadable.
///
/// A missing document, an unreadable port, and a corrupt payload all
/// resolve to the default-seeded document rather than an error — the
/// caller never sees a load failure.
pub async fn load_document<P: StoragePort>(port: &P) -> Document {
    match port.load().await {
        Ok(Some(bytes)) => match Document::from_json(&bytes) {
            Ok(doc) => doc,
            Err(e) => {
                warn!(error = %e, "stored document is corrupt, seeding defaults");
                Document::default()
            }
        },
        Ok(None) => Document::default(),
        Err(e) => {
            warn!(error = %e, "store unreadable, seeding defaults");
            Document::default()
        }
    }
}

/// Serialize and persist the whole document.
///
/// On failure the prior persisted state is left intact (the port never
/// partially writes) and the error is logged and returned.
pub async fn save_document<P: StoragePort>(port: &P, doc: &Document) -> Result<(), StoreError> {
    let bytes = doc.to_json_pretty()?;
    port.save(&bytes).await.inspect_err(|e| {
        error!(error = %e, "failed to persist document");
    })
}
