use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A gratitude journal entry. Append-only, newest-first.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct JournalEntry {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub content: String,
    pub created_at: jiff::Timestamp,
}
