use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A personal wellness goal. The only record type that supports deletion.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GoalRecord {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub content: String,
    pub completed: bool,
    pub created_at: jiff::Timestamp,
}
