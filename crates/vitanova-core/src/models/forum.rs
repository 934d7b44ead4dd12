use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A peer-forum post. Forum content is global — it is never filtered by
/// owner on the read path.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ForumPost {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub anon_handle: String,
    pub content: String,
    pub created_at: jiff::Timestamp,
    #[serde(default)]
    pub replies: Vec<ForumReply>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ForumReply {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub anon_handle: String,
    pub content: String,
    pub created_at: jiff::Timestamp,
}
