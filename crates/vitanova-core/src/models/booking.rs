use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A confirmed appointment with a counselor. Immutable after creation —
/// rescheduling and cancellation are not supported.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BookingRecord {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub counselor_id: Uuid,
    pub counselor_name: String,
    /// Human-readable date + time, e.g. "Today at 10:00 AM".
    pub slot: String,
    pub status: BookingStatus,
    pub created_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum BookingStatus {
    Confirmed,
}
