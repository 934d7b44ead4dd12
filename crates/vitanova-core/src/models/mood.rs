use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A daily mood check-in. At most one entry exists per (owner, date);
/// logging again on the same day replaces the earlier value.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MoodEntry {
    pub date: jiff::civil::Date,
    pub mood: Mood,
    pub owner_id: Uuid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Mood {
    Happy,
    Neutral,
    Sad,
}
