//! The persisted document: one serializable aggregate holding every
//! collection. The store reads and writes it whole; there are no partial
//! indices.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;
use crate::models::account::Account;
use crate::models::booking::BookingRecord;
use crate::models::content::{ResourceLibrary, VideoRecord};
use crate::models::forum::ForumPost;
use crate::models::goal::GoalRecord;
use crate::models::journal::JournalEntry;
use crate::models::mood::MoodEntry;
use crate::models::screening::ScreeningRecord;
use crate::seed;

/// Everything the platform persists, as a single JSON document.
///
/// Personal collections (screenings, bookings, moods, journal, goals)
/// carry an owner reference on every record; accounts and the reference
/// content are global.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Document {
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub videos: Vec<VideoRecord>,
    #[serde(default)]
    pub resources: ResourceLibrary,
    #[serde(default)]
    pub screenings: Vec<ScreeningRecord>,
    #[serde(default)]
    pub bookings: Vec<BookingRecord>,
    #[serde(default)]
    pub forum: Vec<ForumPost>,
    #[serde(default)]
    pub moods: Vec<MoodEntry>,
    #[serde(default)]
    pub journal: Vec<JournalEntry>,
    #[serde(default)]
    pub goals: Vec<GoalRecord>,
}

impl Default for Document {
    /// The default-seeded document: reference content populated, every
    /// other collection empty.
    fn default() -> Self {
        Self {
            accounts: Vec::new(),
            videos: seed::default_videos(),
            resources: seed::default_resources(),
            screenings: Vec::new(),
            bookings: Vec::new(),
            forum: Vec::new(),
            moods: Vec::new(),
            journal: Vec::new(),
            goals: Vec::new(),
        }
    }
}

impl Document {
    /// Decode a persisted document.
    pub fn from_json(bytes: &[u8]) -> Result<Self, CoreError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Encode for persistence. Pretty-printed, matching the store's
    /// human-inspectable demo role.
    pub fn to_json_pretty(&self) -> Result<Vec<u8>, CoreError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    pub fn account_by_id(&self, id: Uuid) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    pub fn account_by_id_mut(&mut self, id: Uuid) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.id == id)
    }
}
