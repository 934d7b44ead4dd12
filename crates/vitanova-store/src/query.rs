//! Read-path views over the document.
//!
//! Access control lives here, not in the store: personal collections are
//! filtered to the querying owner, while counselors get unfiltered reads
//! over all personal records (clinical oversight). Global collections
//! pass through either way.

use serde::Serialize;
use uuid::Uuid;

use vitanova_core::document::Document;
use vitanova_core::models::booking::BookingRecord;
use vitanova_core::models::content::{ResourceLibrary, VideoRecord};
use vitanova_core::models::forum::ForumPost;
use vitanova_core::models::goal::GoalRecord;
use vitanova_core::models::journal::JournalEntry;
use vitanova_core::models::mood::MoodEntry;
use vitanova_core::models::screening::ScreeningRecord;

/// The slice of the document one reader is allowed to see.
#[derive(Debug, Clone, Serialize)]
pub struct RecordView {
    pub screenings: Vec<ScreeningRecord>,
    pub bookings: Vec<BookingRecord>,
    pub moods: Vec<MoodEntry>,
    pub journal: Vec<JournalEntry>,
    pub goals: Vec<GoalRecord>,
    pub forum: Vec<ForumPost>,
    pub videos: Vec<VideoRecord>,
    pub resources: ResourceLibrary,
}

impl RecordView {
    /// Personal collections filtered to `owner_id`; global collections
    /// unfiltered.
    pub fn for_owner(doc: &Document, owner_id: Uuid) -> Self {
        Self {
            screenings: filtered(&doc.screenings, |r| r.owner_id == owner_id),
            bookings: filtered(&doc.bookings, |r| r.owner_id == owner_id),
            moods: filtered(&doc.moods, |r| r.owner_id == owner_id),
            journal: filtered(&doc.journal, |r| r.owner_id == owner_id),
            goals: filtered(&doc.goals, |r| r.owner_id == owner_id),
            forum: doc.forum.clone(),
            videos: doc.videos.clone(),
            resources: doc.resources.clone(),
        }
    }

    /// All personal records regardless of owner — the counselor view.
    pub fn unfiltered(doc: &Document) -> Self {
        Self {
            screenings: doc.screenings.clone(),
            bookings: doc.bookings.clone(),
            moods: doc.moods.clone(),
            journal: doc.journal.clone(),
            goals: doc.goals.clone(),
            forum: doc.forum.clone(),
            videos: doc.videos.clone(),
            resources: doc.resources.clone(),
        }
    }
}

fn filtered<T: Clone>(records: &[T], keep: impl Fn(&T) -> bool) -> Vec<T> {
    records.iter().filter(|r| keep(r)).cloned().collect()
}
