use std::time::Duration;

use tracing::{error, info};
use uuid::Uuid;

use vitanova_audit::AuditEvent;
use vitanova_core::models::account::{Account, Role};
use vitanova_core::models::booking::{BookingRecord, BookingStatus};
use vitanova_core::models::content::{youtube_embed_url, VideoRecord};
use vitanova_core::models::forum::{ForumPost, ForumReply};
use vitanova_core::models::goal::GoalRecord;
use vitanova_core::models::journal::JournalEntry;
use vitanova_core::models::mood::{Mood, MoodEntry};
use vitanova_core::models::screening::ScreeningRecord;
use vitanova_screening::error::ScreeningError;
use vitanova_screening::scorer::score_responses;
use vitanova_store::port::StoragePort;
use vitanova_store::query::RecordView;
use vitanova_store::state::{load_document, save_document};

use crate::error::GatewayError;

/// The mutation gateway for one acting account.
///
/// Every mutation loads a fresh document, applies one change in memory,
/// and persists the whole document back. A failed save returns an error
/// with nothing half-applied — the in-memory document is simply dropped.
pub struct Gateway<P: StoragePort> {
    port: P,
    actor: Account,
    latency: Duration,
}

impl<P: StoragePort> Gateway<P> {
    pub fn new(port: P, actor: Account) -> Self {
        Self {
            port,
            actor,
            latency: Duration::ZERO,
        }
    }

    /// Simulated network round-trip before each mutation. UI feedback
    /// only; correctness never depends on it.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn actor(&self) -> &Account {
        &self.actor
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn audit(&self, action: &str, resource_type: &str, resource_id: impl ToString) {
        AuditEvent::new(
            action,
            resource_type,
            resource_id.to_string(),
            self.actor.id.to_string(),
        )
        .emit();
    }

    /// Validate, score, and record a completed screening.
    ///
    /// Incomplete or out-of-range responses fail before any store access.
    pub async fn submit_screening(
        &self,
        tool_id: &str,
        responses: Vec<u8>,
    ) -> Result<ScreeningRecord, GatewayError> {
        let tool = vitanova_screening::get_tool(tool_id)
            .ok_or_else(|| ScreeningError::UnknownTool(tool_id.to_string()))?;
        tool.validate(&responses)?;
        let outcome = score_responses(&responses);

        self.simulate_latency().await;
        let mut doc = load_document(&self.port).await;
        let record = ScreeningRecord {
            id: Uuid::new_v4(),
            owner_id: self.actor.id,
            tool: tool.name().to_string(),
            responses,
            score: outcome.score,
            risk: outcome.risk,
            created_at: jiff::Timestamp::now(),
        };
        doc.screenings.insert(0, record.clone());
        save_document(&self.port, &doc).await?;

        info!(score = record.score, risk = ?record.risk, "screening recorded");
        self.audit("screening.submit", "screening", record.id);
        Ok(record)
    }

    /// Book a slot with a counselor. Bookings are immutable and
    /// `Confirmed` from creation.
    pub async fn create_booking(
        &self,
        counselor_id: Uuid,
        counselor_name: &str,
        slot: &str,
    ) -> Result<BookingRecord, GatewayError> {
        self.simulate_latency().await;
        let mut doc = load_document(&self.port).await;
        let booking = BookingRecord {
            id: Uuid::new_v4(),
            owner_id: self.actor.id,
            counselor_id,
            counselor_name: counselor_name.to_string(),
            slot: slot.to_string(),
            status: BookingStatus::Confirmed,
            created_at: jiff::Timestamp::now(),
        };
        doc.bookings.insert(0, booking.clone());
        save_document(&self.port, &doc).await?;

        self.audit("booking.create", "booking", booking.id);
        Ok(booking)
    }

    /// Publish an anonymous post to the peer forum.
    pub async fn post_forum(
        &self,
        anon_handle: &str,
        content: &str,
    ) -> Result<ForumPost, GatewayError> {
        self.simulate_latency().await;
        let mut doc = load_document(&self.port).await;
        let post = ForumPost {
            id: Uuid::new_v4(),
            owner_id: self.actor.id,
            anon_handle: anon_handle.to_string(),
            content: content.to_string(),
            created_at: jiff::Timestamp::now(),
            replies: Vec::new(),
        };
        doc.forum.insert(0, post.clone());
        save_document(&self.port, &doc).await?;

        self.audit("forum.post", "forum_post", post.id);
        Ok(post)
    }

    /// Append a reply to an existing forum post.
    pub async fn reply_to_post(
        &self,
        post_id: Uuid,
        anon_handle: &str,
        content: &str,
    ) -> Result<ForumPost, GatewayError> {
        self.simulate_latency().await;
        let mut doc = load_document(&self.port).await;
        let Some(post) = doc.forum.iter_mut().find(|p| p.id == post_id) else {
            return Err(GatewayError::NotFound);
        };
        post.replies.push(ForumReply {
            id: Uuid::new_v4(),
            owner_id: self.actor.id,
            anon_handle: anon_handle.to_string(),
            content: content.to_string(),
            created_at: jiff::Timestamp::now(),
        });
        let updated = post.clone();
        save_document(&self.port, &doc).await?;

        self.audit("forum.reply", "forum_post", updated.id);
        Ok(updated)
    }

    /// Add a video to the shared library, normalizing YouTube links to
    /// their embeddable form.
    pub async fn upload_video(
        &self,
        title: &str,
        description: &str,
        thumbnail_url: &str,
        video_url: &str,
    ) -> Result<VideoRecord, GatewayError> {
        self.simulate_latency().await;
        let mut doc = load_document(&self.port).await;
        let video = VideoRecord {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: description.to_string(),
            thumbnail_url: thumbnail_url.to_string(),
            video_url: youtube_embed_url(video_url),
            created_at: Some(jiff::Timestamp::now()),
        };
        doc.videos.insert(0, video.clone());
        save_document(&self.port, &doc).await?;

        self.audit("video.upload", "video", video.id);
        Ok(video)
    }

    /// Log today's mood. A second log on the same calendar date replaces
    /// the first, so at most one entry exists per (owner, date).
    pub async fn log_mood(&self, mood: Mood) -> Result<MoodEntry, GatewayError> {
        self.simulate_latency().await;
        let today = jiff::Zoned::now().date();
        let entry = MoodEntry {
            date: today,
            mood,
            owner_id: self.actor.id,
        };

        let mut doc = load_document(&self.port).await;
        match doc
            .moods
            .iter_mut()
            .find(|m| m.date == today && m.owner_id == self.actor.id)
        {
            Some(existing) => *existing = entry.clone(),
            None => doc.moods.insert(0, entry.clone()),
        }
        save_document(&self.port, &doc).await?;

        self.audit("mood.log", "mood", today);
        Ok(entry)
    }

    /// Append a journal entry.
    pub async fn submit_journal_entry(&self, content: &str) -> Result<JournalEntry, GatewayError> {
        self.simulate_latency().await;
        let mut doc = load_document(&self.port).await;
        let entry = JournalEntry {
            id: Uuid::new_v4(),
            owner_id: self.actor.id,
            content: content.to_string(),
            created_at: jiff::Timestamp::now(),
        };
        doc.journal.insert(0, entry.clone());
        save_document(&self.port, &doc).await?;

        self.audit("journal.submit", "journal_entry", entry.id);
        Ok(entry)
    }

    /// Create a wellness goal, initially incomplete.
    pub async fn create_goal(&self, content: &str) -> Result<GoalRecord, GatewayError> {
        self.simulate_latency().await;
        let mut doc = load_document(&self.port).await;
        let goal = GoalRecord {
            id: Uuid::new_v4(),
            owner_id: self.actor.id,
            content: content.to_string(),
            completed: false,
            created_at: jiff::Timestamp::now(),
        };
        doc.goals.insert(0, goal.clone());
        save_document(&self.port, &doc).await?;

        self.audit("goal.create", "goal", goal.id);
        Ok(goal)
    }

    /// Flip a goal's completion. Returns `None` without persisting when
    /// the (id, owner) pair matches nothing.
    pub async fn toggle_goal(&self, goal_id: Uuid) -> Result<Option<GoalRecord>, GatewayError> {
        self.simulate_latency().await;
        let mut doc = load_document(&self.port).await;
        let Some(goal) = doc
            .goals
            .iter_mut()
            .find(|g| g.id == goal_id && g.owner_id == self.actor.id)
        else {
            return Ok(None);
        };
        goal.completed = !goal.completed;
        let updated = goal.clone();
        save_document(&self.port, &doc).await?;

        self.audit("goal.toggle", "goal", updated.id);
        Ok(Some(updated))
    }

    /// Remove a goal on exact (id, owner) match; a no-op otherwise.
    pub async fn delete_goal(&self, goal_id: Uuid) -> Result<(), GatewayError> {
        self.simulate_latency().await;
        let mut doc = load_document(&self.port).await;
        let before = doc.goals.len();
        doc.goals
            .retain(|g| !(g.id == goal_id && g.owner_id == self.actor.id));
        if doc.goals.len() == before {
            return Ok(());
        }
        save_document(&self.port, &doc).await?;

        self.audit("goal.delete", "goal", goal_id);
        Ok(())
    }

    /// The actor's read view: owner-filtered for students, unfiltered for
    /// counselors (clinical oversight).
    pub async fn personal_view(&self) -> RecordView {
        let doc = load_document(&self.port).await;
        match self.actor.role {
            Role::Student => RecordView::for_owner(&doc, self.actor.id),
            Role::Counselor => RecordView::unfiltered(&doc),
        }
    }

    /// Log a mutation failure with its cause. The caller shows
    /// [`GatewayError::user_message`]; the underlying error stays here.
    pub fn report_failure(&self, action: &str, err: &GatewayError) {
        error!(action, error = %err, "mutation failed");
    }
}
