use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A wellness video in the shared library.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VideoRecord {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub video_url: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub created_at: Option<jiff::Timestamp>,
}

/// Shared reference content: articles, crisis hotlines, and ambient
/// soundscapes. Seeded with defaults when the store is empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResourceLibrary {
    pub articles: Vec<Article>,
    pub hotlines: Vec<Hotline>,
    pub soundscapes: Vec<Soundscape>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Article {
    pub id: Uuid,
    pub title: String,
    pub snippet: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Hotline {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub available: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Soundscape {
    pub id: Uuid,
    pub title: String,
}

/// Normalize a YouTube URL to its embeddable form.
///
/// `watch?v=` and `youtu.be/` links become `/embed/` links; URLs already
/// in embed form (or not recognizably YouTube) pass through unchanged.
pub fn youtube_embed_url(url: &str) -> String {
    if url.contains("/embed/") {
        return url.to_string();
    }
    let video_id = if let Some(rest) = url.split_once("watch?v=").map(|(_, r)| r) {
        rest.split(['&', '#']).next()
    } else if let Some(rest) = url.split_once("youtu.be/").map(|(_, r)| r) {
        rest.split(['?', '#']).next()
    } else {
        None
    };
    match video_id {
        Some(id) if !id.is_empty() => format!("https://www.youtube.com/embed/{id}"),
        _ => url.to_string(),
    }
}
