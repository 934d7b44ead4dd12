use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// One completed self-report screening. Immutable once created; the
/// collection is kept newest-first.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningRecord {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub tool: String,
    pub responses: Vec<u8>,
    pub score: u32,
    pub risk: RiskTier,
    pub created_at: jiff::Timestamp,
}

/// Categorical risk bucket derived from a screening score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskTier {
    Minimal,
    Mild,
    Moderate,
    ModeratelySevere,
    Severe,
}

impl RiskTier {
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Minimal => "Minimal",
            RiskTier::Mild => "Mild",
            RiskTier::Moderate => "Moderate",
            RiskTier::ModeratelySevere => "Moderately Severe",
            RiskTier::Severe => "Severe",
        }
    }
}
