use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{
    HolesPlayed, NormalizedDate, ResolutionReport, ResolvedSelection, RoundMetadata,
    RoundSummary, ScoreFormat,
};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Browsing,
    RoundLoaded,
}

/// Session-scoped position in the workflow.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct WorkflowState {
    pub mode: Mode,
    /// Zero-based feed page; larger is older.
    pub page_offset: u32,
    pub loaded_round_id: Option<String>,
    /// Round ticked in the list but not loaded yet.
    pub pending_round_id: Option<String>,
    pub source_user_id: String,
    pub owner_id: String,
    pub review: Option<ReviewFields>,
}

impl WorkflowState {
    #[must_use]
    pub fn new(source_user_id: &str, owner_id: &str) -> Self {
        Self {
            source_user_id: source_user_id.to_string(),
            owner_id: owner_id.to_string(),
            ..Self::default()
        }
    }
}

/// Editable fields of the review step, seeded from the loaded round.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ReviewFields {
    pub summary: RoundSummary,
    pub metadata: RoundMetadata,
    pub normalized_date: NormalizedDate,
    pub report: ResolutionReport,
    pub selection: ResolvedSelection,
    /// What the facility field shows, `"Name (id)"` once resolved.
    pub facility_text: String,
    pub played_date: NaiveDate,
    pub format: ScoreFormat,
    pub holes_played: HolesPlayed,
    pub attestation: String,
    pub played_alone: bool,
}
