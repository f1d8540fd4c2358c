use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Strokes per hole, keyed by hole number (1-18).
pub type HoleScores = BTreeMap<u8, u8>;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScoreFormat {
    #[default]
    #[serde(rename = "H")]
    Home,
    #[serde(rename = "A")]
    Away,
    #[serde(rename = "C")]
    Competition,
}

impl ScoreFormat {
    pub const ALL: [Self; 3] = [Self::Home, Self::Away, Self::Competition];

    #[must_use]
    pub fn as_form_value(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Away => "away",
            Self::Competition => "competition",
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Away => "Away",
            Self::Competition => "Competition",
        }
    }
}

impl FromStr for ScoreFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" | "h" => Ok(Self::Home),
            "away" | "a" => Ok(Self::Away),
            "competition" | "c" => Ok(Self::Competition),
            other => Err(format!("unknown score format '{other}'")),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HolesPlayed {
    #[default]
    #[serde(rename = "18")]
    Eighteen,
    #[serde(rename = "F9")]
    FrontNine,
    #[serde(rename = "B9")]
    BackNine,
}

impl HolesPlayed {
    pub const ALL: [Self; 3] = [Self::Eighteen, Self::FrontNine, Self::BackNine];

    #[must_use]
    pub fn holes(&self) -> RangeInclusive<u8> {
        match self {
            Self::Eighteen => 1..=18,
            Self::FrontNine => 1..=9,
            Self::BackNine => 10..=18,
        }
    }

    #[must_use]
    pub fn count(&self) -> u8 {
        match self {
            Self::Eighteen => 18,
            Self::FrontNine | Self::BackNine => 9,
        }
    }

    #[must_use]
    pub fn as_form_value(&self) -> &'static str {
        match self {
            Self::Eighteen => "18",
            Self::FrontNine => "front9",
            Self::BackNine => "back9",
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Eighteen => "18 holes",
            Self::FrontNine => "Front 9",
            Self::BackNine => "Back 9",
        }
    }
}

impl FromStr for HolesPlayed {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "18" | "eighteen" => Ok(Self::Eighteen),
            "front9" | "f9" => Ok(Self::FrontNine),
            "back9" | "b9" => Ok(Self::BackNine),
            other => Err(format!("unknown holes played '{other}'")),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HoleEntry {
    pub hole_number: u8,
    pub raw_score: u8,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SubmissionPayload {
    pub golfer_id: String,
    pub source_round_id: String,
    pub facility_id: String,
    pub course_id: String,
    pub tee_set_id: String,
    pub played_at: NaiveDate,
    pub score_type: ScoreFormat,
    pub number_of_holes: u8,
    pub holes_played: HolesPlayed,
    pub hole_details: Vec<HoleEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attestation: Option<String>,
    pub played_alone: bool,
}

/// Uniform result of a submission attempt.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmitOutcome {
    #[must_use]
    pub fn success() -> Self {
        Self {
            ok: true,
            error: None,
        }
    }

    #[must_use]
    pub fn failure(reason: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(reason.into()),
        }
    }
}
