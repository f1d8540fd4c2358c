use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One round discovered in the source feed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RoundSummary {
    pub external_round_id: String,
    pub label: String,
    pub raw_date_text: String,
}

/// Names pulled out of a round label. Empty strings mean "not found".
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct RoundMetadata {
    pub course_name: String,
    pub facility_name: String,
    pub tee_name: String,
}

/// A calendar date recovered from feed text, or the "unparseable" sentinel.
///
/// Displays as `YYYY-MM-DD`, or as the empty string when unknown.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NormalizedDate(Option<NaiveDate>);

impl NormalizedDate {
    #[must_use]
    pub fn unknown() -> Self {
        Self(None)
    }

    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self(Some(date))
    }

    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        self.0
    }

    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.0.is_none()
    }

    /// Callers treat an unknown date as "played today".
    #[must_use]
    pub fn or_today(&self, today: NaiveDate) -> NaiveDate {
        self.0.unwrap_or(today)
    }
}

impl fmt::Display for NormalizedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            None => Ok(()),
        }
    }
}
