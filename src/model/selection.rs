use serde::{Deserialize, Serialize};

/// Destination identifiers for the loaded round. Empty string means unresolved.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedSelection {
    pub facility_id: String,
    pub course_id: String,
    pub tee_id: String,
}

impl ResolvedSelection {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.facility_id.is_empty() && !self.course_id.is_empty() && !self.tee_id.is_empty()
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchSource {
    Exact,
    Fallback,
    #[default]
    None,
}

/// Outcome of resolving one name against the catalogue.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Resolution {
    pub resolved: bool,
    pub id: String,
    pub name: String,
    pub source: MatchSource,
}

impl Resolution {
    #[must_use]
    pub fn exact(id: i64, name: &str) -> Self {
        Self {
            resolved: true,
            id: id.to_string(),
            name: name.to_string(),
            source: MatchSource::Exact,
        }
    }

    #[must_use]
    pub fn fallback(id: i64, name: &str) -> Self {
        Self {
            resolved: true,
            id: id.to_string(),
            name: name.to_string(),
            source: MatchSource::Fallback,
        }
    }

    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }
}

/// Per-field resolution detail, kept so callers can tell an exact match
/// from a defaulted one without asking the catalogue again.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolutionReport {
    pub facility: Resolution,
    pub course: Resolution,
    pub tee: Resolution,
}

impl ResolutionReport {
    #[must_use]
    pub fn selection(&self) -> ResolvedSelection {
        ResolvedSelection {
            facility_id: self.facility.id.clone(),
            course_id: self.course.id.clone(),
            tee_id: self.tee.id.clone(),
        }
    }
}
