use crate::model::ResolvedSelection;
use regex::Regex;
use std::sync::LazyLock;

static LEADING_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\((\d+)\)").expect("leading id pattern is valid"));

static TRAILING_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\d+)\)\s*$").expect("trailing id pattern is valid"));

/// A direct user choice on the review form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEdit {
    Facility(String),
    Course(String),
    Tee(String),
}

/// Numeric id carried by display text such as `"(123) Oak Hill"` or
/// `"Oak Hill (123)"`. A bare number is its own id. Empty when absent.
#[must_use]
pub fn id_from_display_text(text: &str) -> String {
    let trimmed = text.trim();
    if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return trimmed.to_string();
    }
    LEADING_ID
        .captures(trimmed)
        .or_else(|| TRAILING_ID.captures(trimmed))
        .map(|caps| caps[1].to_string())
        .unwrap_or_default()
}

/// Apply one edit and clear every field that depends on it.
///
/// Course depends on facility, tee depends on course; upstream fields are
/// never touched.
#[must_use]
pub fn apply_edit(prior: &ResolvedSelection, edit: &SelectionEdit) -> ResolvedSelection {
    match edit {
        SelectionEdit::Facility(text) => ResolvedSelection {
            facility_id: id_from_display_text(text),
            course_id: String::new(),
            tee_id: String::new(),
        },
        SelectionEdit::Course(text) => ResolvedSelection {
            facility_id: prior.facility_id.clone(),
            course_id: id_from_display_text(text),
            tee_id: String::new(),
        },
        SelectionEdit::Tee(text) => ResolvedSelection {
            facility_id: prior.facility_id.clone(),
            course_id: prior.course_id.clone(),
            tee_id: id_from_display_text(text),
        },
    }
}
