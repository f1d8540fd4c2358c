use crate::model::NormalizedDate;
use chrono::{DateTime, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

type DateParser = fn(&str) -> Option<NaiveDate>;

/// Tried in order; the first parser that yields a date wins.
const DATE_PARSERS: &[DateParser] = &[parse_free_form, parse_short_month];

// Formats recognised by the free-form step, after the text has been cleaned up.
const FREE_FORM_FORMATS: &[&str] = &[
    "%B %d, %Y",
    "%B %d %Y",
    "%A, %B %d, %Y",
    "%a, %b %d, %Y",
    "%d %B %Y",
    "%Y-%m-%d",
    "%m/%d/%Y",
];

static THROUGH_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?\b\d{4})\b").expect("year pattern is valid"));

static ORDINAL_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)(st|nd|rd|th)\b").expect("ordinal pattern is valid"));

/// Turn feed date text into a calendar date, or the unknown sentinel.
#[must_use]
pub fn normalize_round_date(raw_date_text: &str) -> NormalizedDate {
    DATE_PARSERS
        .iter()
        .find_map(|parser| parser(raw_date_text))
        .map_or_else(NormalizedDate::unknown, NormalizedDate::from_date)
}

fn parse_free_form(raw: &str) -> Option<NaiveDate> {
    let cleaned = clean_date_text(raw);
    if cleaned.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(&cleaned) {
        return Some(dt.date_naive());
    }

    // "Nov 2, 2025 at 3:15pm" and friends: also try the text up to the year.
    let mut candidates = vec![cleaned.as_str()];
    if let Some(through_year) = THROUGH_YEAR.captures(&cleaned).and_then(|caps| caps.get(1)) {
        candidates.push(through_year.as_str());
    }

    candidates.iter().find_map(|candidate| {
        FREE_FORM_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(candidate, fmt).ok())
    })
}

fn parse_short_month(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%b %d, %Y").ok()
}

fn clean_date_text(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    let trimmed = collapsed
        .trim_start_matches("Played")
        .trim_start_matches("played")
        .trim_start();
    let trimmed = trimmed.strip_prefix("on ").unwrap_or(trimmed).trim();
    ORDINAL_SUFFIX.replace_all(trimmed, "$1").into_owned()
}
