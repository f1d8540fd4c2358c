use crate::model::RoundMetadata;
use regex::Regex;
use std::sync::LazyLock;

// "... at <course> | <facility> [<tee>]"
static FULL_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bat\s+(?P<course>[^|]+?)\s*\|\s*(?P<facility>[^|\[]+?)\s*\[(?P<tee>[^\]]+)\]")
        .expect("label pattern is valid")
});

static BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]").expect("bracket pattern is valid"));

static AFTER_AT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bat\s+(.*)$").expect("at pattern is valid"));

/// Pull course, facility and tee names out of a free-text round label.
///
/// Never fails; fields that cannot be found stay empty.
#[must_use]
pub fn parse_round_label(label: &str) -> RoundMetadata {
    if let Some(caps) = FULL_LABEL.captures(label) {
        return RoundMetadata {
            course_name: caps["course"].trim().to_string(),
            facility_name: caps["facility"].trim().to_string(),
            tee_name: caps["tee"].trim().to_string(),
        };
    }

    let mut metadata = RoundMetadata::default();

    if let Some(caps) = BRACKETED.captures(label) {
        metadata.tee_name = caps[1].trim().to_string();
    }

    let segments: Vec<&str> = label.split('|').collect();
    if segments.len() >= 2 {
        if let Some(caps) = AFTER_AT.captures(segments[0]) {
            metadata.course_name = caps[1].trim().to_string();
        }
        metadata.facility_name = BRACKETED.replace_all(segments[1], "").trim().to_string();
    }

    metadata
}
