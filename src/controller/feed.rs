use crate::model::RoundSummary;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

/// Only the newest rounds on a feed page are offered.
pub const MAX_ROUNDS_PER_PAGE: usize = 30;

/// Attribute carried by every round post in the source feed.
pub const ROUND_POST_ATTR: &str = "data-round-post";

const LABEL_PREFIX: &str = "Score of ";

static ROUND_POST: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(&format!("[{ROUND_POST_ATTR}]")).expect("round post selector is valid")
});

static PERMALINK: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("a.round-permalink, a[href*='review_score']")
        .expect("permalink selector is valid")
});

static DATE_LABEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".round-date").expect("date selector is valid"));

static REVIEW_SCORE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:score/)?review_score/(\d+)").expect("review score pattern is valid")
});

static TRAILING_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*$").expect("digits pattern is valid"));

/// Parse one feed page into round summaries, in document order.
///
/// Malformed markup is parsed as best the HTML parser can; it is never an error.
#[must_use]
pub fn extract_rounds(html: &str) -> Vec<RoundSummary> {
    let document = Html::parse_document(html);
    if !document.errors.is_empty() {
        tracing::trace!(count = document.errors.len(), "feed markup had parse errors");
    }

    document
        .select(&ROUND_POST)
        .filter_map(|post| {
            let summary = round_from_post(post);
            if summary.is_none() {
                tracing::debug!(
                    marker = post.value().attr(ROUND_POST_ATTR).unwrap_or(""),
                    "skipping feed post without a usable round id"
                );
            }
            summary
        })
        .take(MAX_ROUNDS_PER_PAGE)
        .collect()
}

fn round_from_post(post: ElementRef<'_>) -> Option<RoundSummary> {
    let post_id = post
        .value()
        .attr(ROUND_POST_ATTR)
        .and_then(|marker| TRAILING_DIGITS.captures(marker))
        .map(|caps| caps[1].to_string())
        .unwrap_or_default();

    let permalink = post.select(&PERMALINK).next();
    let href = permalink
        .and_then(|a| a.value().attr("href"))
        .unwrap_or_default();
    let link_text = permalink.map(|a| element_text(&a)).unwrap_or_default();

    let round_id = REVIEW_SCORE_ID
        .captures(href)
        .map_or(post_id, |caps| caps[1].to_string());
    if !is_positive_integer(&round_id) {
        return None;
    }

    let raw_date_text = post
        .select(&DATE_LABEL)
        .next()
        .map(|d| d.text().collect::<String>())
        .unwrap_or_default();

    Some(RoundSummary {
        external_round_id: round_id,
        label: round_label_from_link_text(&link_text),
        raw_date_text,
    })
}

fn element_text(element: &ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// "Score of a round at X" becomes "A round at X".
#[must_use]
pub fn round_label_from_link_text(link_text: &str) -> String {
    let rest = link_text.strip_prefix(LABEL_PREFIX).unwrap_or(link_text);
    let mut chars = rest.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn is_positive_integer(id: &str) -> bool {
    !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) && id.parse::<u64>().is_ok_and(|n| n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_prefix_is_stripped_and_capitalized() {
        assert_eq!(
            round_label_from_link_text("Score of 85 at Oak Hill | Oak Hill CC [White]"),
            "85 at Oak Hill | Oak Hill CC [White]"
        );
        assert_eq!(round_label_from_link_text("Score of a round"), "A round");
        assert_eq!(round_label_from_link_text(""), "");
    }

    #[test]
    fn zero_is_not_a_round_id() {
        assert!(!is_positive_integer("0"));
        assert!(!is_positive_integer("12a"));
        assert!(is_positive_integer("4411"));
    }
}
