mod common;

use common::{FEED_PAGE, feed_page_with_rounds};
use rusty_golf_relay::controller::feed::MAX_ROUNDS_PER_PAGE;
use rusty_golf_relay::extract_rounds;

#[test]
fn fixture_keeps_valid_rounds_in_document_order() {
    let rounds = extract_rounds(FEED_PAGE);
    let ids: Vec<&str> = rounds.iter().map(|r| r.external_round_id.as_str()).collect();
    assert_eq!(ids, ["88001", "5002", "88004"]);
}

#[test]
fn true_round_id_comes_from_review_link() {
    let rounds = extract_rounds(FEED_PAGE);
    let first = &rounds[0];
    assert_eq!(first.external_round_id, "88001");
    assert_eq!(first.label, "A round at Pine Valley | Pine Valley Club [Blue]");
    assert_eq!(first.raw_date_text, "Nov 2, 2025");
}

#[test]
fn post_id_is_used_when_link_has_no_round_id() {
    let rounds = extract_rounds(FEED_PAGE);
    assert_eq!(rounds[1].external_round_id, "5002");
    assert_eq!(rounds[1].label, "84 at North | Lakeside GC [White]");
}

#[test]
fn malformed_markup_and_odd_whitespace_are_tolerated() {
    let rounds = extract_rounds(FEED_PAGE);
    let last = &rounds[2];
    assert_eq!(last.label, "79 at Old Course | St Andrews Links [Medal]");
    assert_eq!(last.raw_date_text, "sometime last week");
}

#[test]
fn listing_is_capped() {
    let html = feed_page_with_rounds(1000, 35);
    let rounds = extract_rounds(&html);
    assert_eq!(rounds.len(), MAX_ROUNDS_PER_PAGE);
    assert_eq!(rounds[0].external_round_id, "1000");
    assert_eq!(rounds[29].external_round_id, "1029");
}

#[test]
fn empty_or_foreign_documents_give_nothing() {
    assert!(extract_rounds("").is_empty());
    assert!(extract_rounds("<html><body><div class='ad'>Buy balls</div>").is_empty());
}

#[test]
fn invalid_posts_do_not_count_towards_the_cap() {
    let invalid = r#"<div data-round-post="newsfeed_photo"><a class="round-permalink" href="/photos/beach">Beach day</a></div>"#;
    let valid = feed_page_with_rounds(2000, 35);
    let body = valid
        .trim_start_matches("<html><body>")
        .trim_end_matches("</body></html>");
    let mixed = format!("<html><body>{}{body}{}</body></html>", invalid.repeat(10), invalid.repeat(5));

    let rounds = extract_rounds(&mixed);
    assert_eq!(rounds.len(), MAX_ROUNDS_PER_PAGE);
    assert_eq!(rounds[0].external_round_id, "2000");
    assert_eq!(rounds[29].external_round_id, "2029");
}
