use chrono::NaiveDate;
use rusty_golf_relay::normalize_round_date;

#[test]
fn short_month_dates() {
    assert_eq!(normalize_round_date("Nov 2, 2025").to_string(), "2025-11-02");
    assert_eq!(normalize_round_date("Jan 15, 2024").to_string(), "2024-01-15");
}

#[test]
fn other_recognised_shapes() {
    let cases = [
        ("October 28, 2025", "2025-10-28"),
        ("Sunday, November 2, 2025", "2025-11-02"),
        ("2 November 2025", "2025-11-02"),
        ("2025-11-02", "2025-11-02"),
        ("11/02/2025", "2025-11-02"),
        ("2025-11-02T14:30:00Z", "2025-11-02"),
        ("Nov 2nd, 2025 at 9:05am", "2025-11-02"),
    ];
    for (raw, expected) in cases {
        assert_eq!(normalize_round_date(raw).to_string(), expected, "raw: {raw}");
    }
}

#[test]
fn unparseable_text_is_the_empty_sentinel() {
    let date = normalize_round_date("not a date");
    assert_eq!(date.to_string(), "");
    assert!(date.is_unknown());
    assert!(normalize_round_date("Feb 30, 2025").is_unknown());
}

#[test]
fn unknown_date_falls_back_to_today() {
    let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    assert_eq!(normalize_round_date("yesterday-ish").or_today(today), today);
    assert_eq!(
        normalize_round_date("Nov 2, 2025").or_today(today),
        NaiveDate::from_ymd_opt(2025, 11, 2).unwrap()
    );
}
