mod common;

use chrono::NaiveDate;
use common::{FakeDestination, eighteen_holes};
use rusty_golf_relay::controller::payload::{build_payload, submit_payload};
use rusty_golf_relay::error::AppError;
use rusty_golf_relay::model::{
    HoleScores, HolesPlayed, Mode, NormalizedDate, ResolutionReport, ResolvedSelection,
    ReviewFields, RoundMetadata, RoundSummary, ScoreFormat, SubmitOutcome, WorkflowState,
};

fn loaded_state() -> WorkflowState {
    let played = NaiveDate::from_ymd_opt(2025, 11, 2).unwrap();
    WorkflowState {
        mode: Mode::RoundLoaded,
        page_offset: 0,
        loaded_round_id: Some("88001".into()),
        pending_round_id: None,
        source_user_id: "golfer7".into(),
        owner_id: "123456".into(),
        review: Some(ReviewFields {
            summary: RoundSummary {
                external_round_id: "88001".into(),
                label: "A round at Pine Valley | Pine Valley Club [Blue]".into(),
                raw_date_text: "Nov 2, 2025".into(),
            },
            metadata: RoundMetadata::default(),
            normalized_date: NormalizedDate::from_date(played),
            report: ResolutionReport::default(),
            selection: ResolvedSelection {
                facility_id: "4412".into(),
                course_id: "701".into(),
                tee_id: "9011".into(),
            },
            facility_text: String::new(),
            played_date: played,
            format: ScoreFormat::Competition,
            holes_played: HolesPlayed::Eighteen,
            attestation: "  ".into(),
            played_alone: true,
        }),
    }
}

#[test]
fn full_round_payload() {
    let payload = build_payload(&loaded_state(), &eighteen_holes()).unwrap();
    assert_eq!(payload.facility_id, "4412");
    assert_eq!(payload.course_id, "701");
    assert_eq!(payload.tee_set_id, "9011");
    assert_eq!(payload.played_at.to_string(), "2025-11-02");
    assert_eq!(payload.number_of_holes, 18);
    assert_eq!(payload.hole_details.len(), 18);
    assert_eq!(payload.attestation, None);
    assert!(payload.played_alone);

    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["score_type"], "C");
    assert_eq!(json["holes_played"], "18");
    assert_eq!(json["played_at"], "2025-11-02");
    assert!(json.get("attestation").is_none());
}

#[test]
fn front_nine_keeps_holes_one_to_nine() {
    let mut state = loaded_state();
    state.review.as_mut().unwrap().holes_played = HolesPlayed::FrontNine;
    let payload = build_payload(&state, &eighteen_holes()).unwrap();
    let holes: Vec<u8> = payload.hole_details.iter().map(|h| h.hole_number).collect();
    assert_eq!(holes, (1..=9).collect::<Vec<u8>>());
}

#[test]
fn builder_rejects_states_it_cannot_post() {
    let browsing = WorkflowState::new("golfer7", "123456");
    assert!(matches!(
        build_payload(&browsing, &eighteen_holes()),
        Err(AppError::Validation(_))
    ));

    let mut missing_tee = loaded_state();
    missing_tee.review.as_mut().unwrap().selection.tee_id.clear();
    assert!(build_payload(&missing_tee, &eighteen_holes()).is_err());

    let mut back_nine = loaded_state();
    back_nine.review.as_mut().unwrap().holes_played = HolesPlayed::BackNine;
    let front_only: HoleScores = (1..=9u8).map(|h| (h, 5)).collect();
    assert!(build_payload(&back_nine, &front_only).is_err());
}

#[tokio::test]
async fn submitter_reports_uniform_outcomes() {
    let payload = build_payload(&loaded_state(), &eighteen_holes()).unwrap();

    let accepting = FakeDestination::default();
    assert_eq!(submit_payload(&accepting, &payload).await, SubmitOutcome::success());

    let unreachable = FakeDestination {
        outcome: Err(AppError::Network("connection reset".into())),
        ..FakeDestination::default()
    };
    let outcome = submit_payload(&unreachable, &payload).await;
    assert!(!outcome.ok);
    assert_eq!(outcome.error.as_deref(), Some("network error: connection reset"));

    let blank_reason = FakeDestination {
        outcome: Err(AppError::Remote {
            status: 500,
            message: String::new(),
        }),
        ..FakeDestination::default()
    };
    let outcome = submit_payload(&blank_reason, &payload).await;
    assert_eq!(outcome.error.as_deref(), Some("unknown error"));
}
