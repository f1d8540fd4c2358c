use crate::controller::destination::DestinationApi;
use crate::error::AppError;
use crate::model::{HoleEntry, HoleScores, Mode, SubmissionPayload, SubmitOutcome, WorkflowState};

/// Assemble the submission from the loaded round and its hole scores.
///
/// # Errors
///
/// Will return `AppError::Validation` if no round is loaded, the selection is
/// incomplete, or no hole scores fall inside the chosen holes.
pub fn build_payload(
    state: &WorkflowState,
    hole_scores: &HoleScores,
) -> Result<SubmissionPayload, AppError> {
    let (Mode::RoundLoaded, Some(review), Some(round_id)) =
        (state.mode, state.review.as_ref(), state.loaded_round_id.as_ref())
    else {
        return Err(AppError::Validation("No round is loaded.".into()));
    };

    if state.owner_id.trim().is_empty() {
        return Err(AppError::Validation("A golfer id is required.".into()));
    }
    if !review.selection.is_complete() {
        return Err(AppError::Validation(
            "Choose a facility, course and tee before submitting.".into(),
        ));
    }

    let hole_details: Vec<HoleEntry> = review
        .holes_played
        .holes()
        .filter_map(|hole| {
            hole_scores.get(&hole).map(|&raw_score| HoleEntry {
                hole_number: hole,
                raw_score,
            })
        })
        .collect();
    if hole_details.is_empty() {
        return Err(AppError::Validation(
            "The round has no scores for the selected holes.".into(),
        ));
    }

    let attestation = review.attestation.trim();

    Ok(SubmissionPayload {
        golfer_id: state.owner_id.trim().to_string(),
        source_round_id: round_id.clone(),
        facility_id: review.selection.facility_id.clone(),
        course_id: review.selection.course_id.clone(),
        tee_set_id: review.selection.tee_id.clone(),
        played_at: review.played_date,
        score_type: review.format,
        number_of_holes: review.holes_played.count(),
        holes_played: review.holes_played,
        hole_details,
        attestation: (!attestation.is_empty()).then(|| attestation.to_string()),
        played_alone: review.played_alone,
    })
}

/// Post the payload and report a uniform outcome. The payload and the raw
/// result are logged either way.
pub async fn submit_payload(api: &dyn DestinationApi, payload: &SubmissionPayload) -> SubmitOutcome {
    let result = api.post_score(payload).await;
    let payload_json = serde_json::to_string(payload).unwrap_or_default();

    let outcome = match result {
        Ok(outcome) if outcome.ok => outcome,
        Ok(outcome) => SubmitOutcome::failure(
            outcome
                .error
                .filter(|reason| !reason.trim().is_empty())
                .unwrap_or_else(|| "unknown error".to_string()),
        ),
        Err(e) => SubmitOutcome::failure(e.user_message()),
    };

    if outcome.ok {
        tracing::info!(payload = %payload_json, outcome = ?outcome, "score submitted");
    } else {
        tracing::error!(payload = %payload_json, outcome = ?outcome, "score submission rejected");
    }
    outcome
}

/// The single line shown to the user for a failed submission.
#[must_use]
pub fn submission_error_message(outcome: &SubmitOutcome) -> String {
    let reason = outcome.error.as_deref().unwrap_or("unknown error");
    format!("Score submission failed: {reason}")
}
