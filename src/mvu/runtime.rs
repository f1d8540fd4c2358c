use crate::controller::destination::DestinationApi;
use crate::controller::payload::{submission_error_message, submit_payload};
use crate::controller::pipeline::{fetch_rounds, load_round};
use crate::controller::resolver::FACILITY_SEARCH_LIMIT;
use crate::controller::source::SourceFeed;
use crate::error::AppError;
use crate::model::SubmitOutcome;
use crate::mvu::workflow::{Effect, Msg, WorkflowModel, render_effects, update};

#[derive(Clone, Copy)]
pub struct Deps<'a> {
    pub source: &'a dyn SourceFeed,
    pub destination: &'a dyn DestinationApi,
}

/// Runs the MVU loop for one user action: seeds with `msg` and drains effects.
///
/// On failure the persisted state is put back to what it was before `msg`,
/// the error is recorded on the model, and the previous view is re-fetched.
///
/// # Errors
///
/// Returns the failure that caused the rollback.
pub async fn run_workflow(
    model: &mut WorkflowModel,
    msg: Msg,
    deps: Deps<'_>,
) -> Result<(), AppError> {
    let snapshot = model.state.clone();
    let mut effects = update(model, msg);
    while let Some(effect) = effects.pop() {
        match run_effect(effect, model, deps).await {
            Msg::Failed(e) => {
                tracing::warn!(error = %e, "workflow step failed, keeping previous state");
                model.state = snapshot;
                update(model, Msg::Failed(e.clone()));
                rerender(model, deps).await;
                return Err(e);
            }
            other => {
                let next = update(model, other);
                effects.extend(next);
            }
        }
    }
    Ok(())
}

async fn rerender(model: &mut WorkflowModel, deps: Deps<'_>) {
    for effect in render_effects(model) {
        match run_effect(effect, model, deps).await {
            Msg::Failed(e) => tracing::warn!(error = %e, "could not re-render after failure"),
            Msg::InlineError(message) => tracing::warn!(%message, "could not re-render after failure"),
            other => {
                update(model, other);
            }
        }
    }
}

pub async fn run_effect(effect: Effect, model: &WorkflowModel, deps: Deps<'_>) -> Msg {
    let state = &model.state;
    match effect {
        Effect::LoadFeed => {
            match fetch_rounds(deps.source, &state.source_user_id, state.page_offset).await {
                Ok(rounds) => Msg::FeedLoaded(rounds),
                Err(e) => {
                    tracing::warn!(
                        user = %state.source_user_id,
                        wave = state.page_offset,
                        error = %e,
                        "feed fetch failed"
                    );
                    Msg::InlineError("Could not load rounds.".to_string())
                }
            }
        }
        Effect::LoadRound(round_id) => {
            match load_round(
                deps.source,
                deps.destination,
                &state.source_user_id,
                &state.owner_id,
                state.page_offset,
                &round_id,
                model.today,
            )
            .await
            {
                Ok(review) => Msg::RoundLoaded(Box::new(review)),
                Err(e) => Msg::Failed(e),
            }
        }
        Effect::LoadCourses => {
            let facility_id = state
                .review
                .as_ref()
                .and_then(|r| r.selection.facility_id.parse::<i64>().ok());
            let owner_id = state.owner_id.trim().parse::<i64>().ok();
            let (Some(facility_id), Some(owner_id)) = (facility_id, owner_id) else {
                return Msg::CoursesLoaded(Vec::new());
            };
            match deps.destination.courses(facility_id, owner_id).await {
                Ok(courses) => Msg::CoursesLoaded(courses),
                Err(e) => {
                    tracing::warn!(facility_id, error = %e, "course list fetch failed");
                    Msg::InlineError("Could not load courses for this facility.".to_string())
                }
            }
        }
        Effect::SearchFacilities(query) => {
            match deps
                .destination
                .search_facilities(&query, FACILITY_SEARCH_LIMIT)
                .await
            {
                Ok(facilities) => Msg::FacilitiesFound(facilities),
                Err(e) => {
                    tracing::warn!(%query, error = %e, "facility search failed");
                    Msg::InlineError("Facility search failed.".to_string())
                }
            }
        }
        Effect::LoadHoleScores => {
            let round_id = state
                .loaded_round_id
                .as_deref()
                .and_then(|id| id.parse::<u64>().ok());
            let Some(round_id) = round_id else {
                return Msg::InlineError("No round is loaded.".to_string());
            };
            match deps.source.round_score(round_id).await {
                Ok(hole_scores) => Msg::HoleScoresLoaded(hole_scores),
                Err(e) => {
                    tracing::error!(round_id, error = %e, "hole score fetch failed");
                    Msg::InlineError(submission_error_message(&SubmitOutcome::failure(
                        e.user_message(),
                    )))
                }
            }
        }
        Effect::PostScore(payload) => {
            Msg::Submitted(submit_payload(deps.destination, &payload).await)
        }
    }
}
