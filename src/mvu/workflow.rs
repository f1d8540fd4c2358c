use chrono::NaiveDate;

use crate::controller::payload::{build_payload, submission_error_message};
use crate::controller::selection::{SelectionEdit, apply_edit};
use crate::error::AppError;
use crate::model::{
    Course, Facility, HoleScores, HolesPlayed, Mode, ReviewFields, RoundSummary, ScoreFormat,
    SubmissionPayload, SubmitOutcome, WorkflowState,
};

/// Everything one request works with: the persisted state plus what was
/// fetched to render it.
#[derive(Debug, Clone)]
pub struct WorkflowModel {
    pub state: WorkflowState,
    pub today: NaiveDate,
    pub rounds: Option<Vec<RoundSummary>>,
    pub courses: Vec<Course>,
    pub facility_matches: Vec<Facility>,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl WorkflowModel {
    #[must_use]
    pub fn new(state: WorkflowState, today: NaiveDate) -> Self {
        Self {
            state,
            today,
            rounds: None,
            courses: Vec::new(),
            facility_matches: Vec::new(),
            error: None,
            notice: None,
        }
    }
}

/// Review fields edited together on the form. `None` leaves a field alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailEdits {
    pub played_date: Option<NaiveDate>,
    pub format: Option<ScoreFormat>,
    pub holes_played: Option<HolesPlayed>,
    pub attestation: Option<String>,
    pub played_alone: Option<bool>,
}

#[derive(Debug, Clone)]
pub enum Msg {
    PageLoad,
    SetIdentifiers {
        source_user_id: String,
        owner_id: String,
    },
    ChooseRound(String),
    SelectRoundAndLoad(Option<String>),
    Back,
    PageOlder,
    PageNewer,
    SearchFacilities(String),
    Edit(SelectionEdit),
    EditDetails(DetailEdits),
    Submit,
    FeedLoaded(Vec<RoundSummary>),
    RoundLoaded(Box<ReviewFields>),
    CoursesLoaded(Vec<Course>),
    FacilitiesFound(Vec<Facility>),
    HoleScoresLoaded(HoleScores),
    Submitted(SubmitOutcome),
    /// Shown to the user; the state stays as it is.
    InlineError(String),
    /// The runtime puts the state back to where the request started.
    Failed(AppError),
}

#[derive(Debug, Clone)]
pub enum Effect {
    LoadFeed,
    LoadRound(String),
    LoadCourses,
    SearchFacilities(String),
    LoadHoleScores,
    PostScore(Box<SubmissionPayload>),
}

/// What has to be fetched to show the current state.
#[must_use]
pub fn render_effects(model: &WorkflowModel) -> Vec<Effect> {
    match model.state.mode {
        Mode::Browsing if !model.state.source_user_id.trim().is_empty() => vec![Effect::LoadFeed],
        Mode::RoundLoaded
            if model
                .state
                .review
                .as_ref()
                .is_some_and(|r| !r.selection.facility_id.is_empty()) =>
        {
            vec![Effect::LoadCourses]
        }
        _ => vec![],
    }
}

fn return_to_browsing(state: &mut WorkflowState) {
    state.mode = Mode::Browsing;
    state.loaded_round_id = None;
    state.pending_round_id = None;
    state.review = None;
}

pub fn update(model: &mut WorkflowModel, msg: Msg) -> Vec<Effect> {
    let browsing = model.state.mode == Mode::Browsing;
    match msg {
        Msg::PageLoad => render_effects(model),
        Msg::SetIdentifiers {
            source_user_id,
            owner_id,
        } => {
            if !browsing {
                return render_effects(model);
            }
            let source_user_id = source_user_id.trim().to_string();
            if source_user_id != model.state.source_user_id {
                model.state.page_offset = 0;
            }
            model.state.source_user_id = source_user_id;
            model.state.owner_id = owner_id.trim().to_string();
            model.state.pending_round_id = None;
            render_effects(model)
        }
        Msg::ChooseRound(round_id) => {
            if browsing {
                model.state.pending_round_id = Some(round_id);
            }
            render_effects(model)
        }
        Msg::SelectRoundAndLoad(round_id) => {
            if !browsing {
                return render_effects(model);
            }
            match round_id.or_else(|| model.state.pending_round_id.clone()) {
                Some(id) if !id.trim().is_empty() => vec![Effect::LoadRound(id.trim().to_string())],
                _ => {
                    model.error = Some("Choose a round first.".to_string());
                    render_effects(model)
                }
            }
        }
        Msg::Back => {
            return_to_browsing(&mut model.state);
            model.courses.clear();
            model.facility_matches.clear();
            render_effects(model)
        }
        Msg::PageOlder => {
            if browsing {
                model.state.page_offset = model.state.page_offset.saturating_add(1);
                model.state.pending_round_id = None;
            }
            render_effects(model)
        }
        Msg::PageNewer => {
            if browsing && model.state.page_offset > 0 {
                model.state.page_offset -= 1;
                model.state.pending_round_id = None;
            }
            render_effects(model)
        }
        Msg::SearchFacilities(query) => {
            if browsing || query.trim().is_empty() {
                return render_effects(model);
            }
            let mut effects = render_effects(model);
            effects.push(Effect::SearchFacilities(query.trim().to_string()));
            effects
        }
        Msg::Edit(edit) => {
            if let Some(review) = model.state.review.as_mut() {
                review.selection = apply_edit(&review.selection, &edit);
                match &edit {
                    SelectionEdit::Facility(text) => {
                        review.facility_text = text.trim().to_string();
                        model.courses.clear();
                        model.facility_matches.clear();
                    }
                    SelectionEdit::Course(_) | SelectionEdit::Tee(_) => {}
                }
            }
            render_effects(model)
        }
        Msg::EditDetails(edits) => {
            if let Some(review) = model.state.review.as_mut() {
                if let Some(date) = edits.played_date {
                    review.played_date = date;
                }
                if let Some(format) = edits.format {
                    review.format = format;
                }
                if let Some(holes) = edits.holes_played {
                    review.holes_played = holes;
                }
                if let Some(attestation) = edits.attestation {
                    review.attestation = attestation;
                }
                if let Some(alone) = edits.played_alone {
                    review.played_alone = alone;
                }
            }
            vec![]
        }
        Msg::Submit => {
            if browsing {
                render_effects(model)
            } else {
                vec![Effect::LoadHoleScores]
            }
        }
        Msg::FeedLoaded(rounds) => {
            model.rounds = Some(rounds);
            vec![]
        }
        Msg::RoundLoaded(review) => {
            if !browsing {
                return vec![];
            }
            model.state.mode = Mode::RoundLoaded;
            model.state.loaded_round_id = Some(review.summary.external_round_id.clone());
            model.state.pending_round_id = None;
            model.state.review = Some(*review);
            model.rounds = None;
            render_effects(model)
        }
        Msg::CoursesLoaded(courses) => {
            model.courses = courses;
            vec![]
        }
        Msg::FacilitiesFound(facilities) => {
            model.facility_matches = facilities;
            vec![]
        }
        Msg::HoleScoresLoaded(hole_scores) => match build_payload(&model.state, &hole_scores) {
            Ok(payload) => vec![Effect::PostScore(Box::new(payload))],
            Err(e) => {
                model.error = Some(e.user_message());
                render_effects(model)
            }
        },
        Msg::Submitted(outcome) => {
            if outcome.ok {
                model.notice = Some("Score submitted.".to_string());
                return_to_browsing(&mut model.state);
                model.courses.clear();
            } else {
                model.error = Some(submission_error_message(&outcome));
            }
            render_effects(model)
        }
        Msg::InlineError(message) => {
            if browsing {
                model.rounds = None;
            }
            model.error = Some(message);
            vec![]
        }
        Msg::Failed(e) => {
            model.error = Some(e.user_message());
            vec![]
        }
    }
}
