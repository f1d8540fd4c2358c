use chrono::NaiveDate;
use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::controller::selection::SelectionEdit;
use crate::error::AppError;
use crate::model::{HolesPlayed, ScoreFormat};
use crate::mvu::workflow::{DetailEdits, Msg};

fn field<'a, S: BuildHasher>(form: &'a HashMap<String, String, S>, key: &str) -> &'a str {
    form.get(key).map_or("", |s| s.trim())
}

/// Parse the review form's detail fields. Absent fields are left unchanged,
/// except the played-alone checkbox, whose absence means unchecked.
///
/// # Errors
///
/// Returns `AppError::Validation` for a malformed date, format or holes value.
pub fn decode_detail_edits<S: BuildHasher>(
    form: &HashMap<String, String, S>,
) -> Result<DetailEdits, AppError> {
    let played_date = match field(form, "played_date") {
        "" => None,
        text => Some(NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| {
            AppError::Validation("Played date must be YYYY-MM-DD.".to_string())
        })?),
    };
    let format = match field(form, "format") {
        "" => None,
        text => Some(text.parse::<ScoreFormat>().map_err(AppError::Validation)?),
    };
    let holes_played = match field(form, "holes_played") {
        "" => None,
        text => Some(text.parse::<HolesPlayed>().map_err(AppError::Validation)?),
    };

    Ok(DetailEdits {
        played_date,
        format,
        holes_played,
        attestation: form.get("attestation").map(|s| s.trim().to_string()),
        played_alone: Some(matches!(
            field(form, "played_alone"),
            "on" | "1" | "true"
        )),
    })
}

/// Turn one posted workflow form into the messages it stands for, in order.
///
/// # Errors
///
/// Returns `AppError::Validation` for a missing or unknown action, or for
/// malformed review fields.
pub fn decode_action<S: BuildHasher>(
    form: &HashMap<String, String, S>,
) -> Result<Vec<Msg>, AppError> {
    let msgs = match field(form, "action") {
        "list" => vec![Msg::SetIdentifiers {
            source_user_id: field(form, "source_user_id").to_string(),
            owner_id: field(form, "owner_id").to_string(),
        }],
        "choose" => vec![Msg::ChooseRound(field(form, "round_id").to_string())],
        "load" => {
            let round_id = Some(field(form, "round_id"))
                .filter(|id| !id.is_empty())
                .map(str::to_string);
            vec![Msg::SelectRoundAndLoad(round_id)]
        }
        "older" => vec![Msg::PageOlder],
        "newer" => vec![Msg::PageNewer],
        "back" => vec![Msg::Back],
        "facility_search" => vec![Msg::SearchFacilities(
            field(form, "facility_query").to_string(),
        )],
        "edit_facility" => vec![Msg::Edit(SelectionEdit::Facility(
            field(form, "facility").to_string(),
        ))],
        "edit_course" => vec![Msg::Edit(SelectionEdit::Course(
            field(form, "course").to_string(),
        ))],
        "edit_tee" => vec![Msg::Edit(SelectionEdit::Tee(field(form, "tee").to_string()))],
        "edit" => vec![Msg::EditDetails(decode_detail_edits(form)?), Msg::PageLoad],
        "submit" => vec![Msg::EditDetails(decode_detail_edits(form)?), Msg::Submit],
        "" => return Err(AppError::Validation("action is required".to_string())),
        other => return Err(AppError::Validation(format!("unknown action '{other}'"))),
    };
    Ok(msgs)
}
