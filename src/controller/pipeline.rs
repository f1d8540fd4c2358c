use chrono::NaiveDate;

use crate::controller::destination::DestinationApi;
use crate::controller::feed::extract_rounds;
use crate::controller::resolver::resolve_report;
use crate::controller::round_date::normalize_round_date;
use crate::controller::round_label::parse_round_label;
use crate::controller::source::SourceFeed;
use crate::error::AppError;
use crate::model::{HolesPlayed, ReviewFields, RoundSummary, ScoreFormat};

/// # Errors
///
/// Will return `Err` if the identifier is empty or a dot segment, or the feed
/// cannot be fetched.
pub async fn fetch_rounds(
    source: &dyn SourceFeed,
    source_user_id: &str,
    wave: u32,
) -> Result<Vec<RoundSummary>, AppError> {
    let source_user_id = source_user_id.trim();
    if source_user_id.is_empty() {
        return Err(AppError::Validation("A source user id is required.".into()));
    }
    if matches!(source_user_id, "." | "..") {
        return Err(AppError::Validation(format!(
            "'{source_user_id}' is not a source user id."
        )));
    }
    let html = source.round_feed(source_user_id, wave).await?;
    Ok(extract_rounds(&html))
}

/// Look the round up on its feed page and derive everything the review step
/// starts from: label metadata, played date and catalogue selection.
///
/// # Errors
///
/// Will return `Err` if the feed cannot be fetched or the round is not on the page.
pub async fn load_round(
    source: &dyn SourceFeed,
    destination: &dyn DestinationApi,
    source_user_id: &str,
    owner_id: &str,
    wave: u32,
    round_id: &str,
    today: NaiveDate,
) -> Result<ReviewFields, AppError> {
    let rounds = fetch_rounds(source, source_user_id, wave).await?;
    let summary = rounds
        .into_iter()
        .find(|r| r.external_round_id == round_id)
        .ok_or_else(|| AppError::NotFound(format!("round {round_id} is not on this feed page")))?;

    let metadata = parse_round_label(&summary.label);
    let normalized_date = normalize_round_date(&summary.raw_date_text);
    if normalized_date.is_unknown() {
        tracing::info!(raw = %summary.raw_date_text, "round date not recognised, using today");
    }
    let report = resolve_report(destination, owner_id, &metadata).await;
    tracing::debug!(round = %round_id, ?metadata, ?report, "round resolved");

    let facility_text = if report.facility.resolved {
        format!("{} ({})", report.facility.name, report.facility.id)
    } else {
        metadata.facility_name.clone()
    };

    Ok(ReviewFields {
        played_date: normalized_date.or_today(today),
        selection: report.selection(),
        facility_text,
        summary,
        metadata,
        normalized_date,
        report,
        format: ScoreFormat::default(),
        holes_played: HolesPlayed::default(),
        attestation: String::new(),
        played_alone: false,
    })
}
