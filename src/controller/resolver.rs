use crate::controller::destination::DestinationApi;
use crate::error::AppError;
use crate::model::{
    MatchSource, Named, Resolution, ResolutionReport, ResolvedSelection, RoundMetadata,
};

/// How many facility candidates are requested from the catalogue search.
pub const FACILITY_SEARCH_LIMIT: usize = 10;

/// Pick an entry by name: an exact case-insensitive match wins, otherwise the
/// first entry the catalogue returned. `None` only for an empty list.
#[must_use]
pub fn pick_by_name<'a, T: Named>(entries: &'a [T], wanted: &str) -> Option<(&'a T, MatchSource)> {
    if !wanted.is_empty() {
        let wanted = wanted.to_lowercase();
        if let Some(entry) = entries.iter().find(|e| e.name().to_lowercase() == wanted) {
            return Some((entry, MatchSource::Exact));
        }
    }
    entries.first().map(|entry| (entry, MatchSource::Fallback))
}

fn to_resolution<T: Named>(picked: Option<(&T, MatchSource)>) -> Resolution {
    match picked {
        Some((entry, MatchSource::Exact)) => Resolution::exact(entry.id(), entry.name()),
        Some((entry, _)) => Resolution::fallback(entry.id(), entry.name()),
        None => Resolution::none(),
    }
}

/// Map round metadata to destination identifiers.
///
/// Remote failures are logged and yield an all-empty selection.
pub async fn resolve_selection(
    api: &dyn DestinationApi,
    owner_id: &str,
    metadata: &RoundMetadata,
) -> ResolvedSelection {
    resolve_report(api, owner_id, metadata).await.selection()
}

/// Same as [`resolve_selection`], keeping how each field was matched.
pub async fn resolve_report(
    api: &dyn DestinationApi,
    owner_id: &str,
    metadata: &RoundMetadata,
) -> ResolutionReport {
    if metadata.facility_name.is_empty() || owner_id.trim().is_empty() {
        return ResolutionReport::default();
    }

    match try_resolve(api, owner_id.trim(), metadata).await {
        Ok(report) => report,
        Err(e) => {
            tracing::warn!(
                facility = %metadata.facility_name,
                course = %metadata.course_name,
                tee = %metadata.tee_name,
                error = %e,
                "could not resolve round against the catalogue"
            );
            ResolutionReport::default()
        }
    }
}

async fn try_resolve(
    api: &dyn DestinationApi,
    owner_id: &str,
    metadata: &RoundMetadata,
) -> Result<ResolutionReport, AppError> {
    let owner_id: i64 = owner_id
        .parse()
        .map_err(|_| AppError::Validation(format!("owner id '{owner_id}' is not numeric")))?;

    let facilities = api
        .search_facilities(&metadata.facility_name, FACILITY_SEARCH_LIMIT)
        .await?;
    let Some((facility, facility_source)) = pick_by_name(&facilities, &metadata.facility_name)
    else {
        return Ok(ResolutionReport::default());
    };

    let courses = api.courses(facility.id, owner_id).await?;
    let course = pick_by_name(&courses, &metadata.course_name);
    let tee = course.and_then(|(course, _)| pick_by_name(&course.tees, &metadata.tee_name));

    Ok(ResolutionReport {
        facility: to_resolution(Some((facility, facility_source))),
        course: to_resolution(course),
        tee: to_resolution(tee),
    })
}
