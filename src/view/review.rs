use maud::{Markup, html};

use crate::model::{Course, HolesPlayed, MatchSource, Resolution, ScoreFormat, display_text};
use crate::mvu::workflow::WorkflowModel;

fn match_hint(resolution: &Resolution) -> &'static str {
    match resolution.source {
        MatchSource::Exact => "matched",
        MatchSource::Fallback => "closest match, please check",
        MatchSource::None => "not found",
    }
}

#[must_use]
pub fn render_review(model: &WorkflowModel) -> Markup {
    let Some(review) = &model.state.review else {
        return html! {};
    };
    let selection = &review.selection;
    let course: Option<&Course> = model
        .courses
        .iter()
        .find(|c| c.id.to_string() == selection.course_id);

    html! {
        section id="review" {
            h2 { (review.summary.label) }
            p class="round-date" { (review.summary.raw_date_text) }

            form id="facility" method="post" action="/workflow" {
                label for="facility-input" { "Facility" }
                input id="facility-input" name="facility" type="text" list="facility-matches" value=(review.facility_text);
                small class="hint" { (match_hint(&review.report.facility)) }
                datalist id="facility-matches" {
                    @for facility in &model.facility_matches {
                        option value=(display_text(facility)) {}
                    }
                }
                button type="submit" name="action" value="edit_facility" { "Use facility" }
                input name="facility_query" type="text" placeholder="Search facilities" value=(review.metadata.facility_name);
                button type="submit" name="action" value="facility_search" { "Search" }
            }

            form id="course" method="post" action="/workflow" {
                label for="course-select" { "Course" }
                select id="course-select" name="course" {
                    option value="" selected[selection.course_id.is_empty()] { "Choose a course" }
                    @for c in &model.courses {
                        option value=(c.id.to_string()) selected[c.id.to_string() == selection.course_id] { (c.name) }
                    }
                }
                small class="hint" { (match_hint(&review.report.course)) }
                button type="submit" name="action" value="edit_course" { "Use course" }
            }

            form id="tee" method="post" action="/workflow" {
                label for="tee-select" { "Tee" }
                select id="tee-select" name="tee" {
                    option value="" selected[selection.tee_id.is_empty()] { "Choose a tee" }
                    @if let Some(course) = course {
                        @for tee in &course.tees {
                            option value=(tee.id.to_string()) selected[tee.id.to_string() == selection.tee_id] { (tee.name) }
                        }
                    }
                }
                small class="hint" { (match_hint(&review.report.tee)) }
                button type="submit" name="action" value="edit_tee" { "Use tee" }
            }

            form id="details" method="post" action="/workflow" {
                label for="played_date" { "Played" }
                input id="played_date" name="played_date" type="date" value=(review.played_date.format("%Y-%m-%d").to_string());
                label for="format" { "Format" }
                select id="format" name="format" {
                    @for format in ScoreFormat::ALL {
                        option value=(format.as_form_value()) selected[format == review.format] { (format.label()) }
                    }
                }
                label for="holes_played" { "Holes" }
                select id="holes_played" name="holes_played" {
                    @for holes in HolesPlayed::ALL {
                        option value=(holes.as_form_value()) selected[holes == review.holes_played] { (holes.label()) }
                    }
                }
                label for="attestation" { "Attested by" }
                input id="attestation" name="attestation" type="text" value=(review.attestation);
                label {
                    input name="played_alone" type="checkbox" checked[review.played_alone];
                    "Played alone"
                }
                button type="submit" name="action" value="edit" { "Save" }
                button type="submit" name="action" value="submit" disabled[!selection.is_complete()] { "Post score" }
            }

            form id="back" method="post" action="/workflow" {
                button type="submit" name="action" value="back" { "Back to rounds" }
            }
        }
    }
}
