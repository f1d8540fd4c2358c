use maud::{DOCTYPE, Markup, html};

use crate::model::Mode;
use crate::mvu::workflow::WorkflowModel;

use super::review::render_review;
use super::rounds::render_round_list;

pub const PAGE_TITLE: &str = "Post a round";

#[must_use]
pub fn render_workflow_page(model: &WorkflowModel) -> Markup {
    html! {
        (DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            title { (PAGE_TITLE) }
        }
        body {
            h1 { (PAGE_TITLE) }
            @if let Some(notice) = &model.notice {
                p class="notice" { (notice) }
            }
            @if let Some(error) = &model.error {
                p class="error" role="alert" { (error) }
            }
            @match model.state.mode {
                Mode::Browsing => {
                    (render_identifier_form(model))
                    (render_round_list(model))
                }
                Mode::RoundLoaded => {
                    (render_review(model))
                }
            }
        }
    }
}

fn render_identifier_form(model: &WorkflowModel) -> Markup {
    html! {
        form id="identifiers" method="post" action="/workflow" {
            label for="source_user_id" { "Source user id" }
            input id="source_user_id" name="source_user_id" type="text" value=(model.state.source_user_id);
            label for="owner_id" { "Golfer id" }
            input id="owner_id" name="owner_id" type="text" value=(model.state.owner_id);
            button type="submit" name="action" value="list" { "Show rounds" }
        }
    }
}
