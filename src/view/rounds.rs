use maud::{Markup, html};

use crate::mvu::workflow::WorkflowModel;

#[must_use]
pub fn render_round_list(model: &WorkflowModel) -> Markup {
    let Some(rounds) = &model.rounds else {
        return html! {};
    };
    let state = &model.state;
    html! {
        form id="rounds" method="post" action="/workflow" {
            p class="wave" { "Page " (state.page_offset.saturating_add(1).to_string()) }
            @if rounds.is_empty() {
                p class="empty" { "No rounds on this page." }
            } @else {
                ul class="round-list" {
                    @for round in rounds {
                        @let checked = state.pending_round_id.as_deref() == Some(round.external_round_id.as_str());
                        li {
                            label {
                                input type="radio" name="round_id" value=(round.external_round_id) checked[checked];
                                span class="round-label" { (round.label) }
                                " "
                                span class="round-date" { (round.raw_date_text) }
                            }
                        }
                    }
                }
                button type="submit" name="action" value="load" { "Load round" }
            }
            button type="submit" name="action" value="newer" disabled[state.page_offset == 0] { "Newer" }
            button type="submit" name="action" value="older" { "Older" }
        }
    }
}
