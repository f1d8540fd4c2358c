use actix_web::cookie::Cookie;
use actix_web::web::{self, Data};
use actix_web::{HttpRequest, HttpResponse, Responder};
use chrono::Local;
use std::collections::HashMap;
use std::sync::Arc;

use crate::controller::destination::DestinationApi;
use crate::controller::source::SourceFeed;
use crate::mvu::decode::decode_action;
use crate::mvu::runtime::{Deps, run_workflow};
use crate::mvu::workflow::{Msg, WorkflowModel};
use crate::session::{SESSION_COOKIE, SessionStore};
use crate::view::index::render_workflow_page;

/// Shared by every request: the two remote services and session storage.
pub struct AppContext {
    pub source: Arc<dyn SourceFeed>,
    pub destination: Arc<dyn DestinationApi>,
    pub sessions: SessionStore,
}

impl AppContext {
    fn deps(&self) -> Deps<'_> {
        Deps {
            source: self.source.as_ref(),
            destination: self.destination.as_ref(),
        }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(workflow_page))
        .route("/workflow", web::post().to(workflow_action))
        .route("/health", web::get().to(health));
}

async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

fn session_id(req: &HttpRequest, ctx: &AppContext) -> (String, bool) {
    match req.cookie(SESSION_COOKIE) {
        Some(cookie) if !cookie.value().is_empty() => (cookie.value().to_string(), false),
        _ => (ctx.sessions.new_session_id(), true),
    }
}

fn respond(model: &WorkflowModel, session_id: String, new_session: bool) -> HttpResponse {
    let markup = render_workflow_page(model);
    let mut builder = HttpResponse::Ok();
    builder.content_type("text/html");
    if new_session {
        builder.cookie(
            Cookie::build(SESSION_COOKIE, session_id)
                .path("/")
                .http_only(true)
                .finish(),
        );
    }
    builder.body(markup.into_string())
}

pub async fn workflow_page(req: HttpRequest, ctx: Data<AppContext>) -> impl Responder {
    let (session_id, new_session) = session_id(&req, &ctx);
    let mut model = WorkflowModel::new(ctx.sessions.load(&session_id), Local::now().date_naive());

    if let Err(e) = run_workflow(&mut model, Msg::PageLoad, ctx.deps()).await {
        tracing::warn!(error = %e, "page load failed");
    }

    ctx.sessions.save(&session_id, model.state.clone());
    respond(&model, session_id, new_session)
}

pub async fn workflow_action(
    req: HttpRequest,
    form: web::Form<HashMap<String, String>>,
    ctx: Data<AppContext>,
) -> impl Responder {
    let (session_id, new_session) = session_id(&req, &ctx);
    let mut model = WorkflowModel::new(ctx.sessions.load(&session_id), Local::now().date_naive());

    match decode_action(&form.0) {
        Ok(msgs) => {
            for msg in msgs {
                if let Err(e) = run_workflow(&mut model, msg, ctx.deps()).await {
                    tracing::warn!(error = %e, "workflow action failed");
                    break;
                }
            }
        }
        Err(e) => {
            tracing::debug!(error = %e, "rejected workflow form");
            model.error = Some(e.user_message());
            if let Err(e) = run_workflow(&mut model, Msg::PageLoad, ctx.deps()).await {
                tracing::warn!(error = %e, "page load failed");
            }
        }
    }

    ctx.sessions.save(&session_id, model.state.clone());
    respond(&model, session_id, new_session)
}
