use actix_web::web::Data;
use actix_web::{App, HttpServer};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use rusty_golf_relay::args;
use rusty_golf_relay::controller::destination::HttpDestinationApi;
use rusty_golf_relay::controller::http_handlers::{AppContext, configure_routes};
use rusty_golf_relay::controller::remote::build_client;
use rusty_golf_relay::controller::source::HttpSourceFeed;
use rusty_golf_relay::session::{SessionStore, UserDefaults};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .init();

    let args = match args::args_checks() {
        Ok(args) => args,
        Err(e) => {
            tracing::error!(error = %e, "invalid arguments");
            std::process::exit(2);
        }
    };

    let source_client = build_client(args.timeout, None)?;
    let destination_client = build_client(args.timeout, args.destination_token.as_deref())?;

    let context = Data::new(AppContext {
        source: Arc::new(HttpSourceFeed::new(&args.source_url, source_client)),
        destination: Arc::new(HttpDestinationApi::new(
            &args.destination_url,
            destination_client,
        )),
        sessions: SessionStore::with_ttl(
            UserDefaults {
                source_user_id: args.default_source_user.clone(),
                owner_id: args.default_owner_id.clone(),
            },
            args.session_ttl,
        ),
    });

    tracing::info!(
        bind = %args.bind,
        port = args.port,
        source = %args.source_url,
        destination = %args.destination_url,
        "starting"
    );

    HttpServer::new(move || {
        App::new()
            .app_data(context.clone())
            .configure(configure_routes)
    })
    .bind((args.bind.as_str(), args.port))?
    .run()
    .await?;
    Ok(())
}
