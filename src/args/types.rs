use clap::Parser;
use std::time::Duration;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Re-post recorded golf rounds as official scores", long_about = None)]
pub struct Args {
    /// Address to listen on.
    #[arg(long, value_name = "ADDRESS", default_value = "0.0.0.0")]
    pub bind: String,
    #[arg(short = 'p', long, value_name = "PORT", default_value = "8081")]
    pub port: u16,

    /// Base URL of the service rounds were recorded in.
    #[arg(long, value_name = "URL", value_parser = crate::args::validation::check_http_url)]
    pub source_url: String,
    /// Base URL of the service scores are posted to.
    #[arg(long, value_name = "URL", value_parser = crate::args::validation::check_http_url)]
    pub destination_url: String,
    /// Bearer token sent with every destination request.
    #[arg(long, value_name = "TOKEN")]
    pub destination_token: Option<String>,

    /// Pre-filled source user id for new sessions.
    #[arg(long, value_name = "SOURCE_USER_ID", default_value = "")]
    pub default_source_user: String,
    /// Pre-filled golfer (owner) id for new sessions.
    #[arg(long, value_name = "OWNER_ID", default_value = "")]
    pub default_owner_id: String,

    /// Timeout for each remote call, in seconds.
    #[arg(long, value_name = "SECONDS", default_value = "20")]
    pub timeout_secs: u64,

    /// Idle time after which a workflow session is dropped, in seconds.
    #[arg(long, value_name = "SECONDS", default_value = "3600")]
    pub session_ttl_secs: u64,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub bind: String,
    pub port: u16,
    pub source_url: String,
    pub destination_url: String,
    pub destination_token: Option<String>,
    pub default_source_user: String,
    pub default_owner_id: String,
    pub timeout: Duration,
    pub session_ttl: Duration,
}

impl From<Args> for CleanArgs {
    fn from(args: Args) -> Self {
        Self {
            bind: args.bind,
            port: args.port,
            source_url: args.source_url.trim_end_matches('/').to_string(),
            destination_url: args.destination_url.trim_end_matches('/').to_string(),
            destination_token: args.destination_token.filter(|t| !t.trim().is_empty()),
            default_source_user: args.default_source_user.trim().to_string(),
            default_owner_id: args.default_owner_id.trim().to_string(),
            timeout: Duration::from_secs(args.timeout_secs),
            session_ttl: Duration::from_secs(args.session_ttl_secs),
        }
    }
}
