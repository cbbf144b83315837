use std::{fs::OpenOptions, net::SocketAddr, path::PathBuf, process::ExitCode, sync::Arc};

use axum::{
    Router,
    extract::{MatchedPath, Request},
};
use axum_server::Handle;
use clap::Parser;
use tower_http::trace::TraceLayer;

#[cfg(debug_assertions)]
use tower_livereload::LiveReloadLayer;

use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use expense_tracker::{
    AppState, DEFAULT_CURRENCY_SYMBOL, build_router, graceful_shutdown,
    ledger::DEFAULT_MAX_SESSIONS,
};

/// The web server for the expense tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The port to serve the app from.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// The symbol to display in front of amounts of money.
    #[arg(long, default_value = DEFAULT_CURRENCY_SYMBOL)]
    currency_symbol: String,

    /// The maximum number of page views to keep ledgers for. When the limit is
    /// reached, the ledger that was least recently added to, deleted from or
    /// opened is dropped, so a busy server can drop a ledger that is still open
    /// in a browser tab. Values below 1 are treated as 1.
    #[arg(long, default_value_t = DEFAULT_MAX_SESSIONS)]
    max_sessions: usize,

    /// File path to also write debug logs to.
    #[arg(long)]
    log_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(error) = setup_logging(args.log_path.as_ref()) {
        eprintln!("Could not open log file: {error}");
        return ExitCode::FAILURE;
    }

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    let state = AppState::new(&args.currency_symbol, args.max_sessions);

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(build_router(state));

    #[cfg(debug_assertions)]
    let router = router.layer(LiveReloadLayer::new());

    tracing::info!("HTTP server listening on {}", addr);
    if let Err(error) = axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
    {
        tracing::error!("Server error: {error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn setup_logging(log_path: Option<&PathBuf>) -> std::io::Result<()> {
    let stdout_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_filter(filter::LevelFilter::INFO);

    let debug_log = match log_path {
        Some(log_path) => {
            let log_file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_path)?;

            Some(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_writer(Arc::new(log_file))
                    .with_filter(filter::LevelFilter::DEBUG),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(stdout_log)
        .with(debug_log)
        .init();

    Ok(())
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // By default, `TraceLayer` will log 5xx responses but we're doing our specific
        // logging of errors so disable that
        .on_failure(());

    router.layer(tracing_layer)
}
