//! Expense Tracker is a single page web app for recording income and expenses.
//!
//! Each visit to the page opens a new, empty ledger held in memory. The user
//! adds transactions through a form, sees their total income, total expenses
//! and balance, and can delete transactions again. Nothing is persisted:
//! reloading the page starts over.
//!
//! This library provides the ledger itself and an HTTP server that directly
//! serves the HTML for the page.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod endpoints;
mod error;
mod html;
mod internal_server_error;
pub mod ledger;
mod ledger_view;
mod not_found;
mod routing;
#[cfg(test)]
mod test_utils;

pub use app_state::{AppState, DEFAULT_CURRENCY_SYMBOL};
pub use error::Error;
pub use ledger_view::LedgerSnapshot;
pub use routing::build_router;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
