//! Defines the route handler for the ledger page.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{AppState, Error, ledger_view::view::ledger_page_view};

/// Renders the ledger page with a new, empty ledger.
///
/// Every request opens a new session, so reloading the page starts over.
pub async fn get_ledger_page(State(state): State<AppState>) -> Result<Response, Error> {
    let mut sessions = state.lock_sessions()?;
    let session_id = sessions.open();
    let ledger = sessions.get(session_id)?;

    tracing::info!("Opened ledger session {session_id}");

    Ok(ledger_page_view(session_id, ledger, &state.currency_symbol).into_response())
}
