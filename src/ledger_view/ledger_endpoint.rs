//! Defines the endpoint for a read-only JSON view of a ledger.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::{
    AppState, Error,
    ledger::{SessionId, Summary, Transaction},
};

/// The transactions in a ledger and their totals at the time of the request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerSnapshot {
    /// The transactions in the order they were added.
    pub transactions: Vec<Transaction>,
    /// The totals of `transactions`.
    pub summary: Summary,
}

/// A route handler that returns the ledger for `session_id` as JSON.
pub async fn get_ledger_endpoint(
    State(state): State<AppState>,
    Path(session_id): Path<SessionId>,
) -> Result<Json<LedgerSnapshot>, Error> {
    let sessions = state.lock_sessions()?;
    let ledger = sessions.get(session_id)?;

    Ok(Json(LedgerSnapshot {
        transactions: ledger.list().to_vec(),
        summary: Summary::of(ledger),
    }))
}
