//! Implements a struct that holds the state of the server.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{Error, ledger::LedgerSessions};

/// The currency symbol used if none is configured.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// The state of the server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The ledgers of all open page views.
    pub sessions: Arc<Mutex<LedgerSessions>>,

    /// The symbol to display in front of amounts of money, e.g. "₹" or "$".
    pub currency_symbol: String,
}

impl AppState {
    /// Create a new [AppState] that keeps at most `max_sessions` ledgers in memory.
    pub fn new(currency_symbol: &str, max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(LedgerSessions::new(max_sessions))),
            currency_symbol: currency_symbol.to_owned(),
        }
    }

    /// Acquire the lock for the ledger sessions.
    ///
    /// # Errors
    /// Returns [Error::LockError] if the lock is poisoned.
    pub fn lock_sessions(&self) -> Result<MutexGuard<'_, LedgerSessions>, Error> {
        self.sessions
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire sessions lock: {error}"))
            .map_err(|_| Error::LockError)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            sessions: Arc::default(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_owned(),
        }
    }
}
