//! Keeps one ledger per page view.
//!
//! Every time the ledger page is loaded a new, empty ledger is opened under a
//! random session ID. The page sends that ID back with every request, so
//! reloading the page starts over with an empty ledger.

use std::collections::{HashMap, VecDeque};

use uuid::Uuid;

use crate::{Error, ledger::Ledger};

/// Identifies the ledger belonging to a single page view.
pub type SessionId = Uuid;

/// The number of sessions kept in memory if not configured otherwise.
pub const DEFAULT_MAX_SESSIONS: usize = 1024;

/// The in-memory ledgers for all open page views.
///
/// At most `max_sessions` ledgers are kept. When a new session would exceed
/// the limit, the least recently used session is dropped. Opening a session
/// and modifying its ledger both count as using it.
#[derive(Debug)]
pub struct LedgerSessions {
    ledgers: HashMap<SessionId, Ledger>,
    /// Session IDs from least to most recently used.
    opened: VecDeque<SessionId>,
    max_sessions: usize,
}

impl Default for LedgerSessions {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SESSIONS)
    }
}

impl LedgerSessions {
    /// Create an empty session table that holds at most `max_sessions` ledgers.
    ///
    /// A `max_sessions` of zero is treated as one.
    pub fn new(max_sessions: usize) -> Self {
        let max_sessions = max_sessions.max(1);

        Self {
            ledgers: HashMap::new(),
            opened: VecDeque::new(),
            max_sessions,
        }
    }

    /// Open a new session with an empty ledger and return its ID.
    pub fn open(&mut self) -> SessionId {
        while self.opened.len() >= self.max_sessions {
            let Some(least_recently_used) = self.opened.pop_front() else {
                break;
            };

            self.ledgers.remove(&least_recently_used);
            tracing::debug!("Evicted ledger session {least_recently_used}");
        }

        let session_id = Uuid::new_v4();
        self.ledgers.insert(session_id, Ledger::new());
        self.opened.push_back(session_id);

        session_id
    }

    /// Get the ledger for `session_id`.
    ///
    /// # Errors
    /// Returns [Error::SessionNotFound] if the session was never opened or has been evicted.
    pub fn get(&self, session_id: SessionId) -> Result<&Ledger, Error> {
        self.ledgers
            .get(&session_id)
            .ok_or(Error::SessionNotFound(session_id))
    }

    /// Get the ledger for `session_id` for modification.
    ///
    /// # Errors
    /// Returns [Error::SessionNotFound] if the session was never opened or has been evicted.
    ///
    /// The session becomes the most recently used one.
    pub fn get_mut(&mut self, session_id: SessionId) -> Result<&mut Ledger, Error> {
        let ledger = self
            .ledgers
            .get_mut(&session_id)
            .ok_or(Error::SessionNotFound(session_id))?;

        if let Some(position) = self.opened.iter().position(|id| *id == session_id) {
            self.opened.remove(position);
        }
        self.opened.push_back(session_id);

        Ok(ledger)
    }

    /// The number of open sessions.
    pub fn len(&self) -> usize {
        self.ledgers.len()
    }

    /// Whether there are no open sessions.
    pub fn is_empty(&self) -> bool {
        self.ledgers.is_empty()
    }
}
