//! The ledger of income and expenses recorded during a page view.
//!
//! This module contains the logic of the app, independent of HTTP and HTML:
//! - The `Transaction` model and the `Ledger` that stores transactions in order
//! - The `EntryForm` that validates user input and adds transactions
//! - The `Summary` of total income, total expenses and balance
//! - The `LedgerSessions` table that keeps one ledger per page view

mod core;
mod form;
mod session;
mod summary;

pub use self::core::{Ledger, Transaction, TransactionId, TransactionType};
pub use form::{EntryForm, MAX_AMOUNT};
pub use session::{DEFAULT_MAX_SESSIONS, LedgerSessions, SessionId};
pub use summary::Summary;
