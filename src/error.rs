//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    alert::Alert,
    internal_server_error::InternalServerError,
    ledger::{MAX_AMOUNT, SessionId},
    not_found::NotFoundError,
};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The description of a new transaction was empty or only whitespace.
    #[error("the description cannot be empty")]
    EmptyDescription,

    /// The amount of a new transaction was not a number greater than zero and
    /// at most [crate::ledger::MAX_AMOUNT].
    ///
    /// Holds the text that was entered for the amount.
    #[error("\"{0}\" is not a valid positive amount")]
    InvalidAmount(String),

    /// The submitted form could not be read, e.g. the transaction type was
    /// neither income nor expense.
    ///
    /// Holds the reason the form was rejected.
    #[error("could not read the submitted form: {0}")]
    InvalidForm(String),

    /// The ledger for a page view could not be found.
    ///
    /// This happens if the server was restarted or the session was evicted
    /// to make room for newer sessions. Reloading the page opens a new session.
    #[error("the ledger session {0} could not be found")]
    SessionNotFound(SessionId),

    /// Could not acquire the lock for the ledger sessions.
    #[error("could not acquire the ledger sessions lock")]
    LockError,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::SessionNotFound(_) => NotFoundError.into_response(),
            Error::LockError => InternalServerError.into_response(),
            // Any errors that are not handled above are not intended to be shown as a page.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError.into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::EmptyDescription => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Alert::error(
                    "Please enter a description",
                    "The description cannot be empty or only spaces.",
                ),
            ),
            Error::InvalidAmount(amount) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Alert::error(
                    "Please enter a valid positive amount",
                    if amount.trim().is_empty() {
                        "The amount cannot be empty.".to_owned()
                    } else {
                        format!(
                            "\"{amount}\" is not a number greater than zero and at most {MAX_AMOUNT}."
                        )
                    },
                ),
            ),
            Error::InvalidForm(reason) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Alert::error("Please check the form and try again", reason),
            ),
            Error::SessionNotFound(_) => (
                StatusCode::NOT_FOUND,
                Alert::error(
                    "Your session has expired",
                    "Reload the page to start a new ledger.",
                ),
            ),
            Error::LockError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::error(
                    "Something went wrong",
                    "An unexpected error occurred, check the server logs for more details.",
                ),
            ),
        };

        (status_code, alert.into_html()).into_response()
    }
}
