//! Defines the page to display for an internal server error.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::html::error_view;

/// The page shown when a request fails for reasons the user cannot fix.
pub struct InternalServerError;

impl IntoResponse for InternalServerError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_view(
                "Internal Server Error",
                "500",
                "Sorry, something went wrong.",
                "Reload the page to start a new ledger, or check the server logs.",
            ),
        )
            .into_response()
    }
}
