//! Defines the page to display when the requested resource does not exist.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::html::error_view;

pub struct NotFoundError;

impl IntoResponse for NotFoundError {
    fn into_response(self) -> Response {
        (
            StatusCode::NOT_FOUND,
            error_view(
                "Not Found",
                "404",
                "Page not found.",
                "Sorry, we can't find that page. Go back to the expense tracker to start again.",
            ),
        )
            .into_response()
    }
}

pub async fn get_404_not_found() -> Response {
    NotFoundError.into_response()
}
