//! Application router configuration.

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::{
    AppState, endpoints,
    ledger_view::{
        create_transaction_endpoint, delete_transaction_endpoint, get_ledger_endpoint,
        get_ledger_page,
    },
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_ledger_page))
        .route(endpoints::LEDGER_API, get(get_ledger_endpoint))
        .route(
            endpoints::TRANSACTIONS_API,
            post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION_API,
            delete(delete_transaction_endpoint),
        )
        .fallback(get_404_not_found)
        .with_state(state)
}
