//! Defines the endpoint for deleting a transaction from a ledger.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use maud::html;

use crate::{
    AppState,
    ledger::{SessionId, Summary, TransactionId},
    ledger_view::view::{summary_view, transaction_list_view},
};

/// A route handler for deleting a transaction.
///
/// Responds with the re-rendered transaction list and an out-of-band update
/// for the summary. Deleting a transaction that is not in the ledger is not
/// an error, the ledger is simply rendered as is.
pub async fn delete_transaction_endpoint(
    State(state): State<AppState>,
    Path((session_id, transaction_id)): Path<(SessionId, TransactionId)>,
) -> Response {
    let mut sessions = match state.lock_sessions() {
        Ok(sessions) => sessions,
        Err(error) => return error.into_alert_response(),
    };

    let ledger = match sessions.get_mut(session_id) {
        Ok(ledger) => ledger,
        Err(error) => {
            tracing::warn!("Could not delete transaction {transaction_id}: {error}");
            return error.into_alert_response();
        }
    };

    match ledger.remove(transaction_id) {
        Some(transaction) => tracing::info!(
            "Deleted {} transaction {transaction_id} from ledger {session_id}",
            transaction.transaction_type.as_str()
        ),
        None => tracing::debug!(
            "Transaction {transaction_id} is not in ledger {session_id}, nothing to delete"
        ),
    }

    let currency_symbol = &state.currency_symbol;

    // The status code has to be 200 OK or HTMX will not swap the list.
    html! {
        (transaction_list_view(session_id, ledger, currency_symbol))
        (summary_view(&Summary::of(ledger), currency_symbol, true))
    }
    .into_response()
}

#[cfg(test)]
mod tests {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };
    use scraper::{Html, Selector};
    use uuid::Uuid;

    use crate::{
        AppState,
        ledger::{EntryForm, SessionId, TransactionId, TransactionType},
        ledger_view::delete_transaction_endpoint,
        test_utils::{assert_status_ok, assert_valid_html, parse_html_fragment},
    };

    /// Open a session with a salary and a groceries transaction.
    fn session_with_transactions(state: &AppState) -> (SessionId, Vec<TransactionId>) {
        let mut sessions = state.sessions.lock().unwrap();
        let session_id = sessions.open();
        let ledger = sessions.get_mut(session_id).unwrap();

        let ids = [
            ("Salary", "1000", TransactionType::Income),
            ("Groceries", "150.50", TransactionType::Expense),
        ]
        .into_iter()
        .map(|(description, amount, transaction_type)| {
            EntryForm {
                description: description.to_owned(),
                amount: amount.to_owned(),
                transaction_type,
            }
            .submit(ledger)
            .unwrap()
            .id
        })
        .collect();

        (session_id, ids)
    }

    async fn delete(state: &AppState, session_id: SessionId, transaction_id: TransactionId) -> Html {
        let response =
            delete_transaction_endpoint(State(state.clone()), Path((session_id, transaction_id)))
                .await;

        assert_status_ok(&response);
        parse_html_fragment(response).await
    }

    fn descriptions(state: &AppState, session_id: SessionId) -> Vec<String> {
        state
            .sessions
            .lock()
            .unwrap()
            .get(session_id)
            .unwrap()
            .list()
            .iter()
            .map(|transaction| transaction.description.clone())
            .collect()
    }

    #[tokio::test]
    async fn deletes_only_the_requested_transaction() {
        let state = AppState::default();
        let (session_id, ids) = session_with_transactions(&state);

        let html = delete(&state, session_id, ids[0]).await;

        assert_valid_html(&html);
        assert_eq!(descriptions(&state, session_id), vec!["Groceries"]);
        let rows = html
            .select(&Selector::parse("li h4").unwrap())
            .map(|element| element.text().collect::<String>())
            .collect::<Vec<_>>();
        assert_eq!(rows, vec!["Groceries"]);
    }

    #[tokio::test]
    async fn updates_summary_out_of_band() {
        let state = AppState::default();
        let (session_id, ids) = session_with_transactions(&state);

        let html = delete(&state, session_id, ids[0]).await;

        let summary = html
            .select(&Selector::parse("#summary").unwrap())
            .next()
            .expect("response should include the summary");
        assert_eq!(summary.value().attr("hx-swap-oob"), Some("true"));
        let balance = html
            .select(&Selector::parse(".summary-card.balance p.negative").unwrap())
            .next()
            .expect("balance should be negative after deleting the salary")
            .text()
            .collect::<String>();
        assert_eq!(balance.trim(), "-₹150.50");
    }

    #[tokio::test]
    async fn deleting_last_transaction_shows_placeholder() {
        let state = AppState::default();
        let (session_id, ids) = session_with_transactions(&state);

        delete(&state, session_id, ids[0]).await;
        let html = delete(&state, session_id, ids[1]).await;

        assert!(descriptions(&state, session_id).is_empty());
        assert_eq!(
            html.select(&Selector::parse(".no-transactions").unwrap())
                .count(),
            1
        );
    }

    #[tokio::test]
    async fn deleting_missing_transaction_is_a_no_op() {
        let state = AppState::default();
        let (session_id, _) = session_with_transactions(&state);

        delete(&state, session_id, 999).await;

        assert_eq!(descriptions(&state, session_id), vec!["Salary", "Groceries"]);
    }

    #[tokio::test]
    async fn deleting_twice_is_the_same_as_deleting_once() {
        let state = AppState::default();
        let (session_id, ids) = session_with_transactions(&state);

        delete(&state, session_id, ids[1]).await;
        let after_first_delete = descriptions(&state, session_id);
        delete(&state, session_id, ids[1]).await;

        assert_eq!(descriptions(&state, session_id), after_first_delete);
        assert_eq!(after_first_delete, vec!["Salary"]);
    }

    #[tokio::test]
    async fn unknown_session_responds_not_found() {
        let state = AppState::default();

        let response =
            delete_transaction_endpoint(State(state.clone()), Path((Uuid::new_v4(), 1))).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
