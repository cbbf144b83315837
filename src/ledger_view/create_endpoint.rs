//! Defines the endpoint for adding a transaction to a ledger.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::{Form, FormRejection};

use crate::{
    AppState, Error,
    ledger::{EntryForm, SessionId},
    ledger_view::view::ledger_contents_view,
};

/// A route handler for submitting the entry form.
///
/// On success, responds with the re-rendered ledger (summary, a reset form and
/// the transaction list). If the form is invalid, responds with an alert and
/// leaves the ledger unchanged. A form body that cannot be read at all is
/// reported with an alert as well.
pub async fn create_transaction_endpoint(
    State(state): State<AppState>,
    Path(session_id): Path<SessionId>,
    form: Result<Form<EntryForm>, FormRejection>,
) -> Response {
    let mut entry_form = match form {
        Ok(Form(entry_form)) => entry_form,
        Err(rejection) => {
            tracing::debug!("Rejected form for ledger {session_id}: {rejection}");
            return Error::InvalidForm(rejection.to_string()).into_alert_response();
        }
    };

    let mut sessions = match state.lock_sessions() {
        Ok(sessions) => sessions,
        Err(error) => return error.into_alert_response(),
    };

    let ledger = match sessions.get_mut(session_id) {
        Ok(ledger) => ledger,
        Err(error) => {
            tracing::warn!("Could not add transaction: {error}");
            return error.into_alert_response();
        }
    };

    match entry_form.submit(ledger) {
        Ok(transaction) => tracing::info!(
            "Added {} transaction {} to ledger {session_id}",
            transaction.transaction_type.as_str(),
            transaction.id
        ),
        Err(error) => {
            tracing::debug!("Rejected transaction for ledger {session_id}: {error}");
            return error.into_alert_response();
        }
    }

    ledger_contents_view(session_id, ledger, &entry_form, &state.currency_symbol).into_response()
}

#[cfg(test)]
mod tests {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };
    use axum_extra::extract::Form;
    use scraper::{Html, Selector};
    use uuid::Uuid;

    use crate::{
        AppState,
        ledger::{EntryForm, SessionId, Summary, TransactionType},
        ledger_view::create_transaction_endpoint,
        test_utils::{assert_status_ok, assert_valid_html, parse_html_fragment},
    };

    fn open_session(state: &AppState) -> SessionId {
        state.sessions.lock().unwrap().open()
    }

    fn entry_form(description: &str, amount: &str, transaction_type: TransactionType) -> EntryForm {
        EntryForm {
            description: description.to_owned(),
            amount: amount.to_owned(),
            transaction_type,
        }
    }

    async fn submit(state: &AppState, session_id: SessionId, form: EntryForm) -> Html {
        let response =
            create_transaction_endpoint(State(state.clone()), Path(session_id), Ok(Form(form)))
                .await;

        assert_status_ok(&response);
        parse_html_fragment(response).await
    }

    #[tokio::test]
    async fn adds_transaction_and_renders_ledger() {
        let state = AppState::default();
        let session_id = open_session(&state);

        let html = submit(
            &state,
            session_id,
            entry_form("  Salary ", "1000", TransactionType::Income),
        )
        .await;

        assert_valid_html(&html);
        let sessions = state.sessions.lock().unwrap();
        let ledger = sessions.get(session_id).unwrap();
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.list()[0].description, "Salary");
        assert_eq!(ledger.list()[0].amount, 1000.0);
        assert_eq!(ledger.list()[0].transaction_type, TransactionType::Income);

        let rows = html.select(&Selector::parse("li h4").unwrap()).count();
        assert_eq!(rows, 1);
    }

    #[tokio::test]
    async fn resets_form_after_success() {
        let state = AppState::default();
        let session_id = open_session(&state);

        let html = submit(
            &state,
            session_id,
            entry_form("Groceries", "150.50", TransactionType::Expense),
        )
        .await;

        let description = html
            .select(&Selector::parse("input[name=description]").unwrap())
            .next()
            .unwrap();
        assert_eq!(description.value().attr("value"), Some(""));
        let selected_type = html
            .select(&Selector::parse("select[name=type] option[selected]").unwrap())
            .next()
            .and_then(|option| option.value().attr("value"));
        assert_eq!(selected_type, Some("income"));
    }

    #[tokio::test]
    async fn salary_then_groceries() {
        let state = AppState::default();
        let session_id = open_session(&state);

        submit(
            &state,
            session_id,
            entry_form("Salary", "1000", TransactionType::Income),
        )
        .await;
        let html = submit(
            &state,
            session_id,
            entry_form("Groceries", "150.50", TransactionType::Expense),
        )
        .await;

        let sessions = state.sessions.lock().unwrap();
        let ledger = sessions.get(session_id).unwrap();
        let summary = Summary::of(ledger);
        assert_eq!(summary.total_income, 1000.0);
        assert_eq!(summary.total_expenses, 150.5);
        assert_eq!(summary.balance, 849.5);

        let descriptions = html
            .select(&Selector::parse("li h4").unwrap())
            .map(|element| element.text().collect::<String>())
            .collect::<Vec<_>>();
        assert_eq!(descriptions, vec!["Salary", "Groceries"]);
        let balance = html
            .select(&Selector::parse(".summary-card.balance p").unwrap())
            .next()
            .unwrap()
            .text()
            .collect::<String>();
        assert_eq!(balance.trim(), "₹849.50");
    }

    #[tokio::test]
    async fn invalid_form_responds_with_alert_and_leaves_ledger_unchanged() {
        let cases = [
            entry_form("", "10", TransactionType::Income),
            entry_form("   ", "10", TransactionType::Income),
            entry_form("Rent", "0", TransactionType::Expense),
            entry_form("Rent", "-5", TransactionType::Expense),
            entry_form("Rent", "abc", TransactionType::Expense),
        ];

        for form in cases {
            let state = AppState::default();
            let session_id = open_session(&state);

            let response = create_transaction_endpoint(
                State(state.clone()),
                Path(session_id),
                Ok(Form(form)),
            )
            .await;

            assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
            let html = parse_html_fragment(response).await;
            assert_valid_html(&html);
            assert_eq!(
                html.select(&Selector::parse("[role=alertdialog]").unwrap())
                    .count(),
                1
            );
            assert!(state.sessions.lock().unwrap().get(session_id).unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn unknown_session_responds_not_found() {
        let state = AppState::default();

        let response = create_transaction_endpoint(
            State(state.clone()),
            Path(Uuid::new_v4()),
            Ok(Form(entry_form("Salary", "1000", TransactionType::Income))),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(state.sessions.lock().unwrap().is_empty());
    }
}
