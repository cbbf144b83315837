//! HTML components for the ledger page: the summary cards, the entry form and
//! the transaction list.
//!
//! The page keeps three containers that htmx swaps independently:
//! - `#ledger` holds everything below the page header and is re-rendered after
//!   a transaction is added, which also resets the form.
//! - `#summary` holds the summary cards and is updated out-of-band after a delete.
//! - `#transactions` holds the transaction list and is re-rendered after a delete.

use maud::{Markup, html};

use crate::{
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, CARD_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, NEGATIVE_AMOUNT_STYLE, PAGE_CONTAINER_STYLE,
        POSITIVE_AMOUNT_STYLE, base, format_currency, loading_spinner,
    },
    ledger::{
        EntryForm, Ledger, MAX_AMOUNT, SessionId, Summary, Transaction, TransactionType,
    },
};

/// The message shown instead of the transaction list when the ledger is empty.
pub(super) const EMPTY_LEDGER_MESSAGE: &str = "No transactions yet. Add one to get started!";

/// The full ledger page for a freshly opened session.
pub(super) fn ledger_page_view(
    session_id: SessionId,
    ledger: &Ledger,
    currency_symbol: &str,
) -> Markup {
    let content = html! {
        main class=(PAGE_CONTAINER_STYLE)
        {
            header class="w-full max-w-3xl mb-6 text-center"
            {
                h1 class="text-3xl font-bold" { "Expense Tracker" }
                p class="text-gray-600 dark:text-gray-400"
                {
                    "Track your income and expenses efficiently"
                }
            }

            section id="ledger" class="w-full max-w-3xl space-y-8"
            {
                (ledger_contents_view(session_id, ledger, &EntryForm::default(), currency_symbol))
            }
        }
    };

    base("Ledger", &content)
}

/// Everything inside `#ledger`: summary, entry form and transaction list.
pub(super) fn ledger_contents_view(
    session_id: SessionId,
    ledger: &Ledger,
    entry_form: &EntryForm,
    currency_symbol: &str,
) -> Markup {
    html! {
        (summary_view(&Summary::of(ledger), currency_symbol, false))

        (entry_form_view(session_id, entry_form))

        section class="space-y-4"
        {
            h2 class="text-xl font-bold" { "Transactions" }

            div id="transactions"
            {
                (transaction_list_view(session_id, ledger, currency_symbol))
            }
        }
    }
}

/// The summary cards wrapped in `#summary`.
///
/// Set `swap_oob` when the summary is sent alongside another fragment so that
/// htmx replaces the summary on the page as well.
pub(super) fn summary_view(summary: &Summary, currency_symbol: &str, swap_oob: bool) -> Markup {
    let balance_style = if summary.is_balance_positive() {
        POSITIVE_AMOUNT_STYLE
    } else {
        NEGATIVE_AMOUNT_STYLE
    };

    html! {
        div
            id="summary"
            hx-swap-oob=[swap_oob.then_some("true")]
            class="grid grid-cols-1 sm:grid-cols-3 gap-4"
        {
            (summary_card("Total Balance", "balance", summary.balance, balance_style, currency_symbol))
            (summary_card("Total Income", "income", summary.total_income, POSITIVE_AMOUNT_STYLE, currency_symbol))
            (summary_card("Total Expenses", "expense", summary.total_expenses, NEGATIVE_AMOUNT_STYLE, currency_symbol))
        }
    }
}

fn summary_card(
    title: &str,
    kind: &str,
    amount: f64,
    amount_style: &str,
    currency_symbol: &str,
) -> Markup {
    html! {
        div class={ "summary-card " (kind) " " (CARD_STYLE) }
        {
            h3 class="text-sm font-medium text-gray-600 dark:text-gray-400" { (title) }
            p class={ (amount_style) " text-2xl font-bold" }
            {
                (format_currency(currency_symbol, amount))
            }
        }
    }
}

fn entry_form_view(session_id: SessionId, entry_form: &EntryForm) -> Markup {
    let create_transaction_route = format_endpoint(endpoints::TRANSACTIONS_API, &[&session_id]);
    let is_income = entry_form.transaction_type == TransactionType::Income;
    let spinner = loading_spinner();

    html! {
        section class=(CARD_STYLE)
        {
            form
                hx-post=(create_transaction_route)
                hx-target="#ledger"
                hx-target-error="#alert-container"
                hx-indicator="#indicator"
                class="w-full space-y-4 md:space-y-6"
            {
                h2 class="text-xl font-bold" { "Add Transaction" }

                div
                {
                    label
                        for="description"
                        class=(FORM_LABEL_STYLE)
                    {
                        "Description:"
                    }

                    input
                        name="description"
                        id="description"
                        type="text"
                        placeholder="e.g., Salary, Groceries"
                        value=(entry_form.description)
                        autofocus
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label
                        for="amount"
                        class=(FORM_LABEL_STYLE)
                    {
                        "Amount:"
                    }

                    input
                        name="amount"
                        id="amount"
                        type="number"
                        min="0"
                        max=(MAX_AMOUNT)
                        step="0.01"
                        placeholder="Enter amount"
                        value=(entry_form.amount)
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label
                        for="type"
                        class=(FORM_LABEL_STYLE)
                    {
                        "Type:"
                    }

                    select
                        name="type"
                        id="type"
                        class=(FORM_TEXT_INPUT_STYLE)
                    {
                        option value=(TransactionType::Income.as_str()) selected[is_income]
                        {
                            (TransactionType::Income)
                        }
                        option value=(TransactionType::Expense.as_str()) selected[!is_income]
                        {
                            (TransactionType::Expense)
                        }
                    }
                }

                button type="submit" id="submit-button" class=(BUTTON_PRIMARY_STYLE)
                {
                    span
                        id="indicator"
                        class="inline htmx-indicator"
                    {
                        (spinner)
                    }
                    " Add Transaction"
                }
            }
        }
    }
}

/// Everything inside `#transactions`: one row per transaction in ledger order,
/// or a placeholder if the ledger is empty.
pub(super) fn transaction_list_view(
    session_id: SessionId,
    ledger: &Ledger,
    currency_symbol: &str,
) -> Markup {
    html! {
        @if ledger.is_empty() {
            p class="no-transactions text-center text-gray-500 dark:text-gray-400"
            {
                (EMPTY_LEDGER_MESSAGE)
            }
        } @else {
            ul class="transactions-list space-y-2"
            {
                @for transaction in ledger.list() {
                    (transaction_row(session_id, transaction, currency_symbol))
                }
            }
        }
    }
}

fn transaction_row(
    session_id: SessionId,
    transaction: &Transaction,
    currency_symbol: &str,
) -> Markup {
    let delete_url = format_endpoint(endpoints::TRANSACTION_API, &[&session_id, &transaction.id]);
    let (type_label, sign, amount_style) = match transaction.transaction_type {
        TransactionType::Income => ("➕ Income", "+", POSITIVE_AMOUNT_STYLE),
        TransactionType::Expense => ("➖ Expense", "-", NEGATIVE_AMOUNT_STYLE),
    };

    html! {
        li
            id={ "transaction-" (transaction.id) }
            class={ "transaction-item " (transaction.transaction_type.as_str()) " "
                (CARD_STYLE) " flex justify-between items-center" }
        {
            div class="transaction-info"
            {
                h4 class="font-semibold" { (transaction.description) }
                p class="transaction-type text-sm text-gray-600 dark:text-gray-400"
                {
                    (type_label)
                }
            }

            div class="transaction-amount flex items-center gap-4"
            {
                span class=(amount_style)
                {
                    (sign) (format_currency(currency_symbol, transaction.amount))
                }

                button
                    type="button"
                    hx-delete=(delete_url)
                    hx-target="#transactions"
                    hx-target-error="#alert-container"
                    class={ "btn-delete " (BUTTON_DELETE_STYLE) }
                {
                    "Delete"
                }
            }
        }
    }
}
