//! The API endpoints URIs.
//!
//! For endpoints that take parameters, e.g., '/api/ledgers/{session_id}', use [format_endpoint].

use std::fmt::{Display, Write};

/// The ledger page. Every visit opens a new, empty ledger.
pub const ROOT: &str = "/";

/// The route for a read-only JSON view of a ledger.
pub const LEDGER_API: &str = "/api/ledgers/{session_id}";
/// The route for adding transactions to a ledger.
pub const TRANSACTIONS_API: &str = "/api/ledgers/{session_id}/transactions";
/// The route for deleting a single transaction from a ledger.
pub const TRANSACTION_API: &str = "/api/ledgers/{session_id}/transactions/{transaction_id}";

/// Replace the parameters in `endpoint_path` with `params`, in order.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/users/{user_id}', '{user_id}' is the parameter.
///
/// Parameters without a matching value in `params` are left as is.
pub fn format_endpoint(endpoint_path: &str, params: &[&dyn Display]) -> String {
    let mut formatted = String::with_capacity(endpoint_path.len());
    let mut params = params.iter();
    let mut rest = endpoint_path;

    while let Some(param_start) = rest.find('{') {
        let Some(param_length) = rest[param_start..].find('}') else {
            break;
        };
        let param_end = param_start + param_length + 1;

        formatted.push_str(&rest[..param_start]);

        match params.next() {
            Some(param) => {
                // Writing to a String cannot fail.
                let _ = write!(formatted, "{param}");
            }
            None => formatted.push_str(&rest[param_start..param_end]),
        }

        rest = &rest[param_end..];
    }

    formatted.push_str(rest);
    formatted
}
