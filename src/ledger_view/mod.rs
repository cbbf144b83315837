//! The ledger page and the endpoints it uses to add and delete transactions.

mod create_endpoint;
mod delete_endpoint;
mod ledger_endpoint;
mod page;
mod view;

pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use ledger_endpoint::{LedgerSnapshot, get_ledger_endpoint};
pub use page::get_ledger_page;
