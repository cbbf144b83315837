//! Defines the core data models for the ledger: transactions and the ordered
//! store that owns them.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

// ============================================================================
// MODELS
// ============================================================================

/// Identifies a transaction within a single [Ledger].
pub type TransactionId = u64;

/// Whether money was earned or spent.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in, e.g. a salary.
    #[default]
    Income,
    /// Money going out, e.g. groceries.
    Expense,
}

impl TransactionType {
    /// The value used for this type in forms and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::Income => write!(f, "Income"),
            TransactionType::Expense => write!(f, "Expense"),
        }
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Transactions are never modified once they have been added to a [Ledger].
/// Use [crate::ledger::EntryForm] to create one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    /// The ID of the transaction, unique within its ledger.
    pub id: TransactionId,
    /// A text description of what the transaction was for. Never empty.
    pub description: String,
    /// The amount of money spent or earned. Always finite and positive.
    pub amount: f64,
    /// Whether the amount was earned or spent.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

/// The fields of a transaction that has passed validation but has not been
/// assigned an ID yet.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NewTransaction {
    pub description: String,
    pub amount: f64,
    pub transaction_type: TransactionType,
}

// ============================================================================
// LEDGER
// ============================================================================

/// The ordered collection of all transactions recorded for a page view.
///
/// Insertion order is preserved and IDs are handed out from a counter that
/// never goes backwards, so an ID is never reused even after its transaction
/// has been removed.
#[derive(Debug, Clone)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    next_id: TransactionId,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            next_id: 1,
        }
    }

    /// Assign the next ID to `new_transaction` and add it to the end of the ledger.
    pub(crate) fn append(&mut self, new_transaction: NewTransaction) -> &Transaction {
        let id = self.next_id;
        self.next_id += 1;

        self.transactions.push(Transaction {
            id,
            description: new_transaction.description,
            amount: new_transaction.amount,
            transaction_type: new_transaction.transaction_type,
        });

        // The vector cannot be empty since we just pushed to it.
        &self.transactions[self.transactions.len() - 1]
    }

    /// Remove the transaction with the ID `id`.
    ///
    /// Removing an ID that is not in the ledger does nothing and returns `None`.
    pub fn remove(&mut self, id: TransactionId) -> Option<Transaction> {
        let index = self
            .transactions
            .iter()
            .position(|transaction| transaction.id == id)?;

        Some(self.transactions.remove(index))
    }

    /// All transactions in the order they were added.
    pub fn list(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Get the transaction with the ID `id`, if it exists.
    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions
            .iter()
            .find(|transaction| transaction.id == id)
    }

    /// The number of transactions in the ledger.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the ledger has no transactions.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn new_transaction(
    description: &str,
    amount: f64,
    transaction_type: TransactionType,
) -> NewTransaction {
    NewTransaction {
        description: description.to_owned(),
        amount,
        transaction_type,
    }
}
