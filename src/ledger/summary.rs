//! Aggregate totals derived from the transactions in a ledger.

use serde::Serialize;

use crate::ledger::{Ledger, TransactionType};

/// The total income, total expenses and balance of a ledger.
///
/// A summary is a snapshot. It is cheap to compute, so compute a new one
/// with [Summary::of] every time the ledger is displayed instead of keeping
/// one around.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    /// The sum of all income amounts.
    pub total_income: f64,
    /// The sum of all expense amounts.
    pub total_expenses: f64,
    /// Total income minus total expenses. May be negative.
    pub balance: f64,
}

impl Summary {
    /// Calculate the totals for the transactions currently in `ledger`.
    pub fn of(ledger: &Ledger) -> Self {
        let total_for = |transaction_type: TransactionType| -> f64 {
            ledger
                .list()
                .iter()
                .filter(|transaction| transaction.transaction_type == transaction_type)
                .fold(0.0, |total, transaction| total + transaction.amount)
        };

        let total_income = total_for(TransactionType::Income);
        let total_expenses = total_for(TransactionType::Expense);

        Self {
            total_income,
            total_expenses,
            balance: total_income - total_expenses,
        }
    }

    /// Whether the balance should be displayed as positive. Zero counts as positive.
    pub fn is_balance_positive(&self) -> bool {
        self.balance >= 0.0
    }
}
