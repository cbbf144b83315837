//! The entry form: pending user input that is validated and turned into a
//! transaction.

use serde::Deserialize;

use crate::{
    Error,
    ledger::{Ledger, Transaction, TransactionType, core::NewTransaction},
};

/// The values the user has typed into the entry form but not yet submitted.
///
/// The fields are kept as raw text so that invalid input can be shown back
/// to the user unchanged after a failed submission.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct EntryForm {
    /// Text detailing the transaction.
    #[serde(default)]
    pub description: String,
    /// The amount as typed, e.g. "150.50".
    #[serde(default)]
    pub amount: String,
    /// Whether the transaction is income or an expense.
    #[serde(default, rename = "type")]
    pub transaction_type: TransactionType,
}

impl EntryForm {
    /// Validate the pending fields and add the resulting transaction to `ledger`.
    ///
    /// On success the form is reset to its defaults and the new transaction is
    /// returned. On failure neither the form nor `ledger` is changed.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::EmptyDescription] if the description is empty or only whitespace,
    /// - or [Error::InvalidAmount] if the amount is not a number greater than zero
    ///   and at most [MAX_AMOUNT].
    pub fn submit<'a>(&mut self, ledger: &'a mut Ledger) -> Result<&'a Transaction, Error> {
        let new_transaction = self.validate()?;
        *self = Self::default();

        Ok(ledger.append(new_transaction))
    }

    fn validate(&self) -> Result<NewTransaction, Error> {
        let description = self.description.trim();

        if description.is_empty() {
            return Err(Error::EmptyDescription);
        }

        let amount = parse_amount(&self.amount)?;

        Ok(NewTransaction {
            description: description.to_owned(),
            amount,
            transaction_type: self.transaction_type,
        })
    }
}

/// The largest amount a single transaction may have.
///
/// Keeps totals well inside the range where `f64` represents cents exactly,
/// so summing any realistic number of transactions stays finite.
pub const MAX_AMOUNT: f64 = 1_000_000_000_000.0;

/// Parse a positive, finite amount of money no larger than [MAX_AMOUNT] from user input.
fn parse_amount(text: &str) -> Result<f64, Error> {
    let amount: f64 = text
        .trim()
        .parse()
        .map_err(|_| Error::InvalidAmount(text.to_owned()))?;

    if !amount.is_finite() || amount <= 0.0 || amount > MAX_AMOUNT {
        return Err(Error::InvalidAmount(text.to_owned()));
    }

    Ok(amount)
}
