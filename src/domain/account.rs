use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::{Cents, Clock, Transaction, format_cents};

pub type AccountId = Uuid;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("Invalid amount: {}", money(.0))]
    InvalidAmount(Cents),

    #[error(
        "Insufficient funds: balance {}, requested {}",
        money(.balance),
        money(.requested)
    )]
    InsufficientFunds { balance: Cents, requested: Cents },
}

/// A bank account: an identity plus its transaction history.
///
/// Transactions are kept newest first. Accounts are values: a successful
/// deposit or withdrawal returns a new account with one transaction prepended
/// and leaves the original untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    transactions: Vec<Transaction>,
}

impl Account {
    /// Create an empty account with the given identifier.
    pub fn new(id: AccountId) -> Self {
        Self {
            id,
            transactions: Vec::new(),
        }
    }

    /// Create an empty account with a fresh identifier.
    pub fn open() -> Self {
        Self::new(Uuid::new_v4())
    }

    /// Transactions, newest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn balance(&self) -> Cents {
        self.transactions.iter().map(|t| t.amount).sum()
    }

    /// Deposit `amount`. Rejected as invalid when the new balance would not fit in `Cents`.
    pub fn deposit(&self, clock: &impl Clock, amount: Cents) -> Result<Account, AccountError> {
        ensure_positive(amount)?;
        if self.balance().checked_add(amount).is_none() {
            return Err(AccountError::InvalidAmount(amount));
        }
        Ok(self.prepend(Transaction::new(clock.now(), amount)))
    }

    /// Withdraw `amount`. The whole balance may be withdrawn, never more.
    pub fn withdraw(&self, clock: &impl Clock, amount: Cents) -> Result<Account, AccountError> {
        ensure_positive(amount)?;

        let balance = self.balance();
        if balance < amount {
            return Err(AccountError::InsufficientFunds {
                balance,
                requested: amount,
            });
        }

        Ok(self.prepend(Transaction::new(clock.now(), -amount)))
    }

    fn prepend(&self, transaction: Transaction) -> Account {
        let mut transactions = Vec::with_capacity(self.transactions.len() + 1);
        transactions.push(transaction);
        transactions.extend_from_slice(&self.transactions);
        Account {
            id: self.id,
            transactions,
        }
    }
}

fn money(cents: &Cents) -> String {
    format_cents(*cents)
}

fn ensure_positive(amount: Cents) -> Result<(), AccountError> {
    if amount <= 0 {
        return Err(AccountError::InvalidAmount(amount));
    }
    Ok(())
}
