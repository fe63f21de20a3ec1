use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Cents;

/// A single balance movement on an account.
/// Positive amounts are credits (deposits), negative amounts are debits (withdrawals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub timestamp: DateTime<Utc>,
    pub amount: Cents,
}

impl Transaction {
    pub fn new(timestamp: DateTime<Utc>, amount: Cents) -> Self {
        Self { timestamp, amount }
    }

    pub fn is_credit(&self) -> bool {
        self.amount > 0
    }

    pub fn is_debit(&self) -> bool {
        self.amount < 0
    }
}
