use thiserror::Error;

use crate::domain::{AccountError, AccountId, Cents, format_cents};

/// The closed set of failures a use case can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnknownAccount,
    InvalidAmount,
    InsufficientFunds,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Unknown account: {0}")]
    UnknownAccount(AccountId),

    #[error("Invalid amount: {}", money(.0))]
    InvalidAmount(Cents),

    #[error(
        "Insufficient funds: balance {}, requested {}",
        money(.balance),
        money(.requested)
    )]
    InsufficientFunds { balance: Cents, requested: Cents },
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::UnknownAccount(_) => ErrorKind::UnknownAccount,
            AppError::InvalidAmount(_) => ErrorKind::InvalidAmount,
            AppError::InsufficientFunds { .. } => ErrorKind::InsufficientFunds,
        }
    }
}

impl From<AccountError> for AppError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::InvalidAmount(amount) => AppError::InvalidAmount(amount),
            AccountError::InsufficientFunds { balance, requested } => {
                AppError::InsufficientFunds { balance, requested }
            }
        }
    }
}

fn money(cents: &Cents) -> String {
    format_cents(*cents)
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    #[test]
    fn test_domain_errors_keep_their_kind() {
        let invalid: AppError = AccountError::InvalidAmount(0).into();
        assert_eq!(invalid, AppError::InvalidAmount(0));
        assert_eq!(invalid.kind(), ErrorKind::InvalidAmount);

        let insufficient: AppError = AccountError::InsufficientFunds {
            balance: 100,
            requested: 200,
        }
        .into();
        assert_eq!(insufficient.kind(), ErrorKind::InsufficientFunds);
        assert_eq!(
            insufficient.to_string(),
            "Insufficient funds: balance 1.00, requested 2.00"
        );
    }

    #[test]
    fn test_unknown_account_message() {
        let id = Uuid::nil();
        let err = AppError::UnknownAccount(id);
        assert_eq!(err.kind(), ErrorKind::UnknownAccount);
        assert_eq!(
            err.to_string(),
            "Unknown account: 00000000-0000-0000-0000-000000000000"
        );
    }
}
