//! Collaborators the use cases depend on. Adapters live in `storage` and `io`.

use crate::domain::{Account, AccountId};

pub use crate::domain::Clock;

/// Where accounts are kept between use-case calls.
pub trait AccountStore {
    fn find(&self, id: AccountId) -> Option<Account>;

    /// Insert or replace the account stored under `account.id`.
    fn save(&mut self, account: Account);
}

/// Destination for rendered statements.
pub trait StatementOutput {
    fn write(&mut self, text: &str);
}

impl<S: AccountStore + ?Sized> AccountStore for &mut S {
    fn find(&self, id: AccountId) -> Option<Account> {
        (**self).find(id)
    }

    fn save(&mut self, account: Account) {
        (**self).save(account)
    }
}

impl<O: StatementOutput + ?Sized> StatementOutput for &mut O {
    fn write(&mut self, text: &str) {
        (**self).write(text)
    }
}
