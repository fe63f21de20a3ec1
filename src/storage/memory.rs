use std::collections::HashMap;

use crate::application::AccountStore;
use crate::domain::{Account, AccountId};

/// Account store backed by a map keyed by account id. Nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct InMemoryAccountStore {
    accounts: HashMap<AccountId, Account>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl AccountStore for InMemoryAccountStore {
    fn find(&self, id: AccountId) -> Option<Account> {
        self.accounts.get(&id).cloned()
    }

    fn save(&mut self, account: Account) {
        self.accounts.insert(account.id, account);
    }
}
