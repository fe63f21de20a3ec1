// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::collections::HashMap;

use bank_kata::application::{AccountStore, BankService};
use bank_kata::domain::{Account, AccountId};
use bank_kata::io::{FixedClock, MemoryOutput};
use chrono::NaiveDate;

/// Helper to parse a date string (YYYY-MM-DD)
pub fn parse_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

/// Clock pinned to midnight UTC of the given day
pub fn clock_on(date_str: &str) -> FixedClock {
    FixedClock::on(parse_date(date_str))
}

/// Account store that counts saves, for asserting on persistence side effects
#[derive(Debug, Default)]
pub struct CountingStore {
    pub accounts: HashMap<AccountId, Account>,
    pub saves: usize,
}

impl CountingStore {
    /// Store seeded with the given accounts; seeding is not counted as a save
    pub fn with_accounts(accounts: impl IntoIterator<Item = Account>) -> Self {
        Self {
            accounts: accounts.into_iter().map(|a| (a.id, a)).collect(),
            saves: 0,
        }
    }
}

impl AccountStore for CountingStore {
    fn find(&self, id: AccountId) -> Option<Account> {
        self.accounts.get(&id).cloned()
    }

    fn save(&mut self, account: Account) {
        self.saves += 1;
        self.accounts.insert(account.id, account);
    }
}

/// Service with a counting store, the given clock and an in-memory output
pub fn test_service(
    store: CountingStore,
    clock: &FixedClock,
) -> BankService<CountingStore, &FixedClock, MemoryOutput> {
    BankService::new(store, clock, MemoryOutput::new())
}
