use crate::domain::{Account, AccountError, AccountId, Cents, format_cents, format_statement};

use super::{AccountStore, AppError, Clock, StatementOutput};

/// Application service exposing the bank use cases.
/// This is the primary interface for any driver (CLI, replay, tests).
///
/// Every call runs fetch, validate, mutate and persist to completion. Nothing
/// is saved when a step fails.
pub struct BankService<S, C, O> {
    store: S,
    clock: C,
    output: O,
}

impl<S, C, O> BankService<S, C, O>
where
    S: AccountStore,
    C: Clock,
    O: StatementOutput,
{
    pub fn new(store: S, clock: C, output: O) -> Self {
        Self {
            store,
            clock,
            output,
        }
    }

    // ========================
    // Use cases
    // ========================

    /// Open an empty account and persist it.
    pub fn open_account(&mut self) -> Account {
        let account = Account::open();
        tracing::info!(account = %account.id, "opened account");
        self.store.save(account.clone());
        account
    }

    /// Credit `amount` cents to the account and return the updated account.
    pub fn deposit(&mut self, id: AccountId, amount: Cents) -> Result<Account, AppError> {
        tracing::debug!(account = %id, amount = %format_cents(amount), "deposit");
        self.update_account(id, |account, clock| account.deposit(clock, amount))
    }

    /// Debit `amount` cents from the account and return the updated account.
    pub fn withdraw(&mut self, id: AccountId, amount: Cents) -> Result<Account, AppError> {
        tracing::debug!(account = %id, amount = %format_cents(amount), "withdraw");
        self.update_account(id, |account, clock| account.withdraw(clock, amount))
    }

    /// Render the account statement and hand it to the output sink.
    pub fn print_statement(&mut self, id: AccountId) -> Result<(), AppError> {
        tracing::debug!(account = %id, "print statement");
        self.with_account(id, |service, account| {
            let statement = format_statement(account.transactions());
            service.output.write(&statement);
            Ok(())
        })
    }

    /// Current balance of the account.
    pub fn balance(&self, id: AccountId) -> Result<Cents, AppError> {
        Ok(self.fetch(id)?.balance())
    }

    /// Rendered statement without writing it anywhere.
    pub fn statement(&self, id: AccountId) -> Result<String, AppError> {
        let account = self.fetch(id)?;
        Ok(format_statement(account.transactions()))
    }

    /// Look up an account, failing with `UnknownAccount` when it is absent.
    pub fn fetch(&self, id: AccountId) -> Result<Account, AppError> {
        self.store.find(id).ok_or_else(|| {
            tracing::warn!(account = %id, "unknown account");
            AppError::UnknownAccount(id)
        })
    }

    // ========================
    // Accessors
    // ========================

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    // ========================
    // Helpers
    // ========================

    /// Run `action` over the stored account, or fail with `UnknownAccount`.
    fn with_account<T>(
        &mut self,
        id: AccountId,
        action: impl FnOnce(&mut Self, Account) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let account = self.fetch(id)?;
        action(self, account)
    }

    /// Apply a domain operation and persist its result. Domain failures are
    /// returned as-is and nothing is saved.
    fn update_account(
        &mut self,
        id: AccountId,
        operation: impl FnOnce(&Account, &C) -> Result<Account, AccountError>,
    ) -> Result<Account, AppError> {
        self.with_account(id, |service, account| {
            let updated = operation(&account, &service.clock).map_err(|err| {
                tracing::warn!(account = %id, "rejected: {err}");
                AppError::from(err)
            })?;
            service.store.save(updated.clone());
            Ok(updated)
        })
    }
}
