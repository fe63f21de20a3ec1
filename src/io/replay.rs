use anyhow::{Context, Result, anyhow};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::Read;

use crate::application::{AppError, BankService, StatementOutput};
use crate::domain::{Account, AccountError, AccountId, Cents, Clock, parse_cents};
use crate::io::FixedClock;
use crate::storage::InMemoryAccountStore;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Deposit,
    Withdraw,
}

impl OperationKind {
    fn run(
        self,
        account: &Account,
        clock: &impl Clock,
        amount: Cents,
    ) -> Result<Account, AccountError> {
        match self {
            OperationKind::Deposit => account.deposit(clock, amount),
            OperationKind::Withdraw => account.withdraw(clock, amount),
        }
    }
}

/// One row of a replay file: `date,account,kind,amount`.
#[derive(Debug, Clone, Deserialize)]
struct OperationRecord {
    date: String,
    account: String,
    kind: OperationKind,
    amount: String,
}

/// Outcome of replaying a file
#[derive(Debug, Clone, Default)]
pub struct ReplayReport {
    pub applied: usize,
    pub errors: Vec<ReplayError>,
}

/// A row that could not be applied
#[derive(Debug, Clone)]
pub struct ReplayError {
    pub line: usize,
    pub error: String,
}

/// Applies dated operations from CSV to in-memory accounts.
///
/// Accounts are referred to by label in the file and opened by the first row
/// for that label that succeeds; a rejected row never opens an account.
/// The clock is pinned to each row's date before the operation runs, so
/// statements show the dates from the file.
pub struct Replayer<O> {
    service: BankService<InMemoryAccountStore, FixedClock, O>,
    accounts: BTreeMap<String, AccountId>,
}

impl<O: StatementOutput> Replayer<O> {
    pub fn new(output: O) -> Self {
        Self {
            service: BankService::new(
                InMemoryAccountStore::new(),
                FixedClock::at(Utc::now()),
                output,
            ),
            accounts: BTreeMap::new(),
        }
    }

    /// Apply every row of the CSV. Rows that fail to parse or are rejected by
    /// the account are recorded in the report and skipped.
    pub fn replay_csv<R: Read>(&mut self, reader: R) -> Result<ReplayReport> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut report = ReplayReport::default();

        for (index, result) in csv_reader.deserialize::<OperationRecord>().enumerate() {
            let line = index + 2; // +2 for header and 0-indexing

            let outcome = result
                .context("CSV parse error")
                .and_then(|record| self.apply(&record));

            match outcome {
                Ok(()) => report.applied += 1,
                Err(err) => {
                    tracing::warn!(line, "skipping row: {err:#}");
                    report.errors.push(ReplayError {
                        line,
                        error: format!("{err:#}"),
                    });
                }
            }
        }

        tracing::info!(
            applied = report.applied,
            skipped = report.errors.len(),
            "replay finished"
        );
        Ok(report)
    }

    /// Labels of all accounts opened so far, sorted.
    pub fn accounts(&self) -> impl Iterator<Item = &str> {
        self.accounts.keys().map(String::as_str)
    }

    pub fn balance(&self, label: &str) -> Result<Cents> {
        let id = self.account_id(label)?;
        Ok(self.service.balance(id)?)
    }

    /// Print the statement of the labelled account to the output sink.
    pub fn print_statement(&mut self, label: &str) -> Result<()> {
        let id = self.account_id(label)?;
        self.service.print_statement(id)?;
        Ok(())
    }

    pub fn output(&self) -> &O {
        self.service.output()
    }

    fn apply(&mut self, record: &OperationRecord) -> Result<()> {
        let date = NaiveDate::parse_from_str(&record.date, DATE_FORMAT)
            .with_context(|| format!("Invalid date: {}", record.date))?;
        let amount = parse_cents(&record.amount)
            .with_context(|| format!("Invalid amount: {}", record.amount))?;
        if record.account.is_empty() {
            return Err(anyhow!("Missing account label"));
        }

        self.service.clock().set_date(date);
        let id = match self.accounts.get(&record.account) {
            Some(id) => *id,
            None => {
                record
                    .kind
                    .run(&Account::open(), self.service.clock(), amount)
                    .map_err(AppError::from)?;
                let id = self.service.open_account().id;
                self.accounts.insert(record.account.clone(), id);
                id
            }
        };

        match record.kind {
            OperationKind::Deposit => self.service.deposit(id, amount)?,
            OperationKind::Withdraw => self.service.withdraw(id, amount)?,
        };
        Ok(())
    }

    fn account_id(&self, label: &str) -> Result<AccountId> {
        self.accounts
            .get(label)
            .copied()
            .ok_or_else(|| anyhow!("No account labelled '{}' in replay", label))
    }
}
