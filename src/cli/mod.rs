use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::Read;

use crate::application::BankService;
use crate::domain::format_cents;
use crate::io::{ConsoleOutput, FixedClock, Replayer};
use crate::storage::InMemoryAccountStore;

/// Bank Kata - deposits, withdrawals and statements
#[derive(Parser)]
#[command(name = "bank-kata")]
#[command(about = "Run bank account operations against an in-memory store and print statements")]
#[command(version)]
pub struct Cli {
    /// Log level for the bank_kata target (error, warn, info, debug, trace)
    #[arg(long, env = "BANK_KATA_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    /// Enable verbose output (same as --log-level debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Deposit 1000, deposit 2000, withdraw 500 on a fresh account and print it
    Demo {
        /// Print the account as JSON instead of a statement
        #[arg(long)]
        json: bool,
    },

    /// Replay operations from a CSV file (date,account,kind,amount) and print statements
    Replay {
        /// Input file (stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,

        /// Only print the statement of this account label
        #[arg(short, long)]
        account: Option<String>,
    },
}

impl Cli {
    /// Effective log level after applying `--verbose`.
    pub fn level(&self) -> &str {
        if self.verbose { "debug" } else { self.log_level.as_str() }
    }

    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Demo { json } => run_demo(json),
            Commands::Replay { input, account } => run_replay(input.as_deref(), account.as_deref()),
        }
    }
}

fn run_demo(json: bool) -> Result<()> {
    let clock = FixedClock::on(date(2012, 1, 10)?);
    let mut service = BankService::new(InMemoryAccountStore::new(), &clock, ConsoleOutput);

    let id = service.open_account().id;
    service.deposit(id, 100000)?;
    clock.set_date(date(2012, 1, 13)?);
    service.deposit(id, 200000)?;
    clock.set_date(date(2012, 1, 14)?);
    service.withdraw(id, 50000)?;

    if json {
        let account = service.fetch(id)?;
        println!("{}", serde_json::to_string_pretty(&account)?);
    } else {
        service.print_statement(id)?;
    }
    Ok(())
}

fn run_replay(input: Option<&str>, only: Option<&str>) -> Result<()> {
    let reader: Box<dyn Read> = match input {
        Some(path) => Box::new(
            File::open(path).with_context(|| format!("Failed to open replay file: {}", path))?,
        ),
        None => Box::new(std::io::stdin()),
    };

    let mut replayer = Replayer::new(ConsoleOutput);
    let report = replayer.replay_csv(reader)?;

    let labels: Vec<String> = match only {
        Some(label) => vec![label.to_string()],
        None => replayer.accounts().map(str::to_string).collect(),
    };
    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{} (balance {})", label, format_cents(replayer.balance(label)?));
        replayer.print_statement(label)?;
    }

    eprintln!("Replay complete");
    eprintln!("  Applied: {}", report.applied);
    eprintln!("  Errors:  {}", report.errors.len());
    if !report.errors.is_empty() {
        eprintln!("\nErrors:");
        for error in report.errors.iter().take(10) {
            eprintln!("  Line {}: {}", error.line, error.error);
        }
        if report.errors.len() > 10 {
            eprintln!("  ... and {} more errors", report.errors.len() - 10);
        }
    }
    Ok(())
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .with_context(|| format!("Invalid date: {}-{}-{}", year, month, day))
}
