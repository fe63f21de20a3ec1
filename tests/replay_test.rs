use anyhow::Result;
use bank_kata::io::{MemoryOutput, Replayer};
use std::fs::{self, File};
use tempfile::TempDir;

#[test]
fn test_replay_file_prints_statements_per_account() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("operations.csv");
    fs::write(
        &path,
        "date, account, kind, amount\n\
         2012-01-10, alice, deposit, 1000\n\
         2012-01-11, bob, deposit, 20.5\n\
         2012-01-13, alice, deposit, 2000\n\
         2012-01-14, alice, withdraw, 500\n\
         2012-01-15, bob, withdraw, 25\n",
    )?;

    let mut replayer = Replayer::new(MemoryOutput::new());
    let report = replayer.replay_csv(File::open(&path)?)?;

    assert_eq!(report.applied, 4);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].line, 6);

    let labels: Vec<&str> = replayer.accounts().collect();
    assert_eq!(labels, vec!["alice", "bob"]);

    replayer.print_statement("alice")?;
    replayer.print_statement("bob")?;

    let written = replayer.output().written();
    assert_eq!(written.len(), 2);
    assert_eq!(
        written[0],
        "date       |   credit |    debit |  balance\n\
         14-01-2012 |          |   500.00 |  2500.00\n\
         13-01-2012 |  2000.00 |          |  3000.00\n\
         10-01-2012 |  1000.00 |          |  1000.00"
    );
    assert_eq!(
        written[1],
        "date       |   credit |    debit |  balance\n\
         11-01-2012 |    20.50 |          |    20.50"
    );
    Ok(())
}

#[test]
fn test_replay_empty_file() -> Result<()> {
    let mut replayer = Replayer::new(MemoryOutput::new());
    let report = replayer.replay_csv("date,account,kind,amount\n".as_bytes())?;

    assert_eq!(report.applied, 0);
    assert!(report.errors.is_empty());
    assert_eq!(replayer.accounts().count(), 0);
    Ok(())
}
