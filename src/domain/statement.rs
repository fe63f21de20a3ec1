use super::{Cents, Transaction, format_cents};

pub const STATEMENT_HEADER: &str = "date       |   credit |    debit |  balance";

const DATE_FORMAT: &str = "%d-%m-%Y";
const COLUMN_WIDTH: usize = 8;

/// Render a statement for the given transactions.
///
/// Transactions may come in any order; they are sorted by timestamp (ties keep
/// their input order), balanced chronologically, then printed newest first
/// below the header. Lines are separated by `\n` without a trailing newline.
pub fn format_statement(transactions: &[Transaction]) -> String {
    let mut chronological = transactions.to_vec();
    chronological.sort_by_key(|t| t.timestamp);

    let mut balance: Cents = 0;
    let mut lines: Vec<String> = chronological
        .iter()
        .map(|transaction| {
            balance = balance.saturating_add(transaction.amount);
            format_line(transaction, balance)
        })
        .collect();
    lines.reverse();

    std::iter::once(STATEMENT_HEADER.to_string())
        .chain(lines)
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_line(transaction: &Transaction, balance: Cents) -> String {
    let credit = if transaction.is_credit() {
        column(transaction.amount)
    } else {
        blank()
    };
    let debit = if transaction.is_debit() {
        column(transaction.amount.abs())
    } else {
        blank()
    };

    format!(
        "{} | {} | {} | {}",
        transaction.timestamp.format(DATE_FORMAT),
        credit,
        debit,
        column(balance)
    )
}

fn column(cents: Cents) -> String {
    format!("{:>width$}", format_cents(cents), width = COLUMN_WIDTH)
}

fn blank() -> String {
    " ".repeat(COLUMN_WIDTH)
}
