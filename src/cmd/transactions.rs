//! Transactions command - transaction-level listing with filtering

use crate::cmd::{format_ngn, read_transactions};
use crate::transaction::{Category, Transaction, TransactionType};
use chrono::Datelike;
use clap::Args;
use std::io;
use std::path::PathBuf;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct TransactionsCommand {
    /// CSV or JSON file containing transactions (or "-" for stdin)
    #[arg(short, long)]
    transactions: PathBuf,

    /// Filter by transaction type
    #[arg(long, value_enum)]
    transaction_type: Option<TransactionType>,

    /// Filter by category
    #[arg(short, long, value_enum)]
    category: Option<Category>,

    /// Filter by calendar year (e.g., 2024)
    #[arg(short, long)]
    year: Option<i32>,

    /// Output as CSV instead of formatted table
    #[arg(long)]
    csv: bool,
}

/// Row for the transactions table output
#[derive(Debug, Clone, Tabled, serde::Serialize)]
pub struct TransactionRow {
    #[tabled(rename = "#")]
    #[serde(rename = "row_num")]
    pub row_num: String,

    #[tabled(rename = "Date")]
    pub date: String,

    #[tabled(rename = "Type")]
    #[serde(rename = "type")]
    pub transaction_type: String,

    #[tabled(rename = "Category")]
    pub category: String,

    #[tabled(rename = "Amount")]
    pub amount: String,

    #[tabled(rename = "Description")]
    pub description: String,
}

impl TransactionsCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let all_transactions = read_transactions(&self.transactions)?;

        let mut filtered: Vec<Transaction> = all_transactions
            .into_iter()
            .filter(|t| {
                self.transaction_type
                    .is_none_or(|ty| t.transaction_type == ty)
            })
            .filter(|t| self.category.is_none_or(|c| t.category == c))
            .filter(|t| self.year.is_none_or(|y| t.date.year() == y))
            .collect();

        // Newest first, like the readers sort oldest first for aggregation
        filtered.sort_by(|a, b| b.date.cmp(&a.date));

        let rows: Vec<TransactionRow> = filtered
            .iter()
            .enumerate()
            .map(|(i, t)| build_row(i + 1, t))
            .collect();

        if self.csv {
            self.write_csv(&rows)
        } else {
            self.print_table(&rows);
            Ok(())
        }
    }

    fn print_table(&self, rows: &[TransactionRow]) {
        if rows.is_empty() {
            println!("No transactions found matching filters");
            return;
        }

        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
            .to_string();
        println!("{}", table);
    }

    fn write_csv(&self, rows: &[TransactionRow]) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_writer(io::stdout());
        for row in rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

fn build_row(row_num: usize, transaction: &Transaction) -> TransactionRow {
    let amount = match transaction.transaction_type {
        TransactionType::Income => format!("+{}", format_ngn(transaction.amount)),
        TransactionType::Expense => format!("-{}", format_ngn(transaction.amount)),
    };

    TransactionRow {
        row_num: row_num.to_string(),
        date: transaction.date.format("%Y-%m-%d").to_string(),
        transaction_type: transaction.transaction_type.as_str().to_string(),
        category: transaction.category.as_str().replace('_', " "),
        amount,
        description: transaction.description.clone().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn row_formats_amount_by_type() {
        let t = Transaction {
            date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            transaction_type: TransactionType::Expense,
            category: Category::OfficeSupplies,
            amount: dec!(12500),
            description: None,
        };
        let row = build_row(1, &t);
        assert_eq!(row.amount, "-₦12,500.00");
        assert_eq!(row.category, "office supplies");
        assert_eq!(row.date, "2024-03-10");
        assert_eq!(row.description, "");
    }
}
