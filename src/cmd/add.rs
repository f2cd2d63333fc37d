//! Add command - validate and record a new transaction

use crate::cmd::format_ngn;
use crate::transaction::{self, Category, Transaction, TransactionType};
use chrono::{Local, NaiveDate};
use clap::Args;
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct AddCommand {
    /// CSV or JSON store to record into (created if missing)
    #[arg(short, long)]
    transactions: PathBuf,

    /// income or expense
    #[arg(long, value_enum)]
    transaction_type: TransactionType,

    /// Transaction category (must match the transaction type)
    #[arg(short, long, value_enum)]
    category: Category,

    /// Non-negative amount in naira
    #[arg(short, long)]
    amount: Decimal,

    /// Optional description
    #[arg(short, long)]
    description: Option<String>,

    /// Transaction date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,
}

impl AddCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let transaction = Transaction {
            date: self.date.unwrap_or_else(|| Local::now().date_naive()),
            transaction_type: self.transaction_type,
            category: self.category,
            amount: self.amount,
            description: self.description.clone(),
        };

        // This is the boundary where malformed records are rejected; the
        // aggregation itself trusts the store.
        transaction.validate()?;

        transaction::append_to_store(&self.transactions, transaction)?;
        log::info!("recorded transaction in {}", self.transactions.display());

        let kind = match self.transaction_type {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
        };
        println!("{} of {} recorded", kind, format_ngn(self.amount));
        Ok(())
    }
}
