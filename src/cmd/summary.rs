//! Summary command - aggregated totals and the estimated tax liability

use crate::cmd::{format_ngn, read_transactions};
use crate::profile::{Classification, Profile};
use crate::tax::{aggregate, estimate, ng, AggregateResult};
use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct SummaryCommand {
    /// CSV or JSON file containing transactions (or "-" for stdin)
    #[arg(short, long)]
    transactions: PathBuf,

    /// JSON profile file supplying the account classification
    #[arg(short, long, conflicts_with = "classification")]
    profile: Option<PathBuf>,

    /// Account classification when no profile file is given
    #[arg(short, long, value_enum)]
    classification: Option<Classification>,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

/// Summary data for JSON output
#[derive(Debug, Serialize)]
struct SummaryData {
    classification: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    account_name: Option<String>,
    transaction_count: usize,
    total_income: String,
    total_expenses: String,
    net_income: String,
    rate_pct: String,
    estimated_tax: String,
    exempt: bool,
}

impl SummaryCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let transactions = read_transactions(&self.transactions)?;
        let (classification, account_name) = self.resolve_classification()?;

        let totals = aggregate(&transactions);
        let rate = ng::rate_for(totals.net_income, classification);
        let estimated_tax = estimate(totals.net_income, classification);
        let exempt = classification == Classification::Individual && rate.is_zero();

        if self.json {
            self.print_json(
                &totals,
                transactions.len(),
                classification,
                account_name,
                rate,
                estimated_tax,
                exempt,
            )
        } else {
            self.print_summary(
                &totals,
                transactions.len(),
                classification,
                account_name.as_deref(),
                rate,
                estimated_tax,
                exempt,
            );
            Ok(())
        }
    }

    fn resolve_classification(&self) -> anyhow::Result<(Classification, Option<String>)> {
        if let Some(ref path) = self.profile {
            let profile = Profile::load(path)?;
            Ok((
                profile.classification,
                Some(profile.display_name().to_string()),
            ))
        } else if let Some(classification) = self.classification {
            Ok((classification, None))
        } else {
            anyhow::bail!("either --profile or --classification is required");
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn print_summary(
        &self,
        totals: &AggregateResult,
        count: usize,
        classification: Classification,
        account_name: Option<&str>,
        rate: Decimal,
        estimated_tax: Decimal,
        exempt: bool,
    ) {
        println!();
        match account_name {
            Some(name) => println!("TAX SUMMARY ({}) - {}", classification.as_str(), name),
            None => println!("TAX SUMMARY ({})", classification.as_str()),
        }
        println!();

        println!("TRANSACTIONS");
        println!("  Count: {}", count);
        println!(
            "  Income: {} | Expenses: {} | Net: {}",
            format_ngn(totals.total_income),
            format_ngn(totals.total_expenses),
            format_ngn(totals.net_income)
        );
        println!();

        println!("ESTIMATE");
        println!(
            "  Rate: {:.0}% | Estimated tax: {}",
            rate * dec!(100),
            format_ngn(estimated_tax)
        );
        if exempt {
            println!(
                "  Status: Tax Exempt - net income within the {} annual threshold",
                format_ngn(ng::exempt_threshold())
            );
        } else {
            println!("  Status: Tax due on current net income");
        }
        println!();
    }

    #[allow(clippy::too_many_arguments)]
    fn print_json(
        &self,
        totals: &AggregateResult,
        count: usize,
        classification: Classification,
        account_name: Option<String>,
        rate: Decimal,
        estimated_tax: Decimal,
        exempt: bool,
    ) -> anyhow::Result<()> {
        let data = SummaryData {
            classification: classification.as_str().to_string(),
            account_name,
            transaction_count: count,
            total_income: format!("{:.2}", totals.total_income),
            total_expenses: format!("{:.2}", totals.total_expenses),
            net_income: format!("{:.2}", totals.net_income),
            rate_pct: format!("{:.0}", rate * dec!(100)),
            estimated_tax: format!("{:.2}", estimated_tax),
            exempt,
        };

        println!("{}", serde_json::to_string_pretty(&data)?);
        Ok(())
    }
}
