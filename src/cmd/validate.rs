//! Validate command - surface records that violate aggregation preconditions

use crate::cmd::read_transactions;
use crate::transaction::StoreError;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ValidateCommand {
    /// CSV or JSON file containing transactions (or "-" for stdin)
    #[arg(short, long)]
    transactions: PathBuf,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

/// A validation issue for output
#[derive(Debug, Clone, Serialize)]
struct ValidationIssue {
    #[serde(rename = "type")]
    issue_type: String,
    date: String,
    category: String,
    amount: String,
    message: String,
}

/// JSON output structure
#[derive(Debug, Serialize)]
struct ValidationOutput {
    issue_count: usize,
    issues: Vec<ValidationIssue>,
}

impl ValidateCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let transactions = read_transactions(&self.transactions)?;

        let issues: Vec<ValidationIssue> = transactions
            .iter()
            .flat_map(|t| {
                t.issues().into_iter().map(|issue| ValidationIssue {
                    issue_type: issue_type_name(&issue),
                    date: t.date.format("%Y-%m-%d").to_string(),
                    category: t.category.as_str().to_string(),
                    amount: format!("{:.2}", t.amount),
                    message: issue.to_string(),
                })
            })
            .collect();

        if self.json {
            self.print_json(&issues)?;
        } else {
            self.print_text(&issues);
        }

        // Exit with code 1 if issues found
        if !issues.is_empty() {
            std::process::exit(1);
        }
        Ok(())
    }

    fn print_text(&self, issues: &[ValidationIssue]) {
        println!();
        println!("VALIDATION RESULTS");
        println!();

        if issues.is_empty() {
            println!("\u{2713} No issues found.");
        } else {
            println!("\u{26A0} {} issue(s) found:", issues.len());
            println!();

            for (i, issue) in issues.iter().enumerate() {
                println!(
                    "  {}. [{}] {} {} transaction of \u{20A6}{}",
                    i + 1,
                    issue.issue_type,
                    issue.date,
                    issue.category,
                    issue.amount
                );
                println!("     {}", issue.message);
                println!();
            }
        }
    }

    fn print_json(&self, issues: &[ValidationIssue]) -> anyhow::Result<()> {
        let output = ValidationOutput {
            issue_count: issues.len(),
            issues: issues.to_vec(),
        };

        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }
}

fn issue_type_name(issue: &StoreError) -> String {
    match issue {
        StoreError::NegativeAmount(_) => "NegativeAmount".to_string(),
        StoreError::CategoryMismatch { .. } => "CategoryMismatch".to_string(),
    }
}
