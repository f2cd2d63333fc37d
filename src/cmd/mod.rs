pub mod add;
pub mod bands;
pub mod schema;
pub mod summary;
pub mod transactions;
pub mod validate;

use crate::transaction::{self, Transaction};
use anyhow::Context;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Read transactions from a CSV or JSON store (or stdin with "-", treated as
/// JSON)
pub fn read_transactions(path: &Path) -> anyhow::Result<Vec<Transaction>> {
    let transactions = if path.as_os_str() == "-" {
        read_from_stdin()?
    } else {
        let file =
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        let reader = BufReader::new(file);
        if transaction::is_json_path(path) {
            transaction::read_json(reader)?
        } else {
            transaction::read_csv(reader)?
        }
    };
    log::debug!("read {} transaction(s)", transactions.len());
    Ok(transactions)
}

fn read_from_stdin() -> anyhow::Result<Vec<Transaction>> {
    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin.lock());

    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    if buffer.is_empty() {
        anyhow::bail!("No input received. Provide a file or pipe data to stdin.");
    }

    transaction::read_json(io::Cursor::new(buffer))
}

/// Display a naira amount with thousands separators, e.g. ₦1,000,000.00
pub fn format_ngn(amount: Decimal) -> String {
    if amount < Decimal::ZERO {
        format!("-\u{20A6}{}", group_digits(amount.abs()))
    } else {
        format!("\u{20A6}{}", group_digits(amount))
    }
}

fn group_digits(amount: Decimal) -> String {
    let formatted = format!("{:.2}", amount);
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some(parts) => parts,
        None => (formatted.as_str(), "00"),
    };
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{}.{}", grouped, frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn format_ngn_groups_thousands() {
        assert_eq!(format_ngn(dec!(0)), "₦0.00");
        assert_eq!(format_ngn(dec!(800)), "₦800.00");
        assert_eq!(format_ngn(dec!(800000)), "₦800,000.00");
        assert_eq!(format_ngn(dec!(1234567.5)), "₦1,234,567.50");
        assert_eq!(format_ngn(dec!(32000000)), "₦32,000,000.00");
    }

    #[test]
    fn format_ngn_signed() {
        assert_eq!(format_ngn(dec!(-21000)), "-₦21,000.00");
    }
}
