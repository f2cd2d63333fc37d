use chrono::NaiveDate;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Unified JSON store format
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TransactionStore {
    pub transactions: Vec<Transaction>,
}

/// Whether a transaction adds to or subtracts from net income
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

/// Transaction category. Categories are opaque to aggregation but each one
/// belongs to exactly one transaction type.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum Category {
    // Income
    Salary,
    BusinessRevenue,
    Freelance,
    Investment,
    OtherIncome,
    // Expense
    Rent,
    Utilities,
    Transportation,
    Food,
    OfficeSupplies,
    Marketing,
    ProfessionalServices,
    Equipment,
    OtherExpense,
}

impl Category {
    /// The transaction type this category belongs to
    pub fn transaction_type(&self) -> TransactionType {
        match self {
            Category::Salary
            | Category::BusinessRevenue
            | Category::Freelance
            | Category::Investment
            | Category::OtherIncome => TransactionType::Income,
            Category::Rent
            | Category::Utilities
            | Category::Transportation
            | Category::Food
            | Category::OfficeSupplies
            | Category::Marketing
            | Category::ProfessionalServices
            | Category::Equipment
            | Category::OtherExpense => TransactionType::Expense,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Salary => "salary",
            Category::BusinessRevenue => "business_revenue",
            Category::Freelance => "freelance",
            Category::Investment => "investment",
            Category::OtherIncome => "other_income",
            Category::Rent => "rent",
            Category::Utilities => "utilities",
            Category::Transportation => "transportation",
            Category::Food => "food",
            Category::OfficeSupplies => "office_supplies",
            Category::Marketing => "marketing",
            Category::ProfessionalServices => "professional_services",
            Category::Equipment => "equipment",
            Category::OtherExpense => "other_expense",
        }
    }
}

/// A single income or expense record.
///
/// The sign of the contribution to net income is decided by `transaction_type`
/// alone; `amount` is expected to be non-negative. That precondition is
/// enforced at the write boundary (`add`) and audited by `validate`, not by
/// the aggregation itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Transaction {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub category: Category,
    pub amount: Decimal,
    #[serde(default)]
    pub description: Option<String>,
}

/// A record that violates the aggregation preconditions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("amount must be non-negative, got {0}")]
    NegativeAmount(Decimal),
    #[error("{category} is an {expected} category, not valid for an {actual} transaction")]
    CategoryMismatch {
        category: &'static str,
        expected: &'static str,
        actual: &'static str,
    },
}

impl Transaction {
    /// All precondition violations present in this record
    pub fn issues(&self) -> Vec<StoreError> {
        let mut issues = Vec::new();
        if self.amount < Decimal::ZERO {
            issues.push(StoreError::NegativeAmount(self.amount));
        }
        let expected = self.category.transaction_type();
        if expected != self.transaction_type {
            issues.push(StoreError::CategoryMismatch {
                category: self.category.as_str(),
                expected: expected.as_str(),
                actual: self.transaction_type.as_str(),
            });
        }
        issues
    }

    /// Reject the record on its first precondition violation
    pub fn validate(&self) -> Result<(), StoreError> {
        match self.issues().into_iter().next() {
            Some(issue) => Err(issue),
            None => Ok(()),
        }
    }
}

/// True when the path should be read/written as the JSON store format
pub fn is_json_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Read transactions from CSV
pub fn read_csv<R: Read>(reader: R) -> anyhow::Result<Vec<Transaction>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let records: Result<Vec<Transaction>, _> = rdr.deserialize::<Transaction>().collect();
    let mut transactions = records?;
    transactions.sort_by_key(|t| t.date);
    Ok(transactions)
}

/// Read transactions from JSON
pub fn read_json<R: Read>(reader: R) -> anyhow::Result<Vec<Transaction>> {
    let store: TransactionStore = serde_json::from_reader(reader)?;
    let mut transactions = store.transactions;
    transactions.sort_by_key(|t| t.date);
    Ok(transactions)
}

/// Append a transaction to a CSV or JSON store, creating the store if needed.
/// The store is rewritten in full so records stay sorted by date.
pub fn append_to_store(path: &Path, transaction: Transaction) -> anyhow::Result<()> {
    let mut transactions = if path.exists() {
        let reader = BufReader::new(File::open(path)?);
        if is_json_path(path) {
            read_json(reader)?
        } else {
            read_csv(reader)?
        }
    } else {
        Vec::new()
    };

    transactions.push(transaction);
    transactions.sort_by_key(|t| t.date);

    if is_json_path(path) {
        let store = TransactionStore { transactions };
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, &store)?;
    } else {
        let mut wtr = csv::Writer::from_path(path)?;
        for t in &transactions {
            wtr.serialize(t)?;
        }
        wtr.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parse_csv_records() {
        let csv_data = "\
date,type,category,amount,description
2024-02-01,expense,rent,200000,Office rent
2024-01-15,income,salary,1000000,January salary
2024-03-10,income,freelance,50000,";

        let transactions = read_csv(csv_data.as_bytes()).unwrap();
        assert_eq!(transactions.len(), 3);

        // Sorted by date
        assert_eq!(
            transactions[0].date,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert_eq!(transactions[0].transaction_type, TransactionType::Income);
        assert_eq!(transactions[0].category, Category::Salary);
        assert_eq!(transactions[0].amount, dec!(1000000));
        assert_eq!(transactions[0].description, Some("January salary".into()));

        assert_eq!(transactions[1].category, Category::Rent);
        assert_eq!(transactions[2].description, None);
    }

    #[test]
    fn parse_csv_rejects_unknown_category() {
        let csv_data = "\
date,type,category,amount,description
2024-01-15,income,lottery,1000,";

        assert!(read_csv(csv_data.as_bytes()).is_err());
    }

    #[test]
    fn parse_json_store() {
        let json_data = r#"{
            "transactions": [
                {
                    "date": "2024-06-15",
                    "type": "expense",
                    "category": "utilities",
                    "amount": 35000
                },
                {
                    "date": "2024-01-15",
                    "type": "income",
                    "category": "business_revenue",
                    "amount": 4000000,
                    "description": "Q1 invoices"
                }
            ]
        }"#;

        let transactions = read_json(json_data.as_bytes()).unwrap();
        assert_eq!(transactions.len(), 2);
        // Sorted by date
        assert_eq!(transactions[0].category, Category::BusinessRevenue);
        assert_eq!(transactions[0].amount, dec!(4000000));
        assert_eq!(transactions[1].category, Category::Utilities);
    }

    #[test]
    fn category_type_mapping() {
        assert_eq!(Category::Salary.transaction_type(), TransactionType::Income);
        assert_eq!(
            Category::Investment.transaction_type(),
            TransactionType::Income
        );
        assert_eq!(Category::Rent.transaction_type(), TransactionType::Expense);
        assert_eq!(
            Category::OtherExpense.transaction_type(),
            TransactionType::Expense
        );
    }

    #[test]
    fn validate_rejects_negative_amount() {
        let t = Transaction {
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            transaction_type: TransactionType::Expense,
            category: Category::Rent,
            amount: dec!(-50),
            description: None,
        };
        assert_eq!(t.validate(), Err(StoreError::NegativeAmount(dec!(-50))));
    }

    #[test]
    fn validate_rejects_category_mismatch() {
        let t = Transaction {
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            transaction_type: TransactionType::Income,
            category: Category::Rent,
            amount: dec!(100),
            description: None,
        };
        let issues = t.issues();
        assert_eq!(issues.len(), 1);
        assert!(matches!(issues[0], StoreError::CategoryMismatch { .. }));
    }

    #[test]
    fn validate_accepts_well_formed_record() {
        let t = Transaction {
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            transaction_type: TransactionType::Income,
            category: Category::Salary,
            amount: dec!(250000),
            description: Some("salary".into()),
        };
        assert_eq!(t.validate(), Ok(()));
    }

    #[test]
    fn append_creates_and_sorts_csv_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.csv");
        assert!(!path.exists());

        let later = Transaction {
            date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            transaction_type: TransactionType::Expense,
            category: Category::Rent,
            amount: dec!(200000),
            description: Some("Office rent".into()),
        };
        let earlier = Transaction {
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            transaction_type: TransactionType::Income,
            category: Category::Salary,
            amount: dec!(1000000),
            description: None,
        };

        append_to_store(&path, later.clone()).unwrap();
        append_to_store(&path, earlier.clone()).unwrap();

        let transactions = read_csv(File::open(&path).unwrap()).unwrap();
        // Rewritten sorted by date, with the first record created from scratch
        assert_eq!(transactions, vec![earlier, later]);
    }

    #[test]
    fn append_round_trips_json_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let transaction = Transaction {
            date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            transaction_type: TransactionType::Income,
            category: Category::BusinessRevenue,
            amount: dec!(4000000),
            description: Some("Q1 invoices".into()),
        };

        append_to_store(&path, transaction.clone()).unwrap();
        append_to_store(
            &path,
            Transaction {
                date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
                transaction_type: TransactionType::Expense,
                category: Category::Utilities,
                amount: dec!(35000),
                description: None,
            },
        )
        .unwrap();

        // Extension dispatches to the JSON store format
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"transactions\""));

        let transactions = read_json(File::open(&path).unwrap()).unwrap();
        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].category, Category::Utilities);
        assert_eq!(transactions[1], transaction);
    }

    #[test]
    fn json_path_detection() {
        assert!(is_json_path(Path::new("store.json")));
        assert!(!is_json_path(Path::new("store.csv")));
        assert!(!is_json_path(Path::new("store")));
    }
}
