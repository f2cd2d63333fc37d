//! Schema command - print expected input formats

use crate::transaction::TransactionStore;
use clap::Args;
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Output format: json-schema, csv-header or csv-fields
    #[arg(value_enum, default_value = "json-schema")]
    format: SchemaFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema for the JSON store format
    JsonSchema,
    /// CSV header row with column names
    CsvHeader,
    /// CSV column descriptions
    CsvFields,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match self.format {
            SchemaFormat::JsonSchema => self.print_json_schema(),
            SchemaFormat::CsvHeader => self.print_csv_header(),
            SchemaFormat::CsvFields => self.print_csv_fields(),
        }
    }

    fn print_json_schema(&self) -> anyhow::Result<()> {
        let schema = schema_for!(TransactionStore);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }

    fn print_csv_header(&self) -> anyhow::Result<()> {
        println!("{}", CSV_COLUMNS.join(","));
        Ok(())
    }

    fn print_csv_fields(&self) -> anyhow::Result<()> {
        println!("CSV Input Format");
        println!("================");
        println!();
        for (name, required, description) in CSV_FIELD_DESCRIPTIONS {
            let req = if *required { "required" } else { "optional" };
            println!("{:13} ({:8})  {}", name, req, description);
        }
        println!();
        println!("Amounts are non-negative; the type column decides the sign");
        Ok(())
    }
}

const CSV_COLUMNS: &[&str] = &["date", "type", "category", "amount", "description"];

const CSV_FIELD_DESCRIPTIONS: &[(&str, bool, &str)] = &[
    ("date", true, "Transaction date (YYYY-MM-DD)"),
    ("type", true, "income or expense"),
    (
        "category",
        true,
        "salary, business_revenue, freelance, investment, other_income, rent, \
         utilities, transportation, food, office_supplies, marketing, \
         professional_services, equipment, other_expense",
    ),
    ("amount", true, "Non-negative naira amount"),
    ("description", false, "Optional description"),
];
