//! Bands command - show the simplified tax band table

use crate::cmd::format_ngn;
use crate::tax::ng;
use clap::Args;
use rust_decimal_macros::dec;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct BandsCommand {}

#[derive(Debug, Tabled)]
struct BandRow {
    #[tabled(rename = "Net income up to")]
    upper: String,

    #[tabled(rename = "Rate")]
    rate: String,
}

impl BandsCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let rows: Vec<BandRow> = ng::individual_bands()
            .into_iter()
            .map(|band| BandRow {
                upper: band
                    .upper
                    .map_or("(above)".to_string(), format_ngn),
                rate: if band.rate.is_zero() {
                    "exempt".to_string()
                } else {
                    format!("{:.0}%", band.rate * dec!(100))
                },
            })
            .collect();

        println!();
        println!("INDIVIDUAL BANDS (annual net income, rate applies to the whole amount)");
        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
            .to_string();
        println!("{}", table);
        println!();
        println!(
            "SMALL BUSINESS: flat {:.0}% of net income",
            ng::business_rate() * dec!(100)
        );
        println!();
        Ok(())
    }
}
