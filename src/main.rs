use clap::{Parser, Subcommand};

mod cmd;
mod profile;
mod tax;
mod transaction;

#[derive(Parser, Debug)]
#[command(
    name = "taxbuddy",
    version,
    about = "Track income and expenses and estimate simplified Nigerian tax liability"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Aggregated totals and the estimated tax liability
    Summary(cmd::summary::SummaryCommand),
    /// List transactions with filtering
    Transactions(cmd::transactions::TransactionsCommand),
    /// Record a new transaction
    Add(cmd::add::AddCommand),
    /// Check a store for records that violate aggregation preconditions
    Validate(cmd::validate::ValidateCommand),
    /// Print expected input formats
    Schema(cmd::schema::SchemaCommand),
    /// Show the simplified tax band table
    Bands(cmd::bands::BandsCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Summary(cmd) => cmd.exec(),
        Command::Transactions(cmd) => cmd.exec(),
        Command::Add(cmd) => cmd.exec(),
        Command::Validate(cmd) => cmd.exec(),
        Command::Schema(cmd) => cmd.exec(),
        Command::Bands(cmd) => cmd.exec(),
    }
}
