use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "walletrank")]
#[command(about = "Rank wallet balances by blockchain priority and quote swaps")]
pub struct Cli {
    /// Settings file (defaults to an optional `settings.toml`).
    #[arg(long, env = "WALLETRANK_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rank balances and print one row per shown balance.
    Rank(RankArgs),
    /// Quote a swap between two currencies of the price feed.
    Quote(QuoteArgs),
    /// List the currencies with a price.
    Currencies(CurrenciesArgs),
    /// Print `1 + 2 + … + n`, computed three ways.
    Sum(SumArgs),
}

#[derive(Args, Debug)]
pub struct RankArgs {
    /// JSON array of `{ currency, amount, blockchain }`.
    #[arg(long)]
    pub balances: PathBuf,
    /// JSON price feed: array of `{ currency, date, price }`.
    #[arg(long)]
    pub prices: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
    /// Override the configured amount rule
    /// (`non_positive`, `positive`, `non_zero`, `any`).
    #[arg(long)]
    pub amount_rule: Option<String>,
}

#[derive(Args, Debug)]
pub struct QuoteArgs {
    #[arg(long)]
    pub prices: PathBuf,
    #[arg(long)]
    pub from: String,
    #[arg(long)]
    pub to: String,
    /// Amount of `from` to swap, as typed (e.g. `1,250.5`).
    #[arg(long)]
    pub amount: String,
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct CurrenciesArgs {
    #[arg(long)]
    pub prices: PathBuf,
}

#[derive(Args, Debug)]
pub struct SumArgs {
    /// At most 4294967295, the largest `n` whose sum fits in 64 bits.
    #[arg(
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i64).range(..=summation::MAX_N)
    )]
    pub n: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}
