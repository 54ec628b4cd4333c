use std::io::Write;

use clap::Parser;
use cli::{Cli, Command, CurrenciesArgs, QuoteArgs, RankArgs, SumArgs};
use settings::Settings;

mod cli;
mod load;
mod render;
mod settings;

type AppResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> AppResult {
    let cli = Cli::parse();
    let settings = Settings::new(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "walletrank={level},engine={level}",
            level = settings.app.level
        ))
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Rank(args) => rank(&settings, args, &mut out).await,
        Command::Quote(args) => quote(args, &mut out).await,
        Command::Currencies(args) => currencies(args, &mut out).await,
        Command::Sum(args) => sum(args, &mut out),
    }
}

async fn rank(settings: &Settings, args: RankArgs, out: &mut impl Write) -> AppResult {
    let ranker = settings.ranker(args.amount_rule.as_deref())?;
    let (balances, prices) = tokio::try_join!(
        load::balances(&args.balances),
        load::prices(&args.prices)
    )?;

    let ranked = ranker.rank(&balances);
    tracing::info!("showing {} of {} balances", ranked.len(), balances.len());

    let rows: Vec<_> = ranked
        .iter()
        .map(|record| render::wallet_row(record, &prices))
        .collect();
    render::rows(out, &rows, args.format)
}

async fn quote(args: QuoteArgs, out: &mut impl Write) -> AppResult {
    let prices = load::prices(&args.prices).await?;
    let amount = engine::parse_swap_amount(&args.amount)?;
    let quote = engine::quote(&prices, &args.from, &args.to, amount)?;
    render::swap(out, &render::swap_response(quote), args.json)
}

async fn currencies(args: CurrenciesArgs, out: &mut impl Write) -> AppResult {
    let prices = load::prices(&args.prices).await?;
    for currency in prices.currencies() {
        writeln!(out, "{currency}")?;
    }
    Ok(())
}

fn sum(args: SumArgs, out: &mut impl Write) -> AppResult {
    let too_large = || format!("sum to {} does not fit in 64 bits", args.n);

    let formula = summation::sum_to_n_formula(args.n).ok_or_else(too_large)?;
    let looped = summation::sum_to_n_loop(args.n).ok_or_else(too_large)?;
    writeln!(out, "loop:      {looped}")?;
    writeln!(out, "formula:   {formula}")?;
    // Deep recursion would overflow the stack.
    if args.n <= 10_000 {
        let recursive = summation::sum_to_n_recursive(args.n).ok_or_else(too_large)?;
        writeln!(out, "recursive: {recursive}")?;
    } else {
        tracing::warn!("skipping recursive sum for n = {}", args.n);
    }
    Ok(())
}
