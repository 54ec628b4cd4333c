//! Output of ranked rows and swap quotes.

use std::{error::Error, io::Write};

use api_types::{balance::WalletRow, swap::SwapResponse};
use engine::{DisplayRecord, PriceTable, SwapQuote};

use crate::cli::OutputFormat;

type RenderResult = Result<(), Box<dyn Error + Send + Sync>>;

/// Wire row for a ranked record, priced with `prices`.
pub fn wallet_row(record: &DisplayRecord, prices: &PriceTable) -> WalletRow {
    WalletRow {
        key: record.currency().to_string(),
        blockchain: record.blockchain().to_string(),
        priority: record.priority(),
        amount: record.amount(),
        usd_value: record.usd_value(prices),
        formatted_amount: record.formatted.clone(),
    }
}

pub fn swap_response(quote: SwapQuote) -> SwapResponse {
    SwapResponse {
        from_currency: quote.from,
        to_currency: quote.to,
        amount: quote.amount,
        exchange_rate: quote.exchange_rate,
        swapped_amount: quote.swapped_amount,
        priced: quote.priced,
    }
}

pub fn rows(out: &mut impl Write, rows: &[WalletRow], format: OutputFormat) -> RenderResult {
    match format {
        OutputFormat::Table => table(out, rows)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, rows)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            for row in rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}

fn table(out: &mut impl Write, rows: &[WalletRow]) -> std::io::Result<()> {
    if rows.is_empty() {
        return writeln!(out, "No balances to show.");
    }

    let key_width = rows
        .iter()
        .map(|row| row.key.len())
        .max()
        .unwrap_or(0)
        .max("CURRENCY".len());
    let chain_width = rows
        .iter()
        .map(|row| row.blockchain.len())
        .max()
        .unwrap_or(0)
        .max("BLOCKCHAIN".len());

    writeln!(
        out,
        "{:<key_width$}  {:<chain_width$}  {:>8}  {:>12}  {:>14}",
        "CURRENCY", "BLOCKCHAIN", "PRIORITY", "AMOUNT", "USD"
    )?;
    for row in rows {
        let usd = match row.usd_value {
            Some(value) => format!("{value:.2}"),
            None => "n/a".to_string(),
        };
        writeln!(
            out,
            "{:<key_width$}  {:<chain_width$}  {:>8}  {:>12}  {:>14}",
            row.key, row.blockchain, row.priority, row.formatted_amount, usd
        )?;
    }
    Ok(())
}

pub fn swap(out: &mut impl Write, response: &SwapResponse, json: bool) -> RenderResult {
    if json {
        serde_json::to_writer_pretty(&mut *out, response)?;
        writeln!(out)?;
        return Ok(());
    }

    if !response.priced {
        writeln!(
            out,
            "No price available for {} or {}.",
            response.from_currency, response.to_currency
        )?;
    }
    writeln!(out, "Exchange Rate: {}", response.exchange_rate)?;
    writeln!(
        out,
        "You will receive: {} {}",
        response.swapped_amount, response.to_currency
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use engine::{BalanceRecord, rank};

    use super::*;

    fn sample_rows() -> Vec<WalletRow> {
        let prices = PriceTable::from_iter([("ETH", 1000.0)]);
        let balances = vec![
            BalanceRecord::new("ETH", -1.25, "Ethereum"),
            BalanceRecord::new("OSMO", -3.0, "Osmosis"),
        ];
        rank(&balances, &prices)
            .iter()
            .map(|record| wallet_row(record, &prices))
            .collect()
    }

    fn render(format: OutputFormat) -> String {
        let mut out = Vec::new();
        rows(&mut out, &sample_rows(), format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn table_marks_missing_usd() {
        let table = render(OutputFormat::Table);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("CURRENCY"));
        assert!(lines[1].starts_with("OSMO"));
        assert!(lines[1].ends_with("n/a"));
        assert!(lines[2].ends_with("-1250.00"));
    }

    #[test]
    fn csv_leaves_missing_usd_empty() {
        let csv = render(OutputFormat::Csv);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "key,blockchain,priority,amount,usdValue,formattedAmount"
        );
        assert_eq!(lines[1], "OSMO,Osmosis,100,-3.0,,-3");
        assert_eq!(lines[2], "ETH,Ethereum,50,-1.25,-1250.0,-1");
    }

    #[test]
    fn json_keeps_order() {
        let parsed: Vec<WalletRow> = serde_json::from_str(&render(OutputFormat::Json)).unwrap();
        assert_eq!(parsed, sample_rows());
    }

    #[test]
    fn empty_table() {
        let mut out = Vec::new();
        rows(&mut out, &[], OutputFormat::Table).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No balances to show.\n");
    }

    #[test]
    fn unpriced_swap_says_so() {
        let response = SwapResponse {
            from_currency: "ETH".to_string(),
            to_currency: "BTC".to_string(),
            amount: 1.0,
            exchange_rate: 0.0,
            swapped_amount: 0.0,
            priced: false,
        };
        let mut out = Vec::new();
        swap(&mut out, &response, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("No price available for ETH or BTC."));
        assert!(text.contains("You will receive: 0 BTC"));
    }
}
