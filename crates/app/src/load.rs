//! Loading of the balance and price documents.

use std::{error::Error, path::Path};

use api_types::{balance::WalletBalance, price::TokenPrice};
use engine::{BalanceRecord, PriceTable};

type LoadResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

/// Read a balances document.
pub async fn balances(path: &Path) -> LoadResult<Vec<BalanceRecord>> {
    let raw = tokio::fs::read(path).await?;
    let balances = parse_balances(&raw)?;
    tracing::info!("loaded {} balances from {}", balances.len(), path.display());
    Ok(balances)
}

/// Read a price feed document.
pub async fn prices(path: &Path) -> LoadResult<PriceTable> {
    let raw = tokio::fs::read(path).await?;
    let prices = parse_prices(&raw)?;
    tracing::info!("loaded {} prices from {}", prices.len(), path.display());
    Ok(prices)
}

pub fn parse_balances(raw: &[u8]) -> Result<Vec<BalanceRecord>, serde_json::Error> {
    let balances: Vec<WalletBalance> = serde_json::from_slice(raw)?;
    Ok(balances
        .into_iter()
        .map(|balance| BalanceRecord::new(balance.currency, balance.amount, balance.blockchain))
        .collect())
}

pub fn parse_prices(raw: &[u8]) -> Result<PriceTable, serde_json::Error> {
    let feed: Vec<TokenPrice> = serde_json::from_slice(raw)?;
    Ok(feed
        .into_iter()
        .map(|entry| (entry.currency, entry.price))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balances_map_to_records() {
        let balances = parse_balances(
            br#"[{"currency":"OSMO","amount":-3.5,"blockchain":"Osmosis"}]"#,
        )
        .unwrap();
        assert_eq!(balances, vec![BalanceRecord::new("OSMO", -3.5, "Osmosis")]);
    }

    #[test]
    fn duplicate_prices_keep_last_entry() {
        let prices = parse_prices(
            br#"[
                {"currency":"USD","date":"2023-08-29T07:10:30.000Z","price":1},
                {"currency":"USD","date":"2023-08-29T07:10:40.000Z","price":0.99},
                {"currency":"USD","date":"2023-08-29T07:10:35.000Z","price":1.01}
            ]"#,
        )
        .unwrap();
        assert_eq!(prices.len(), 1);
        assert_eq!(prices.price("USD"), Some(1.01));
    }

    #[test]
    fn malformed_feed_is_an_error() {
        assert!(parse_prices(br#"[{"currency":"USD","price":1}]"#).is_err());
        assert!(parse_balances(b"{}").is_err());
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        assert!(balances(Path::new("does/not/exist.json")).await.is_err());
    }
}
