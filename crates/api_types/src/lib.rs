use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod balance {
    use super::*;

    /// A wallet balance as reported by the balance provider.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct WalletBalance {
        pub currency: String,
        pub amount: f64,
        pub blockchain: String,
    }

    /// One rendered line of the wallet view, as printed by `walletrank rank`.
    ///
    /// Rows are keyed by currency, not by position, so a consumer can keep
    /// per-row state stable when the ordering changes.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct WalletRow {
        /// Row key: the currency.
        pub key: String,
        pub blockchain: String,
        pub priority: i32,
        pub amount: f64,
        /// `null` when the price feed has no entry for the currency.
        pub usd_value: Option<f64>,
        pub formatted_amount: String,
    }
}

pub mod price {
    use super::*;

    /// One entry of the price feed.
    ///
    /// The feed may repeat a currency; `date` tells the quotes apart.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct TokenPrice {
        pub currency: String,
        pub date: DateTime<Utc>,
        pub price: f64,
    }
}

pub mod swap {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SwapResponse {
        pub from_currency: String,
        pub to_currency: String,
        pub amount: f64,
        pub exchange_rate: f64,
        pub swapped_amount: f64,
        pub priced: bool,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_feed_entry_parses_rfc3339_date() {
        let prices: Vec<price::TokenPrice> = serde_json::from_str(
            r#"[{"currency":"BLUR","date":"2023-08-29T07:10:40.000Z","price":0.20811525423728813}]"#,
        )
        .unwrap();
        assert_eq!(prices[0].currency, "BLUR");
        assert_eq!(prices[0].date.to_rfc3339(), "2023-08-29T07:10:40+00:00");
    }

    #[test]
    fn wallet_row_uses_camel_case_and_null_usd() {
        let row = balance::WalletRow {
            key: "OSMO".to_string(),
            blockchain: "Osmosis".to_string(),
            priority: 100,
            amount: -2.0,
            usd_value: None,
            formatted_amount: "-2".to_string(),
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["usdValue"], serde_json::Value::Null);
        assert_eq!(json["formattedAmount"], "-2");
    }
}
