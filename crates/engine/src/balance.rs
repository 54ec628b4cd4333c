//! The module contains the balance records flowing through the ranking.
//!
//! Each stage wraps the previous one instead of copying its fields:
//!
//! - [`BalanceRecord`]: a holding as received from the balance provider.
//! - [`RankedRecord`]: the holding plus its blockchain priority.
//! - [`DisplayRecord`]: the ranked holding plus its formatted amount.

use serde::{Deserialize, Serialize};

use crate::{PriceTable, format_whole};

/// A holding of `currency` on `blockchain`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BalanceRecord {
    pub currency: String,
    pub amount: f64,
    pub blockchain: String,
}

impl BalanceRecord {
    pub fn new(currency: impl Into<String>, amount: f64, blockchain: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            amount,
            blockchain: blockchain.into(),
        }
    }
}

/// A [`BalanceRecord`] with its priority, looked up exactly once.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankedRecord {
    #[serde(flatten)]
    pub balance: BalanceRecord,
    pub priority: i32,
}

impl RankedRecord {
    /// Attach the formatted amount, completing the record for display.
    pub fn into_display(self) -> DisplayRecord {
        let formatted = format_whole(self.balance.amount);
        DisplayRecord {
            ranked: self,
            formatted,
        }
    }
}

/// The render-ready shape of a balance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayRecord {
    #[serde(flatten)]
    pub ranked: RankedRecord,
    pub formatted: String,
}

impl DisplayRecord {
    pub fn currency(&self) -> &str {
        &self.ranked.balance.currency
    }

    pub fn amount(&self) -> f64 {
        self.ranked.balance.amount
    }

    pub fn blockchain(&self) -> &str {
        &self.ranked.balance.blockchain
    }

    pub fn priority(&self) -> i32 {
        self.ranked.priority
    }

    /// `price * amount`, or `None` when `prices` has no entry for the currency.
    pub fn usd_value(&self, prices: &PriceTable) -> Option<f64> {
        prices
            .price(self.currency())
            .map(|price| price * self.amount())
    }
}
