//! The module contains [`PriceTable`], the currency → unit price lookup.
//!
//! The table is read-only for the ranking: it only feeds the USD values a
//! render layer shows next to each ranked balance, and swap quotes.

use std::collections::HashMap;

/// Unit prices (in USD) keyed by currency identifier.
///
/// A feed may list the same currency more than once; the entry inserted last
/// wins.
///
/// ```rust
/// use engine::PriceTable;
///
/// let prices = PriceTable::from_iter([("ETH", 1645.93), ("USDC", 1.0)]);
/// assert_eq!(prices.price("ETH"), Some(1645.93));
/// assert_eq!(prices.price("BTC"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PriceTable {
    prices: HashMap<String, f64>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the price of `currency`, replacing any previous one.
    ///
    /// Non-finite prices are ignored.
    pub fn insert(&mut self, currency: impl Into<String>, price: f64) {
        let currency = currency.into();
        if !price.is_finite() {
            tracing::warn!("ignoring non-finite price {price} for {currency}");
            return;
        }
        if let Some(previous) = self.prices.insert(currency, price) {
            tracing::trace!("replaced price {previous}");
        }
    }

    /// Unit price of `currency`, if known.
    #[must_use]
    pub fn price(&self, currency: &str) -> Option<f64> {
        self.prices.get(currency).copied()
    }

    /// Currencies with a price, sorted.
    #[must_use]
    pub fn currencies(&self) -> Vec<&str> {
        let mut currencies: Vec<&str> = self.prices.keys().map(String::as_str).collect();
        currencies.sort_unstable();
        currencies
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl<C: Into<String>> FromIterator<(C, f64)> for PriceTable {
    fn from_iter<I: IntoIterator<Item = (C, f64)>>(iter: I) -> Self {
        let mut table = PriceTable::new();
        for (currency, price) in iter {
            table.insert(currency, price);
        }
        table
    }
}
