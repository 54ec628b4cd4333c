//! The module contains currency swap quoting over a [`PriceTable`].

use serde::{Deserialize, Serialize};

use crate::{EngineError, PriceTable, ResultEngine};

/// Smallest amount a swap accepts.
pub const MIN_SWAP_AMOUNT: f64 = 0.01;

/// Result of quoting a swap.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SwapQuote {
    pub from: String,
    pub to: String,
    pub amount: f64,
    /// Units of `to` received per unit of `from`; `0` when not priced.
    pub exchange_rate: f64,
    pub swapped_amount: f64,
    /// `false` when either currency has no usable price.
    pub priced: bool,
}

/// Parses a swap amount as typed by a user.
///
/// Characters other than ASCII digits and `.` are stripped first; what is
/// left must be digits with an optional fractional part, and at least
/// [`MIN_SWAP_AMOUNT`].
///
/// ```rust
/// use engine::parse_swap_amount;
///
/// assert_eq!(parse_swap_amount("1,250.5").unwrap(), 1250.5);
/// assert!(parse_swap_amount("0.001").is_err());
/// ```
pub fn parse_swap_amount(input: &str) -> ResultEngine<f64> {
    let invalid = || EngineError::InvalidAmount("Invalid number format".to_string());

    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if cleaned.is_empty() {
        return Err(EngineError::InvalidAmount("Amount is required".to_string()));
    }

    let (whole, fraction) = match cleaned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (cleaned.as_str(), None),
    };
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !digits(whole) || !fraction.is_none_or(digits) {
        return Err(invalid());
    }

    let amount: f64 = cleaned.parse().map_err(|_| invalid())?;
    ensure_min_amount(amount)?;
    Ok(amount)
}

fn ensure_min_amount(amount: f64) -> ResultEngine<()> {
    if !amount.is_finite() || amount < MIN_SWAP_AMOUNT {
        return Err(EngineError::InvalidAmount(
            "Amount must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

/// Quotes swapping `amount` of `from` into `to`.
///
/// The exchange rate is `price(from) / price(to)`. When either price is
/// missing or zero the quote is returned unpriced, with a
/// zero rate and a zero swapped amount.
pub fn quote(prices: &PriceTable, from: &str, to: &str, amount: f64) -> ResultEngine<SwapQuote> {
    if from == to {
        return Err(EngineError::SameCurrency(from.to_string()));
    }
    ensure_min_amount(amount)?;

    let rate = match (prices.price(from), prices.price(to)) {
        (Some(from_price), Some(to_price)) if from_price != 0.0 && to_price != 0.0 => {
            Some(from_price / to_price)
        }
        _ => None,
    };

    let quote = match rate {
        Some(exchange_rate) => SwapQuote {
            from: from.to_string(),
            to: to.to_string(),
            amount,
            exchange_rate,
            swapped_amount: amount * exchange_rate,
            priced: true,
        },
        None => {
            tracing::warn!("no usable price to swap {from} into {to}");
            SwapQuote {
                from: from.to_string(),
                to: to.to_string(),
                amount,
                exchange_rate: 0.0,
                swapped_amount: 0.0,
                priced: false,
            }
        }
    };
    Ok(quote)
}
