//! The module contains the rule deciding which ranked balances are shown.

use serde::{Deserialize, Serialize};

use crate::{EngineError, ResultEngine, blockchain::DEFAULT_PRIORITY};

/// Which amounts a [`FilterPolicy`] keeps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountRule {
    /// `amount <= 0`.
    #[default]
    NonPositive,
    /// `amount > 0`.
    Positive,
    /// `amount != 0`.
    NonZero,
    /// Every amount.
    Any,
}

impl AmountRule {
    #[must_use]
    pub fn keeps(self, amount: f64) -> bool {
        match self {
            AmountRule::NonPositive => amount <= 0.0,
            AmountRule::Positive => amount > 0.0,
            AmountRule::NonZero => amount != 0.0,
            AmountRule::Any => true,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            AmountRule::NonPositive => "non_positive",
            AmountRule::Positive => "positive",
            AmountRule::NonZero => "non_zero",
            AmountRule::Any => "any",
        }
    }
}

impl TryFrom<&str> for AmountRule {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "non_positive" => Ok(AmountRule::NonPositive),
            "positive" => Ok(AmountRule::Positive),
            "non_zero" => Ok(AmountRule::NonZero),
            "any" => Ok(AmountRule::Any),
            other => Err(EngineError::InvalidPolicy(format!(
                "unknown amount rule: {other}"
            ))),
        }
    }
}

/// Keep a balance iff `priority > min_priority` and its amount passes
/// `amount_rule`.
///
/// The default keeps known blockchains with non-positive amounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterPolicy {
    pub min_priority: i32,
    pub amount_rule: AmountRule,
}

impl FilterPolicy {
    pub fn new(min_priority: i32, amount_rule: AmountRule) -> Self {
        Self {
            min_priority,
            amount_rule,
        }
    }

    /// Build a policy from settings strings.
    pub fn from_settings(min_priority: i32, amount_rule: &str) -> ResultEngine<Self> {
        Ok(Self::new(min_priority, AmountRule::try_from(amount_rule)?))
    }

    #[must_use]
    pub fn keeps(&self, priority: i32, amount: f64) -> bool {
        priority > self.min_priority && self.amount_rule.keeps(amount)
    }
}

impl Default for FilterPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_PRIORITY, AmountRule::default())
    }
}
