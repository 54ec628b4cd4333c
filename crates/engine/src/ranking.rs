//! The module contains the balance ranking pipeline.
//!
//! Ranking is a pure function of the balances:
//!
//! 1. annotate each record with its blockchain priority (one lookup each),
//! 2. drop the records the [`FilterPolicy`] rejects,
//! 3. sort by priority, highest first,
//! 4. format the amount of every surviving record.
//!
//! Prices play no part in it; they are only read when rendering rows.

use crate::{BalanceRecord, DisplayRecord, FilterPolicy, PriceTable, PriorityTable, RankedRecord};

/// Ranks `balances` with the standard priority table and the default policy.
///
/// `prices` is accepted for symmetry with the render layer but never read, so
/// the output only changes when `balances` does.
///
/// ```rust
/// use engine::{BalanceRecord, PriceTable, rank};
///
/// let balances = vec![
///     BalanceRecord::new("ETH", -1.0, "Ethereum"),
///     BalanceRecord::new("OSMO", 0.0, "Osmosis"),
///     BalanceRecord::new("X", -5.0, "Unknown"),
/// ];
/// let ranked = rank(&balances, &PriceTable::new());
///
/// assert_eq!(ranked.len(), 2);
/// assert_eq!(ranked[0].currency(), "OSMO");
/// assert_eq!(ranked[1].formatted, "-1");
/// ```
pub fn rank(balances: &[BalanceRecord], _prices: &PriceTable) -> Vec<DisplayRecord> {
    Ranker::default().rank(balances)
}

/// A configured ranking pipeline.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ranker {
    table: PriorityTable,
    policy: FilterPolicy,
}

impl Ranker {
    pub fn new(table: PriorityTable, policy: FilterPolicy) -> Self {
        Self { table, policy }
    }

    pub fn table(&self) -> &PriorityTable {
        &self.table
    }

    pub fn policy(&self) -> &FilterPolicy {
        &self.policy
    }

    /// Annotates one record with its priority.
    pub fn annotate(&self, balance: &BalanceRecord) -> RankedRecord {
        RankedRecord {
            priority: self.table.priority_of(&balance.blockchain),
            balance: balance.clone(),
        }
    }

    /// Runs the full pipeline over `balances`.
    pub fn rank(&self, balances: &[BalanceRecord]) -> Vec<DisplayRecord> {
        let mut ranked: Vec<RankedRecord> = balances
            .iter()
            .map(|balance| self.annotate(balance))
            .filter(|record| self.policy.keeps(record.priority, record.balance.amount))
            .collect();

        tracing::debug!(
            "ranking {} balances, {} dropped by policy",
            balances.len(),
            balances.len() - ranked.len()
        );

        ranked.sort_by(|lhs, rhs| rhs.priority.cmp(&lhs.priority));
        ranked.into_iter().map(RankedRecord::into_display).collect()
    }
}
