use crate::{BalanceRecord, DisplayRecord, Ranker};

/// Caches the last ranking, keyed on the balances only.
///
/// A render loop can call [`RankingMemo::get`] on every frame: the pipeline
/// only reruns when the balances differ from the previous call. Prices are
/// not part of the key, so a price update never triggers a re-rank.
///
/// ```rust
/// use engine::{BalanceRecord, RankingMemo};
///
/// let mut memo = RankingMemo::default();
/// let balances = vec![BalanceRecord::new("ETH", -1.0, "Ethereum")];
///
/// memo.get(&balances);
/// memo.get(&balances);
/// assert_eq!(memo.recomputations(), 1);
/// ```
#[derive(Debug, Default)]
pub struct RankingMemo {
    ranker: Ranker,
    cached: Option<(Vec<BalanceRecord>, Vec<DisplayRecord>)>,
    recomputations: u64,
}

impl RankingMemo {
    pub fn new(ranker: Ranker) -> Self {
        Self {
            ranker,
            cached: None,
            recomputations: 0,
        }
    }

    /// The ranking of `balances`, recomputed only if they changed.
    pub fn get(&mut self, balances: &[BalanceRecord]) -> &[DisplayRecord] {
        let stale = match &self.cached {
            Some((key, _)) => key.as_slice() != balances,
            None => true,
        };

        if stale {
            let ranked = self.ranker.rank(balances);
            self.recomputations += 1;
            self.cached = Some((balances.to_vec(), ranked));
        } else {
            tracing::trace!("ranking memo hit");
        }

        match &self.cached {
            Some((_, ranked)) => ranked,
            None => &[],
        }
    }

    /// Number of times the pipeline actually ran.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    /// Forget the cached ranking.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}
