//! The module contains the blockchain → priority lookup used by the ranking.

use std::{collections::HashMap, sync::LazyLock};

use crate::{Blockchain, blockchain::DEFAULT_PRIORITY};

static STANDARD: LazyLock<PriorityTable> = LazyLock::new(PriorityTable::seeded);

/// Immutable mapping from blockchain identifier to display priority.
///
/// Lookups never fail: unlisted blockchains get the table's default priority
/// (`-99` for the standard table).
///
/// ```rust
/// use engine::PriorityTable;
///
/// let table = PriorityTable::standard();
/// assert_eq!(table.priority_of("Ethereum"), 50);
/// assert_eq!(table.priority_of("Dogechain"), -99);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriorityTable {
    priorities: HashMap<String, i32>,
    default_priority: i32,
}

impl PriorityTable {
    /// The process-wide table built from [`Blockchain`]'s built-in priorities.
    pub fn standard() -> &'static PriorityTable {
        &STANDARD
    }

    /// Return a builder seeded with the standard priorities.
    pub fn builder() -> PriorityTableBuilder {
        PriorityTableBuilder {
            table: PriorityTable::seeded(),
        }
    }

    fn seeded() -> Self {
        Self {
            priorities: Blockchain::ALL
                .into_iter()
                .map(|chain| (chain.name().to_string(), chain.priority()))
                .collect(),
            default_priority: DEFAULT_PRIORITY,
        }
    }

    /// Priority of `blockchain`, or the default when it is not listed.
    #[must_use]
    pub fn priority_of(&self, blockchain: &str) -> i32 {
        self.priorities
            .get(blockchain)
            .copied()
            .unwrap_or(self.default_priority)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.priorities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.priorities.is_empty()
    }
}

impl Default for PriorityTable {
    fn default() -> Self {
        PriorityTable::standard().clone()
    }
}

/// Builder for custom [`PriorityTable`]s, e.g. from settings overrides.
#[derive(Debug)]
pub struct PriorityTableBuilder {
    table: PriorityTable,
}

impl PriorityTableBuilder {
    /// Set (or override) the priority of a blockchain.
    pub fn priority(mut self, blockchain: impl Into<String>, priority: i32) -> Self {
        self.table.priorities.insert(blockchain.into(), priority);
        self
    }

    /// Set the priority used for unlisted blockchains.
    pub fn default_priority(mut self, priority: i32) -> Self {
        self.table.default_priority = priority;
        self
    }

    pub fn build(self) -> PriorityTable {
        self.table
    }
}
