/// Priority assigned to any blockchain the table does not list.
pub const DEFAULT_PRIORITY: i32 = -99;

/// Blockchains with a well-known display priority.
///
/// Balances carry their blockchain as a free-form string (it comes from an
/// external balance provider), so this enum only names the chains the default
/// [`PriorityTable`](crate::PriorityTable) is seeded with. Anything else falls
/// back to [`DEFAULT_PRIORITY`].
///
/// ```rust
/// use engine::Blockchain;
///
/// assert_eq!(Blockchain::Osmosis.priority(), 100);
/// assert_eq!(Blockchain::Neo.name(), "Neo");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Blockchain {
    Osmosis,
    Ethereum,
    Arbitrum,
    Zilliqa,
    Neo,
}

impl Blockchain {
    pub const ALL: [Blockchain; 5] = [
        Blockchain::Osmosis,
        Blockchain::Ethereum,
        Blockchain::Arbitrum,
        Blockchain::Zilliqa,
        Blockchain::Neo,
    ];

    /// Canonical identifier, as found in balance records.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Blockchain::Osmosis => "Osmosis",
            Blockchain::Ethereum => "Ethereum",
            Blockchain::Arbitrum => "Arbitrum",
            Blockchain::Zilliqa => "Zilliqa",
            Blockchain::Neo => "Neo",
        }
    }

    /// Built-in priority; higher sorts first.
    #[must_use]
    pub const fn priority(self) -> i32 {
        match self {
            Blockchain::Osmosis => 100,
            Blockchain::Ethereum => 50,
            Blockchain::Arbitrum => 30,
            Blockchain::Zilliqa | Blockchain::Neo => 20,
        }
    }
}
