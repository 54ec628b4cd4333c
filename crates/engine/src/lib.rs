//! Balance ranking engine.
//!
//! Turns the balances reported by a wallet into the ordered, filtered and
//! formatted rows a wallet page shows:
//!
//! - [`PriorityTable`] maps a blockchain to its display priority.
//! - [`FilterPolicy`] decides which ranked balances are shown.
//! - [`Ranker`] runs the pipeline; [`rank`] does it with the defaults.
//! - [`RankingMemo`] reruns the pipeline only when the balances change.
//!
//! Prices live in a [`PriceTable`]. They never affect the ranking, only the
//! USD value of each [`DisplayRecord`] and [`swap`] quotes.
pub use balance::{BalanceRecord, DisplayRecord, RankedRecord};
pub use blockchain::{Blockchain, DEFAULT_PRIORITY};
pub use error::EngineError;
pub use format::format_whole;
pub use memo::RankingMemo;
pub use policy::{AmountRule, FilterPolicy};
pub use prices::PriceTable;
pub use priority::{PriorityTable, PriorityTableBuilder};
pub use ranking::{Ranker, rank};
pub use swap::{MIN_SWAP_AMOUNT, SwapQuote, parse_swap_amount, quote};

mod balance;
mod blockchain;
mod error;
mod format;
mod memo;
mod policy;
mod prices;
mod priority;
mod ranking;
pub mod swap;

pub type ResultEngine<T> = Result<T, EngineError>;
