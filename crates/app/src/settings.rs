//! Handles settings for the application.
//!
//! Sources, later ones overriding earlier ones:
//!
//! 1. built-in defaults,
//! 2. `settings.toml` in the working directory (optional), or the file given
//!    with `--config` (required),
//! 3. `WALLETRANK__<SECTION>__<KEY>` environment variables.
//!
//! ```toml
//! [app]
//! level = "debug"
//!
//! [ranking]
//! amount_rule = "positive"
//! min_priority = -99
//!
//! [[ranking.priorities]]
//! blockchain = "Solana"
//! priority = 150
//! ```
use config::{Config, ConfigError, Environment, File};
use engine::{DEFAULT_PRIORITY, EngineError, FilterPolicy, PriorityTable, Ranker};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: String,
}

/// Extra or overriding entry of the priority table.
///
/// Kept as a list rather than a map so blockchain names keep their case.
#[derive(Debug, Deserialize)]
pub struct PriorityOverride {
    pub blockchain: String,
    pub priority: i32,
}

#[derive(Debug, Deserialize)]
pub struct Ranking {
    pub amount_rule: String,
    pub min_priority: i32,
    pub default_priority: i32,
    #[serde(default)]
    pub priorities: Vec<PriorityOverride>,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub ranking: Ranking,
}

impl Settings {
    pub fn new(path: Option<&str>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::with_name(path),
            None => File::with_name("settings").required(false),
        };

        let settings = Config::builder()
            .set_default("app.level", "info")?
            .set_default("ranking.amount_rule", "non_positive")?
            .set_default("ranking.min_priority", i64::from(DEFAULT_PRIORITY))?
            .set_default("ranking.default_priority", i64::from(DEFAULT_PRIORITY))?
            .add_source(file)
            .add_source(Environment::with_prefix("WALLETRANK").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Build the ranking pipeline described by these settings.
    ///
    /// `amount_rule` overrides the configured rule when given.
    pub fn ranker(&self, amount_rule: Option<&str>) -> Result<Ranker, EngineError> {
        let ranking = &self.ranking;
        let policy = FilterPolicy::from_settings(
            ranking.min_priority,
            amount_rule.unwrap_or(&ranking.amount_rule),
        )?;

        let table = ranking
            .priorities
            .iter()
            .fold(
                PriorityTable::builder().default_priority(ranking.default_priority),
                |builder, entry| builder.priority(entry.blockchain.as_str(), entry.priority),
            )
            .build();

        let ranker = Ranker::new(table, policy);
        tracing::debug!(
            "ranking with {} priorities, keeping priority > {} and {} amounts",
            ranker.table().len(),
            ranker.policy().min_priority,
            ranker.policy().amount_rule.as_str()
        );
        Ok(ranker)
    }
}
