use engine::{
    AmountRule, BalanceRecord, DisplayRecord, FilterPolicy, PriceTable, PriorityTable, Ranker,
    RankingMemo, rank,
};

fn balance(currency: &str, amount: f64, blockchain: &str) -> BalanceRecord {
    BalanceRecord::new(currency, amount, blockchain)
}

fn wallet() -> Vec<BalanceRecord> {
    vec![
        balance("ETH", -1.0, "Ethereum"),
        balance("OSMO", 0.0, "Osmosis"),
        balance("X", -5.0, "Unknown"),
    ]
}

fn prices() -> PriceTable {
    PriceTable::from_iter([("ETH", 1645.93), ("OSMO", 0.377)])
}

#[test]
fn wallet_is_ranked_filtered_and_formatted() {
    let ranked = rank(&wallet(), &prices());

    assert_eq!(ranked.len(), 2);

    assert_eq!(ranked[0].currency(), "OSMO");
    assert_eq!(ranked[0].priority(), 100);
    assert_eq!(ranked[0].formatted, "0");

    assert_eq!(ranked[1].currency(), "ETH");
    assert_eq!(ranked[1].priority(), 50);
    assert_eq!(ranked[1].formatted, "-1");
}

#[test]
fn positive_amounts_are_not_shown() {
    let balances = vec![
        balance("ETH", 1.5, "Ethereum"),
        balance("OSMO", 20.0, "Osmosis"),
        balance("NEO", 0.01, "Neo"),
    ];
    assert!(rank(&balances, &prices()).is_empty());
}

#[test]
fn prices_do_not_affect_ranking() {
    let before = rank(&wallet(), &prices());
    let after = rank(&wallet(), &PriceTable::from_iter([("ETH", 1.0), ("BTC", 30_000.0)]));
    assert_eq!(before, after);
}

#[test]
fn missing_price_leaves_usd_value_unavailable() {
    let prices = PriceTable::from_iter([("ETH", 2.0)]);
    let ranked = rank(&wallet(), &prices);

    assert_eq!(ranked[0].currency(), "OSMO");
    assert_eq!(ranked[0].usd_value(&prices), None);
    assert_eq!(ranked[1].currency(), "ETH");
    assert_eq!(ranked[1].usd_value(&prices), Some(-2.0));
}

#[test]
fn ties_keep_every_record() {
    let balances = vec![
        balance("ZIL", -1.0, "Zilliqa"),
        balance("NEO", -2.0, "Neo"),
        balance("GAS", -3.0, "Neo"),
    ];
    let ranked = rank(&balances, &prices());
    assert_eq!(ranked.len(), 3);
    assert!(ranked.iter().all(|record| record.priority() == 20));
}

#[test]
fn configured_ranker_from_overrides() {
    let table = PriorityTable::builder()
        .priority("Solana", 150)
        .default_priority(0)
        .build();
    let ranker = Ranker::new(table, FilterPolicy::new(-1, AmountRule::NonZero));

    let balances = vec![
        balance("ETH", 2.0, "Ethereum"),
        balance("SOL", -3.0, "Solana"),
        balance("X", 9.0, "Unknown"),
        balance("OSMO", 0.0, "Osmosis"),
    ];
    let ranked: Vec<String> = ranker
        .rank(&balances)
        .iter()
        .map(|record| format!("{}:{}:{}", record.currency(), record.priority(), record.formatted))
        .collect();

    assert_eq!(ranked, vec!["SOL:150:-3", "ETH:50:2", "X:0:9"]);
}

#[test]
fn memo_ignores_price_updates() {
    let mut memo = RankingMemo::default();
    let balances = wallet();

    let mut prices = prices();
    let first: Vec<DisplayRecord> = memo.get(&balances).to_vec();
    let first_eth = first[1].usd_value(&prices);

    prices.insert("ETH", 2000.0);
    let second: Vec<DisplayRecord> = memo.get(&balances).to_vec();

    assert_eq!(memo.recomputations(), 1);
    assert_eq!(first, second);
    // Only the derived USD value follows the price.
    assert_eq!(first_eth, Some(-1645.93));
    assert_eq!(second[1].usd_value(&prices), Some(-2000.0));
}

#[test]
fn balances_deserialize_from_provider_json() {
    let balances: Vec<BalanceRecord> = serde_json::from_str(
        r#"[
            {"currency": "ETH", "amount": -12.7, "blockchain": "Ethereum"},
            {"currency": "ARB", "amount": -4.2, "blockchain": "Arbitrum"}
        ]"#,
    )
    .unwrap();

    let ranked = rank(&balances, &PriceTable::new());
    let formatted: Vec<&str> = ranked.iter().map(|record| record.formatted.as_str()).collect();
    assert_eq!(formatted, vec!["-13", "-4"]);
}
