use gecko_rs::exchanges::models::*;
#[test]
fn test_exchanges_deserialization() {
    let exchanges: Vec<Exchange> =
        serde_json::from_str(include_str!("../fixtures/exchanges.json")).unwrap();
    assert_eq!(exchanges.len(), 2);
    let binance = &exchanges[0];
    assert_eq!(binance.year_established, Some(2017));
    assert_eq!(binance.trust_score_rank, Some(1));
    let tiny = &exchanges[1];
    assert_eq!(tiny.year_established, None);
    assert_eq!(tiny.trust_score, None);
    // zero volume is data, not absence
    assert_eq!(tiny.trade_volume_24h_btc, Some(0.0));
    assert_eq!(tiny.trade_volume_24h_btc_normalized, None);
}
#[test]
fn test_exchange_summary_display() {
    let summary: ExchangeSummary = serde_json::from_str(r#"{"id":"binance","name":"Binance"}"#).unwrap();
    assert_eq!(summary.to_string(), "binance: Binance");
}
