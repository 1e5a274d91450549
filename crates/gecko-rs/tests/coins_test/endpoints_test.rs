use crate::common::{setup_live_client, setup_mock, strings};
use gecko_rs::coins::models::*;
use gecko_rs::GeckoError;
use mockito::Matcher;
/// =============================================================================
/// COINS LIST
/// =============================================================================
#[tokio::test]
async fn test_get_coins_list_drops_sentinel() {
    let (mut server, client) = setup_mock().await;
    let mock = server
        .mock("GET", "/coins/list")
        .match_query(Matcher::UrlEncoded("include_platform".into(), "false".into()))
        .with_status(200)
        .with_body(include_str!("../fixtures/coins_list.json"))
        .create_async()
        .await;
    let coins = client
        .get_coins_list(&CoinsListParams::default())
        .await
        .expect("Failed to get coins list");
    mock.assert_async().await;
    assert_eq!(coins.len(), 3);
    assert_eq!(coins[0].id, "bitcoin");
    assert!(coins.iter().all(|c| !c.id.is_empty()));
    assert!(coins.iter().all(|c| c.platforms.is_none()));
}
#[tokio::test]
async fn test_get_coins_list_empty() {
    let (mut server, client) = setup_mock().await;
    server
        .mock("GET", "/coins/list")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;
    let coins = client
        .get_coins_list(&CoinsListParams::default())
        .await
        .expect("Empty list should decode");
    assert!(coins.is_empty());
}
#[tokio::test]
async fn test_get_coins_list_with_platforms() {
    let (mut server, client) = setup_mock().await;
    server
        .mock("GET", "/coins/list")
        .match_query(Matcher::UrlEncoded("include_platform".into(), "true".into()))
        .with_status(200)
        .with_body(include_str!("../fixtures/coins_list_platforms.json"))
        .create_async()
        .await;
    let coins = client
        .get_coins_list(&CoinsListParams { include_platform: true })
        .await
        .expect("Failed to get coins list with platforms");
    assert_eq!(coins.len(), 2);
    assert_eq!(coins[0].platforms.as_ref().map(|p| p.len()), Some(0));
    let usdc = coins[1].platforms.as_ref().expect("usdc platforms");
    assert_eq!(usdc.len(), 2);
    assert!(usdc.contains_key("ethereum"));
    assert!(usdc.contains_key("polygon-pos"));
    assert!(!usdc.contains_key("tron"));
}
/// =============================================================================
/// COINS MARKETS
/// =============================================================================
#[tokio::test]
async fn test_get_coins_markets() {
    let (mut server, client) = setup_mock().await;
    let mock = server
        .mock("GET", "/coins/markets")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("vs_currency".into(), "usd".into()),
            Matcher::UrlEncoded("ids".into(), "ethereum,tether".into()),
            Matcher::UrlEncoded("per_page".into(), "2".into()),
            Matcher::UrlEncoded("price_change_percentage".into(), "1h,24h,7d".into()),
            Matcher::UrlEncoded("sparkline".into(), "true".into()),
        ]))
        .with_status(200)
        .with_body(include_str!("../fixtures/coins_markets.json"))
        .create_async()
        .await;
    let params = CoinsMarketsParams {
        vs_currency: "usd".to_string(),
        ids: strings(&["ethereum", "tether"]),
        per_page: 2,
        price_change_percentage: vec![
            PriceChangeWindow::Hour1,
            PriceChangeWindow::Hour24,
            PriceChangeWindow::Day7,
        ],
        sparkline: true,
        ..Default::default()
    };
    let markets = client
        .get_coins_markets(&params)
        .await
        .expect("Failed to get coins markets");
    mock.assert_async().await;
    assert_eq!(markets.len(), 2);
    assert_eq!(markets[0].id, "ethereum");
    assert_eq!(markets[1].id, "tether");
}
#[tokio::test]
async fn test_get_coins_markets_page_size_out_of_range_sends_nothing() {
    let (mut server, client) = setup_mock().await;
    let mock = server.mock("GET", Matcher::Any).expect(0).create_async().await;
    let params = CoinsMarketsParams {
        vs_currency: "usd".to_string(),
        per_page: 251,
        ..Default::default()
    };
    let err = client.get_coins_markets(&params).await.unwrap_err();
    assert!(
        matches!(err, GeckoError::InvalidParameter { name: "per_page", .. }),
        "got {:?}",
        err
    );
    mock.assert_async().await;
}
/// =============================================================================
/// COIN DETAIL
/// =============================================================================
#[tokio::test]
async fn test_get_coin() {
    let (mut server, client) = setup_mock().await;
    let mock = server
        .mock("GET", "/coins/ethereum")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("localization".into(), "false".into()),
            Matcher::UrlEncoded("tickers".into(), "false".into()),
            Matcher::UrlEncoded("market_data".into(), "false".into()),
            Matcher::UrlEncoded("community_data".into(), "false".into()),
            Matcher::UrlEncoded("developer_data".into(), "false".into()),
            Matcher::UrlEncoded("sparkline".into(), "false".into()),
        ]))
        .with_status(200)
        .with_body(include_str!("../fixtures/coins_id.json"))
        .create_async()
        .await;
    let coin = client
        .get_coin(&CoinParams::new("ethereum"))
        .await
        .expect("Failed to get coin");
    mock.assert_async().await;
    assert_eq!(coin.id, "ethereum");
    assert_eq!(coin.symbol, "eth");
    assert_eq!(coin.name, "Ethereum");
    assert!(coin.description.starts_with("Ethereum is a global"));
    assert!(coin.platforms.is_empty());
}
#[tokio::test]
async fn test_get_coin_without_id_sends_nothing() {
    let (mut server, client) = setup_mock().await;
    let mock = server.mock("GET", Matcher::Any).expect(0).create_async().await;
    let err = client.get_coin(&CoinParams::default()).await.unwrap_err();
    assert!(matches!(err, GeckoError::MissingParameter("id")), "got {:?}", err);
    mock.assert_async().await;
}
#[tokio::test]
async fn test_get_coin_not_found() {
    let (mut server, client) = setup_mock().await;
    server
        .mock("GET", "/coins/not-a-coin")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"error":"coin not found"}"#)
        .create_async()
        .await;
    let err = client.get_coin(&CoinParams::new("not-a-coin")).await.unwrap_err();
    match err {
        GeckoError::HttpStatus { status, body } => {
            assert_eq!(status.as_u16(), 404);
            assert!(body.contains("coin not found"));
        }
        other => panic!("expected HttpStatus, got {:?}", other),
    }
}
#[tokio::test]
async fn test_get_coin_id_stays_in_its_segment() {
    let (mut server, client) = setup_mock().await;
    let elsewhere = server
        .mock("GET", "/exchanges")
        .match_query(Matcher::Any)
        .expect(0)
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;
    let escaped = server
        .mock("GET", Matcher::Regex(r"^/coins/\.\.%2Fexchanges$".to_string()))
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"error":"coin not found"}"#)
        .create_async()
        .await;
    let err = client.get_coin(&CoinParams::new("../exchanges")).await.unwrap_err();
    assert!(matches!(err, GeckoError::HttpStatus { .. }), "got {:?}", err);
    escaped.assert_async().await;
    elsewhere.assert_async().await;
}
#[tokio::test]
async fn test_get_coin_dot_id_sends_nothing() {
    let (mut server, client) = setup_mock().await;
    let mock = server.mock("GET", Matcher::Any).expect(0).create_async().await;
    let err = client.get_coin(&CoinParams::new("..")).await.unwrap_err();
    assert!(err.is_validation(), "got {:?}", err);
    mock.assert_async().await;
}
/// =============================================================================
/// MARKET CHART
/// =============================================================================
#[tokio::test]
async fn test_get_coin_market_chart() {
    let (mut server, client) = setup_mock().await;
    let mock = server
        .mock("GET", "/coins/polkadot/market_chart")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("vs_currency".into(), "usd".into()),
            Matcher::UrlEncoded("days".into(), "1".into()),
        ]))
        .with_status(200)
        .with_body(include_str!("../fixtures/market_chart.json"))
        .create_async()
        .await;
    let chart = client
        .get_coin_market_chart(&MarketChartParams {
            id: "polkadot".to_string(),
            vs_currency: "usd".to_string(),
            days: "1".to_string(),
        })
        .await
        .expect("Failed to get market chart");
    mock.assert_async().await;
    assert_eq!(chart.prices.len(), 3);
    assert!(chart.is_aligned());
}
#[tokio::test]
async fn test_get_coin_market_chart_keeps_mismatched_series() {
    let (mut server, client) = setup_mock().await;
    server
        .mock("GET", "/coins/polkadot/market_chart")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            r#"{"prices":[[1,1.0],[2,2.0]],"market_caps":[[1,10.0]],"total_volumes":[[1,3.0],[2,4.0]]}"#,
        )
        .create_async()
        .await;
    let chart = client
        .get_coin_market_chart(&MarketChartParams {
            id: "polkadot".to_string(),
            vs_currency: "usd".to_string(),
            days: "1".to_string(),
        })
        .await
        .expect("Mismatched series still decode");
    assert_eq!(chart.prices.len(), 2);
    assert_eq!(chart.market_caps.len(), 1);
    assert!(!chart.is_aligned());
}
#[tokio::test]
async fn test_get_coin_market_chart_escapes_id() {
    let (mut server, client) = setup_mock().await;
    let plain = server
        .mock("GET", "/coins/bitcoin/market_chart")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let escaped = server
        .mock(
            "GET",
            Matcher::Regex(r"^/coins/bitcoin%2Fmarket_chart%3Fx/market_chart$".to_string()),
        )
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("vs_currency".into(), "usd".into()),
            Matcher::UrlEncoded("days".into(), "1".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"prices":[],"market_caps":[],"total_volumes":[]}"#)
        .create_async()
        .await;
    client
        .get_coin_market_chart(&MarketChartParams {
            id: "bitcoin/market_chart?x".to_string(),
            vs_currency: "usd".to_string(),
            days: "1".to_string(),
        })
        .await
        .expect("escaped id reaches its own path");
    escaped.assert_async().await;
    plain.assert_async().await;
}
/// =============================================================================
/// OHLC
/// =============================================================================
#[tokio::test]
async fn test_get_coin_ohlc() {
    let (mut server, client) = setup_mock().await;
    let mock = server
        .mock("GET", "/coins/polkadot/ohlc")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("vs_currency".into(), "usd".into()),
            Matcher::UrlEncoded("days".into(), "7".into()),
        ]))
        .with_status(200)
        .with_body(include_str!("../fixtures/ohlc.json"))
        .create_async()
        .await;
    let candles = client
        .get_coin_ohlc(&OhlcParams {
            id: "polkadot".to_string(),
            vs_currency: "usd".to_string(),
            days: "7".to_string(),
        })
        .await
        .expect("Failed to get ohlc");
    mock.assert_async().await;
    assert_eq!(candles.len(), 3);
    assert_eq!(
        candles[1],
        Ohlc {
            timestamp: 1699934400000,
            open: 4.95,
            high: 5.01,
            low: 4.93,
            close: 4.99,
        }
    );
}
#[tokio::test]
async fn test_get_coin_ohlc_missing_currency_sends_nothing() {
    let (mut server, client) = setup_mock().await;
    let mock = server.mock("GET", Matcher::Any).expect(0).create_async().await;
    let err = client
        .get_coin_ohlc(&OhlcParams {
            id: "polkadot".to_string(),
            vs_currency: String::new(),
            days: "7".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, GeckoError::MissingParameter("vs_currency")), "got {:?}", err);
    mock.assert_async().await;
}
/// =============================================================================
/// LIVE
/// =============================================================================
#[tokio::test]
#[ignore = "hits the public API"]
async fn test_live_market_chart_series_are_aligned() {
    let client = setup_live_client();
    for days in ["1", "7", "100"] {
        let chart = client
            .get_coin_market_chart(&MarketChartParams {
                id: "polkadot".to_string(),
                vs_currency: "usd".to_string(),
                days: days.to_string(),
            })
            .await
            .expect("Failed to get live market chart");
        assert!(!chart.prices.is_empty());
        assert_eq!(chart.prices.len(), chart.market_caps.len());
        assert_eq!(chart.prices.len(), chart.total_volumes.len());
        for (i, (ts, _)) in chart.prices.iter().enumerate() {
            assert_eq!(*ts, chart.market_caps[i].0);
            assert_eq!(*ts, chart.total_volumes[i].0);
        }
    }
}
#[tokio::test]
#[ignore = "hits the public API"]
async fn test_live_coins_list_has_no_sentinel() {
    let client = setup_live_client();
    let coins = client
        .get_coins_list(&CoinsListParams::default())
        .await
        .expect("Failed to get live coins list");
    assert!(!coins.is_empty());
    assert!(!coins[0].id.is_empty());
    assert!(!coins[0].symbol.is_empty());
    assert!(!coins[0].name.is_empty());
}
#[tokio::test]
#[ignore = "hits the public API"]
async fn test_live_coin_detail() {
    let client = setup_live_client();
    let coin = client
        .get_coin(&CoinParams::new("solana"))
        .await
        .expect("Failed to get live coin");
    assert_eq!(coin.id, "solana");
    assert_eq!(coin.symbol, "sol");
    assert_eq!(coin.name, "Solana");
}
