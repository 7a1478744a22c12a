use std::time::Duration;

use dealdesk_core::connector::{
    AnalystRatingsProvider, DeskConnector, FinancialsProvider, LiveQuoteProvider, NewsProvider,
    PeerComparisonProvider,
};
use dealdesk_core::{DeskError, Resource, Ticker, Upstream, UpstreamConfig};
use dealdesk_upstream::CapIqConnector;
use httpmock::prelude::*;
use rust_decimal::Decimal;
use serde_json::json;

fn connector(server: &MockServer, key: Option<&str>, timeout: Duration) -> CapIqConnector {
    let mut cfg = UpstreamConfig::new(Upstream::CapIq, &server.base_url());
    if let Some(k) = key {
        cfg = cfg.with_api_key(k);
    }
    CapIqConnector::from_config(&cfg, timeout).expect("valid config")
}

fn aapl() -> Ticker {
    Ticker::new("AAPL").unwrap()
}

#[test]
fn advertises_only_capiq_resources() {
    let server = MockServer::start();
    let c = connector(&server, None, Duration::from_secs(1));
    assert_eq!(c.name(), "dealdesk-capiq");
    for r in Resource::ALL {
        assert_eq!(c.supports(r), r.upstream() == Upstream::CapIq, "{r}");
    }
}

#[test]
fn rejects_alphasense_settings() {
    let cfg = UpstreamConfig::new(Upstream::AlphaSense, "http://localhost:3000");
    let err = CapIqConnector::from_config(&cfg, Duration::from_secs(1)).unwrap_err();
    assert!(matches!(err, DeskError::InvalidArg(_)));
}

#[tokio::test]
async fn financials_hit_company_path_with_bearer_token() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/capiq/v1/companies/AAPL/financials")
                .header("authorization", "Bearer secret")
                .header("content-type", "application/json");
            then.status(200).json_body(json!({
                "ticker": "AAPL",
                "financials": {
                    "revenue": {"2022": "$120.00B", "2021": "$108.00B", "2020": "$96.00B"},
                    "netIncome": {"2022": "$30.00B", "2021": "$27.00B", "2020": "$24.00B"},
                    "eps": {"2022": "$2.00", "2021": "$1.80", "2020": "$1.60"}
                },
                "ratios": {"pe": 25.0, "pb": 7.5, "debtToEquity": 1.1, "currentRatio": 1.2}
            }));
        })
        .await;

    let c = connector(&server, Some("secret"), Duration::from_secs(2));
    let data = c.financials(&aapl()).await.unwrap();
    mock.assert_async().await;
    assert_eq!(data.ticker.as_str(), "AAPL");
    assert_eq!(data.financials.revenue["2022"], "$120.00B");
    assert!((data.ratios.pb - 7.5).abs() < f64::EPSILON);
}

#[tokio::test]
async fn news_sends_limit_and_window() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/capiq/v1/companies/MSFT/news")
                .query_param("limit", "10")
                .query_param("days", "30");
            then.status(200).json_body(json!({
                "ticker": "MSFT",
                "news": [{
                    "id": "MSFT-news-1",
                    "title": "Microsoft Reports Strong Quarterly Earnings",
                    "source": "Bloomberg",
                    "date": "2024-03-01T12:00:00Z",
                    "url": "#",
                    "sentiment": "positive"
                }]
            }));
        })
        .await;

    let c = connector(&server, None, Duration::from_secs(2));
    let feed = c.news(&Ticker::new("msft").unwrap()).await.unwrap();
    mock.assert_async().await;
    assert_eq!(feed.news.len(), 1);
    assert_eq!(feed.news[0].source, "Bloomberg");
}

#[tokio::test]
async fn quote_ratings_and_peers_decode() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.path("/api/capiq/v1/companies/AAPL/market-data/live");
            then.status(200).json_body(json!({
                "ticker": "AAPL",
                "lastPrice": "180.25",
                "changePercent": "-1.10",
                "volume": 9_000_000u64,
                "marketCap": 2_800_000_000_000u64,
                "high52Week": "227.50",
                "low52Week": "122.50",
                "lastUpdated": "2024-03-01T15:30:00Z"
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.path("/api/capiq/v1/companies/AAPL/analyst-ratings");
            then.status(200)
                .json_body(json!({"buy": 20, "hold": 10, "sell": 2, "targetPrice": 190.5}));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.path("/api/capiq/v1/companies/AAPL/peers");
            then.status(200).json_body(json!({
                "ticker": "AAPL",
                "peers": [
                    {"ticker": "MSFT", "lastPrice": 250.0, "changePercent": 1.2, "peRatio": 24.1}
                ]
            }));
        })
        .await;

    let c = connector(&server, None, Duration::from_secs(2));
    let q = c.live_quote(&aapl()).await.unwrap();
    assert_eq!(q.last_price, Decimal::new(18025, 2));
    let r = c.analyst_ratings(&aapl()).await.unwrap();
    assert_eq!(r.total(), 32);
    let p = c.peer_comparison(&aapl()).await.unwrap();
    assert_eq!(p.peers[0].ticker.as_str(), "MSFT");
}

#[tokio::test]
async fn missing_company_maps_to_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.path("/api/capiq/v1/companies/ZZZ/financials");
            then.status(404).body("no such company");
        })
        .await;

    let c = connector(&server, None, Duration::from_secs(2));
    let err = c
        .financials(&Ticker::new("ZZZ").unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, DeskError::NotFound { .. }), "{err:?}");
}

#[tokio::test]
async fn server_error_keeps_status_and_connector_name() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.path("/api/capiq/v1/companies/AAPL/peers");
            then.status(503);
        })
        .await;

    let c = connector(&server, None, Duration::from_secs(2));
    let err = c.peer_comparison(&aapl()).await.unwrap_err();
    assert_eq!(err, DeskError::http("dealdesk-capiq", 503));
}

#[tokio::test]
async fn undecodable_body_is_a_data_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.path("/api/capiq/v1/companies/AAPL/analyst-ratings");
            then.status(200).body("<html>login</html>");
        })
        .await;

    let c = connector(&server, None, Duration::from_secs(2));
    let err = c.analyst_ratings(&aapl()).await.unwrap_err();
    assert!(matches!(err, DeskError::Data(_)), "{err:?}");
}

#[tokio::test]
async fn slow_upstream_times_out() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.path("/api/capiq/v1/companies/AAPL/market-data/live");
            then.status(200)
                .delay(Duration::from_millis(500))
                .json_body(json!({}));
        })
        .await;

    let c = connector(&server, None, Duration::from_millis(50));
    let err = c.live_quote(&aapl()).await.unwrap_err();
    assert_eq!(
        err,
        DeskError::provider_timeout("dealdesk-capiq", "live-quote")
    );
}
