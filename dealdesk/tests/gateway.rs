mod helpers;

use std::sync::Arc;
use std::time::Duration;

use dealdesk::{Desk, DeskError, FallbackPolicy, FallbackReason, Fetched, Resource};
use dealdesk_mock::{DynamicMockConnector, MockBehavior};
use helpers::{AAPL, MSFT, live_desk, t};

#[tokio::test]
async fn live_answer_is_tagged_live() {
    let (desk, ctrl) = live_desk(FallbackPolicy::Mock);
    let feed = desk.get_news(&t(AAPL)).await;
    assert!(feed.is_live());
    assert_eq!(feed.data().unwrap().ticker, t(AAPL));
    assert_eq!(ctrl.calls(Resource::News, &t(AAPL)).await, 1);
}

#[tokio::test]
async fn failed_live_call_falls_back_with_reason() {
    let (desk, ctrl) = live_desk(FallbackPolicy::Mock);
    let err = DeskError::http("capiq", 503);
    ctrl.set_behavior(Resource::Financials, t(AAPL), MockBehavior::Fail(err.clone()))
        .await;

    match desk.get_financials(&t(AAPL)).await {
        Fetched::Fallback { data, reason } => {
            assert_eq!(data.ticker, t(AAPL));
            assert_eq!(reason, FallbackReason::Upstream(err));
            assert_eq!(data.financials.revenue.len(), 3);
        }
        other => panic!("expected fallback, got {other:?}"),
    }

    // other tickers still go live
    assert!(desk.get_financials(&t(MSFT)).await.is_live());
}

#[tokio::test]
async fn strict_policy_surfaces_live_error() {
    let (desk, ctrl) = live_desk(FallbackPolicy::Strict);
    ctrl.set_resource_behavior(
        Resource::Documents,
        MockBehavior::Fail(DeskError::upstream("alphasense", "connection reset")),
    )
    .await;

    let docs = desk.get_documents(&t(AAPL)).await;
    assert_eq!(
        docs.error(),
        Some(&DeskError::upstream("alphasense", "connection reset"))
    );
    assert!(desk.get_expert_calls(&t(AAPL)).await.is_live());
}

#[tokio::test]
async fn mock_mode_never_touches_live_connector() {
    let (conn, ctrl) = DynamicMockConnector::new_with_controller("live-stub");
    let desk = Desk::builder()
        .with_connector(conn)
        .mock_mode(true)
        .build()
        .unwrap();

    let quote = desk.get_live_quote(&t(AAPL)).await;
    assert!(matches!(
        quote,
        Fetched::Fallback {
            reason: FallbackReason::MockMode,
            ..
        }
    ));
    assert_eq!(ctrl.resource_calls(Resource::LiveQuote).await, 0);
}

#[tokio::test(start_paused = true)]
async fn hanging_upstream_times_out_then_falls_back() {
    let (conn, ctrl) = DynamicMockConnector::new_with_controller("live-stub");
    ctrl.set_behavior(Resource::PeerComparison, t(AAPL), MockBehavior::Hang)
        .await;
    let desk = Desk::builder()
        .with_connector(conn)
        .request_timeout(Duration::from_millis(250))
        .build()
        .unwrap();

    let start = tokio::time::Instant::now();
    let peers = desk.get_peer_comparison(&t(AAPL)).await;
    assert!(start.elapsed() >= Duration::from_millis(250));
    match peers {
        Fetched::Fallback {
            reason: FallbackReason::Upstream(e),
            data,
        } => {
            assert_eq!(e, DeskError::provider_timeout("live-stub", "peer-comparison"));
            assert!(!data.peers.is_empty());
        }
        other => panic!("expected timeout fallback, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn simulated_delay_slows_generated_answers() {
    let desk = Desk::builder()
        .mock_mode(true)
        .simulate_delay(true)
        .delay_range(Duration::from_millis(300), Duration::from_millis(800))
        .build()
        .unwrap();

    let start = tokio::time::Instant::now();
    let ratings = desk.get_analyst_ratings(&t(AAPL)).await;
    let waited = start.elapsed();
    assert!(ratings.is_fallback());
    assert!(waited >= Duration::from_millis(300), "waited {waited:?}");
    assert!(waited <= Duration::from_millis(800), "waited {waited:?}");
}

#[test]
fn builder_rejects_bad_configuration() {
    let no_connectors = Desk::builder().build();
    assert!(matches!(no_connectors, Err(DeskError::InvalidArg(_))));

    let inverted = Desk::builder()
        .mock_mode(true)
        .delay_range(Duration::from_secs(2), Duration::from_secs(1))
        .build();
    assert!(matches!(inverted, Err(DeskError::InvalidArg(_))));

    let zero_refresh = Desk::builder()
        .mock_mode(true)
        .live_refresh_interval(Duration::ZERO)
        .build();
    assert!(matches!(zero_refresh, Err(DeskError::InvalidArg(_))));
}

#[test]
fn default_store_carries_sample_projects() {
    let desk = Arc::new(Desk::builder().mock_mode(true).build().unwrap());
    assert_eq!(desk.store().len(), 3);
    assert_eq!(desk.config().live_refresh_interval, Duration::from_secs(15));
}

#[tokio::test]
async fn every_policy_decides_what_a_live_failure_yields() {
    for policy in [FallbackPolicy::Mock, FallbackPolicy::Strict] {
        let (desk, ctrl) = live_desk(policy);
        ctrl.fail_ticker(&t(MSFT), DeskError::http("live-stub", 503))
            .await;
        let outcome = desk.get_analyst_ratings(&t(MSFT)).await;
        let surfaced = match policy {
            FallbackPolicy::Mock => false,
            FallbackPolicy::Strict => true,
        };
        assert_eq!(outcome.error().is_some(), surfaced, "{policy:?}");
        assert_eq!(outcome.is_fallback(), !surfaced, "{policy:?}");
    }
}
