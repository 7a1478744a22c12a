use std::time::Duration;

use dealdesk_core::connector::{DeskConnector, DocumentsProvider, ExpertCallsProvider};
use dealdesk_core::{DeskError, Resource, Sentiment, Ticker, Upstream, UpstreamConfig};
use dealdesk_upstream::AlphaSenseConnector;
use httpmock::prelude::*;
use serde_json::json;

fn connector(server: &MockServer) -> AlphaSenseConnector {
    let cfg = UpstreamConfig::new(Upstream::AlphaSense, &server.base_url()).with_api_key("tok");
    AlphaSenseConnector::from_config(&cfg, Duration::from_secs(2)).expect("valid config")
}

#[test]
fn advertises_only_research_resources() {
    let server = MockServer::start();
    let c = connector(&server);
    assert_eq!(c.vendor(), "AlphaSense");
    assert!(c.supports(Resource::ExpertCalls));
    assert!(c.supports(Resource::Documents));
    assert!(!c.supports(Resource::LiveQuote));
}

#[tokio::test]
async fn expert_calls_search_by_symbol() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/alphasense/v1/expert-calls")
                .query_param("query", "TSLA")
                .query_param("limit", "10")
                .header("authorization", "Bearer tok");
            then.status(200).json_body(json!({
                "ticker": "TSLA",
                "expertCalls": [{
                    "id": "TSLA-call-1",
                    "title": "Tesla Earnings Call",
                    "date": "2024-02-01",
                    "participants": ["CEO", "CFO"],
                    "summary": "Discussion of results.",
                    "transcript": "Full transcript would be available here...",
                    "sentiment": "neutral",
                    "keyInsights": ["a", "b", "c"],
                    "audioUrl": "#"
                }]
            }));
        })
        .await;

    let calls = connector(&server)
        .expert_calls(&Ticker::new("TSLA").unwrap())
        .await
        .unwrap();
    mock.assert_async().await;
    assert_eq!(calls.expert_calls.len(), 1);
    assert_eq!(calls.expert_calls[0].sentiment, Sentiment::Neutral);
    assert_eq!(calls.expert_calls[0].participants, vec!["CEO", "CFO"]);
}

#[tokio::test]
async fn documents_filter_by_type() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/alphasense/v1/documents")
                .query_param("query", "RIVN")
                .query_param("limit", "10")
                .query_param("docTypes", "FILING,RESEARCH");
            then.status(200).json_body(json!({
                "ticker": "RIVN",
                "documents": [{
                    "id": "RIVN-doc-1",
                    "title": "Rivian 10-K Annual Report",
                    "date": "2023-12-15",
                    "type": "SEC Filing",
                    "source": "SEC",
                    "summary": "Annual report.",
                    "url": "#",
                    "sentiment": "negative",
                    "keyInsights": []
                }]
            }));
        })
        .await;

    let docs = connector(&server)
        .documents(&Ticker::new("RIVN").unwrap())
        .await
        .unwrap();
    mock.assert_async().await;
    assert_eq!(docs.documents[0].doc_type, "SEC Filing");
}

#[tokio::test]
async fn unreachable_host_is_an_upstream_error() {
    let cfg = UpstreamConfig::new(Upstream::AlphaSense, "http://127.0.0.1:1");
    let c = AlphaSenseConnector::from_config(&cfg, Duration::from_secs(2)).unwrap();
    let err = c
        .documents(&Ticker::new("AAPL").unwrap())
        .await
        .unwrap_err();
    match err {
        DeskError::Upstream { upstream, .. } => assert_eq!(upstream, "dealdesk-alphasense"),
        other => panic!("expected upstream error, got {other:?}"),
    }
}
