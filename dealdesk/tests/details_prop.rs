mod helpers;

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use dealdesk::{DeskError, FallbackPolicy, ProjectDetails, Resource};
use dealdesk_mock::MockBehavior;
use helpers::{counting_mock_desk, live_desk, project, t};
use proptest::prelude::*;

fn symbols() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[A-Z]{1,4}", 0..6).prop_map(|s| s.into_iter().collect())
}

/// Symbols that may repeat with different case and padding.
fn raw_symbols() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(("[A-C]{1,2}", any::<bool>(), any::<bool>()), 0..8).prop_map(|v| {
        v.into_iter()
            .map(|(s, lower, padded)| {
                let s = if lower { s.to_lowercase() } else { s };
                if padded { format!(" {s} ") } else { s }
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn batch_fills_every_map_for_every_ticker(syms in raw_symbols()) {
        tokio_test::block_on(async move {
            let (desk, _ctrl) = counting_mock_desk(Duration::from_secs(15));
            let refs: Vec<&str> = syms.iter().map(String::as_str).collect();
            let p = project(&desk, &refs);
            let n = p.tickers.len();
            let distinct: BTreeSet<String> = syms.iter().map(|s| s.trim().to_uppercase()).collect();
            assert_eq!(n, distinct.len());

            let details = ProjectDetails::new(Arc::clone(&desk), p);
            details.load().await.unwrap();

            let s = details.snapshot().await;
            for len in [
                s.financials.len(),
                s.live_quotes.len(),
                s.peers.len(),
                s.ratings.len(),
                s.news.len(),
                s.expert_calls.len(),
                s.documents.len(),
            ] {
                assert_eq!(len, n);
            }
        });
    }

    #[test]
    fn batch_is_all_or_nothing_under_strict_policy(
        syms in symbols().prop_filter("need tickers", |v| !v.is_empty()),
        fail_mask in prop::collection::vec(any::<bool>(), 6),
    ) {
        tokio_test::block_on(async move {
            let (desk, ctrl) = live_desk(FallbackPolicy::Strict);
            let desk = Arc::new(desk);
            let failing: BTreeSet<&String> = syms
                .iter()
                .zip(&fail_mask)
                .filter_map(|(s, fail)| fail.then_some(s))
                .collect();
            for s in &failing {
                ctrl.set_behavior(
                    Resource::ExpertCalls,
                    t(s),
                    MockBehavior::Fail(DeskError::http("live-stub", 502)),
                )
                .await;
            }

            let refs: Vec<&str> = syms.iter().map(String::as_str).collect();
            let details = ProjectDetails::new(Arc::clone(&desk), project(&desk, &refs));
            let result = details.load().await;
            let s = details.snapshot().await;

            if failing.len() == syms.len() {
                assert!(matches!(result, Err(DeskError::AllTickersFailed(_))));
                assert!(s.financials.is_empty());
                assert!(s.error.is_some());
            } else {
                assert!(result.is_ok());
                assert_eq!(s.documents.len(), syms.len());
                let marked = s.documents.values().filter(|e| e.error().is_some()).count();
                assert_eq!(marked, failing.len());
            }
        });
    }
}
