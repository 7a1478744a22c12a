// Shared fixtures so test files can `use helpers::*;`
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use dealdesk::{Desk, FallbackPolicy, NewProject, Project, ProjectStore, Ticker};
use dealdesk_mock::{DynamicMockConnector, DynamicMockController};

pub const AAPL: &str = "AAPL";
pub const MSFT: &str = "MSFT";
pub const TSLA: &str = "TSLA";

pub fn t(s: &str) -> Ticker {
    Ticker::new(s).unwrap()
}

/// Desk over one scriptable live connector.
pub fn live_desk(policy: FallbackPolicy) -> (Desk, DynamicMockController) {
    let (conn, ctrl) = DynamicMockConnector::new_with_controller("live-stub");
    let desk = Desk::builder()
        .with_connector(conn)
        .fallback_policy(policy)
        .store(Arc::new(ProjectStore::new()))
        .build()
        .unwrap();
    (desk, ctrl)
}

/// Mock-mode desk whose generated data comes from a scriptable connector, so
/// tests can count the calls made on behalf of opened details.
pub fn counting_mock_desk(refresh: Duration) -> (Arc<Desk>, DynamicMockController) {
    let (conn, ctrl) = DynamicMockConnector::new_with_controller("generated");
    let desk = Desk::builder()
        .mock_mode(true)
        .fallback_connector(conn)
        .live_refresh_interval(refresh)
        .store(Arc::new(ProjectStore::new()))
        .build()
        .unwrap();
    (Arc::new(desk), ctrl)
}

/// Store a project with `tickers` in the desk's store.
pub fn project(desk: &Desk, tickers: &[&str]) -> Project {
    desk.store()
        .create_project(NewProject::new("Fixture", tickers.iter().copied()))
        .unwrap()
}
