mod helpers;

use std::sync::Arc;

use dealdesk::view::create::{NAME_REQUIRED, TICKER_REQUIRED};
use dealdesk::view::render;
use dealdesk::view::{App, HeaderAction, LoginForm, Screen};
use dealdesk::{Desk, DeskError, ProjectId, Tab};

fn app() -> App {
    App::new(Arc::new(Desk::builder().mock_mode(true).build().unwrap()))
}

#[tokio::test]
async fn login_create_and_open_project() {
    let mut app = app();
    assert_eq!(app.screen(), Screen::Login);

    let mut form = LoginForm::filled("dana@bank.com", "");
    assert!(!app.login(&mut form));
    assert_eq!(app.screen(), Screen::Login);

    form.password = "pw".into();
    assert!(app.login(&mut form));
    assert_eq!(app.screen(), Screen::Dashboard);
    assert_eq!(app.header().user_label.as_deref(), Some("dana"));
    assert_eq!(app.header().action, HeaderAction::Logout);
    assert_eq!(app.dashboard().overview.active_projects, 3);

    // empty submit keeps the modal open and creates nothing
    app.open_create();
    assert_eq!(app.save_project().unwrap(), None);
    let errors = app.create_form().unwrap().errors().messages();
    assert_eq!(errors, [NAME_REQUIRED, TICKER_REQUIRED]);
    assert_eq!(app.projects().len(), 3);

    let form = app.create_form().unwrap();
    form.set_name("Carve-out");
    form.set_ticker(0, "nvda");
    let created = app.save_project().unwrap().unwrap();
    assert_eq!(created.tickers[0].as_str(), "NVDA");
    assert!(app.create_form().is_none());
    assert_eq!(app.projects().len(), 4);
    assert_eq!(app.dashboard().overview.companies_tracked, 6);

    app.view_project(&created.id).await.unwrap();
    assert_eq!(app.screen(), Screen::Details);

    let details = app.details().unwrap();
    let text = render::details(&details.snapshot().await);
    assert!(text.starts_with("Carve-out\nLive data - Last updated: "));
    assert!(text.contains("[Overview]"));
    assert!(text.contains("Companies: 1"));
    assert!(text.contains("Financial Data Points: 10+"));

    details.set_tab(Tab::Financials).await;
    let text = render::details(&details.snapshot().await);
    assert!(text.contains("Revenue | $"));
    assert!(text.contains("P/E Ratio: "));

    app.close_project().await;
    assert_eq!(app.screen(), Screen::Dashboard);

    app.logout();
    assert_eq!(app.screen(), Screen::Login);
    assert_eq!(app.header().action, HeaderAction::Login);
}

#[tokio::test]
async fn opening_unknown_project_fails() {
    let mut app = app();
    assert!(app.login(&mut LoginForm::filled("a@b.c", "x")));
    let err = app.view_project(&ProjectId::new("nope")).await.unwrap_err();
    assert!(matches!(err, DeskError::NotFound { .. }));
    assert_eq!(app.screen(), Screen::Dashboard);
}

#[tokio::test]
async fn market_tab_formats_quotes() {
    let mut app = app();
    assert!(app.login(&mut LoginForm::filled("a@b.c", "x")));
    app.view_project(&ProjectId::new("2")).await.unwrap();

    let details = app.details().unwrap();
    details.set_tab(Tab::LiveMarketData).await;
    let text = render::details(&details.snapshot().await);
    assert!(text.contains("Live Market Data (Live Updates)"));
    assert!(text.contains("Market Cap: $"));
    assert!(text.contains("Analyst Coverage: Buy "));
    assert!(text.contains("Peer Comparison: "));

    app.close_project().await;
}
