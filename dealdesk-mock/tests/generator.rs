use chrono::{TimeZone, Utc};
use dealdesk_core::{Decimal, Sentiment, Ticker};
use dealdesk_mock::generator;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn t(s: &str) -> Ticker {
    Ticker::new(s).unwrap()
}

fn parse_money(s: &str) -> f64 {
    s.trim_start_matches('$').trim_end_matches('B').parse().unwrap()
}

#[test]
fn aapl_revenue_grows_every_year() {
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let data = generator::financial_data(&mut rng, &t("AAPL"));
        let rev = &data.financials.revenue;
        let (y22, y21, y20) = (
            parse_money(&rev["2022"]),
            parse_money(&rev["2021"]),
            parse_money(&rev["2020"]),
        );
        assert!(y22 > y21 && y21 > y20, "seed {seed}: {rev:?}");
        assert!((100.0..150.0).contains(&y22));
    }
}

#[test]
fn money_strings_carry_units() {
    let data = generator::generate_financial_data(&t("MSFT"));
    assert!(data.financials.revenue["2022"].starts_with('$'));
    assert!(data.financials.net_income["2020"].ends_with('B'));
    assert!(!data.financials.eps["2021"].ends_with('B'));
    assert_eq!(data.ratios.pb, ((data.ratios.pe * 0.3) * 100.0).round() / 100.0);
}

#[test]
fn live_quote_uses_symbol_base_price() {
    let mut rng = StdRng::seed_from_u64(3);
    let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let q = generator::live_quote(&mut rng, &t("MSFT"), now);
    assert!(q.last_price >= Decimal::from(350) && q.last_price < Decimal::from(360));
    assert_eq!(q.high52_week, Decimal::from(455));
    assert_eq!(q.low52_week, Decimal::from(245));
    assert_eq!(q.market_cap, 2_600_000_000_000);
    assert_eq!(q.last_updated, now);

    let other = generator::live_quote(&mut rng, &t("ZZZ"), now);
    assert_eq!(other.market_cap, 800_000_000_000);
    assert!(other.last_price < Decimal::from(110));
}

#[test]
fn peers_exclude_subject() {
    let peers = generator::generate_peer_comparison(&t("MSFT"));
    let symbols: Vec<_> = peers.peers.iter().map(|p| p.ticker.as_str()).collect();
    assert_eq!(symbols, ["AAPL", "GOOGL", "META", "AMZN"]);

    let outsider = generator::generate_peer_comparison(&t("RIVN"));
    assert_eq!(outsider.peers.len(), 4);
    assert_eq!(outsider.peers[0].ticker.as_str(), "AAPL");
}

#[test]
fn news_is_dated_and_named() {
    let now = Utc.with_ymd_and_hms(2024, 5, 10, 0, 0, 0).unwrap();
    let feed = generator::news(&mut StdRng::seed_from_u64(1), &t("LCID"), now);
    assert_eq!(feed.news.len(), 5);
    assert_eq!(feed.news[0].id, "LCID-news-1");
    assert_eq!(feed.news[0].title, "Lucid Motors Reports Strong Quarterly Earnings");
    assert_eq!(feed.news[2].title, "Analysts Upgrade Lucid Motors");
    assert_eq!(feed.news[4].source, "Financial Times");
    assert_eq!((now - feed.news[1].date).num_days(), 3);
}

#[test]
fn unknown_symbol_names_itself() {
    let ticker = t("ACME");
    assert_eq!(generator::company_name(&ticker), "ACME");
    let calls = generator::generate_expert_calls(&ticker);
    assert_eq!(calls.expert_calls[1].title, "ACME Analyst Day");
}

#[test]
fn calls_and_documents_are_spaced() {
    let now = Utc.with_ymd_and_hms(2024, 6, 30, 8, 0, 0).unwrap();
    let mut rng = StdRng::seed_from_u64(9);
    let calls = generator::expert_calls(&mut rng, &t("AAPL"), now);
    let dates: Vec<_> = calls.expert_calls.iter().map(|c| c.date).collect();
    assert_eq!((now.date_naive() - dates[0]).num_days(), 1);
    assert_eq!((now.date_naive() - dates[4]).num_days(), 121);
    for call in &calls.expert_calls {
        assert!((2..=4).contains(&call.participants.len()));
        assert_eq!(call.participants[0], "CEO");
        assert_eq!(call.key_insights.len(), 3);
    }

    let docs = generator::documents(&mut rng, &t("AAPL"), now);
    assert_eq!(docs.documents[0].doc_type, "SEC Filing");
    assert_eq!(docs.documents[1].source, "Morgan Stanley");
    assert_eq!((now.date_naive() - docs.documents[2].date).num_days(), 91);
    let json = serde_json::to_value(&docs.documents[0]).unwrap();
    assert_eq!(json["type"], "SEC Filing");
}

#[test]
fn sentiment_mostly_positive() {
    let mut rng = StdRng::seed_from_u64(42);
    let now = Utc::now();
    let mut positive = 0;
    let mut total = 0;
    for _ in 0..200 {
        for article in generator::news(&mut rng, &t("TSLA"), now).news {
            total += 1;
            if article.sentiment == Sentiment::Positive {
                positive += 1;
            }
        }
    }
    let share = f64::from(positive) / f64::from(total);
    assert!((0.6..0.8).contains(&share), "positive share {share}");
}

proptest! {
    #[test]
    fn ratings_and_ratios_stay_in_range(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let ticker = t("NVDA");
        let ratings = generator::analyst_ratings(&mut rng, &ticker);
        prop_assert!((15..25).contains(&ratings.buy));
        prop_assert!((8..13).contains(&ratings.hold));
        prop_assert!((1..4).contains(&ratings.sell));
        prop_assert!(ratings.target_price >= Decimal::from(150));
        prop_assert!(ratings.target_price <= Decimal::from(200));

        let data = generator::financial_data(&mut rng, &ticker);
        prop_assert!((20.0..=30.0).contains(&data.ratios.pe));
        prop_assert!((0.5..=1.5).contains(&data.ratios.debt_to_equity));
        prop_assert!((1.0..=1.5).contains(&data.ratios.current_ratio));

        let quote = generator::live_quote(&mut rng, &ticker, Utc::now());
        prop_assert!((5_000_000..15_000_000).contains(&quote.volume));
        prop_assert!(quote.change_percent >= Decimal::new(-250, 2));
        prop_assert!(quote.change_percent <= Decimal::new(250, 2));
    }
}
