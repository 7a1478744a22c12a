use chrono::{DateTime, Utc};
use dealdesk_core::{AnalystRatings, LiveQuote, Peer, PeerComparison, Ticker};
use rand::Rng;

use super::money;

const PEER_UNIVERSE: [&str; 6] = ["AAPL", "MSFT", "GOOGL", "META", "AMZN", "TSLA"];

fn base_price(ticker: &Ticker) -> f64 {
    match ticker.as_str() {
        "AAPL" => 175.0,
        "MSFT" => 350.0,
        "TSLA" => 240.0,
        _ => 100.0,
    }
}

fn market_cap(ticker: &Ticker) -> u64 {
    match ticker.as_str() {
        "AAPL" => 2_800_000_000_000,
        "MSFT" => 2_600_000_000_000,
        _ => 800_000_000_000,
    }
}

/// Quote around a per-symbol base price, stamped `now`.
pub fn live_quote<R: Rng + ?Sized>(rng: &mut R, ticker: &Ticker, now: DateTime<Utc>) -> LiveQuote {
    let base = base_price(ticker);
    LiveQuote {
        ticker: ticker.clone(),
        last_price: money(base + rng.random_range(0.0..10.0)),
        change_percent: money(rng.random_range(-2.5..2.5)),
        volume: rng.random_range(5_000_000..15_000_000),
        market_cap: market_cap(ticker),
        high52_week: money(base * 1.3),
        low52_week: money(base * 0.7),
        last_updated: now,
    }
}

pub fn analyst_ratings<R: Rng + ?Sized>(rng: &mut R, _ticker: &Ticker) -> AnalystRatings {
    AnalystRatings {
        buy: rng.random_range(15..25),
        hold: rng.random_range(8..13),
        sell: rng.random_range(1..4),
        target_price: money(rng.random_range(150.0..200.0)),
    }
}

/// Four large-cap peers, never including the subject itself.
pub fn peer_comparison<R: Rng + ?Sized>(rng: &mut R, ticker: &Ticker) -> PeerComparison {
    let peers = PEER_UNIVERSE
        .iter()
        .filter(|p| **p != ticker.as_str())
        .take(4)
        .filter_map(|p| Ticker::new(p).ok())
        .map(|peer| Peer {
            ticker: peer,
            last_price: money(rng.random_range(100.0..300.0)),
            change_percent: money(rng.random_range(-2.5..2.5)),
            pe_ratio: money(rng.random_range(20.0..30.0)),
        })
        .collect();
    PeerComparison {
        ticker: ticker.clone(),
        peers,
    }
}
