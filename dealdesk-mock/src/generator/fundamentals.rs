use std::collections::BTreeMap;

use dealdesk_core::{FinancialData, FinancialStatements, Ratios, Ticker};
use rand::Rng;

use super::round2;

const YEARS: [(&str, f64); 3] = [("2022", 1.0), ("2021", 0.9), ("2020", 0.8)];

fn by_year(format: impl Fn(f64) -> String, base: f64) -> BTreeMap<String, String> {
    YEARS
        .iter()
        .map(|(year, factor)| ((*year).to_string(), format(base * factor)))
        .collect()
}

/// Three fiscal years of revenue, net income and EPS plus valuation ratios.
///
/// Revenue is drawn from `[100, 150)` billions and shrinks by 10% per prior
/// year; net income is a quarter of revenue.
pub fn financial_data<R: Rng + ?Sized>(rng: &mut R, ticker: &Ticker) -> FinancialData {
    let revenue = round2(rng.random_range(100.0..150.0));
    let eps = round2(rng.random_range(1.0..3.0));
    let pe = round2(rng.random_range(20.0..30.0));

    let billions = |v: f64| format!("${v:.2}B");
    FinancialData {
        ticker: ticker.clone(),
        financials: FinancialStatements {
            revenue: by_year(billions, revenue),
            net_income: by_year(billions, revenue * 0.25),
            eps: by_year(|v| format!("${v:.2}"), eps),
        },
        ratios: Ratios {
            pe,
            pb: round2(pe * 0.3),
            debt_to_equity: round2(rng.random_range(0.5..1.5)),
            current_ratio: round2(rng.random_range(1.0..1.5)),
        },
    }
}
