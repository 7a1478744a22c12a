use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use dealdesk_types::DeskError;

/// Uppercase stock symbol, e.g. `AAPL` or `BRK.B`.
///
/// Construction trims surrounding whitespace and uppercases; empty input and
/// characters outside `A-Z`, `0-9`, `.` and `-` are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    /// Normalize and validate a raw symbol.
    ///
    /// # Errors
    /// Returns `DeskError::InvalidArg` for blank input or unsupported characters.
    pub fn new(raw: &str) -> Result<Self, DeskError> {
        let symbol = raw.trim().to_ascii_uppercase();
        if symbol.is_empty() {
            return Err(DeskError::InvalidArg("ticker must not be empty".into()));
        }
        if let Some(bad) = symbol
            .chars()
            .find(|c| !(c.is_ascii_uppercase() || c.is_ascii_digit() || *c == '.' || *c == '-'))
        {
            return Err(DeskError::InvalidArg(format!(
                "ticker {symbol:?} contains unsupported character {bad:?}"
            )));
        }
        Ok(Self(symbol))
    }

    /// The normalized symbol.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Normalize a list of raw symbols, dropping blank entries and repeats.
///
/// The first occurrence of each symbol keeps its position.
///
/// # Errors
/// Returns `DeskError::InvalidArg` for the first non-blank entry that is not a valid symbol.
pub fn parse_tickers<I, S>(raw: I) -> Result<Vec<Ticker>, DeskError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tickers: Vec<Ticker> = Vec::new();
    for s in raw {
        if s.as_ref().trim().is_empty() {
            continue;
        }
        let ticker = Ticker::new(s.as_ref())?;
        if !tickers.contains(&ticker) {
            tickers.push(ticker);
        }
    }
    Ok(tickers)
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Ticker {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Ticker {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Ticker {
    type Error = DeskError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl TryFrom<&str> for Ticker {
    type Error = DeskError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Ticker> for String {
    fn from(t: Ticker) -> Self {
        t.0
    }
}
