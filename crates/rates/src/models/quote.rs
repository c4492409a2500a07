use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Origin of a rate quote.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QuoteSource {
    /// Extracted from the bank's published rate board.
    Live,
    /// Built from configured static rates.
    Fallback,
}

impl QuoteSource {
    /// Wire form of the source tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteSource::Live => "LIVE",
            QuoteSource::Fallback => "FALLBACK",
        }
    }
}

/// Static buy/sell pair used when live retrieval fails.
#[derive(Clone, Debug)]
pub struct StaticRates {
    /// Rate at which the bank buys the foreign currency
    pub buy_rate: Decimal,
    /// Rate at which the bank sells the foreign currency
    pub sell_rate: Decimal,
}

/// The bank's posted buy/sell rates for one currency pair.
///
/// Built once per request and discarded with the response; nothing is
/// persisted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RateQuote {
    /// Spot rate at which the bank buys the foreign currency
    pub buy_rate: Decimal,
    /// Spot rate at which the bank sells the foreign currency
    pub sell_rate: Decimal,
    /// When the rates were observed
    pub observed_at: DateTime<Utc>,
    /// Where the rates came from
    pub source: QuoteSource,
}

impl RateQuote {
    /// Create a live quote observed now.
    pub fn live(buy_rate: Decimal, sell_rate: Decimal) -> Self {
        Self {
            buy_rate,
            sell_rate,
            observed_at: Utc::now(),
            source: QuoteSource::Live,
        }
    }

    /// Create a quote from configured static rates.
    pub fn fallback(rates: &StaticRates) -> Self {
        Self {
            buy_rate: rates.buy_rate,
            sell_rate: rates.sell_rate,
            observed_at: Utc::now(),
            source: QuoteSource::Fallback,
        }
    }
}
