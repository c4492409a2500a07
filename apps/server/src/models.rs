use chrono::{DateTime, Utc};
use ratebridge_rates::{QuoteSource, ResolvedRate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Timestamp format of the wire payload.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Wire payload of `GET /exchange-rate`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ExchangeRateResponse {
    pub success: bool,
    pub bank_buy_rate: Decimal,
    pub bank_sell_rate: Decimal,
    pub base_rate: Decimal,
    pub paypal_rate: Decimal,
    pub source: QuoteSource,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl From<ResolvedRate> for ExchangeRateResponse {
    fn from(resolved: ResolvedRate) -> Self {
        Self {
            success: true,
            bank_buy_rate: resolved.quote.buy_rate,
            bank_sell_rate: resolved.quote.sell_rate,
            base_rate: resolved.base_rate,
            paypal_rate: resolved.derived_rate,
            source: resolved.quote.source,
            timestamp: format_timestamp(resolved.quote.observed_at),
            note: resolved.note,
        }
    }
}

fn format_timestamp(observed_at: DateTime<Utc>) -> String {
    observed_at.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_format() {
        let at = Utc.with_ymd_and_hms(2025, 6, 16, 20, 22, 45).unwrap();
        assert_eq!(format_timestamp(at), "2025-06-16 20:22");
    }
}
