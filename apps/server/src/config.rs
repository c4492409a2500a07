use std::{net::SocketAddr, time::Duration};

use ratebridge_rates::source::bank_of_taiwan::DEFAULT_BOARD_URL;
use ratebridge_rates::StaticRates;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Which rate source strategy serves requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RateSourceKind {
    /// Fetch the bank's published rate board per request.
    Live,
    /// Serve the configured static rates without network access.
    Fixed,
}

pub struct Config {
    pub listen_addr: SocketAddr,
    pub rate_source: RateSourceKind,
    pub bank_rate_url: String,
    pub fetch_timeout: Duration,
    pub markup: Decimal,
    pub fallback_rates: StaticRates,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("RB_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .expect("Invalid RB_LISTEN_ADDR");
        let rate_source = match std::env::var("RB_RATE_SOURCE")
            .map(|s| s.to_lowercase())
            .as_deref()
        {
            Ok("fixed") => RateSourceKind::Fixed,
            _ => RateSourceKind::Live,
        };
        let bank_rate_url =
            std::env::var("RB_BANK_RATE_URL").unwrap_or_else(|_| DEFAULT_BOARD_URL.to_string());
        let fetch_timeout_ms: u64 = std::env::var("RB_FETCH_TIMEOUT_MS")
            .unwrap_or_else(|_| "10000".into())
            .parse()
            .unwrap_or(10000);
        let markup = decimal_var("RB_MARKUP", dec!(1.10));
        let fallback_rates = StaticRates {
            buy_rate: decimal_var("RB_FALLBACK_BUY_RATE", dec!(29.425)),
            sell_rate: decimal_var("RB_FALLBACK_SELL_RATE", dec!(29.575)),
        };
        let cors_allow = std::env::var("RB_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("RB_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        Self {
            listen_addr,
            rate_source,
            bank_rate_url,
            fetch_timeout: Duration::from_millis(fetch_timeout_ms),
            markup,
            fallback_rates,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
        }
    }
}

fn decimal_var(key: &str, default: Decimal) -> Decimal {
    std::env::var(key)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default)
}
