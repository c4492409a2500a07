use std::sync::Arc;

use ratebridge_rates::{BankOfTaiwanSource, FixedRateSource, RateResolver, RateSource};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{Config, RateSourceKind};

pub struct AppState {
    pub resolver: Arc<RateResolver>,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub fn build_state(config: &Config) -> Arc<AppState> {
    let source: Arc<dyn RateSource> = match config.rate_source {
        RateSourceKind::Live => Arc::new(BankOfTaiwanSource::new(
            config.bank_rate_url.clone(),
            config.fetch_timeout,
        )),
        RateSourceKind::Fixed => Arc::new(FixedRateSource::new(config.fallback_rates.clone())),
    };
    tracing::info!("Rate source in use: {}", source.id());

    let resolver = Arc::new(RateResolver::new(
        source,
        config.fallback_rates.clone(),
        config.markup,
    ));

    Arc::new(AppState { resolver })
}
