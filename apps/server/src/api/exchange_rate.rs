use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use ratebridge_rates::CurrencyPair;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::ExchangeRateResponse,
};

#[derive(serde::Deserialize)]
struct ExchangeRateQuery {
    pair: Option<String>,
}

/// Current bank rates plus the derived provider rate.
///
/// Always answers 200 with usable rates: upstream failures degrade to
/// the configured static pair, flagged via `source` and `note`.
async fn get_exchange_rate(
    State(state): State<Arc<AppState>>,
    Query(q): Query<ExchangeRateQuery>,
) -> ApiResult<Json<ExchangeRateResponse>> {
    let pair = match q.pair {
        Some(raw) => CurrencyPair::parse(&raw)
            .ok_or_else(|| ApiError::BadRequest(format!("Unsupported currency pair: {}", raw)))?,
        None => CurrencyPair::usd_twd(),
    };
    let resolved = state.resolver.resolve(&pair).await;
    Ok(Json(ExchangeRateResponse::from(resolved)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/exchange-rate", get(get_exchange_rate))
}
