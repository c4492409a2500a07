use std::time::Duration;

use axum::{body::Body, http::Request};
use ratebridge_rates::StaticRates;
use ratebridge_server::{
    api::app_router,
    build_state,
    config::{Config, RateSourceKind},
};
use rust_decimal_macros::dec;
use tower::ServiceExt;

fn test_config() -> Config {
    Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        rate_source: RateSourceKind::Fixed,
        bank_rate_url: "http://127.0.0.1:9/xrt".to_string(),
        fetch_timeout: Duration::from_millis(200),
        markup: dec!(1.10),
        fallback_rates: StaticRates {
            buy_rate: dec!(29.425),
            sell_rate: dec!(29.575),
        },
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(30),
    }
}

#[tokio::test]
async fn healthz_works() {
    let config = test_config();
    let state = build_state(&config);
    let app = app_router(state, &config);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn readyz_works() {
    let config = test_config();
    let state = build_state(&config);
    let app = app_router(state, &config);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/readyz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}
