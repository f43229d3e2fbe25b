mod common;

use std::sync::atomic::Ordering;

use axum::http::StatusCode;
use gvp::error::PricingError;
use gvp::pricing::{PricingClient, PricingOutcome, Traffic};

use common::{spawn_backend, DEAD_BACKEND, THREE_PLANS};

#[tokio::test]
async fn test_load_returns_plans_in_order() {
    let (base, hits) = spawn_backend(StatusCode::OK, THREE_PLANS).await;
    let client = PricingClient::new(reqwest::Client::new(), &base);

    let outcome = client.load().await;

    let names: Vec<&str> = outcome.plans().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Basic", "Pro", "Ultra"]);
    assert_eq!(outcome.plans()[1].traffic_gb, Traffic::Unlimited);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_empty_array_is_empty_outcome() {
    let (base, _) = spawn_backend(StatusCode::OK, "[]").await;
    let client = PricingClient::new(reqwest::Client::new(), &base);

    assert!(matches!(client.load().await, PricingOutcome::Empty));
}

#[tokio::test]
async fn test_null_body_is_empty_outcome() {
    let (base, _) = spawn_backend(StatusCode::OK, "null").await;
    let client = PricingClient::new(reqwest::Client::new(), &base);

    assert!(matches!(client.load().await, PricingOutcome::Empty));
}

#[tokio::test]
async fn test_error_status_is_failure() {
    let (base, _) = spawn_backend(StatusCode::INTERNAL_SERVER_ERROR, r#"{"error": "boom"}"#).await;
    let client = PricingClient::new(reqwest::Client::new(), &base);

    match client.fetch_plans().await {
        Err(PricingError::Status(code)) => assert_eq!(code, 500),
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_json_is_parse_failure() {
    let (base, _) = spawn_backend(StatusCode::OK, r#"{"plans": "#).await;
    let client = PricingClient::new(reqwest::Client::new(), &base);

    assert!(matches!(client.fetch_plans().await, Err(PricingError::Parse(_))));
    assert!(matches!(client.load().await, PricingOutcome::Failed(PricingError::Parse(_))));
}

#[tokio::test]
async fn test_unreachable_backend_is_network_failure() {
    let client = PricingClient::new(reqwest::Client::new(), DEAD_BACKEND);

    assert!(matches!(client.load().await, PricingOutcome::Failed(PricingError::Network(_))));
}

#[test]
fn test_endpoint_is_fixed_path_under_base() {
    let client = PricingClient::new(reqwest::Client::new(), "http://backend.local/");
    assert_eq!(client.endpoint(), "http://backend.local/get_pricing/");
}
