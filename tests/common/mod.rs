#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::http::{header::CONTENT_TYPE, StatusCode};
use axum::{routing::get, Router};

use gvp::pricing::{PricingPlan, Traffic};

/// Serve `body` with `status` at `/get_pricing/` on an ephemeral port.
/// Returns the base URL and a counter of requests received.
pub async fn spawn_backend(status: StatusCode, body: &'static str) -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let app = Router::new().route(
        "/get_pricing/",
        get(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                (status, [(CONTENT_TYPE, "application/json")], body)
            }
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}", addr), hits)
}

/// Serve `THREE_PLANS` at `/get_pricing/`, but only after `delay`.
pub async fn spawn_slow_backend(delay: Duration) -> String {
    let app = Router::new().route(
        "/get_pricing/",
        get(move || async move {
            tokio::time::sleep(delay).await;
            (StatusCode::OK, [(CONTENT_TYPE, "application/json")], THREE_PLANS)
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// A base URL nothing listens on.
pub const DEAD_BACKEND: &str = "http://127.0.0.1:1";

pub const THREE_PLANS: &str = r#"[
    {"name": "Basic", "monthly_price_toman": 100000, "cpu": 1, "ram_gb": 1, "ssd_gb": 10, "traffic_gb": 50, "popular": false},
    {"name": "Pro", "monthly_price_toman": 250000, "cpu": 2, "ram_gb": 4, "ssd_gb": 40, "traffic_gb": "نامحدود", "popular": true},
    {"name": "Ultra", "monthly_price_toman": 1200000, "cpu": 8, "ram_gb": 16, "ssd_gb": 160, "traffic_gb": 2000, "popular": false}
]"#;

pub fn plan(name: &str, monthly: f64) -> PricingPlan {
    PricingPlan {
        name: name.to_string(),
        monthly_price_toman: monthly,
        hourly_price_toman: None,
        provider: None,
        cpu: 1.0,
        ram_gb: 1.0,
        ssd_gb: 10.0,
        traffic_gb: Traffic::Gigabytes(50.0),
        popular: false,
    }
}
