use axum::http::header::CACHE_CONTROL;
use axum::http::HeaderValue;
use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::models::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index_get))
        .route("/pricing/cards", get(handlers::pricing_fragment_get))
        // Static assets (styles, provider logos) with a long cache lifetime
        .nest_service(
            "/static",
            ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::if_not_present(
                    CACHE_CONTROL,
                    HeaderValue::from_static("public, max-age=31536000, immutable"),
                ))
                .service(ServeDir::new("static")),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
