use askama::Template;
use axum::{extract::State, response::Response};

use crate::models::AppState;
use crate::pricing::render_outcome;
use crate::templates::IndexTemplate;

use super::helpers::html_or_500;

/// Landing page with the pricing container already filled in.
pub async fn index_get(State(state): State<AppState>) -> Response {
    let outcome = state.pricing.load().await;
    let plan_count = outcome.plans().len();
    let rendered = render_outcome(&outcome, state.variant).and_then(|pricing_html| {
        IndexTemplate {
            title: &state.site_title,
            pricing_html: &pricing_html,
            plan_count,
        }
        .render()
    });
    html_or_500(rendered)
}

/// Only the content of `#pricing-container`: cards, the empty message or
/// the error message.
pub async fn pricing_fragment_get(State(state): State<AppState>) -> Response {
    let outcome = state.pricing.load().await;
    html_or_500(render_outcome(&outcome, state.variant))
}
