use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

/// Turn a rendered template into a response, logging template failures.
pub fn html_or_500(rendered: Result<String, askama::Error>) -> Response {
    match rendered {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!(%e, "Failed to render template");
            (StatusCode::INTERNAL_SERVER_ERROR, "Template rendering failed").into_response()
        }
    }
}
