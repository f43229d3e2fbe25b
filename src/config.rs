use std::env;
use std::path::Path;

use crate::error::ConfigError;
use crate::pricing::CardVariant;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_PRICING_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_CARD_VARIANT: &str = "classic";

/// Path of the pricing endpoint, relative to the API base URL.
pub const PRICING_PATH: &str = "/get_pricing/";

/// Scroll offset past which the header gets its `scrolled` state.
pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;
/// Scroll offset past which the back-to-top button is shown.
pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;
/// Height of the fixed header, subtracted from anchor scroll targets.
pub const HEADER_OFFSET: f64 = 80.0;
/// Look-ahead below the viewport for lazy reveal.
pub const LAZY_ROOT_MARGIN_BOTTOM: f64 = 100.0;

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_pricing_api_base_url() -> String {
    sanitize_base_url(&env::var("PRICING_API_BASE_URL").unwrap_or_default())
}

pub fn get_card_variant() -> Result<CardVariant, ConfigError> {
    let raw = env::var("PRICING_CARD_VARIANT").unwrap_or_else(|_| DEFAULT_CARD_VARIANT.to_string());
    raw.parse()
}

pub fn get_host() -> String {
    env::var("HOST")
        .ok()
        .map(|h| h.trim().to_string())
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| DEFAULT_HOST.to_string())
}

pub fn get_port() -> Result<u16, ConfigError> {
    match env::var("PORT") {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidAddress(format!("PORT={}", raw))),
        _ => Ok(DEFAULT_PORT),
    }
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_PRICING_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn pricing_endpoint(base_url: &str) -> String {
    format!("{}{}", sanitize_base_url(base_url), PRICING_PATH)
}
