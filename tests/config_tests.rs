use gvp::config;
use gvp::error::ConfigError;
use gvp::pricing::CardVariant;
use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;

// Tests below mutate process environment; run them one at a time.
static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

#[test]
fn test_sanitize_base_url_removes_trailing_slash() {
    assert_eq!(
        config::sanitize_base_url("https://grandvps.ir/"),
        "https://grandvps.ir"
    );
}

#[test]
fn test_sanitize_base_url_multiple_trailing_slashes() {
    assert_eq!(
        config::sanitize_base_url("https://grandvps.ir///"),
        "https://grandvps.ir"
    );
}

#[test]
fn test_sanitize_base_url_with_whitespace() {
    assert_eq!(
        config::sanitize_base_url("  https://grandvps.ir/  "),
        "https://grandvps.ir"
    );
}

#[test]
fn test_sanitize_base_url_empty_string() {
    assert_eq!(config::sanitize_base_url("   "), config::DEFAULT_PRICING_API_BASE_URL);
}

#[test]
fn test_pricing_endpoint_appends_fixed_path() {
    assert_eq!(
        config::pricing_endpoint("https://grandvps.ir/"),
        "https://grandvps.ir/get_pricing/"
    );
}

#[test]
fn test_get_pricing_api_base_url_from_env() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    env::set_var("PRICING_API_BASE_URL", "https://grandvps.ir/");

    assert_eq!(config::get_pricing_api_base_url(), "https://grandvps.ir");

    env::remove_var("PRICING_API_BASE_URL");
    assert_eq!(config::get_pricing_api_base_url(), config::DEFAULT_PRICING_API_BASE_URL);
}

#[test]
fn test_card_variant_from_env() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    env::remove_var("PRICING_CARD_VARIANT");
    assert_eq!(config::get_card_variant(), Ok(CardVariant::Classic));

    env::set_var("PRICING_CARD_VARIANT", "Provider");
    assert_eq!(config::get_card_variant(), Ok(CardVariant::Provider));

    env::set_var("PRICING_CARD_VARIANT", "fancy");
    assert_eq!(
        config::get_card_variant(),
        Err(ConfigError::InvalidVariant("fancy".to_string()))
    );

    env::remove_var("PRICING_CARD_VARIANT");
}

#[test]
fn test_port_from_env() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    env::remove_var("PORT");
    assert_eq!(config::get_port(), Ok(config::DEFAULT_PORT));

    env::set_var("PORT", "9090");
    assert_eq!(config::get_port(), Ok(9090));

    env::set_var("PORT", "not-a-port");
    assert!(config::get_port().is_err());

    env::remove_var("PORT");
}
