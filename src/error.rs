/// Error types for the pricing page
use thiserror::Error;

/// Failures while fetching the pricing list. All of them end the load for
/// the current page; nothing is retried.
#[derive(Debug, Error)]
pub enum PricingError {
    /// Transport-level failure (DNS, connect, reset, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status
    #[error("Pricing endpoint returned status {0}")]
    Status(u16),

    /// The body was not a JSON array of plans
    #[error("Failed to parse pricing response: {0}")]
    Parse(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown card variant '{0}' (expected 'classic' or 'provider')")]
    InvalidVariant(String),

    #[error("Invalid host/port: {0}")]
    InvalidAddress(String),
}
