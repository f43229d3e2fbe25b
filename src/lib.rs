pub mod analytics;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod page;
pub mod pricing;
pub mod routes;
pub mod templates;
