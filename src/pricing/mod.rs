pub mod format;
pub mod loader;
pub mod plan;
pub mod render;

pub use format::{format_toman, plain_number};
pub use loader::{PricingClient, PricingOutcome};
pub use plan::{PricingPlan, Traffic, UNLIMITED_TRAFFIC};
pub use render::{render_loading, render_outcome, CardVariant, PlanCard};
