use crate::pricing::{CardVariant, PricingClient};

#[derive(Clone)]
pub struct AppState {
    pub pricing: PricingClient,
    pub variant: CardVariant,
    pub site_title: String,
}

impl AppState {
    pub fn new(pricing: PricingClient, variant: CardVariant) -> Self {
        Self {
            pricing,
            variant,
            site_title: "GrandVPS".to_string(),
        }
    }
}
