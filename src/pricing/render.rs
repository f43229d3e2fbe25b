use askama::Template;
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::templates::{PricingCardsTemplate, PricingMessageTemplate, ProviderCardsTemplate};

use super::format::{format_toman, plain_number};
use super::loader::PricingOutcome;
use super::plan::{PricingPlan, Traffic, UNLIMITED_TRAFFIC};

pub const LOADING_MESSAGE: &str = "در حال بارگذاری تعرفه‌ها...";
pub const EMPTY_MESSAGE: &str = "هیچ پلنی یافت نشد 😕";
pub const ERROR_MESSAGE: &str = "خطا در بارگذاری تعرفه‌ها 😔";

const LOADING_COLOR: &str = "#00ffd0";
const ALERT_COLOR: &str = "#ff3c3c";

/// Card markup variant. `Classic` shows the monthly price only; `Provider`
/// adds the provider logo and leads with the daily price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardVariant {
    #[default]
    Classic,
    Provider,
}

impl FromStr for CardVariant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "classic" => Ok(CardVariant::Classic),
            "provider" => Ok(CardVariant::Provider),
            other => Err(ConfigError::InvalidVariant(other.to_string())),
        }
    }
}

impl fmt::Display for CardVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardVariant::Classic => f.write_str("classic"),
            CardVariant::Provider => f.write_str("provider"),
        }
    }
}

/// Display-ready view of one plan.
#[derive(Debug, Clone)]
pub struct PlanCard {
    pub name: String,
    pub popular: bool,
    pub monthly_price: String,
    pub daily_price: Option<String>,
    pub logo: Option<String>,
    pub provider: String,
    pub cpu: String,
    pub ram_gb: String,
    pub ssd_gb: String,
    pub traffic: String,
}

impl PlanCard {
    pub fn class_list(&self) -> &'static str {
        if self.popular {
            "pricing-card popular lazy-load"
        } else {
            "pricing-card lazy-load"
        }
    }
}

impl From<&PricingPlan> for PlanCard {
    fn from(plan: &PricingPlan) -> Self {
        let traffic = match &plan.traffic_gb {
            Traffic::Unlimited => UNLIMITED_TRAFFIC.to_string(),
            Traffic::Gigabytes(gb) => format!("{} گیگابایت", plain_number(*gb)),
            Traffic::Other(raw) => format!("{} گیگابایت", raw),
        };
        PlanCard {
            name: plan.name.clone(),
            popular: plan.popular,
            monthly_price: format_toman(plan.monthly_price_toman),
            daily_price: plan.daily_price_toman().map(format_toman),
            logo: plan.provider_logo(),
            provider: plan.provider.clone().unwrap_or_default(),
            cpu: plain_number(plan.cpu),
            ram_gb: plain_number(plan.ram_gb),
            ssd_gb: plain_number(plan.ssd_gb),
            traffic,
        }
    }
}

pub fn plan_cards(plans: &[PricingPlan]) -> Vec<PlanCard> {
    plans.iter().map(PlanCard::from).collect()
}

/// Container content while the fetch is pending.
pub fn render_loading() -> Result<String, askama::Error> {
    PricingMessageTemplate {
        message: LOADING_MESSAGE,
        color: LOADING_COLOR,
    }
    .render()
}

/// Container content for a finished load.
pub fn render_outcome(outcome: &PricingOutcome, variant: CardVariant) -> Result<String, askama::Error> {
    match outcome {
        PricingOutcome::Loaded(plans) => render_cards(&plan_cards(plans), variant),
        PricingOutcome::Empty => PricingMessageTemplate {
            message: EMPTY_MESSAGE,
            color: ALERT_COLOR,
        }
        .render(),
        PricingOutcome::Failed(_) => PricingMessageTemplate {
            message: ERROR_MESSAGE,
            color: ALERT_COLOR,
        }
        .render(),
    }
}

pub fn render_cards(cards: &[PlanCard], variant: CardVariant) -> Result<String, askama::Error> {
    match variant {
        CardVariant::Classic => PricingCardsTemplate { cards }.render(),
        CardVariant::Provider => ProviderCardsTemplate { cards }.render(),
    }
}
