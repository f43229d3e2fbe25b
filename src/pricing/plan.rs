use serde::{Deserialize, Deserializer, Serialize};

/// Sentinel the backend sends in `traffic_gb` for plans without a traffic cap.
pub const UNLIMITED_TRAFFIC: &str = "نامحدود";

/// One hosting offer as sent by the pricing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingPlan {
    pub name: String,
    pub monthly_price_toman: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_price_toman: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    pub cpu: f64,
    pub ram_gb: f64,
    pub ssd_gb: f64,
    pub traffic_gb: Traffic,
    #[serde(default, deserialize_with = "null_as_false")]
    pub popular: bool,
}

/// `popular` is only ever read for truthiness, so `null` means not popular.
fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_default())
}

impl PricingPlan {
    /// Daily price derived from the hourly rate, when the backend sends one.
    pub fn daily_price_toman(&self) -> Option<f64> {
        self.hourly_price_toman.map(|h| h * 24.0)
    }

    /// Logo path for the plan's provider (`/static/images/<provider>.png`).
    pub fn provider_logo(&self) -> Option<String> {
        self.provider
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(|p| format!("/static/images/{}.png", p.to_lowercase()))
    }
}

/// Monthly traffic allowance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawTraffic", into = "RawTraffic")]
pub enum Traffic {
    Gigabytes(f64),
    Unlimited,
    /// Any other text the backend sends, numeric strings included; shown
    /// verbatim with the GB unit.
    Other(String),
}

impl Traffic {
    pub fn is_unlimited(&self) -> bool {
        matches!(self, Traffic::Unlimited)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawTraffic {
    Number(f64),
    Text(String),
}

impl From<RawTraffic> for Traffic {
    fn from(raw: RawTraffic) -> Self {
        match raw {
            RawTraffic::Number(n) => Traffic::Gigabytes(n),
            RawTraffic::Text(s) if s == UNLIMITED_TRAFFIC || s.eq_ignore_ascii_case("unlimited") => {
                Traffic::Unlimited
            }
            RawTraffic::Text(s) => Traffic::Other(s),
        }
    }
}

impl From<Traffic> for RawTraffic {
    fn from(t: Traffic) -> Self {
        match t {
            Traffic::Gigabytes(n) => RawTraffic::Number(n),
            Traffic::Unlimited => RawTraffic::Text(UNLIMITED_TRAFFIC.to_string()),
            Traffic::Other(s) => RawTraffic::Text(s),
        }
    }
}
