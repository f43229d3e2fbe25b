use crate::config;
use crate::error::PricingError;

use super::plan::PricingPlan;

/// Result of the single pricing fetch performed per page load.
#[derive(Debug)]
pub enum PricingOutcome {
    /// Non-empty list, in the order the backend sent it.
    Loaded(Vec<PricingPlan>),
    /// The backend answered successfully with no plans.
    Empty,
    /// Transport, status or parse failure. Terminal for this page load.
    Failed(PricingError),
}

impl PricingOutcome {
    pub fn from_result(result: Result<Vec<PricingPlan>, PricingError>) -> Self {
        match result {
            Ok(plans) if plans.is_empty() => PricingOutcome::Empty,
            Ok(plans) => PricingOutcome::Loaded(plans),
            Err(e) => PricingOutcome::Failed(e),
        }
    }

    pub fn plans(&self) -> &[PricingPlan] {
        match self {
            PricingOutcome::Loaded(plans) => plans,
            _ => &[],
        }
    }
}

/// Client for the backend pricing endpoint.
#[derive(Clone)]
pub struct PricingClient {
    client: reqwest::Client,
    endpoint: String,
}

impl PricingClient {
    pub fn new(client: reqwest::Client, api_base_url: &str) -> Self {
        Self {
            client,
            endpoint: config::pricing_endpoint(api_base_url),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the plan list with one plain GET.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::Network` when the request cannot be sent,
    /// `PricingError::Status` for non-2xx answers and `PricingError::Parse`
    /// when the body is not a JSON array of plans.
    pub async fn fetch_plans(&self) -> Result<Vec<PricingPlan>, PricingError> {
        tracing::debug!(endpoint = %self.endpoint, "Fetching pricing list");
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| PricingError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PricingError::Status(status.as_u16()));
        }

        // A literal `null` body counts as "no plans", not as a parse failure.
        let plans = response.json::<Option<Vec<PricingPlan>>>().await.map_err(|e| {
            if e.is_decode() {
                PricingError::Parse(e.to_string())
            } else {
                PricingError::Network(e.to_string())
            }
        })?;
        Ok(plans.unwrap_or_default())
    }

    /// Fetch and classify. Failures are logged here and carried in the outcome.
    pub async fn load(&self) -> PricingOutcome {
        let outcome = PricingOutcome::from_result(self.fetch_plans().await);
        match &outcome {
            PricingOutcome::Loaded(plans) => {
                tracing::info!(count = plans.len(), "Loaded pricing plans");
            }
            PricingOutcome::Empty => {
                tracing::info!("Pricing endpoint returned no plans");
            }
            PricingOutcome::Failed(e) => {
                tracing::error!(%e, endpoint = %self.endpoint, "Failed to load pricing plans");
            }
        }
        outcome
    }
}
