use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// A single analytics event: a name plus a loose parameter mapping,
/// e.g. `click { event_category: "social", event_label: "social_link_telegram" }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsEvent {
    pub name: String,
    pub params: BTreeMap<String, String>,
}

impl AnalyticsEvent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: BTreeMap::new(),
        }
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn category(&self) -> Option<&str> {
        self.params.get("event_category").map(String::as_str)
    }

    pub fn label(&self) -> Option<&str> {
        self.params.get("event_label").map(String::as_str)
    }

    pub fn value(&self) -> Option<&str> {
        self.params.get("value").map(String::as_str)
    }
}

/// External event-logging hook. Implementations must not fail; a sink that
/// cannot deliver simply drops the event.
pub trait AnalyticsSink: Send + Sync {
    fn track(&self, event: &AnalyticsEvent);
}

/// Stand-in used when no analytics provider is available.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl AnalyticsSink for NoopSink {
    fn track(&self, _event: &AnalyticsEvent) {}
}

/// Writes every event as a structured log record.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl AnalyticsSink for TracingSink {
    fn track(&self, event: &AnalyticsEvent) {
        tracing::info!(
            target: "analytics",
            event = %event.name,
            category = event.category().unwrap_or_default(),
            label = event.label().unwrap_or_default(),
            value = event.value().unwrap_or_default(),
            "analytics event"
        );
    }
}

/// Keeps events in memory, in emission order.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<AnalyticsEvent>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.events.lock().map(|e| e.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AnalyticsSink for RecordingSink {
    fn track(&self, event: &AnalyticsEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

/// Event emitted when a plan's call-to-action is activated.
pub fn plan_purchase_event(plan_name: &str) -> AnalyticsEvent {
    AnalyticsEvent::new("click")
        .param("event_category", "engagement")
        .param("event_label", "pricing_plan_purchase")
        .param("value", plan_name)
}

/// Event emitted for an in-page anchor navigation.
pub fn anchor_event(target: &str) -> AnalyticsEvent {
    AnalyticsEvent::new("click")
        .param("event_category", "navigation")
        .param("event_label", "anchor_link")
        .param("value", target)
}

pub fn form_submit_event(form_id: Option<&str>) -> AnalyticsEvent {
    let value = match form_id {
        Some(id) if !id.is_empty() => id,
        _ => "unknown_form",
    };
    AnalyticsEvent::new("submit")
        .param("event_category", "engagement")
        .param("event_label", "form_submission")
        .param("value", value)
}

pub fn social_event(platform: &str) -> AnalyticsEvent {
    AnalyticsEvent::new("click")
        .param("event_category", "social")
        .param("event_label", format!("social_link_{}", platform))
}
