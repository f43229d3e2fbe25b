use super::dom::{Document, ElementId, Selector};
use super::lazy::IntersectionEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Scroll,
    Click,
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Behavior {
    HeaderState,
    BackToTopVisibility,
    BackToTopAction,
    MobileNavToggle,
    AnchorScroll,
    FormSubmit,
    SocialLink,
    PlanPurchase,
    LazyReveal,
}

/// Synthetic UI event, as the host would deliver it.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Scroll { y: f64 },
    Click { target: ElementId },
    Submit { form: ElementId },
    Intersection(Vec<IntersectionEntry>),
}

impl UiEvent {
    pub fn kind(&self) -> Option<EventKind> {
        match self {
            UiEvent::Scroll { .. } => Some(EventKind::Scroll),
            UiEvent::Click { .. } => Some(EventKind::Click),
            UiEvent::Submit { .. } => Some(EventKind::Submit),
            UiEvent::Intersection(_) => None,
        }
    }

    pub fn target(&self) -> Option<ElementId> {
        match self {
            UiEvent::Click { target } => Some(*target),
            UiEvent::Submit { form } => Some(*form),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub kind: EventKind,
    pub selector: Selector,
    pub behavior: Behavior,
}

/// `(event kind, target selector) → behavior` routes, in registration order.
#[derive(Debug, Clone, Default)]
pub struct DispatchTable {
    routes: Vec<Route>,
}

impl DispatchTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, kind: EventKind, selector: Selector, behavior: Behavior) {
        self.routes.push(Route { kind, selector, behavior });
    }

    /// Behaviors whose route matches the event kind, in registration order,
    /// each paired with the element its selector matched. Element events
    /// bubble: a route matches when the target or one of its ancestors
    /// matches the selector.
    pub fn matching(
        &self,
        doc: &Document,
        kind: EventKind,
        target: Option<ElementId>,
    ) -> Vec<(Behavior, Option<ElementId>)> {
        self.routes
            .iter()
            .filter(|r| r.kind == kind)
            .filter_map(|r| match target {
                None => r.selector.matches(doc, None).then_some((r.behavior, None)),
                Some(id) => r.selector.closest(doc, id).map(|hit| (r.behavior, Some(hit))),
            })
            .collect()
    }

    pub fn has_behavior(&self, behavior: Behavior) -> bool {
        self.routes.iter().any(|r| r.behavior == behavior)
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// What a dispatched event did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DispatchOutcome {
    pub handled: Vec<Behavior>,
    pub default_prevented: bool,
    pub revealed: Vec<ElementId>,
}
