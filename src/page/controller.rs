use std::sync::Arc;

use crate::analytics::AnalyticsSink;
use crate::pricing::render::{render_loading, render_outcome, CardVariant, PlanCard};
use crate::pricing::{PricingClient, PricingOutcome};

use super::behaviors;
use super::capabilities::{Capabilities, Presence, FORMS, PRICING_CONTAINER_ID, SOCIAL_LINKS};
use super::dispatch::{Behavior, DispatchOutcome, DispatchTable, EventKind, UiEvent};
use super::dom::{Document, Element, ElementId, Selector};
use super::lazy::{LazyObserver, VISIBLE_CLASS};

pub const CARD_HEIGHT: f64 = 420.0;
pub const PLAN_CTA_CLASS: &str = "plan-cta";
pub const PLAN_NAME_ATTR: &str = "data-plan-name";

/// Page-ready sequence plus event routing for one page load.
pub struct PageController {
    doc: Document,
    capabilities: Capabilities,
    table: DispatchTable,
    lazy: LazyObserver,
    sink: Arc<dyn AnalyticsSink>,
    variant: CardVariant,
}

impl PageController {
    pub fn new(doc: Document, sink: Arc<dyn AnalyticsSink>, variant: CardVariant) -> Self {
        let capabilities = Capabilities::detect(&doc);
        Self {
            doc,
            capabilities,
            table: DispatchTable::new(),
            lazy: LazyObserver::default(),
            sink,
            variant,
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    pub fn dispatch_table(&self) -> &DispatchTable {
        &self.table
    }

    pub fn lazy_observer(&self) -> &LazyObserver {
        &self.lazy
    }

    pub fn variant(&self) -> CardVariant {
        self.variant
    }

    /// Content currently shown in `#pricing-container`.
    pub fn pricing_html(&self) -> Option<&str> {
        self.doc
            .by_id(PRICING_CONTAINER_ID)
            .and_then(|id| self.doc.get(id))
            .map(Element::content)
    }

    /// Rendered pricing cards, in plan order.
    pub fn card_ids(&self) -> Vec<ElementId> {
        self.doc.query_all(&Selector::Class("pricing-card".to_string()))
    }

    /// Run the page-ready sequence: fetch and render pricing, wire the
    /// chrome behaviors, then reveal whatever is already in view.
    ///
    /// Returns `None` when the page has no pricing container, in which case
    /// no request is made.
    pub async fn ready(&mut self, client: &PricingClient) -> Result<Option<PricingOutcome>, askama::Error> {
        let outcome = if self.show_loading()? {
            let outcome = client.load().await;
            self.apply_pricing(&outcome)?;
            Some(outcome)
        } else {
            tracing::debug!("No #pricing-container on page; skipping pricing fetch");
            None
        };
        self.wire();
        self.reveal_in_view();
        Ok(outcome)
    }

    /// Put the loading message into the container. Returns `false` when
    /// there is no container.
    pub fn show_loading(&mut self) -> Result<bool, askama::Error> {
        let Some(container) = self.doc.by_id(PRICING_CONTAINER_ID) else {
            return Ok(false);
        };
        let html = render_loading()?;
        self.doc.clear_children(container);
        if let Some(el) = self.doc.get_mut(container) {
            el.set_content(html);
        }
        Ok(true)
    }

    /// Replace the container content with the outcome and build one card
    /// element per plan. Cards are handed to the lazy observer. Returns the
    /// number of cards rendered.
    pub fn apply_pricing(&mut self, outcome: &PricingOutcome) -> Result<usize, askama::Error> {
        let Some(container) = self.doc.by_id(PRICING_CONTAINER_ID) else {
            return Ok(0);
        };
        let html = render_outcome(outcome, self.variant)?;
        self.doc.clear_children(container);
        let container_top = match self.doc.get_mut(container) {
            Some(el) => {
                el.set_content(html);
                el.offset_top()
            }
            None => return Ok(0),
        };

        let plans = outcome.plans();
        for (i, plan) in plans.iter().enumerate() {
            let card_view = PlanCard::from(plan);
            let top = container_top + i as f64 * CARD_HEIGHT;
            let card = self.doc.append(
                Some(container),
                Element::new("div")
                    .with_class(card_view.class_list())
                    .with_attr(PLAN_NAME_ATTR, &plan.name)
                    .with_content(&plan.name)
                    .at(top, CARD_HEIGHT),
            );
            self.doc.append(
                Some(card),
                Element::new("a")
                    .with_class("btn btn-primary")
                    .with_class(PLAN_CTA_CLASS)
                    .with_attr("href", "#order")
                    .with_attr(PLAN_NAME_ATTR, &plan.name)
                    .with_content("خرید پلن")
                    .at(top + CARD_HEIGHT - 60.0, 44.0),
            );
            self.lazy.observe(card);
        }
        Ok(plans.len())
    }

    /// Probe the page and register a route for every behavior whose
    /// elements exist. Safe to call again after the page changes.
    pub fn wire(&mut self) {
        self.capabilities = Capabilities::detect(&self.doc);
        let caps = &self.capabilities;
        let mut table = DispatchTable::new();

        if caps.pricing_container.is_present() {
            table.register(EventKind::Click, Selector::Class(PLAN_CTA_CLASS.to_string()), Behavior::PlanPurchase);
        }
        if caps.header.is_present() {
            table.register(EventKind::Scroll, Selector::Window, Behavior::HeaderState);
        } else {
            tracing::debug!("No #header; header scroll state not wired");
        }
        if let Presence::Present(nav) = &caps.mobile_nav {
            table.register(EventKind::Click, Selector::Element(nav.button), Behavior::MobileNavToggle);
        } else {
            tracing::debug!("Mobile menu button or nav list missing; toggle not wired");
        }
        if let Presence::Present(id) = &caps.back_to_top {
            table.register(EventKind::Scroll, Selector::Window, Behavior::BackToTopVisibility);
            table.register(EventKind::Click, Selector::Element(*id), Behavior::BackToTopAction);
        }
        if caps.anchors.is_present() {
            table.register(EventKind::Click, Selector::HashLink, Behavior::AnchorScroll);
        }
        if caps.forms.is_present() {
            table.register(EventKind::Submit, Selector::parse(FORMS), Behavior::FormSubmit);
        }
        if caps.social_links.is_present() {
            table.register(EventKind::Click, Selector::parse(SOCIAL_LINKS), Behavior::SocialLink);
        }
        if let Presence::Present(ids) = &caps.lazy_elements {
            for id in ids {
                let revealed = self.doc.get(*id).is_some_and(|e| e.has_class(VISIBLE_CLASS));
                if !revealed {
                    self.lazy.observe(*id);
                }
            }
        }
        if self.lazy.observed_count() > 0 {
            table.register(EventKind::Scroll, Selector::Window, Behavior::LazyReveal);
        }

        tracing::debug!(routes = table.len(), "Wired page behaviors");
        self.table = table;
    }

    /// Reveal every observed element that is currently within reach of the
    /// viewport.
    pub fn reveal_in_view(&mut self) -> Vec<ElementId> {
        let entries = self.lazy.entries_for(&self.doc);
        self.lazy.on_intersection(&mut self.doc, &entries)
    }

    pub fn dispatch(&mut self, event: UiEvent) -> DispatchOutcome {
        let mut outcome = DispatchOutcome::default();
        let target = event.target();
        let kind = match event {
            UiEvent::Intersection(entries) => {
                outcome.revealed = self.lazy.on_intersection(&mut self.doc, &entries);
                if !outcome.revealed.is_empty() {
                    outcome.handled.push(Behavior::LazyReveal);
                }
                return outcome;
            }
            UiEvent::Scroll { y } => {
                self.doc.viewport.scroll_y = y;
                EventKind::Scroll
            }
            UiEvent::Click { .. } => EventKind::Click,
            UiEvent::Submit { .. } => EventKind::Submit,
        };
        for (behavior, matched) in self.table.matching(&self.doc, kind, target) {
            self.run(behavior, matched, &mut outcome);
            outcome.handled.push(behavior);
        }
        outcome
    }

    fn run(&mut self, behavior: Behavior, target: Option<ElementId>, outcome: &mut DispatchOutcome) {
        let sink = self.sink.as_ref();
        let scroll_y = self.doc.viewport.scroll_y;
        match behavior {
            Behavior::HeaderState => {
                if let Some(header) = self.capabilities.header.as_ref().present().and_then(|id| self.doc.get_mut(*id)) {
                    behaviors::update_header(header, scroll_y);
                }
            }
            Behavior::BackToTopVisibility => {
                if let Some(button) = self.capabilities.back_to_top.as_ref().present().and_then(|id| self.doc.get_mut(*id)) {
                    behaviors::update_back_to_top(button, scroll_y);
                }
            }
            Behavior::BackToTopAction => behaviors::back_to_top(&mut self.doc.viewport),
            Behavior::MobileNavToggle => {
                if let Presence::Present(nav) = self.capabilities.mobile_nav {
                    if let Some((button, list)) = self.doc.pair_mut(nav.button, nav.nav) {
                        let open = behaviors::toggle_mobile_nav(button, list);
                        tracing::debug!(open, "Toggled mobile nav");
                    }
                }
            }
            Behavior::AnchorScroll => {
                let Some(href) = target.and_then(|t| self.doc.get(t)).and_then(|e| e.attr("href")).map(str::to_string) else {
                    return;
                };
                let Some(anchor_top) = self
                    .doc
                    .by_id(href.trim_start_matches('#'))
                    .and_then(|id| self.doc.get(id))
                    .map(Element::offset_top)
                else {
                    return;
                };
                outcome.default_prevented = true;
                behaviors::scroll_to_anchor(&mut self.doc.viewport, anchor_top, &href, sink);
                if let Presence::Present(nav) = self.capabilities.mobile_nav {
                    if let Some((button, list)) = self.doc.pair_mut(nav.button, nav.nav) {
                        behaviors::close_mobile_nav(button, list);
                    }
                }
            }
            Behavior::FormSubmit => {
                if let Some(form) = target.and_then(|t| self.doc.get(t)) {
                    behaviors::track_form_submit(form, sink);
                }
            }
            Behavior::SocialLink => {
                if let Some(link) = target.and_then(|t| self.doc.get(t)) {
                    behaviors::track_social_click(link, sink);
                }
            }
            Behavior::PlanPurchase => {
                if let Some(name) = target.and_then(|t| self.doc.get(t)).and_then(|e| e.attr(PLAN_NAME_ATTR)) {
                    behaviors::track_plan_purchase(name, sink);
                }
            }
            Behavior::LazyReveal => {
                let entries = self.lazy.entries_for(&self.doc);
                outcome.revealed.extend(self.lazy.on_intersection(&mut self.doc, &entries));
            }
        }
    }
}
