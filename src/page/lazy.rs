use std::collections::BTreeSet;

use crate::config::LAZY_ROOT_MARGIN_BOTTOM;

use super::dom::{Document, Element, ElementId};

pub const VISIBLE_CLASS: &str = "visible";
pub const DEFERRED_SRC: &str = "data-src";

/// One intersection callback entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntersectionEntry {
    pub target: ElementId,
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    pub fn intersecting(target: ElementId) -> Self {
        Self { target, is_intersecting: true }
    }
}

/// One-shot reveal observer: an element is revealed on its first
/// intersection and never observed again.
#[derive(Debug, Clone)]
pub struct LazyObserver {
    margin_bottom: f64,
    observed: BTreeSet<ElementId>,
}

impl Default for LazyObserver {
    fn default() -> Self {
        Self::new(LAZY_ROOT_MARGIN_BOTTOM)
    }
}

impl LazyObserver {
    pub fn new(margin_bottom: f64) -> Self {
        Self {
            margin_bottom,
            observed: BTreeSet::new(),
        }
    }

    pub fn observe(&mut self, id: ElementId) {
        self.observed.insert(id);
    }

    pub fn unobserve(&mut self, id: ElementId) {
        self.observed.remove(&id);
    }

    pub fn is_observed(&self, id: ElementId) -> bool {
        self.observed.contains(&id)
    }

    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }

    /// Entries for every observed element, computed from the element boxes
    /// and the viewport extended downwards by the root margin.
    pub fn entries_for(&self, doc: &Document) -> Vec<IntersectionEntry> {
        let view_top = doc.viewport.scroll_y;
        let view_bottom = view_top + doc.viewport.height + self.margin_bottom;
        self.observed
            .iter()
            .filter_map(|id| doc.get(*id).map(|e| (*id, e)))
            .filter(|(_, e)| e.is_attached())
            .map(|(id, e)| {
                let top = e.offset_top();
                let bottom = top + e.height();
                IntersectionEntry {
                    target: id,
                    is_intersecting: top <= view_bottom && bottom >= view_top,
                }
            })
            .collect()
    }

    /// Intersection callback. Returns the elements revealed by this call.
    pub fn on_intersection(&mut self, doc: &mut Document, entries: &[IntersectionEntry]) -> Vec<ElementId> {
        let mut revealed = Vec::new();
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            if !self.observed.remove(&entry.target) {
                continue;
            }
            if let Some(element) = doc.get_mut(entry.target) {
                reveal(element);
                revealed.push(entry.target);
            }
        }
        if !revealed.is_empty() {
            tracing::debug!(count = revealed.len(), "Revealed lazy elements");
        }
        revealed
    }
}

/// Mark an element visible, swapping in a deferred image source first.
pub fn reveal(element: &mut Element) {
    if element.tag() == "img" {
        if let Some(src) = element.remove_attr(DEFERRED_SRC) {
            element.set_attr("src", &src);
        }
    }
    element.add_class(VISIBLE_CLASS);
}
