use super::dom::{Document, ElementId, Selector};

pub const PRICING_CONTAINER_ID: &str = "pricing-container";
pub const HEADER_ID: &str = "header";
pub const BACK_TO_TOP_ID: &str = "back-to-top";
pub const MOBILE_MENU_BUTTON: &str = ".mobile-menu-btn";
pub const NAV_LIST: &str = "nav ul";
pub const ANCHOR_LINKS: &str = "a[href^=\"#\"]";
pub const FORMS: &str = "form";
pub const SOCIAL_LINKS: &str = ".social-icons a";
pub const LAZY_ELEMENTS: &str = ".lazy-load";

/// Whether a behavior's target elements exist on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presence<T> {
    Present(T),
    Absent,
}

impl<T> Presence<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Presence::Present(_))
    }

    pub fn as_ref(&self) -> Presence<&T> {
        match self {
            Presence::Present(v) => Presence::Present(v),
            Presence::Absent => Presence::Absent,
        }
    }

    pub fn present(self) -> Option<T> {
        match self {
            Presence::Present(v) => Some(v),
            Presence::Absent => None,
        }
    }
}

impl<T> From<Option<T>> for Presence<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Presence::Present(v),
            None => Presence::Absent,
        }
    }
}

impl Presence<Vec<ElementId>> {
    /// A non-empty element list, or `Absent`.
    pub fn from_list(ids: Vec<ElementId>) -> Self {
        if ids.is_empty() {
            Presence::Absent
        } else {
            Presence::Present(ids)
        }
    }
}

/// Menu button and the nav list it opens; only usable as a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MobileNav {
    pub button: ElementId,
    pub nav: ElementId,
}

/// Result of probing the page for every optional element before wiring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capabilities {
    pub pricing_container: Presence<ElementId>,
    pub header: Presence<ElementId>,
    pub mobile_nav: Presence<MobileNav>,
    pub back_to_top: Presence<ElementId>,
    pub anchors: Presence<Vec<ElementId>>,
    pub forms: Presence<Vec<ElementId>>,
    pub social_links: Presence<Vec<ElementId>>,
    pub lazy_elements: Presence<Vec<ElementId>>,
}

impl Capabilities {
    pub fn detect(doc: &Document) -> Self {
        let button = doc.query(&Selector::parse(MOBILE_MENU_BUTTON));
        let nav = doc.query(&Selector::parse(NAV_LIST));
        Self {
            pricing_container: doc.by_id(PRICING_CONTAINER_ID).into(),
            header: doc.by_id(HEADER_ID).into(),
            mobile_nav: button.zip(nav).map(|(button, nav)| MobileNav { button, nav }).into(),
            back_to_top: doc.by_id(BACK_TO_TOP_ID).into(),
            anchors: Presence::from_list(doc.query_all(&Selector::parse(ANCHOR_LINKS))),
            forms: Presence::from_list(doc.query_all(&Selector::parse(FORMS))),
            social_links: Presence::from_list(doc.query_all(&Selector::parse(SOCIAL_LINKS))),
            lazy_elements: Presence::from_list(doc.query_all(&Selector::parse(LAZY_ELEMENTS))),
        }
    }
}
