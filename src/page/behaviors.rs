//! Chrome behaviors. Each handler receives only the elements it touches.

use crate::analytics::{self, AnalyticsSink};
use crate::config::{BACK_TO_TOP_THRESHOLD, HEADER_OFFSET, HEADER_SCROLL_THRESHOLD};

use super::dom::{Element, ScrollBehavior, Viewport};

pub const SCROLLED_CLASS: &str = "scrolled";
pub const NAV_OPEN_CLASS: &str = "active";
pub const SHOW_CLASS: &str = "show";
pub const ARIA_EXPANDED: &str = "aria-expanded";

pub fn update_header(header: &mut Element, scroll_y: f64) {
    header.set_class(SCROLLED_CLASS, scroll_y > HEADER_SCROLL_THRESHOLD);
}

pub fn update_back_to_top(button: &mut Element, scroll_y: f64) {
    button.set_class(SHOW_CLASS, scroll_y > BACK_TO_TOP_THRESHOLD);
}

pub fn back_to_top(viewport: &mut Viewport) {
    viewport.scroll_to(0.0, ScrollBehavior::Smooth);
}

/// Toggle the mobile nav and return whether it is open afterwards.
pub fn toggle_mobile_nav(button: &mut Element, nav: &mut Element) -> bool {
    let open = nav.toggle_class(NAV_OPEN_CLASS);
    button.set_attr(ARIA_EXPANDED, if open { "true" } else { "false" });
    open
}

/// Close the nav if it is open. Returns `true` if it was open.
pub fn close_mobile_nav(button: &mut Element, nav: &mut Element) -> bool {
    if nav.remove_class(NAV_OPEN_CLASS) {
        button.set_attr(ARIA_EXPANDED, "false");
        true
    } else {
        false
    }
}

pub fn is_nav_open(nav: &Element) -> bool {
    nav.has_class(NAV_OPEN_CLASS)
}

/// Smooth-scroll to an anchor target, leaving room for the fixed header.
pub fn scroll_to_anchor(viewport: &mut Viewport, target_top: f64, href: &str, sink: &dyn AnalyticsSink) {
    viewport.scroll_to(target_top - HEADER_OFFSET, ScrollBehavior::Smooth);
    sink.track(&analytics::anchor_event(href));
}

pub fn track_form_submit(form: &Element, sink: &dyn AnalyticsSink) {
    sink.track(&analytics::form_submit_event(form.dom_id()));
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialPlatform {
    Telegram,
    Instagram,
    Twitter,
    Linkedin,
    Unknown,
}

impl SocialPlatform {
    pub fn as_str(&self) -> &'static str {
        match self {
            SocialPlatform::Telegram => "telegram",
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::Linkedin => "linkedin",
            SocialPlatform::Unknown => "unknown",
        }
    }
}

/// Classify a link by substring, first match wins.
///
/// ```
/// use gvp::page::behaviors::{classify_social, SocialPlatform};
///
/// assert_eq!(classify_social("https://telegram.me/grandvps"), SocialPlatform::Telegram);
/// assert_eq!(classify_social("https://example.com"), SocialPlatform::Unknown);
/// ```
pub fn classify_social(href: &str) -> SocialPlatform {
    const KNOWN: [(&str, SocialPlatform); 4] = [
        ("telegram", SocialPlatform::Telegram),
        ("instagram", SocialPlatform::Instagram),
        ("twitter", SocialPlatform::Twitter),
        ("linkedin", SocialPlatform::Linkedin),
    ];
    KNOWN
        .iter()
        .find(|(needle, _)| href.contains(needle))
        .map(|(_, platform)| *platform)
        .unwrap_or(SocialPlatform::Unknown)
}

pub fn track_social_click(link: &Element, sink: &dyn AnalyticsSink) -> SocialPlatform {
    let platform = classify_social(link.attr("href").unwrap_or_default());
    sink.track(&analytics::social_event(platform.as_str()));
    platform
}

pub fn track_plan_purchase(plan_name: &str, sink: &dyn AnalyticsSink) {
    sink.track(&analytics::plan_purchase_event(plan_name));
}
