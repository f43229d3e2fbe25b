use super::dom::{Document, Element, Viewport};

/// Document model of the landing page served by `templates/index.html`,
/// with approximate vertical boxes for each section.
pub fn landing_page() -> Document {
    let mut doc = Document::new(Viewport::default());

    let header = doc.append(None, Element::new("header").with_id("header").at(0.0, 80.0));
    doc.append(
        Some(header),
        Element::new("button")
            .with_class("mobile-menu-btn")
            .with_attr("aria-expanded", "false")
            .at(20.0, 40.0),
    );
    let nav = doc.append(Some(header), Element::new("nav").at(0.0, 80.0));
    let list = doc.append(Some(nav), Element::new("ul").at(0.0, 80.0));
    for target in ["#features", "#pricing", "#order"] {
        let item = doc.append(Some(list), Element::new("li"));
        doc.append(Some(item), Element::new("a").with_attr("href", target));
    }

    let features = doc.append(None, Element::new("section").with_id("features").at(80.0, 600.0));
    doc.append(
        Some(features),
        Element::new("div").with_class("feature-card lazy-load").at(200.0, 300.0),
    );

    let pricing = doc.append(None, Element::new("section").with_id("pricing").at(680.0, 1400.0));
    doc.append(
        Some(pricing),
        Element::new("div")
            .with_id("pricing-container")
            .with_class("pricing-grid")
            .at(760.0, 1300.0),
    );

    let order = doc.append(None, Element::new("section").with_id("order").at(2080.0, 500.0));
    doc.append(Some(order), Element::new("form").with_id("order-form").at(2140.0, 300.0));

    let footer = doc.append(None, Element::new("footer").at(2580.0, 200.0));
    let social = doc.append(Some(footer), Element::new("div").with_class("social-icons"));
    doc.append(Some(social), Element::new("a").with_attr("href", "https://telegram.me/grandvps"));
    doc.append(Some(social), Element::new("a").with_attr("href", "https://instagram.com/grandvps"));

    doc.append(None, Element::new("button").with_id("back-to-top").at(2700.0, 40.0));
    doc
}
