use askama::Template;

/// Landing page skeleton. `pricing_html` is the already rendered content of
/// `#pricing-container`.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub title: &'a str,
    pub pricing_html: &'a str,
    pub plan_count: usize,
}
