use askama::Template;

#[derive(Template)]
#[template(path = "pricing_message.html")]
pub struct PricingMessageTemplate<'a> {
    pub message: &'a str,
    pub color: &'a str,
}
