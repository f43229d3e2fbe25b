use askama::Template;
use crate::pricing::PlanCard;

#[derive(Template)]
#[template(path = "pricing_cards.html")]
pub struct PricingCardsTemplate<'a> {
    pub cards: &'a [PlanCard],
}
