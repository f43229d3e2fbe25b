use askama::Template;
use crate::pricing::PlanCard;

#[derive(Template)]
#[template(path = "provider_cards.html")]
pub struct ProviderCardsTemplate<'a> {
    pub cards: &'a [PlanCard],
}
