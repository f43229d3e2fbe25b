pub mod index_template;
pub use index_template::IndexTemplate;

// Pricing container fragments
pub mod pricing_cards_template;
pub use pricing_cards_template::PricingCardsTemplate;
pub mod provider_cards_template;
pub use provider_cards_template::ProviderCardsTemplate;
pub mod pricing_message_template;
pub use pricing_message_template::PricingMessageTemplate;
