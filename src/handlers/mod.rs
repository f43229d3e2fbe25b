pub mod helpers;
pub mod pages;

pub use pages::{index_get, pricing_fragment_get};
