pub mod behaviors;
pub mod capabilities;
pub mod controller;
pub mod dispatch;
pub mod dom;
pub mod layout;
pub mod lazy;

pub use capabilities::{Capabilities, MobileNav, Presence};
pub use controller::PageController;
pub use dispatch::{Behavior, DispatchOutcome, DispatchTable, EventKind, UiEvent};
pub use dom::{Document, Element, ElementId, ScrollBehavior, ScrollRequest, Selector, Viewport};
pub use lazy::{IntersectionEntry, LazyObserver};
