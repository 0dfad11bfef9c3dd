//! Pawfect core: animal catalog, urgency signals, favorites and search.
//!
//! Everything here is synchronous and free of IO. Records arrive through a
//! [`CatalogProvider`]; time-sensitive queries take an explicit `now`.
mod animal;
mod effect;
mod error;
mod favorites;
mod filter;
mod msg;
mod observer;
mod provider;
mod store;
mod update;
mod urgency;
mod view_model;

pub use animal::{AnimalId, AnimalRecord, ParseUrgencyError, PhotoRef, PhotoSource, UrgencyLevel};
pub use effect::Effect;
pub use error::{CatalogError, InvalidReason, InvalidRecord, ProviderError, ProviderErrorKind};
pub use favorites::FavoritesTracker;
pub use filter::{SearchCriteria, SearchFilter};
pub use msg::Msg;
pub use observer::{StoreEvent, SubscriptionId};
pub use provider::{CatalogProvider, FetchedCatalog};
pub use store::{CatalogStore, LoadReport, StoreSettings, SuccessStory};
pub use update::update;
pub use urgency::{
    countdown_label, days_remaining, days_until, is_near_deadline, urgency_color_tag,
    UrgencyColor, NEAR_DEADLINE_DAYS,
};
pub use view_model::{AnimalCardView, CatalogViewModel};
