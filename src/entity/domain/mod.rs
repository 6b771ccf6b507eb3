//! Domain model for reactive entities.
//!
//! Every part owns an [`EventBus`](crate::events::EventBus) and announces
//! its own changes; [`EntityCore`] wires the parts of one entity together.
//! Mutators take `&self` and never hold an internal borrow while handlers
//! run, so handlers may read the entity that notified them.

mod capabilities;
mod composite;
mod content;
mod counter;
mod error;
mod ids;
mod normalize;
mod relations;
mod status;
mod tags;

pub use capabilities::{ContentHolder, StatusHolder, TagsHolder};
pub use composite::EntityCore;
pub use content::Content;
pub use counter::Counter;
pub use error::InvalidInputError;
pub use ids::EntityId;
pub use normalize::normalize;
pub use relations::{RelatedIds, Relation};
pub use status::{DEFAULT_STATUSES, StatusList, StatusMachine};
pub use tags::TagSet;
