//! Synchronous event plumbing shared by every reactive component.
//!
//! Each component owns an [`EventBus`] and announces its own state changes
//! on it. A bus may bubble to one parent bus, so a composite observer only
//! needs to subscribe once at the outermost level:
//!
//! - [`EventBus`]: handler registry plus an optional bubbling target
//! - [`Event`] and [`EventPayload`]: what a notification carries
//! - [`names`]: the event names emitted by this crate
//!
//! Delivery is single-threaded and happens before the emitting call returns.

mod bus;
mod error;
mod event;
pub mod names;

pub use bus::{EventBus, EventHandler, Subscription};
pub use error::EventBusError;
pub use event::{EntityHandle, Event, EventPayload};

#[cfg(test)]
mod tests;
