//! Domain module
//!
//! Core trip types: events, offers and destinations.

pub mod catalog;
pub mod destination;
pub mod error;
pub mod event;
pub mod offer;

pub use catalog::Catalog;
pub use destination::{Destination, Picture};
pub use error::DomainError;
pub use event::{Event, EventType};
pub use offer::{Offer, OfferGroup};

/// Types that carry a stable identifier
pub trait Identified {
    /// Identifier type
    type Id: PartialEq;

    /// Get the identifier
    fn id(&self) -> &Self::Id;
}
