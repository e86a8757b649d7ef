//! Catalog
//!
//! Destinations and per-type offers the form chooses from.

use serde::{Deserialize, Serialize};

use super::{Destination, DomainError, EventType, OfferGroup};

/// Reference data shared by every form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub destinations: Vec<Destination>,
    #[serde(default)]
    pub offers: Vec<OfferGroup>,
}

impl Catalog {
    pub fn new(destinations: Vec<Destination>, offers: Vec<OfferGroup>) -> Self {
        Self {
            destinations,
            offers,
        }
    }

    /// Parse a catalog from `{ "destinations": [...], "offers": [...] }`
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Offer group for an event type
    ///
    /// # Errors
    /// - `DomainError::OfferGroupNotFound` if the type has no group
    pub fn offers_for(&self, event_type: EventType) -> Result<&OfferGroup, DomainError> {
        OfferGroup::for_type(&self.offers, event_type)
            .ok_or(DomainError::OfferGroupNotFound(event_type))
    }

    /// Destination by display name
    ///
    /// # Errors
    /// - `DomainError::DestinationNotFound` if no destination has the name
    pub fn destination_by_name(&self, name: &str) -> Result<&Destination, DomainError> {
        Destination::find_by_name(&self.destinations, name)
            .ok_or_else(|| DomainError::DestinationNotFound(name.to_string()))
    }

    /// Destination by id
    pub fn destination_by_id(&self, id: &str) -> Option<&Destination> {
        Destination::find_by_id(&self.destinations, id)
    }
}
