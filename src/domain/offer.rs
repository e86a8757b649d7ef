//! Offers
//!
//! Optional add-ons priced per event type.

use serde::{Deserialize, Serialize};

use super::{EventType, Identified};

/// A single add-on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub id: String,
    pub title: String,
    pub price: i64,
}

impl Offer {
    pub fn new(id: impl Into<String>, title: impl Into<String>, price: i64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
        }
    }

    /// Title without whitespace, lower-cased; used for markup ids
    pub fn slug(&self) -> String {
        self.title
            .split_whitespace()
            .collect::<String>()
            .to_lowercase()
    }
}

impl Identified for Offer {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }
}

/// Offers available for one event type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferGroup {
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(default)]
    pub offers: Vec<Offer>,
}

impl OfferGroup {
    /// Find the group for an event type
    pub fn for_type(groups: &[OfferGroup], event_type: EventType) -> Option<&OfferGroup> {
        groups.iter().find(|group| group.event_type == event_type)
    }

    /// Check whether the group contains an offer id
    pub fn contains(&self, offer_id: &str) -> bool {
        self.offers.iter().any(|offer| offer.id == offer_id)
    }
}
