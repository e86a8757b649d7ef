//! Domain Error Types
//!
//! Pure domain errors that don't depend on configuration or I/O.

use thiserror::Error;

use super::EventType;

/// Domain-specific errors
///
/// These errors represent rule violations while building or editing events.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Random bounds are inverted after rounding
    #[error("Invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: i64, max: i64 },

    /// No destination carries the given name
    #[error("Destination not found: {0}")]
    DestinationNotFound(String),

    /// Catalogue has no offer group for the event type
    #[error("No offers defined for event type: {0}")]
    OfferGroupNotFound(EventType),

    /// Offer id is not offered for the current event type
    #[error("Offer {offer_id} is not available for event type {event_type}")]
    OfferNotAvailable {
        offer_id: String,
        event_type: EventType,
    },

    /// Event type string is not one of the known types
    #[error("Unknown event type: {0}")]
    UnknownEventType(String),

    /// Sort type string is not one of the known sorts
    #[error("Unknown sort type: {0}")]
    UnknownSortType(String),

    /// Date pattern contains an unsupported specifier
    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),

    /// Catalog has nothing to pick from
    #[error("Catalog has no {0}")]
    EmptyCatalog(&'static str),

    /// Base price below zero
    #[error("Invalid price: {0}")]
    InvalidPrice(i64),

    /// End of the event precedes its start
    #[error("Invalid date range: event ends before it starts")]
    InvalidDateRange,

    /// Form submitted with a required field missing
    #[error("Incomplete form: {0} is required")]
    IncompleteForm(&'static str),
}

impl DomainError {
    /// Create an offer-not-available error
    pub fn offer_not_available(offer_id: impl Into<String>, event_type: EventType) -> Self {
        Self::OfferNotAvailable {
            offer_id: offer_id.into(),
            event_type,
        }
    }

    /// Check if this is a client error (caused by user input)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::DestinationNotFound(_)
                | Self::OfferNotAvailable { .. }
                | Self::UnknownEventType(_)
                | Self::UnknownSortType(_)
                | Self::InvalidPrice(_)
                | Self::InvalidDateRange
                | Self::IncompleteForm(_)
        )
    }
}
