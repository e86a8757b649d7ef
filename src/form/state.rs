//! Form state
//!
//! Editable copy of an event. Dates and destination stay optional until the
//! form is submitted.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{DomainError, Event, EventType};

/// Snapshot of the form fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    /// Id of the event being edited; `None` for a new event
    pub id: Option<Uuid>,
    pub base_price: i64,
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
    /// Destination id
    pub destination: Option<String>,
    pub is_favorite: bool,
    pub event_type: EventType,
    pub offers: BTreeSet<String>,
}

impl FormState {
    /// State of a brand new event
    pub fn blank() -> Self {
        Self {
            id: None,
            base_price: 0,
            date_from: None,
            date_to: None,
            destination: None,
            is_favorite: false,
            event_type: EventType::default(),
            offers: BTreeSet::new(),
        }
    }

    /// Build an event from the state.
    ///
    /// # Errors
    /// - `DomainError::IncompleteForm` if a date or the destination is unset
    /// - `DomainError::InvalidDateRange` if the end precedes the start
    /// - `DomainError::InvalidPrice` if the price is negative
    pub fn to_event(&self) -> Result<Event, DomainError> {
        let date_from = self.date_from.ok_or(DomainError::IncompleteForm("date_from"))?;
        let date_to = self.date_to.ok_or(DomainError::IncompleteForm("date_to"))?;
        let destination = self
            .destination
            .clone()
            .ok_or(DomainError::IncompleteForm("destination"))?;

        if date_to < date_from {
            return Err(DomainError::InvalidDateRange);
        }
        if self.base_price < 0 {
            return Err(DomainError::InvalidPrice(self.base_price));
        }

        Ok(Event {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            date_from,
            date_to,
            base_price: self.base_price,
            event_type: self.event_type,
            destination,
            offers: self.offers.clone(),
            is_favorite: self.is_favorite,
        })
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::blank()
    }
}

impl From<&Event> for FormState {
    fn from(event: &Event) -> Self {
        Self {
            id: Some(event.id),
            base_price: event.base_price,
            date_from: Some(event.date_from),
            date_to: Some(event.date_to),
            destination: Some(event.destination.clone()),
            is_favorite: event.is_favorite,
            event_type: event.event_type,
            offers: event.offers.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_blank_state() {
        let state = FormState::blank();

        assert_eq!(state.event_type, EventType::Flight);
        assert_eq!(state.base_price, 0);
        assert!(state.date_from.is_none());
        assert!(state.destination.is_none());
        assert!(state.offers.is_empty());
        assert!(!state.is_favorite);
    }

    #[test]
    fn test_blank_state_is_incomplete() {
        let result = FormState::blank().to_event();
        assert_eq!(result, Err(DomainError::IncompleteForm("date_from")));
    }

    #[test]
    fn test_event_state_round_trip_keeps_id() {
        let event = Event {
            id: Uuid::new_v4(),
            date_from: Utc.with_ymd_and_hms(2024, 3, 18, 10, 0, 0).unwrap(),
            date_to: Utc.with_ymd_and_hms(2024, 3, 18, 12, 0, 0).unwrap(),
            base_price: 300,
            event_type: EventType::Ship,
            destination: "d2".to_string(),
            offers: BTreeSet::from(["s1".to_string()]),
            is_favorite: true,
        };

        let state = FormState::from(&event);
        assert_eq!(state.to_event().unwrap(), event);
    }

    #[test]
    fn test_inverted_dates_rejected() {
        let mut state = FormState::blank();
        state.date_from = Some(Utc.with_ymd_and_hms(2024, 3, 18, 12, 0, 0).unwrap());
        state.date_to = Some(Utc.with_ymd_and_hms(2024, 3, 18, 10, 0, 0).unwrap());
        state.destination = Some("d1".to_string());

        assert_eq!(state.to_event(), Err(DomainError::InvalidDateRange));
    }
}
