//! Event form
//!
//! The editable "new event" form as a state model. Every change produces a
//! new form with replaced state; nothing is mutated in place.

pub mod picker;
pub mod state;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Catalog, Destination, DomainError, Event, EventType, Offer};

pub use picker::DatePickerSettings;
pub use state::FormState;

/// User edits accepted by the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FormChange {
    /// Event type radio changed
    SelectType(EventType),
    /// Destination input changed (by display name)
    SelectDestination(String),
    /// Offer checkbox clicked (by offer id)
    ToggleOffer(String),
    /// Start picker changed
    ChangeDateFrom(DateTime<Utc>),
    /// End picker changed
    ChangeDateTo(DateTime<Utc>),
    /// Price input changed
    ChangePrice(i64),
    /// Favourite flag flipped
    ToggleFavorite,
}

/// How a form session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    Submitted(Event),
    Cancelled,
}

/// Form bound to a catalog
#[derive(Debug, Clone)]
pub struct EventForm {
    catalog: Arc<Catalog>,
    state: FormState,
}

impl EventForm {
    /// Form for a new event, starting from the blank state
    ///
    /// # Errors
    /// - `DomainError::OfferGroupNotFound` if the catalog lacks the default type
    pub fn new(catalog: Arc<Catalog>) -> Result<Self, DomainError> {
        Self::with_state(catalog, FormState::blank())
    }

    /// Form editing an existing event
    pub fn edit(catalog: Arc<Catalog>, event: &Event) -> Result<Self, DomainError> {
        Self::with_state(catalog, FormState::from(event))
    }

    fn with_state(catalog: Arc<Catalog>, state: FormState) -> Result<Self, DomainError> {
        catalog.offers_for(state.event_type)?;
        Ok(Self { catalog, state })
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Offers available for the current type
    pub fn type_offers(&self) -> &[Offer] {
        self.catalog
            .offers_for(self.state.event_type)
            .map(|group| group.offers.as_slice())
            .unwrap_or_default()
    }

    /// Currently selected destination, if any
    pub fn destination(&self) -> Option<&Destination> {
        self.state
            .destination
            .as_deref()
            .and_then(|id| self.catalog.destination_by_id(id))
    }

    /// Apply a change and return the form with the replaced state
    pub fn apply(self, change: FormChange) -> Result<Self, DomainError> {
        let state = self.next_state(&change)?;

        tracing::debug!(
            change = ?change,
            event_type = %state.event_type,
            offers = state.offers.len(),
            "Form state updated"
        );

        Ok(Self {
            catalog: self.catalog,
            state,
        })
    }

    fn next_state(&self, change: &FormChange) -> Result<FormState, DomainError> {
        let current = &self.state;

        let state = match change {
            FormChange::SelectType(event_type) => {
                self.catalog.offers_for(*event_type)?;
                FormState {
                    event_type: *event_type,
                    offers: Default::default(),
                    ..current.clone()
                }
            }
            FormChange::SelectDestination(name) => {
                let destination = self.catalog.destination_by_name(name)?;
                FormState {
                    destination: Some(destination.id.clone()),
                    ..current.clone()
                }
            }
            FormChange::ToggleOffer(offer_id) => {
                let group = self.catalog.offers_for(current.event_type)?;
                if !group.contains(offer_id) {
                    return Err(DomainError::offer_not_available(
                        offer_id.as_str(),
                        current.event_type,
                    ));
                }

                let mut offers = current.offers.clone();
                if !offers.remove(offer_id) {
                    offers.insert(offer_id.clone());
                }
                FormState {
                    offers,
                    ..current.clone()
                }
            }
            FormChange::ChangeDateFrom(date_from) => {
                // An end before the new start is dragged along with it
                let date_to = match current.date_to {
                    Some(date_to) if date_to < *date_from => Some(*date_from),
                    other => other,
                };
                FormState {
                    date_from: Some(*date_from),
                    date_to,
                    ..current.clone()
                }
            }
            FormChange::ChangeDateTo(date_to) => {
                // The end picker is bounded by the start
                if current.date_from.is_some_and(|date_from| *date_to < date_from) {
                    return Err(DomainError::InvalidDateRange);
                }
                FormState {
                    date_to: Some(*date_to),
                    ..current.clone()
                }
            }
            FormChange::ChangePrice(price) => {
                if *price < 0 {
                    return Err(DomainError::InvalidPrice(*price));
                }
                FormState {
                    base_price: *price,
                    ..current.clone()
                }
            }
            FormChange::ToggleFavorite => FormState {
                is_favorite: !current.is_favorite,
                ..current.clone()
            },
        };

        Ok(state)
    }

    /// Settings for the start picker
    pub fn date_from_picker(&self) -> DatePickerSettings {
        DatePickerSettings::new(self.state.date_from)
    }

    /// Settings for the end picker; the start bounds the earliest end
    pub fn date_to_picker(&self) -> DatePickerSettings {
        DatePickerSettings::new(self.state.date_to).with_min_date(self.state.date_from)
    }

    /// Submit the form
    ///
    /// # Errors
    /// See [`FormState::to_event`].
    pub fn submit(&self) -> Result<FormOutcome, DomainError> {
        let event = self.state.to_event()?;
        tracing::info!(event_id = %event.id, event_type = %event.event_type, "Event form submitted");
        Ok(FormOutcome::Submitted(event))
    }

    /// Abandon the form
    pub fn cancel(self) -> FormOutcome {
        tracing::debug!("Event form cancelled");
        FormOutcome::Cancelled
    }
}
