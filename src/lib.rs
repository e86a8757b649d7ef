//! tripPlanner Library
//!
//! Trip itinerary events: date and sorting helpers, the new-event form and
//! its markup. Re-exports modules for integration testing and external use.

pub mod domain;
pub mod form;
pub mod mock;
pub mod utilities;
pub mod view;

pub mod config;
mod error;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use domain::{Catalog, Destination, DomainError, Event, EventType, Offer, OfferGroup, Picture};
pub use form::{EventForm, FormChange, FormOutcome, FormState};
pub use utilities::SortType;
