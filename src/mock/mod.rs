//! Demo data
//!
//! Fixed catalog plus randomly generated events for running the itinerary
//! without a backend.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use crate::domain::{Catalog, Destination, DomainError, Event, EventType, Offer, OfferGroup, Picture};
use crate::utilities::{generate_random_time_range, random_array_element, random_integer};

const MIN_PRICE: f64 = 20.0;
const MAX_PRICE: f64 = 2000.0;

const DESTINATIONS: [(&str, &str, &str); 5] = [
    ("d1", "Amsterdam", "Amsterdam, a city of canals, bridges and narrow houses."),
    ("d2", "Geneva", "Geneva, a lakeside city at the foot of the Alps."),
    ("d3", "Chamonix", "Chamonix, a resort town below Mont Blanc."),
    ("d4", "Valencia", ""),
    ("d5", "Porto", "Porto, known for its bridges and port wine cellars."),
];

const OFFERS: [(EventType, &[(&str, &str, i64)]); 9] = [
    (EventType::Taxi, &[("taxi-1", "Upgrade to a business class", 120), ("taxi-2", "Choose the radio station", 60)]),
    (EventType::Bus, &[("bus-1", "Infotainment system", 50), ("bus-2", "Order meal", 100)]),
    (EventType::Train, &[("train-1", "Book a taxi at the arrival point", 110)]),
    (EventType::Ship, &[("ship-1", "Choose meal", 130), ("ship-2", "Upgrade to comfort class", 170)]),
    (EventType::Drive, &[("drive-1", "With automatic transmission", 110)]),
    (
        EventType::Flight,
        &[
            ("flight-1", "Add luggage", 30),
            ("flight-2", "Switch to comfort", 100),
            ("flight-3", "Choose seats", 5),
        ],
    ),
    (EventType::CheckIn, &[("check-in-1", "Add breakfast", 50)]),
    (EventType::Sightseeing, &[]),
    (EventType::Restaurant, &[("restaurant-1", "Choose live music", 150)]),
];

/// Destinations with a couple of pictures each; one has no description
pub fn demo_destinations() -> Vec<Destination> {
    DESTINATIONS
        .iter()
        .enumerate()
        .map(|(index, (id, name, description))| Destination {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            pictures: (1..=2)
                .map(|n| Picture {
                    src: format!("https://loremflickr.com/248/152?random={}", index * 10 + n),
                    description: format!("{name} photo {n}"),
                })
                .collect(),
        })
        .collect()
}

/// One offer group per event type; sightseeing has none
pub fn demo_offer_groups() -> Vec<OfferGroup> {
    OFFERS
        .iter()
        .map(|(event_type, offers)| OfferGroup {
            event_type: *event_type,
            offers: offers
                .iter()
                .map(|(id, title, price)| Offer::new(*id, *title, *price))
                .collect(),
        })
        .collect()
}

/// Full demo catalog
pub fn demo_catalog() -> Catalog {
    Catalog::new(demo_destinations(), demo_offer_groups())
}

/// Generate random events against a catalog
///
/// # Errors
/// - `DomainError::EmptyCatalog` if the catalog has no destinations
/// - `DomainError::OfferGroupNotFound` if a picked type has no offer group
pub fn generate_events<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    catalog: &Catalog,
    now: DateTime<Utc>,
) -> Result<Vec<Event>, DomainError> {
    (0..count)
        .map(|_| generate_event(rng, catalog, now))
        .collect()
}

fn generate_event<R: Rng + ?Sized>(
    rng: &mut R,
    catalog: &Catalog,
    now: DateTime<Utc>,
) -> Result<Event, DomainError> {
    let event_type = EventType::ALL[rng.gen_range(0..EventType::ALL.len())];
    let destination = random_array_element(rng, &catalog.destinations)
        .ok_or(DomainError::EmptyCatalog("destinations"))?;

    let group = catalog.offers_for(event_type)?;
    let offer_count = random_integer(rng, 0.0, group.offers.len() as f64)? as usize;
    let offers: BTreeSet<String> = group
        .offers
        .choose_multiple(rng, offer_count)
        .map(|offer| offer.id.clone())
        .collect();

    let range = generate_random_time_range(rng, now)?;

    Ok(Event {
        id: Uuid::new_v4(),
        date_from: range.date_from,
        date_to: range.date_to,
        base_price: random_integer(rng, MIN_PRICE, MAX_PRICE)?,
        event_type,
        destination: destination.id.clone(),
        offers,
        is_favorite: rng.gen_bool(0.5),
    })
}
