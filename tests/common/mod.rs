//! Common test utilities
#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use trip_planner::{Catalog, Destination, EventType, Offer, OfferGroup, Picture};

/// Small catalog with one offer-less type and one description-less destination
pub fn test_catalog() -> Arc<Catalog> {
    Arc::new(Catalog::new(
        vec![
            Destination {
                id: "d-geneva".to_string(),
                name: "Geneva".to_string(),
                description: "Geneva is a city in Switzerland.".to_string(),
                pictures: vec![
                    Picture {
                        src: "img/geneva-1.jpg".to_string(),
                        description: "Lake Geneva".to_string(),
                    },
                    Picture {
                        src: "img/geneva-2.jpg".to_string(),
                        description: "Old town".to_string(),
                    },
                ],
            },
            Destination {
                id: "d-tom".to_string(),
                name: "Tom & Jerry's <Town>".to_string(),
                description: String::new(),
                pictures: vec![],
            },
        ],
        vec![
            OfferGroup {
                event_type: EventType::Flight,
                offers: vec![
                    Offer::new("f-luggage", "Add luggage", 30),
                    Offer::new("f-comfort", "Switch to comfort", 100),
                ],
            },
            OfferGroup {
                event_type: EventType::Sightseeing,
                offers: vec![],
            },
        ],
    ))
}

/// Fixed timestamp on Monday 2024-03-18
pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 18, hour, minute, 0).unwrap()
}
