//! Trip events
//!
//! An event is a single trip point: a typed time window at a destination
//! with a base price and a set of selected offers.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DomainError, Identified};

/// Kind of trip point
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Taxi,
    Bus,
    Train,
    Ship,
    Drive,
    #[default]
    Flight,
    #[serde(rename = "check-in")]
    CheckIn,
    Sightseeing,
    Restaurant,
}

impl EventType {
    /// All event types in display order
    pub const ALL: [EventType; 9] = [
        EventType::Taxi,
        EventType::Bus,
        EventType::Train,
        EventType::Ship,
        EventType::Drive,
        EventType::Flight,
        EventType::CheckIn,
        EventType::Sightseeing,
        EventType::Restaurant,
    ];

    /// Lower-case value used in markup and serialized data
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Taxi => "taxi",
            EventType::Bus => "bus",
            EventType::Train => "train",
            EventType::Ship => "ship",
            EventType::Drive => "drive",
            EventType::Flight => "flight",
            EventType::CheckIn => "check-in",
            EventType::Sightseeing => "sightseeing",
            EventType::Restaurant => "restaurant",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            EventType::Taxi => "Taxi",
            EventType::Bus => "Bus",
            EventType::Train => "Train",
            EventType::Ship => "Ship",
            EventType::Drive => "Drive",
            EventType::Flight => "Flight",
            EventType::CheckIn => "Check-in",
            EventType::Sightseeing => "Sightseeing",
            EventType::Restaurant => "Restaurant",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        EventType::ALL
            .iter()
            .copied()
            .find(|event_type| event_type.as_str() == normalized)
            .ok_or_else(|| DomainError::UnknownEventType(s.to_string()))
    }
}

/// A trip point
///
/// # Invariants
/// - `date_from <= date_to` is expected; it is checked when an event is
///   produced by the form, not by this struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub date_from: DateTime<Utc>,
    pub date_to: DateTime<Utc>,
    pub base_price: i64,
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// Destination id
    pub destination: String,
    /// Selected offer ids
    #[serde(default)]
    pub offers: BTreeSet<String>,
    #[serde(default)]
    pub is_favorite: bool,
}

impl Event {
    /// Whole minutes between start and end (negative if inverted)
    pub fn duration_minutes(&self) -> i64 {
        (self.date_to - self.date_from).num_minutes()
    }
}

impl Identified for Event {
    type Id = Uuid;

    fn id(&self) -> &Uuid {
        &self.id
    }
}
