//! Destinations

use serde::{Deserialize, Serialize};

use super::Identified;

/// Photo of a destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    pub src: String,
    #[serde(default)]
    pub description: String,
}

/// A named place with descriptive text and photos
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub pictures: Vec<Picture>,
}

impl Destination {
    /// Find a destination by its display name (exact match)
    pub fn find_by_name<'a>(destinations: &'a [Destination], name: &str) -> Option<&'a Destination> {
        destinations.iter().find(|destination| destination.name == name)
    }

    /// Find a destination by id
    pub fn find_by_id<'a>(destinations: &'a [Destination], id: &str) -> Option<&'a Destination> {
        destinations.iter().find(|destination| destination.id == id)
    }
}

impl Identified for Destination {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }
}
