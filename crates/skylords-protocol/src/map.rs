//! Map descriptors.
//!
//! A map is named by a catalogue enumerant. Community maps share a few
//! enumerants (one per player-count class) and add their name and
//! checksum in `community_map_details`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A map enumerant as the host names it, e.g. `"LajeshSpectator"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MapKind(pub String);

impl MapKind {
    pub fn new(name: impl Into<String>) -> MapKind {
        MapKind(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name and checksum of a community map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommunityMap {
    pub name: String,
    #[serde(rename = "crc")]
    pub checksum: u64,
}

/// A map: its enumerant, plus details for community maps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MapDescriptor {
    pub map: MapKind,
    #[serde(
        rename = "community_map_details",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub community: Option<CommunityMap>,
}

impl MapDescriptor {
    /// A built-in map.
    pub fn named(map: impl Into<String>) -> MapDescriptor {
        MapDescriptor { map: MapKind::new(map), community: None }
    }

    /// A specific community map.
    pub fn community(class: impl Into<String>, name: impl Into<String>, checksum: u64) -> MapDescriptor {
        MapDescriptor {
            map: MapKind::new(class),
            community: Some(CommunityMap { name: name.into(), checksum }),
        }
    }

    /// Whether this entry of a supported-maps list covers `other`.
    ///
    /// An entry covers an equal descriptor. An entry with no community
    /// details covers every map of its enumerant, so a bare community
    /// class entry covers any community map of that class.
    pub fn covers(&self, other: &MapDescriptor) -> bool {
        self == other || (self.map == other.map && self.community.is_none())
    }
}

impl fmt::Display for MapDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.community {
            Some(c) => write!(f, "{}:{}#{:08x}", self.map, c.name, c.checksum),
            None => write!(f, "{}", self.map),
        }
    }
}
