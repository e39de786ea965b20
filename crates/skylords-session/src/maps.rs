//! Map-support matching for the handshake.

use skylords_protocol::MapDescriptor;

/// Whether a bot that lists `supported` can play `map`.
///
/// An empty list means the bot plays every map. Otherwise some entry
/// must cover the map, either exactly or as a community class entry
/// without details (see [`MapDescriptor::covers`]).
pub fn map_supported(supported: &[MapDescriptor], map: &MapDescriptor) -> bool {
    supported.is_empty() || supported.iter().any(|entry| entry.covers(map))
}
