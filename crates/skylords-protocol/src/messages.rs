//! The four request kinds of a bot session and their responses.
//!
//! ```text
//! host ── ApiHello ───────▶ bot ── AiForMap ──▶ host
//! host ── Prepare ────────▶ bot ── (empty) ───▶ host
//! host ── GameStartState ─▶ bot ── (empty) ───▶ host
//! host ── GameState ──────▶ bot ── [Command] ─▶ host   (every tick)
//! ```

use serde::{Deserialize, Serialize};

use crate::{Deck, EntityId, MapDescriptor, MapEntities, MatchPlayer, PlayerCommand, PlayerEntity, RejectedCommand, Tick};

/// Protocol revision this crate speaks. The handshake must match it
/// exactly; there is no negotiation.
pub const PROTOCOL_VERSION: u64 = 16;

/// Handshake request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiHello {
    pub version: u64,
    pub map: MapDescriptor,
}

impl ApiHello {
    /// A handshake at this crate's protocol version.
    pub fn current(map: MapDescriptor) -> ApiHello {
        ApiHello { version: PROTOCOL_VERSION, map }
    }
}

/// Handshake response: the bot's name and the decks it offers for the
/// map. No decks means the bot cannot play this map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiForMap {
    pub name: String,
    pub decks: Vec<Deck>,
}

/// Preparation request: the deck the host picked, by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prepare {
    pub deck: String,
    #[serde(alias = "map_info")]
    pub map: MapDescriptor,
}

/// Match-start snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameStartState {
    pub your_player_id: EntityId,
    pub players: Vec<MatchPlayer>,
    pub entities: MapEntities,
}

/// Per-tick snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub current_tick: Tick,
    /// Commands executing this tick, from every player.
    #[serde(default)]
    pub commands: Vec<PlayerCommand>,
    /// Commands refused since the previous tick.
    #[serde(default)]
    pub rejected_commands: Vec<RejectedCommand>,
    pub players: Vec<PlayerEntity>,
    pub entities: MapEntities,
}

impl GameState {
    /// The player entity with the given id.
    pub fn player(&self, id: EntityId) -> Option<&PlayerEntity> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Rejections of commands issued by `player`.
    pub fn rejections_for(&self, player: EntityId) -> impl Iterator<Item = &RejectedCommand> {
        self.rejected_commands.iter().filter(move |r| r.player == player)
    }
}
