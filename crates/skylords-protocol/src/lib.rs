//! Wire protocol for Skylords Reborn bots.
//!
//! This crate defines everything that travels between the match host
//! and a bot:
//!
//! - **Variant families** ([`Job`], [`Command`], [`Aspect`], [`Target`],
//!   [`CommandRejectionReason`], ...), each an "exactly one shape" object
//!   on the wire, decoded by the shared rules in [`variant`].
//! - **Card identity** ([`CardId`], [`Card`], [`Upgrade`],
//!   [`TemplateCatalog`]): the tier-offset packing of card ids.
//! - **Decks** ([`Deck::normalize`]): the 20-slot deck rules.
//! - **Messages** ([`ApiHello`], [`Prepare`], [`GameStartState`],
//!   [`GameState`]) and the [`Codec`] that moves them to and from bytes.
//!
//! # Architecture
//!
//! The protocol layer is pure data. It does no I/O and holds no state;
//! the session crate sequences these messages and the server crate moves
//! them over HTTP.
//!
//! ```text
//! HTTP (bytes) → Protocol (typed messages) → Session (phase machine) → Bot
//! ```

// ---------------------------------------------------------------------------
// Module declarations
// ---------------------------------------------------------------------------

pub mod variant;

mod aspect;
mod card;
mod catalog;
mod codec;
mod command;
mod deck;
mod effect;
mod entities;
mod error;
mod ids;
mod job;
mod map;
mod messages;
mod position;
mod rejection;
mod target;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

pub use aspect::{Aspect, health};
pub use card::{Card, CardId, CardTemplate, TemplateCatalog, Upgrade};
pub use catalog::{
    ABILITY_LINES, AbilityLine, BUILTIN_TEMPLATES, CreateOrbColor, OrbColor, Ping,
    UnknownCatalogValue, WalkMode, WhyCanNotPlayCardThere,
};
pub use codec::{Codec, JsonCodec};
pub use command::{Command, PlayerCommand, RejectedCommand};
pub use deck::{DECK_SIZE, Deck};
pub use effect::{AbilityEffect, AbilityEffectSpecific};
pub use entities::{
    AbilityWorldObject, AreaShape, BarrierModule, BarrierSet, Building, Entity, Figure,
    MapEntities, MatchPlayer, MountState, Orbs, PlayerEntity, PowerSlot, Projectile, Squad,
    TokenSlot,
};
pub use error::{CardError, DeckError, ProtocolError, VariantError};
pub use ids::{AbilityId, BuildingId, EntityId, ModeId, SpellId, SquadId, Tick, TickCount};
pub use job::Job;
pub use map::{CommunityMap, MapDescriptor, MapKind};
pub use messages::{
    AiForMap, ApiHello, GameStartState, GameState, PROTOCOL_VERSION, Prepare,
};
pub use position::{Position, Position2D, Position2DWithOrientation};
pub use rejection::CommandRejectionReason;
pub use target::{SingleTarget, Target};
pub use variant::{UnknownShape, VariantFamily};
