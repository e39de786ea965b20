//! Match snapshot data: entities on the map and the players.
//!
//! These are pass-through values. The host computes positions, damage
//! and timing; the bot only reads them.

use serde::{Deserialize, Serialize};

use crate::variant::variant_family;
use crate::{
    AbilityEffect, Aspect, BuildingId, CardId, Deck, EntityId, Job, OrbColor, Position,
    Position2D, SquadId,
};

// ---------------------------------------------------------------------------
// Variant families local to entities
// ---------------------------------------------------------------------------

variant_family! {
    /// Where a squad stands relative to a barrier.
    pub enum MountState as "MountState" {
        Unmounted {},
        MountingBarrier { barrier_module: EntityId },
        MountedBarrier { barrier_module: EntityId },
        UnmountingBarrier { barrier_module: EntityId },
    }
}

variant_family! {
    /// Area covered by an ability world object.
    pub enum AreaShape as "AreaShape" {
        Circle { center: Position2D, radius: f32 },
        Cone { origin: Position2D, direction: Position2D, angle: f32, range: f32 },
        Rectangle { from: Position2D, to: Position2D, width: f32 },
        WholeMap {},
    }
}

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// Fields every entity has.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    #[serde(default)]
    pub effects: Vec<AbilityEffect>,
    #[serde(default)]
    pub aspects: Vec<Aspect>,
    pub job: Job,
    pub position: Position,
    /// Owning player, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_entity_id: Option<EntityId>,
}

impl Entity {
    /// A bare entity at a position, with no job, effects or aspects.
    pub fn at(id: EntityId, position: Position) -> Entity {
        Entity {
            id,
            effects: Vec::new(),
            aspects: Vec::new(),
            job: Job::default(),
            position,
            player_entity_id: None,
        }
    }

    pub fn owned_by(&self, player: EntityId) -> bool {
        self.player_entity_id == Some(player)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: EntityId,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerSlot {
    pub entity: Entity,
    pub res_id: i32,
    pub state: i32,
    pub team: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenSlot {
    pub entity: Entity,
    pub color: OrbColor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityWorldObject {
    pub entity: Entity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<AreaShape>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Squad {
    pub entity: Entity,
    pub card_id: CardId,
    pub res_squad_id: SquadId,
    pub bound_power: f32,
    pub squad_size: u8,
    /// Figure entities belonging to this squad.
    pub figures: Vec<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mount_state: Option<MountState>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub entity: Entity,
    pub squad_id: EntityId,
    pub current_speed: f32,
    pub rotation_speed: f32,
    pub unit_size: u8,
    pub move_mode: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub entity: Entity,
    pub building_id: BuildingId,
    pub card_id: CardId,
    pub power_cost: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarrierSet {
    pub entity: Entity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarrierModule {
    pub entity: Entity,
    pub team: u8,
    pub set: EntityId,
    pub state: i32,
    pub slots: u8,
    pub free_slots: u8,
    pub walkable: bool,
}

/// Everything on the map, grouped by kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MapEntities {
    pub projectiles: Vec<Projectile>,
    pub power_slots: Vec<PowerSlot>,
    pub token_slots: Vec<TokenSlot>,
    pub ability_world_objects: Vec<AbilityWorldObject>,
    pub squads: Vec<Squad>,
    pub figures: Vec<Figure>,
    pub buildings: Vec<Building>,
    pub barrier_sets: Vec<BarrierSet>,
    pub barrier_modules: Vec<BarrierModule>,
}

impl MapEntities {
    /// Squads owned by `player`.
    pub fn squads_of(&self, player: EntityId) -> impl Iterator<Item = &Squad> {
        self.squads.iter().filter(move |s| s.entity.owned_by(player))
    }
}

// ---------------------------------------------------------------------------
// Players
// ---------------------------------------------------------------------------

/// Orb counts per colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Orbs {
    pub shadow: u8,
    pub nature: u8,
    pub frost: u8,
    pub fire: u8,
    pub starting: u8,
    pub white: u8,
    pub all: u8,
}

/// A player as an entity of the match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerEntity {
    pub id: EntityId,
    #[serde(default)]
    pub effects: Vec<AbilityEffect>,
    #[serde(default)]
    pub aspects: Vec<Aspect>,
    pub team: u8,
    pub power: f32,
    pub void_power: f32,
    pub population_count: i32,
    pub name: String,
    pub orbs: Orbs,
}

/// A player as announced at match start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchPlayer {
    pub name: String,
    pub deck: Deck,
    pub entity: PlayerEntity,
}
