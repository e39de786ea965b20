//! Commands a bot sends back on each tick.
//!
//! A command refers to hand cards by slot (`card_position`, 0-19 in deck
//! order) and to everything else by entity id. The host validates every
//! command; the ones it refuses come back on a later tick as a
//! [`RejectedCommand`].

use serde::{Deserialize, Serialize};

use crate::variant::variant_family;
use crate::{
    CommandRejectionReason, CreateOrbColor, EntityId, ModeId, Ping, Position2D, SingleTarget,
    SpellId, WalkMode,
};

variant_family! {
    /// One intent from a player.
    pub enum Command as "Command" {
        /// Play a building card.
        BuildHouse { card_position: u8, xy: Position2D, angle: f32 },
        /// Play a spell card on a single target.
        CastSpellGod { card_position: u8, target: SingleTarget },
        /// Play a spell card along a line.
        CastSpellGodMulti { card_position: u8, xy1: Position2D, xy2: Position2D },
        /// Play a squad card on the ground.
        ProduceSquad { card_position: u8, xy: Position2D },
        /// Play a squad card straight onto a barrier.
        ProduceSquadOnBarrier { card_position: u8, xy: Position2D, barrier_to_mount: EntityId },
        /// Activate a spell or ability of an entity.
        CastSpellEntity { entity: EntityId, spell: SpellId, target: SingleTarget },
        /// Open or close a gate.
        BarrierGateToggle { barrier_id: EntityId },
        /// Build a barrier. Same as `BarrierRepair` when not inverted.
        BarrierBuild { barrier_id: EntityId, inverted_direction: bool },
        BarrierRepair { barrier_id: EntityId },
        BarrierCancelRepair { barrier_id: EntityId },
        RepairBuilding { building_id: EntityId },
        CancelRepairBuilding { building_id: EntityId },
        GroupAttack { squads: Vec<EntityId>, target_entity_id: EntityId, force_attack: bool },
        GroupEnterWall { squads: Vec<EntityId>, barrier_id: EntityId },
        GroupExitWall { squads: Vec<EntityId>, barrier_id: EntityId },
        GroupGoto {
            squads: Vec<EntityId>,
            positions: Vec<Position2D>,
            walk_mode: WalkMode,
            orientation: f32,
        },
        GroupHoldPosition { squads: Vec<EntityId> },
        GroupStopJob { squads: Vec<EntityId> },
        ModeChange { entity_id: EntityId, new_mode_id: ModeId },
        PowerSlotBuild { slot_id: EntityId },
        TokenSlotBuild { slot_id: EntityId, color: CreateOrbColor },
        Ping { xy: Position2D, ping: Ping },
        Surrender {},
        /// Chat message to the match host, for debugging.
        WhisperToMaster { text: String },
    }
}

/// A command together with the player that issued it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerCommand {
    pub player: EntityId,
    pub command: Command,
}

/// A command the host refused, with the reason.
///
/// This is ordinary tick input, never an error: a bot reads it and
/// decides for itself whether to try something else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectedCommand {
    pub player: EntityId,
    pub reason: CommandRejectionReason,
    pub command: Command,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::variant::{self, VariantFamily};

    #[test]
    fn test_command_has_twenty_four_shapes() {
        assert_eq!(Command::SHAPES.len(), 24);
    }

    #[test]
    fn test_produce_squad_wire_format() {
        let cmd = Command::ProduceSquad { card_position: 1, xy: Position2D::new(5.0, 6.0) };
        assert_eq!(
            variant::encode(&cmd).unwrap(),
            json!({"ProduceSquad": {"card_position": 1, "xy": {"x": 5.0, "y": 6.0}}})
        );
    }

    #[test]
    fn test_surrender_is_marker() {
        assert_eq!(variant::encode(&Command::Surrender {}).unwrap(), json!({"Surrender": {}}));
    }

    #[test]
    fn test_token_slot_build_color_is_numeric() {
        let cmd = Command::TokenSlotBuild { slot_id: EntityId(3), color: CreateOrbColor::Frost };
        assert_eq!(variant::encode(&cmd).unwrap()["TokenSlotBuild"]["color"], 3);
    }

    #[test]
    fn test_group_attack_round_trips() {
        let cmd = Command::GroupAttack {
            squads: vec![EntityId(1), EntityId(2)],
            target_entity_id: EntityId(99),
            force_attack: false,
        };
        let wire = variant::encode(&cmd).unwrap();
        assert_eq!(variant::decode::<Command>(wire).unwrap(), cmd);
    }

    #[test]
    fn test_player_command_nests_variant_object() {
        let pc: PlayerCommand = serde_json::from_value(json!({
            "player": 7,
            "command": {"Ping": {"xy": {"x": 0.0, "y": 0.0}, "ping": 1}}
        }))
        .unwrap();
        assert_eq!(pc.player, EntityId(7));
        assert_eq!(pc.command, Command::Ping { xy: Position2D::ZERO, ping: Ping::Attack });
    }

    #[test]
    fn test_rejected_command_with_unknown_reason_still_decodes() {
        let rc: RejectedCommand = serde_json::from_value(json!({
            "player": 7,
            "reason": {"TooManyUnits": {"limit": 40}},
            "command": {"Surrender": {}}
        }))
        .unwrap();
        assert!(rc.reason.is_unrecognized());
        assert_eq!(rc.command, Command::Surrender {});
    }
}
