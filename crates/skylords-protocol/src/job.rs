//! What an entity is currently doing.

use crate::variant::variant_family;
use crate::{
    AbilityId, AbilityLine, EntityId, ModeId, Position2D, Position2DWithOrientation, SpellId,
    Target, Tick, TickCount, WalkMode,
};

variant_family! {
    /// The current job of an entity.
    ///
    /// `Unknown { id }` is a real wire shape: the host sends it for job
    /// kinds it has no mapping for. Shapes this build has never heard of
    /// land in `Unrecognized` instead.
    pub enum Job as "Job" {
        NoJob {},
        Idle {},
        Goto {
            waypoints: Vec<Position2DWithOrientation>,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            target_entity_id: Option<EntityId>,
            walk_mode: WalkMode,
        },
        AttackMelee {
            target: Target,
            use_force_goto: bool,
            no_move: bool,
            too_close_range: f32,
        },
        CastSpell {
            target: Target,
            spell_id: SpellId,
            use_force_goto: bool,
            no_move: bool,
        },
        Die {},
        Talk {
            target: EntityId,
            walk_to_target: bool,
        },
        ScriptTalk {
            hide_weapon: bool,
        },
        Freeze {
            end_step: Tick,
            source: EntityId,
            spell_id: SpellId,
            duration: TickCount,
            delay_ability: TickCount,
            ability_id_while_frozen: Vec<AbilityId>,
            ability_id_delayed: Vec<AbilityId>,
            ability_line_id_cancel_on_start: AbilityLine,
            pushback_immunity: bool,
            mode: i32,
        },
        Spawn {
            duration: TickCount,
            end_step: Tick,
        },
        Cheer {},
        AttackSquad {
            target: Target,
            weapon_type: u8,
            damage: f32,
            range_min: f32,
            range_max: f32,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            attack_spell: Option<SpellId>,
            use_force_goto: bool,
            operation_range: f32,
            no_move: bool,
            was_in_attack: bool,
            melee_attack: bool,
        },
        CastSpellSquad {
            target: Target,
            spell_id: SpellId,
            use_force_goto: bool,
            spell_fired: bool,
            spell_per_source_entity: bool,
            was_in_attack: bool,
        },
        PushBack {
            start_coord: Position2D,
            target_coord: Position2D,
            speed: f32,
            rotation_speed: f32,
            damage: f32,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            source: Option<EntityId>,
        },
        Stampede {
            spell: SpellId,
            target: Target,
            start_coord: Position2D,
        },
        BarrierCrush {},
        BarrierGateToggle {},
        FlameThrower {
            target: Target,
            spell_id: SpellId,
            duration_step_init: TickCount,
            duration_step_shut_down: TickCount,
        },
        Construct {
            construction_update_steps: TickCount,
            construction_update_count_remaining: TickCount,
        },
        Crush {
            crush_steps: TickCount,
            entity_update_steps: TickCount,
            remaining_crush_steps: TickCount,
        },
        MountBarrierSquad {
            barrier_module: EntityId,
        },
        MountBarrier {
            #[serde(default, skip_serializing_if = "Option::is_none")]
            current_barrier_module: Option<EntityId>,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            goal_barrier_module: Option<EntityId>,
        },
        ModeChangeSquad {
            new_mode: ModeId,
            mode_change_done: bool,
        },
        ModeChange {
            new_mode: ModeId,
        },
        SacrificeSquad {
            target_entity: EntityId,
        },
        UsePortalSquad {
            target_entity_id: EntityId,
        },
        Channel {
            #[serde(default, skip_serializing_if = "Option::is_none")]
            target_squad_id: Option<EntityId>,
            mode_target_world: bool,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            entity_id: Option<EntityId>,
            spell_id: SpellId,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            spell_id_on_target_on_finish: Option<SpellId>,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            spell_id_on_target_on_start: Option<SpellId>,
            step_duration_until_finish: TickCount,
            timing_channel_start: i32,
            timing_channel_loop: i32,
            timing_channel_end: i32,
            abort_on_out_of_range_squared: f32,
            abort_check_failed: bool,
            orientate_to_target: bool,
            orientate_to_target_max_step: TickCount,
            abort_on_owner_get_damaged: bool,
            abort_on_mode_change: bool,
        },
        SpawnSquad {},
        LootTargetSquad {
            target_entity_id: EntityId,
        },
        Morph {
            target: Target,
            spell: SpellId,
        },
        /// The host's own "unmapped job" marker, with its raw job id.
        Unknown {
            id: i32,
        },
    }
}

impl Job {
    /// Whether the entity has nothing to do.
    pub fn is_idle(&self) -> bool {
        matches!(self, Job::NoJob {} | Job::Idle {})
    }
}

impl Default for Job {
    fn default() -> Job {
        Job::NoJob {}
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::SingleTarget;
    use crate::variant::{self, VariantFamily};

    #[test]
    fn test_job_has_thirty_one_shapes() {
        assert_eq!(Job::SHAPES.len(), 31);
    }

    #[test]
    fn test_goto_omits_absent_target_entity() {
        let job = Job::Goto {
            waypoints: vec![Position2DWithOrientation { x: 1.0, y: 2.0, orientation: 0.0 }],
            target_entity_id: None,
            walk_mode: WalkMode::Normal,
        };
        let wire = variant::encode(&job).unwrap();
        assert_eq!(
            wire,
            json!({"Goto": {
                "waypoints": [{"x": 1.0, "y": 2.0, "orientation": 0.0}],
                "walk_mode": 4
            }})
        );
        assert_eq!(variant::decode::<Job>(wire).unwrap(), job);
    }

    #[test]
    fn test_attack_squad_round_trips_with_nested_target() {
        let job = Job::AttackSquad {
            target: Target::Single { single: SingleTarget::entity(EntityId(77)) },
            weapon_type: 1,
            damage: 12.5,
            range_min: 0.0,
            range_max: 25.0,
            attack_spell: Some(SpellId(900)),
            use_force_goto: false,
            operation_range: 40.0,
            no_move: false,
            was_in_attack: true,
            melee_attack: false,
        };
        let wire = variant::encode(&job).unwrap();
        assert_eq!(wire["AttackSquad"]["attack_spell"], 900);
        assert_eq!(variant::decode::<Job>(wire).unwrap(), job);
    }

    #[test]
    fn test_host_unknown_job_is_a_real_shape() {
        let job: Job = serde_json::from_value(json!({"Unknown": {"id": 42}})).unwrap();
        assert_eq!(job, Job::Unknown { id: 42 });
        assert!(!job.is_unrecognized());
    }

    #[test]
    fn test_future_job_shape_is_unrecognized() {
        let job: Job = serde_json::from_value(json!({"Teleport": {"to": [1, 2]}})).unwrap();
        assert!(job.is_unrecognized());
        assert_eq!(job.shape(), "Teleport");
    }

    #[test]
    fn test_marker_jobs_decode_from_empty_object() {
        for shape in ["NoJob", "Idle", "Die", "Cheer", "BarrierCrush", "SpawnSquad"] {
            let mut wire = serde_json::Map::new();
            wire.insert(shape.to_string(), json!({}));
            let job: Job = variant::decode(wire.into()).unwrap();
            assert_eq!(job.shape(), shape);
        }
    }

    #[test]
    fn test_is_idle() {
        assert!(Job::default().is_idle());
        assert!(Job::Idle {}.is_idle());
        assert!(!Job::Die {}.is_idle());
    }
}
