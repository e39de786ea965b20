//! Aspects: optional capabilities attached to an entity.

use crate::variant::variant_family;
use crate::{ModeId, TickCount};

variant_family! {
    /// One aspect of an entity. Most aspects are pure markers.
    pub enum Aspect as "Aspect" {
        PowerProduction { current_power: f32, power_capacity: f32 },
        Health { current_hp: f32, cap_current_max: f32 },
        Combat {},
        ModeChange { current_mode: ModeId, all_modes: Vec<ModeId> },
        Ammunition {},
        SuperWeaponShadow {},
        WormMovement {},
        NPCTag {},
        PlayerKit {},
        Loot {},
        Immunity {},
        Turret {},
        Tunnel {},
        MountBarrier {},
        SpellMemory {},
        Portal {},
        Hate {},
        BarrierGate { open: bool },
        Attackable {},
        SquadRefill {},
        PortalExit {},
        ConstructionData {
            refresh_count_remaining: TickCount,
            refresh_count_total: TickCount,
            health_per_build_update_trigger: f32,
            remaining_health_to_add: f32,
        },
        SuperWeaponShadowBomb {},
        RepairBarrierSet {},
        ConstructionRepair {},
        Follower {},
        CollisionBase {},
        EditorUniqueID {},
        Roam {},
    }
}

/// Finds the health aspect in a list, as `(current, max)`.
pub fn health(aspects: &[Aspect]) -> Option<(f32, f32)> {
    aspects.iter().find_map(|aspect| match aspect {
        Aspect::Health { current_hp, cap_current_max } => Some((*current_hp, *cap_current_max)),
        _ => None,
    })
}
