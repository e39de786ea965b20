//! Ability effects currently applied to an entity.

use serde::{Deserialize, Serialize};

use crate::variant::variant_family;
use crate::{AbilityId, AbilityLine, EntityId, Tick, TickCount};

variant_family! {
    /// Effect-specific state. `Other {}` is the host's catch-all for
    /// effects without extra data.
    pub enum AbilityEffectSpecific as "AbilityEffectSpecific" {
        DamageRadialArea {
            progress_current: f32,
            progress_delta: f32,
            damage_remaining: f32,
        },
        DamageOverTime {
            tick_wait_duration: TickCount,
            ticks_left: TickCount,
            tick_damage: f32,
        },
        LinkedFire {
            linked: bool,
            fighting: bool,
            fast_cast: i32,
            support_cap: i16,
            support_production: i8,
        },
        Other {},
    }
}

/// An ability effect on an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityEffect {
    pub id: AbilityId,
    pub line: AbilityLine,
    /// The entity that applied the effect.
    pub source: EntityId,
    pub source_team: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_tick: Option<Tick>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_tick: Option<Tick>,
    pub specific: AbilityEffectSpecific,
}

impl AbilityEffect {
    /// Whether the effect has ended by `now`. Effects without an end tick
    /// never expire on their own.
    pub fn expired_at(&self, now: Tick) -> bool {
        self.end_tick.is_some_and(|end| end <= now)
    }
}
