//! Integer identity types.
//!
//! Every id on the wire is a bare integer, but the protocol uses the same
//! representation for very different things: an entity, a tick counter, a
//! spell resource. Each gets its own newtype so a `Tick` can never be
//! compared to an `EntityId` by accident.
//!
//! Entity ids are handed out once per match and never reused. Nothing
//! here assumes an upper bound or tries to recycle them.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtype macro
// ---------------------------------------------------------------------------

/// Declares a transparent integer newtype with `Display` as `Name(n)`.
macro_rules! wire_id {
    ($(#[$meta:meta])* $name:ident($repr:ty)) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub $repr);

        impl $name {
            /// Returns the raw wire value.
            pub fn value(self) -> $repr {
                self.0
            }
        }

        impl From<$repr> for $name {
            fn from(raw: $repr) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

wire_id!(
    /// Any entity in the match: players, squads, figures, buildings,
    /// slots, projectiles. Assigned once, monotonically, never reused.
    EntityId(u32)
);
wire_id!(
    /// Squad resource id (the squad's static definition, not its entity).
    SquadId(u32)
);
wire_id!(
    /// Building resource id.
    BuildingId(u32)
);
wire_id!(
    /// Spell resource id.
    SpellId(u32)
);
wire_id!(
    /// Ability resource id.
    AbilityId(u32)
);
wire_id!(
    /// Mode id for entities with switchable modes.
    ModeId(u32)
);
wire_id!(
    /// Absolute simulation step. One tick is 100 ms of game time.
    Tick(u32)
);
wire_id!(
    /// A duration measured in ticks.
    TickCount(u32)
);

impl Tick {
    /// The tick `count` steps after this one.
    pub fn after(self, count: TickCount) -> Tick {
        Tick(self.0.saturating_add(count.0))
    }
}
