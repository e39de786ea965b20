//! Targets for jobs, spells and commands.

use crate::variant::variant_family;
use crate::{EntityId, Position2D};

variant_family! {
    /// A single point of application: one entity or one ground location.
    pub enum SingleTarget as "SingleTarget" {
        SingleEntity { id: EntityId },
        Location { xy: Position2D },
    }
}

variant_family! {
    /// A single target or a line between two ground points.
    pub enum Target as "Target" {
        Single { single: SingleTarget },
        Multi { xy_begin: Position2D, xy_end: Position2D },
    }
}

impl SingleTarget {
    pub fn entity(id: EntityId) -> SingleTarget {
        SingleTarget::SingleEntity { id }
    }

    pub fn location(xy: Position2D) -> SingleTarget {
        SingleTarget::Location { xy }
    }
}
