//! World coordinates.
//!
//! The host reports 3-D positions; commands take 2-D ground positions.
//! The ground plane is (x, z): `y` is height.

use serde::{Deserialize, Serialize};

/// A 3-D world position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Width.
    pub x: f32,
    /// Height.
    pub y: f32,
    /// Depth.
    pub z: f32,
}

impl Position {
    /// Projects onto the ground plane, dropping the height.
    pub fn to_2d(self) -> Position2D {
        Position2D { x: self.x, y: self.z }
    }
}

/// A position on the ground plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position2D {
    pub x: f32,
    pub y: f32,
}

impl Position2D {
    pub const ZERO: Position2D = Position2D { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Position2D {
        Position2D { x, y }
    }
}

/// A ground position with a facing, used for goto waypoints.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position2DWithOrientation {
    pub x: f32,
    pub y: f32,
    /// Radians in default camera orientation: 0 = down, π/2 = right,
    /// π = up, 3π/2 = left.
    pub orientation: f32,
}
