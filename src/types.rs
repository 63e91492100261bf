use bevy::prelude::*;

use crate::math_utils::ray_aabb_intersection;

/// Marker for a selectable simulation unit
#[derive(Component, Debug)]
pub struct Unit;

/// Per-frame input state mapped onto every unit
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayerInput {
    pub left_click: bool, // Left mouse button went down this frame
}

/// Local half-size of a unit's box, used to rebuild its world bounds
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct UnitExtents(pub Vec3);

/// World-space axis-aligned bounding box of a unit
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct UnitBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl UnitBounds {
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        let half_extents = half_extents.abs();
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// True if the ray hits the box at or in front of its origin
    pub fn intersects(&self, ray: Ray3d) -> bool {
        ray_aabb_intersection(ray.origin, *ray.direction, self.min, self.max).is_some()
    }
}

/// Selection mark: present while the unit is selected
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Selected;

/// One-frame tag added when a unit becomes selected
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Selecting;

/// One-frame tag added when a unit stops being selected
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Deselecting;

#[derive(Component)]
pub struct RtsCamera {
    pub focus_point: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}
