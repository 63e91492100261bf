// Keeps world-space unit bounds in step with their transforms
use bevy::prelude::*;
use crate::types::{Unit, UnitBounds, UnitExtents};

/// World AABB of a box with the given local half-extents under a transform
pub fn world_bounds(transform: &GlobalTransform, half_extents: Vec3) -> UnitBounds {
    let affine = transform.affine();
    let basis = affine.matrix3;

    // Rotated/scaled box projected back onto the world axes
    let world_half = basis.x_axis.abs() * half_extents.x
        + basis.y_axis.abs() * half_extents.y
        + basis.z_axis.abs() * half_extents.z;

    UnitBounds::from_center(transform.translation(), Vec3::from(world_half))
}

/// System: Refresh bounds of units whose transform changed
pub fn sync_unit_bounds(
    mut unit_query: Query<(&GlobalTransform, &UnitExtents, &mut UnitBounds), (With<Unit>, Changed<GlobalTransform>)>,
) {
    for (transform, extents, mut bounds) in unit_query.iter_mut() {
        let updated = world_bounds(transform, extents.0);
        if *bounds != updated {
            *bounds = updated;
        }
    }
}
