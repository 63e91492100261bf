// Selection ring visuals - driven by the one-frame transition tags
use bevy::prelude::*;
use bevy::pbr::{NotShadowCaster, NotShadowReceiver};
use std::collections::HashSet;
use std::f32::consts::FRAC_PI_2;
use crate::constants::*;
use crate::types::{Deselecting, Selecting, UnitExtents};

/// Marker for the ring spawned under a selected unit
#[derive(Component)]
pub struct SelectionRing;

/// System: Spawn a ring under every unit that became selected this frame
pub fn spawn_selection_rings(
    mut commands: Commands,
    unit_query: Query<(Entity, &UnitExtents), Added<Selecting>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (entity, extents) in unit_query.iter() {
        let radius = extents.0.x.max(extents.0.z);
        let mesh = meshes.add(Annulus::new(
            radius * SELECTION_RING_INNER_SCALE,
            radius * SELECTION_RING_OUTER_SCALE,
        ));
        let material = materials.add(StandardMaterial {
            base_color: SELECTION_RING_COLOR,
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            cull_mode: None,  // Visible from both sides
            ..default()
        });

        // Annulus is built in the XY plane; lay it flat at the unit's feet
        let ring_transform = Transform::from_xyz(0.0, -extents.0.y + SELECTION_RING_GROUND_OFFSET, 0.0)
            .with_rotation(Quat::from_rotation_x(-FRAC_PI_2));

        commands.entity(entity).with_children(|parent| {
            parent.spawn((
                Mesh3d(mesh),
                MeshMaterial3d(material),
                ring_transform,
                SelectionRing,
                NotShadowCaster,
                NotShadowReceiver,
            ));
        });
    }
}

/// System: Remove rings from units that were deselected this frame
pub fn despawn_selection_rings(
    mut commands: Commands,
    deselected_query: Query<Entity, Added<Deselecting>>,
    ring_query: Query<(Entity, &ChildOf), With<SelectionRing>>,
) {
    let deselected: HashSet<Entity> = deselected_query.iter().collect();
    if deselected.is_empty() {
        return;
    }

    for (ring, child_of) in ring_query.iter() {
        if deselected.contains(&child_of.parent()) {
            commands.entity(ring).despawn();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring_parents(world: &mut World) -> Vec<Entity> {
        world
            .query_filtered::<&ChildOf, With<SelectionRing>>()
            .iter(world)
            .map(|child_of| child_of.parent())
            .collect()
    }

    #[test]
    fn selecting_spawns_ring_and_deselecting_removes_it() {
        let mut world = World::new();
        world.init_resource::<Assets<Mesh>>();
        world.init_resource::<Assets<StandardMaterial>>();

        let mut schedule = Schedule::default();
        schedule.add_systems((spawn_selection_rings, despawn_selection_rings));

        let unit = world.spawn((UnitExtents(Vec3::new(0.8, 1.5, 0.8)), Selecting)).id();
        let bystander = world.spawn(UnitExtents(Vec3::splat(1.0))).id();
        schedule.run(&mut world);
        assert_eq!(ring_parents(&mut world), vec![unit]);

        world.entity_mut(unit).remove::<Selecting>().insert(Deselecting);
        world.entity_mut(bystander).insert(Deselecting);
        schedule.run(&mut world);
        assert!(ring_parents(&mut world).is_empty());
    }
}
