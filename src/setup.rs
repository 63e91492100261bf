// Scene setup: ground, light, camera and a grid of selectable units
use bevy::prelude::*;
use rand::Rng;
use crate::camera::orbit_transform;
use crate::constants::*;
use crate::types::{PlayerInput, RtsCamera, Unit, UnitBounds, UnitExtents};

pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: GROUND_COLOR,
            perceptual_roughness: 0.9,
            ..default()
        })),
        Transform::default(),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 12_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(EulerRot::XYZ, -0.9, 0.4, 0.0)),
    ));

    let rts_camera = RtsCamera {
        focus_point: Vec3::ZERO,
        yaw: 0.0,
        pitch: CAMERA_INITIAL_PITCH,
        distance: CAMERA_INITIAL_DISTANCE,
    };
    commands.spawn((Camera3d::default(), orbit_transform(&rts_camera), rts_camera));
}

/// Grid positions on the ground plane, centred on the origin
pub fn unit_grid_positions(rows: usize, columns: usize, spacing: f32) -> Vec<Vec2> {
    let half_width = (columns.saturating_sub(1)) as f32 * spacing * 0.5;
    let half_depth = (rows.saturating_sub(1)) as f32 * spacing * 0.5;

    (0..rows)
        .flat_map(|row| (0..columns).map(move |column| (row, column)))
        .map(|(row, column)| {
            Vec2::new(
                column as f32 * spacing - half_width,
                row as f32 * spacing - half_depth,
            )
        })
        .collect()
}

pub fn spawn_units(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut rng = rand::thread_rng();
    let material = materials.add(StandardMaterial {
        base_color: UNIT_COLOR,
        ..default()
    });

    let positions = unit_grid_positions(UNIT_GRID_ROWS, UNIT_GRID_COLUMNS, UNIT_SPACING);
    for position in &positions {
        // Varying heights so neighbouring units don't share a silhouette
        let height = rng.gen_range(UNIT_MIN_HEIGHT..UNIT_MAX_HEIGHT);
        let half_extents = Vec3::new(UNIT_WIDTH * 0.5, height * 0.5, UNIT_WIDTH * 0.5);
        let center = Vec3::new(position.x, half_extents.y, position.y);

        commands.spawn((
            Mesh3d(meshes.add(Cuboid::from_size(half_extents * 2.0))),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(center),
            Unit,
            PlayerInput::default(),
            UnitExtents(half_extents),
            UnitBounds::from_center(center, half_extents),
        ));
    }

    info!("Spawned {} selectable units", positions.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_is_centred_and_spaced() {
        let positions = unit_grid_positions(2, 3, 4.0);
        assert_eq!(positions.len(), 6);
        assert_eq!(positions[0], Vec2::new(-4.0, -2.0));
        assert_eq!(positions[5], Vec2::new(4.0, 2.0));

        let sum: Vec2 = positions.iter().sum();
        assert_eq!(sum, Vec2::ZERO);
    }

    #[test]
    fn empty_grid_has_no_positions() {
        assert!(unit_grid_positions(0, 5, 2.0).is_empty());
    }
}
