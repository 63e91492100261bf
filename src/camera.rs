// RTS orbit camera: WASD pan, wheel zoom, right-drag rotate
// Left mouse is left free for unit selection.
use bevy::prelude::*;
use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use crate::constants::*;
use crate::types::RtsCamera;

/// Camera transform for an orbit state
pub fn orbit_transform(camera: &RtsCamera) -> Transform {
    let rotation = Quat::from_euler(EulerRot::YXZ, camera.yaw, camera.pitch, 0.0);
    let offset = rotation * Vec3::new(0.0, 0.0, camera.distance);

    Transform {
        translation: camera.focus_point + offset,
        rotation,
        ..default()
    }
}

/// System: Move the RTS camera from keyboard and mouse input
pub fn rts_camera_movement(
    time: Res<Time>,
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mouse_button_input: Res<ButtonInput<MouseButton>>,
    mut scroll_events: EventReader<MouseWheel>,
    mut mouse_motion_events: EventReader<MouseMotion>,
    mut camera_query: Query<(&mut Transform, &mut RtsCamera)>,
) {
    let Ok((mut transform, mut camera)) = camera_query.single_mut() else { return };
    let delta_time = time.delta_secs();

    if mouse_button_input.pressed(MouseButton::Right) {
        for motion in mouse_motion_events.read() {
            camera.yaw -= motion.delta.x * CAMERA_ROTATION_SPEED;
            camera.pitch = (camera.pitch - motion.delta.y * CAMERA_ROTATION_SPEED)
                .clamp(CAMERA_MIN_PITCH, CAMERA_MAX_PITCH);
        }
    } else {
        // Drop motion while not dragging so it doesn't accumulate
        mouse_motion_events.clear();
    }

    let mut movement = Vec3::ZERO;
    if keyboard_input.any_pressed([KeyCode::KeyW, KeyCode::ArrowUp]) {
        movement.z -= 1.0;
    }
    if keyboard_input.any_pressed([KeyCode::KeyS, KeyCode::ArrowDown]) {
        movement.z += 1.0;
    }
    if keyboard_input.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]) {
        movement.x -= 1.0;
    }
    if keyboard_input.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]) {
        movement.x += 1.0;
    }

    if movement != Vec3::ZERO {
        // Pan on the ground plane relative to camera yaw
        let yaw_rotation = Mat3::from_rotation_y(camera.yaw);
        camera.focus_point += yaw_rotation * (movement.normalize() * CAMERA_SPEED * delta_time);
    }

    for scroll in scroll_events.read() {
        let zoom_delta = match scroll.unit {
            MouseScrollUnit::Line => scroll.y * CAMERA_ZOOM_SPEED,
            MouseScrollUnit::Pixel => scroll.y * CAMERA_ZOOM_SPEED * 0.1,
        };
        camera.distance = (camera.distance - zoom_delta).clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
    }

    *transform = orbit_transform(&camera);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbit_looks_at_focus_point() {
        let camera = RtsCamera {
            focus_point: Vec3::new(3.0, 0.0, -4.0),
            yaw: 0.7,
            pitch: CAMERA_INITIAL_PITCH,
            distance: 25.0,
        };
        let transform = orbit_transform(&camera);

        assert!((transform.translation.distance(camera.focus_point) - 25.0).abs() < 1e-3);
        let to_focus = (camera.focus_point - transform.translation).normalize();
        assert!(transform.forward().dot(to_focus) > 0.999);
    }
}
