// Selection input: per-unit click flags and the camera ray under the cursor
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use crate::types::{PlayerInput, RtsCamera, Unit};

/// Camera ray through the cursor for the current frame
/// None when there is no window, camera or cursor to build it from
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct PointerRay(pub Option<Ray3d>);

/// System: Map the left mouse button onto every unit's input flag
pub fn map_player_input(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut unit_query: Query<&mut PlayerInput, With<Unit>>,
) {
    let left_click = mouse_button.just_pressed(MouseButton::Left);

    for mut input in unit_query.iter_mut() {
        // Avoid flagging change detection on every unit every frame
        if input.left_click != left_click {
            input.left_click = left_click;
        }
    }
}

/// System: Rebuild the pointer ray from the primary window's cursor
pub fn update_pointer_ray(
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<RtsCamera>>,
    mut pointer: ResMut<PointerRay>,
) {
    pointer.0 = cursor_ray(&window_query, &camera_query);
}

fn cursor_ray(
    window_query: &Query<&Window, With<PrimaryWindow>>,
    camera_query: &Query<(&Camera, &GlobalTransform), With<RtsCamera>>,
) -> Option<Ray3d> {
    let window = window_query.single().ok()?;
    let (camera, camera_transform) = camera_query.single().ok()?;
    let cursor_pos = window.cursor_position()?;

    camera.viewport_to_world(camera_transform, cursor_pos).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_press_flags_units_for_one_frame() {
        let mut world = World::new();
        world.init_resource::<ButtonInput<MouseButton>>();
        let unit = world.spawn((Unit, PlayerInput::default())).id();
        let not_a_unit = world.spawn(PlayerInput::default()).id();

        let mut schedule = Schedule::default();
        schedule.add_systems(map_player_input);

        world.resource_mut::<ButtonInput<MouseButton>>().press(MouseButton::Left);
        schedule.run(&mut world);
        assert!(world.get::<PlayerInput>(unit).is_some_and(|input| input.left_click));
        assert!(world.get::<PlayerInput>(not_a_unit).is_some_and(|input| !input.left_click));

        // Held, not newly pressed
        world.resource_mut::<ButtonInput<MouseButton>>().clear();
        schedule.run(&mut world);
        assert!(world.get::<PlayerInput>(unit).is_some_and(|input| !input.left_click));
    }

    #[test]
    fn right_press_is_not_a_selection_click() {
        let mut world = World::new();
        world.init_resource::<ButtonInput<MouseButton>>();
        let unit = world.spawn((Unit, PlayerInput::default())).id();

        world.resource_mut::<ButtonInput<MouseButton>>().press(MouseButton::Right);
        let mut schedule = Schedule::default();
        schedule.add_systems(map_player_input);
        schedule.run(&mut world);

        assert!(world.get::<PlayerInput>(unit).is_some_and(|input| !input.left_click));
    }

    #[test]
    fn pointer_ray_cleared_without_window() {
        let mut world = World::new();
        world.insert_resource(PointerRay(Some(Ray3d::new(Vec3::ZERO, Dir3::NEG_Y))));

        let mut schedule = Schedule::default();
        schedule.add_systems(update_pointer_ray);
        schedule.run(&mut world);

        assert!(world.resource::<PointerRay>().0.is_none());
    }
}
