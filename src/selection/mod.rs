// Selection module - click-to-toggle unit selection
//
// Submodules:
// - rule: the pure toggle decision for a single unit
// - toggle: parallel pass over a unit snapshot that records edits
// - commands: deferred edit buffer, playback and transition tag cleanup
// - input: mouse-to-unit input mapping and the cursor ray
// - bounds: world-space unit bounds maintenance
// - visuals: selection rings driven by the transition tags

mod bounds;
mod commands;
mod input;
mod rule;
mod toggle;
pub mod visuals;

use bevy::prelude::*;

use bounds::sync_unit_bounds;
use commands::{clear_transition_tags, playback_selection_commands, SelectionCommandBuffer};
use input::{map_player_input, update_pointer_ray, PointerRay};
use toggle::plan_selection_toggles;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SelectionSet {
    /// Input mapping, the toggle pass and its playback
    Toggle,
    /// Presentation reacting to this frame's transition tags
    Feedback,
}

/// Core selection logic; needs `ButtonInput<MouseButton>` from the input plugin
pub struct SelectionPlugin;

impl Plugin for SelectionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerRay>()
            .init_resource::<SelectionCommandBuffer>()
            .configure_sets(Update, SelectionSet::Toggle.before(SelectionSet::Feedback))
            .add_systems(
                Update,
                (
                    clear_transition_tags,
                    map_player_input,
                    update_pointer_ray,
                    sync_unit_bounds,
                    plan_selection_toggles,
                    // Barrier: runs only after the pass has finished recording
                    playback_selection_commands,
                )
                    .chain()
                    .in_set(SelectionSet::Toggle),
            );
    }
}

/// Selection rings; requires the render and PBR plugins
pub struct SelectionVisualsPlugin;

impl Plugin for SelectionVisualsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (visuals::spawn_selection_rings, visuals::despawn_selection_rings).in_set(SelectionSet::Feedback),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::input::InputPlugin;
    use crate::types::{PlayerInput, Selected, Unit, UnitBounds};

    #[test]
    fn plugin_runs_a_frame_without_window() {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, InputPlugin, SelectionPlugin));
        let unit = app
            .world_mut()
            .spawn((Unit, PlayerInput::default(), UnitBounds::from_center(Vec3::ZERO, Vec3::ONE)))
            .id();

        app.update();

        assert!(app.world().resource::<PointerRay>().0.is_none());
        assert!(app.world().resource::<SelectionCommandBuffer>().is_empty());
        assert!(app.world().get::<Selected>(unit).is_none());
    }
}
