//! Click toggle pass
//!
//! Snapshots every unit, then evaluates the toggle rule for each one in parallel.
//! Selection state is read from the snapshot only, so toggles within one frame
//! are decided against pre-frame state. Results go to the command buffer.

use bevy::prelude::*;
use rayon::prelude::*;
use crate::types::{PlayerInput, Selected, Unit, UnitBounds};

use super::commands::{PendingEdit, SelectionCommandBuffer};
use super::input::PointerRay;
use super::rule::toggle_outcome;

/// Read-only view of a unit taken before the parallel pass
#[derive(Clone, Copy, Debug)]
pub struct UnitSnapshot {
    pub slot: usize,
    pub entity: Entity,
    pub clicked: bool,
    pub bounds: UnitBounds,
    pub selected: bool,
}

/// Evaluate the toggle rule for every unit against one pointer ray.
/// Pure over its inputs: the same snapshot always yields the same edits.
pub fn plan_toggles(units: &[UnitSnapshot], ray: Ray3d) -> Vec<PendingEdit> {
    units
        .par_iter()
        .flat_map_iter(|unit| {
            // Only clicked units pay for the hit test
            let intersects = unit.clicked && unit.bounds.intersects(ray);
            let outcome = toggle_outcome(unit.clicked, intersects, unit.selected);

            outcome
                .edits()
                .into_iter()
                .flatten()
                .map(move |edit| PendingEdit {
                    slot: unit.slot,
                    entity: unit.entity,
                    edit,
                })
        })
        .collect()
}

/// System: Record selection toggles for units clicked under the pointer
pub fn plan_selection_toggles(
    pointer: Res<PointerRay>,
    unit_query: Query<(Entity, &PlayerInput, &UnitBounds, Has<Selected>), With<Unit>>,
    mut buffer: ResMut<SelectionCommandBuffer>,
) {
    let Some(ray) = pointer.0 else { return };

    let snapshot: Vec<UnitSnapshot> = unit_query
        .iter()
        .enumerate()
        .map(|(slot, (entity, input, bounds, selected))| UnitSnapshot {
            slot,
            entity,
            clicked: input.left_click,
            bounds: *bounds,
            selected,
        })
        .collect();

    if !snapshot.iter().any(|unit| unit.clicked) {
        return;
    }

    let edits = plan_toggles(&snapshot, ray);

    // Two edits per toggled unit (mark + transition)
    let toggled = edits.len() / 2;
    if toggled > 1 {
        // Overlapping hits are not disambiguated: every unit under the ray flips
        debug!("Click ray hit {} units; toggling all of them", toggled);
    }

    buffer.record(edits);
}
