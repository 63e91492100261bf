//! Deferred selection edits
//!
//! The toggle pass never touches component storage. It records edits here,
//! keyed by the unit's slot in the pass snapshot, and `playback_selection_commands`
//! applies them on a single thread once the pass has finished.

use bevy::prelude::*;
use crate::types::{Deselecting, Selected, Selecting};

use super::rule::TransitionTag;

/// Structural change to apply to one unit
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionEdit {
    AddMark,
    RemoveMark,
    SetTransition(TransitionTag),
}

/// An edit addressed to a unit by its snapshot slot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingEdit {
    pub slot: usize,
    pub entity: Entity,
    pub edit: SelectionEdit,
}

/// Edits recorded by the toggle pass, waiting for playback
#[derive(Resource, Default, Debug)]
pub struct SelectionCommandBuffer {
    pending: Vec<PendingEdit>,
}

impl SelectionCommandBuffer {
    pub fn record(&mut self, edits: impl IntoIterator<Item = PendingEdit>) {
        self.pending.extend(edits);
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take all pending edits in slot order (recording order within a slot)
    pub fn drain_ordered(&mut self) -> Vec<PendingEdit> {
        let mut edits = std::mem::take(&mut self.pending);
        edits.sort_by_key(|pending| pending.slot);
        edits
    }
}

/// System: Play back the recorded selection edits
/// Exclusive, so it can only run once the toggle pass has completed
pub fn playback_selection_commands(world: &mut World) {
    let Some(mut buffer) = world.get_resource_mut::<SelectionCommandBuffer>() else { return };
    if buffer.is_empty() {
        return;
    }
    let edits = buffer.drain_ordered();

    let mut selected_count = 0;
    let mut deselected_count = 0;

    for PendingEdit { slot, entity, edit } in edits {
        let Ok(mut unit) = world.get_entity_mut(entity) else {
            warn!("Skipping {:?} for unit {:?} (slot {}): entity no longer exists", edit, entity, slot);
            continue;
        };

        match edit {
            SelectionEdit::AddMark => {
                unit.insert(Selected);
            }
            SelectionEdit::RemoveMark => {
                unit.remove::<Selected>();
            }
            SelectionEdit::SetTransition(TransitionTag::Selecting) => {
                unit.remove::<Deselecting>().insert(Selecting);
                selected_count += 1;
            }
            SelectionEdit::SetTransition(TransitionTag::Deselecting) => {
                unit.remove::<Selecting>().insert(Deselecting);
                deselected_count += 1;
            }
        }
    }

    info!("Selection toggled: {} selected, {} deselected", selected_count, deselected_count);
}

/// System: Strip last frame's transition tags before the next pass records new ones
pub fn clear_transition_tags(world: &mut World) {
    let tagged: Vec<Entity> = world
        .query_filtered::<Entity, Or<(With<Selecting>, With<Deselecting>)>>()
        .iter(world)
        .collect();

    for entity in tagged {
        if let Ok(mut unit) = world.get_entity_mut(entity) {
            unit.remove::<(Selecting, Deselecting)>();
        }
    }
}
