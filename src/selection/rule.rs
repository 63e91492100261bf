// Click toggle rule - pure per-unit decision, no ECS access

use super::commands::SelectionEdit;

/// One-frame transition emitted when a unit's selection flips
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionTag {
    Selecting,
    Deselecting,
}

/// Result of evaluating the toggle rule for a single unit
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub selected: bool,              // Selection state after playback
    pub tag: Option<TransitionTag>,  // None when nothing changes
}

impl ToggleOutcome {
    /// Structural edits needed to reach this outcome, in playback order
    pub fn edits(&self) -> Option<[SelectionEdit; 2]> {
        self.tag.map(|tag| match tag {
            TransitionTag::Selecting => [SelectionEdit::AddMark, SelectionEdit::SetTransition(tag)],
            TransitionTag::Deselecting => [SelectionEdit::RemoveMark, SelectionEdit::SetTransition(tag)],
        })
    }
}

/// A clicked unit under the pointer flips its selection; everything else is left alone.
/// `currently_selected` must come from the pre-pass snapshot.
pub fn toggle_outcome(clicked: bool, intersects: bool, currently_selected: bool) -> ToggleOutcome {
    if !(clicked && intersects) {
        return ToggleOutcome {
            selected: currently_selected,
            tag: None,
        };
    }

    if currently_selected {
        ToggleOutcome {
            selected: false,
            tag: Some(TransitionTag::Deselecting),
        }
    } else {
        ToggleOutcome {
            selected: true,
            tag: Some(TransitionTag::Selecting),
        }
    }
}
