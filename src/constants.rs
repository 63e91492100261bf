// Tuning constants for the selection demo
use bevy::prelude::Color;

// RTS Camera settings
pub const CAMERA_SPEED: f32 = 40.0;
pub const CAMERA_ZOOM_SPEED: f32 = 6.0;
pub const CAMERA_MIN_DISTANCE: f32 = 10.0;
pub const CAMERA_MAX_DISTANCE: f32 = 150.0;
pub const CAMERA_ROTATION_SPEED: f32 = 0.005;
pub const CAMERA_INITIAL_DISTANCE: f32 = 60.0;
pub const CAMERA_INITIAL_PITCH: f32 = -0.9;
pub const CAMERA_MIN_PITCH: f32 = -1.5;
pub const CAMERA_MAX_PITCH: f32 = -0.1;

// Unit grid layout
pub const UNIT_GRID_ROWS: usize = 8;
pub const UNIT_GRID_COLUMNS: usize = 12;
pub const UNIT_SPACING: f32 = 4.0;
pub const UNIT_WIDTH: f32 = 1.6;
pub const UNIT_MIN_HEIGHT: f32 = 1.2;
pub const UNIT_MAX_HEIGHT: f32 = 3.5;
pub const UNIT_COLOR: Color = Color::srgb(0.55, 0.57, 0.62);

// Ground
pub const GROUND_SIZE: f32 = 120.0;
pub const GROUND_COLOR: Color = Color::srgb(0.22, 0.3, 0.2);

// Selection ring visuals
pub const SELECTION_RING_COLOR: Color = Color::srgba(0.2, 0.8, 1.0, 0.7);
pub const SELECTION_RING_INNER_SCALE: f32 = 1.15; // Relative to the unit's widest half-extent
pub const SELECTION_RING_OUTER_SCALE: f32 = 1.45;
pub const SELECTION_RING_GROUND_OFFSET: f32 = 0.05; // Lift above the ground to prevent z-fighting
