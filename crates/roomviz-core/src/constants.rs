use std::time::Duration;

// Shared layout and interaction tuning constants used by the engine and the web frontend.
// All lengths are meters.

// Room defaults
pub const DEFAULT_ROOM_WIDTH: f32 = 5.0;
pub const DEFAULT_ROOM_LENGTH: f32 = 6.0;
pub const DEFAULT_ROOM_HEIGHT: f32 = 3.0;

// Creation
pub const ADD_COOLDOWN: Duration = Duration::from_millis(1000); // min gap between two additions
pub const SPAWN_STEP: f32 = 0.5; // diagonal offset per already-placed object

// Snapping
pub const NEIGHBOR_SNAP_THRESHOLD: f32 = 0.1; // 10cm
pub const METRIC_GRID_INCREMENT: f32 = 0.5;
pub const IMPERIAL_GRID_INCREMENT_FT: f32 = 1.0;

// Axis overlay
pub const AXIS_MINOR_TICKS_PER_METER: u32 = 10; // metric minor tick every 10cm
pub const AXIS_LABEL_OFFSET: f32 = 0.25; // label distance from its axis line

// Picking
pub const RAY_PARALLEL_EPSILON: f32 = 1e-6;

// Object appearance
pub const OBJECT_OPACITY: f32 = 0.8;
pub const SELECTED_OPACITY: f32 = 0.9;
pub const SELECTED_DARKEN: f32 = 0.8; // rgb multiplier while selected

// Rotating creation palette
pub const OBJECT_PALETTE: [[f32; 3]; 6] = [
    [1.0, 0.42, 0.42],  // coral
    [0.55, 0.27, 0.07], // saddle brown
    [0.82, 0.41, 0.12], // chocolate
    [0.18, 0.31, 0.31], // slate
    [0.4, 0.26, 0.13],  // dark wood
    [0.63, 0.32, 0.18], // sienna
];

// Camera rig
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const ORBIT_ROTATE_SPEED: f32 = 0.005; // radians per pixel
pub const ORBIT_PAN_SPEED: f32 = 0.01; // world units per pixel
pub const ORBIT_ZOOM_STEP: f32 = 0.1; // world units per wheel notch
pub const ORBIT_POLAR_MIN: f32 = 0.1;
pub const ORBIT_POLAR_MAX: f32 = std::f32::consts::PI - 0.1;
pub const FRAME_DISTANCE_FACTOR: f32 = 1.5; // eye distance = factor * max room extent
pub const FRAME_HEIGHT_FACTOR: f32 = 0.8;
