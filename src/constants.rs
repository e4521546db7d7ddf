// Page, DOM and renderer constants. Engine tuning lives in roomviz_core::constants.

// Page elements
pub const CANVAS_ID: &str = "renderCanvas";
pub const AXIS_LABELS_ID: &str = "axisLabels"; // 2d canvas stacked over the scene
pub const DIMENSIONS_DISPLAY_ID: &str = "dimensionsDisplay";
pub const STATUS_ID: &str = "statusMessage";
pub const SNAP_TOGGLE_ID: &str = "snapToggle";

// Inputs
pub const ROOM_WIDTH_ID: &str = "roomWidth";
pub const ROOM_LENGTH_ID: &str = "roomLength";
pub const ROOM_HEIGHT_ID: &str = "roomHeight";
pub const FURNITURE_WIDTH_ID: &str = "furnitureWidth";
pub const FURNITURE_HEIGHT_ID: &str = "furnitureHeight";
pub const FURNITURE_DEPTH_ID: &str = "furnitureDepth";
pub const FURNITURE_TYPE_ID: &str = "furnitureType";
pub const UNIT_SELECT_ID: &str = "unitSelect";

// Buttons
pub const GENERATE_ROOM_ID: &str = "generateRoom";
pub const ADD_FURNITURE_ID: &str = "addFurniture";
pub const CLEAR_FURNITURE_ID: &str = "clearFurniture";
pub const REMOVE_SELECTED_ID: &str = "removeSelected";
pub const EXPORT_IMAGE_ID: &str = "exportImage";
pub const AXIS_TOGGLE_ID: &str = "axisToggle";

// Room shell
pub const WALL_THICKNESS: f32 = 0.05; // meters
pub const FLOOR_THICKNESS: f32 = 0.02; // drawn just below y = 0
pub const FLOOR_COLOR: [f32; 4] = [0.80, 0.80, 0.80, 1.0];
pub const WALL_COLOR: [f32; 4] = [0.94, 0.94, 0.94, 0.35]; // translucent so objects stay visible

// Axis overlay
pub const AXIS_LINE_WIDTH: f32 = 0.02;
pub const AXIS_ARROW_LENGTH: f32 = 0.3;
pub const AXIS_MAJOR_TICK: f32 = 0.1;
pub const AXIS_MINOR_TICK: f32 = 0.05;
pub const AXIS_TICK_WIDTH: f32 = 0.01;
pub const AXIS_X_COLOR: [f32; 4] = [1.0, 0.2, 0.2, 1.0];
pub const AXIS_Y_COLOR: [f32; 4] = [0.2, 1.0, 0.2, 1.0];
pub const AXIS_Z_COLOR: [f32; 4] = [0.2, 0.2, 1.0, 1.0];
pub const AXIS_TICK_COLOR: [f32; 4] = [0.67, 0.67, 0.67, 1.0];
pub const AXIS_LABEL_FONT_PX: f64 = 13.0; // css pixels, scaled by devicePixelRatio

// Renderer
pub const CLEAR_COLOR: [f64; 4] = [0.94, 0.94, 0.94, 1.0];
pub const MAX_INSTANCES: usize = 4096; // capacity of the instance buffer
pub const LIGHT_DIR: [f32; 3] = [0.4, 1.0, 0.3]; // directional light, world space
pub const AMBIENT_LIGHT: f32 = 0.45;

// Status line
pub const STATUS_CLEAR_MS: i32 = 2500; // how long a status message stays up
