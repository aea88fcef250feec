// Interaction tuning and fixed asset locations.
//
// These constants express intended behavior (sensitivities, clamp limits,
// layout offsets) and keep magic numbers out of the code.

// Number of marker slots in the image-target descriptor
pub const MAX_ANCHORS: usize = 10;

// Drag rotation (radians per CSS pixel)
pub const ROTATE_RADIANS_PER_PX: f32 = 0.01;

// Pinch zoom (scale units per CSS pixel of finger spread)
pub const ZOOM_PER_PX: f32 = 0.005;
pub const MIN_SCALE: f32 = 0.5;
pub const MAX_SCALE: f32 = 2.0;
pub const INITIAL_GESTURE_SCALE: f32 = 1.0;

// Load-time transform applied when a scene does not override it
pub const DEFAULT_MODEL_SCALE: f32 = 0.15;
pub const DEFAULT_MODEL_POSITION: [f32; 3] = [0.0, -0.4, 0.0];

// Asset layout
pub const TARGETS_DIR: &str = "./assets/targets";
pub const MODELS_DIR: &str = "./assets/models";
pub const AUDIO_DIR: &str = "./assets/audio";
pub const DRACO_DECODER_PATH: &str = "./libs/draco/";

// Scene lighting
pub const HEMISPHERE_SKY_COLOR: u32 = 0xffffff;
pub const HEMISPHERE_GROUND_COLOR: u32 = 0xbbbbff;
pub const HEMISPHERE_INTENSITY: f32 = 1.0;

// Page effects
pub const REVEAL_VISIBLE_OFFSET_PX: f64 = 150.0;
pub const FIREFLY_COUNT: usize = 20;
pub const FIREFLY_MAX_DELAY_SEC: f64 = 10.0;
pub const FIREFLY_MIN_DURATION_SEC: f64 = 10.0;
pub const FIREFLY_DURATION_SPAN_SEC: f64 = 20.0;
pub const NAV_SCROLL_OFFSET_PX: f64 = 50.0;

pub const CAMERA_DENIED_MESSAGE: &str = "Camera access denied. Please allow camera in settings.";

// Page element ids and selectors
pub const START_BUTTON_ID: &str = "startButton";
pub const PARTICLES_ID: &str = "particles";
pub const REVEAL_SELECTOR: &str = ".reveal";
pub const TAB_BUTTON_SELECTOR: &str = ".tab-btn";
pub const NAV_LINK_SELECTOR: &str = "a.navLink[href^=\"#\"]";
