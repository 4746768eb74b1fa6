use glam::Vec3;

// Shared scene tuning constants. Units are world units, radians and seconds
// unless noted otherwise.

// Camera
pub const CAMERA_START: [f32; 3] = [0.0, 0.0, 3.0];
pub const CAMERA_FOV_DEG: f32 = 50.0; // vertical
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Orbit controls
pub const ORBIT_AUTO_ROTATE_SPEED: f32 = 2.0; // 1.0 = one turn per minute
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_STEP: f32 = 0.95; // distance factor per wheel notch
pub const ORBIT_MIN_DISTANCE: f32 = 0.1;
pub const ORBIT_MAX_DISTANCE: f32 = 100.0;
pub const ORBIT_POLAR_EPSILON: f32 = 1e-4;

// Lights
pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const DIRECTIONAL_LIGHT_POS: [f32; 3] = [10.0, 10.0, 5.0];
pub const DIRECTIONAL_INTENSITY: f32 = 1.0;
pub const POINT_LIGHT_POS: [f32; 3] = [-10.0, -10.0, -5.0];
pub const POINT_INTENSITY: f32 = 0.5;
pub const ENVIRONMENT_FILL: f32 = 0.25; // flat studio fill added on top of the lights

// Idle animation of the text entry
pub const TEXT_YAW_RATE: f32 = 0.5; // rad/s
pub const TEXT_PITCH_AMPLITUDE: f32 = 0.2; // rad
pub const TEXT_PITCH_FREQUENCY: f32 = 0.3; // rad/s inside sin()

// 3D text
pub const TEXT_STRING: &str = "XENSILICO";
pub const TEXT_SIZE: f32 = 0.5;
pub const TEXT_DEPTH: f32 = 0.2;
pub const TEXT_OFFSET: [f32; 3] = [-1.5, 0.0, 0.0];

// User controls
pub const USER_SCALE_MIN: f32 = 0.1;
pub const USER_SCALE_MAX: f32 = 3.0;
pub const USER_SCALE_DEFAULT: f32 = 1.0;
pub const RESOLUTION_MIN: f32 = 0.05;
pub const RESOLUTION_MAX: f32 = 0.5;
pub const MAX_RAMP_GLYPHS: usize = 64;

// ASCII filter defaults
pub const DEFAULT_RESOLUTION: f32 = 0.4;
pub const DEFAULT_RAMP: &str = " .:-=+*#%@";
pub const DEFAULT_FG: [u8; 3] = [0xf0, 0xff, 0xc0];
pub const DEFAULT_BG: [u8; 3] = [0x00, 0x00, 0x00];
pub const DEFAULT_INVERT: bool = false;

// Luma weights used to pick a glyph for a cell
pub const LUMA_WEIGHTS: [f32; 3] = [0.3, 0.59, 0.11];

#[inline]
pub fn camera_start_vec3() -> Vec3 {
    Vec3::from_array(CAMERA_START)
}
