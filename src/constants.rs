// Front-end tuning constants: DOM hooks, GPU formats and glyph atlas geometry.

// DOM element ids (see index.html)
pub const CANVAS_ID: &str = "app-canvas";
pub const MODEL_LIST_ID: &str = "model-list";
pub const CONTROLS_ID: &str = "controls";
pub const PRESETS_ID: &str = "presets";
pub const RESOLUTION_INPUT_ID: &str = "resolution";
pub const RESOLUTION_READOUT_ID: &str = "resolution-value";
pub const SCALE_INPUT_ID: &str = "scale";
pub const SCALE_READOUT_ID: &str = "scale-value";
pub const INVERT_INPUT_ID: &str = "invert";
pub const RESET_BUTTON_ID: &str = "reset";
pub const CREDITS_OPEN_ID: &str = "credits-open";
pub const CREDITS_DIALOG_ID: &str = "credits-dialog";
pub const CREDITS_CLOSE_ID: &str = "credits-close";

// CSS classes toggled from Rust
pub const HIDDEN_CLASS: &str = "hidden";
pub const ACTIVE_CLASS: &str = "active";

// Slider steps mirrored into the DOM inputs
pub const RESOLUTION_STEP: f32 = 0.01;
pub const SCALE_STEP: f32 = 0.1;

// Glyph atlas: one slot per ramp glyph, laid out in a single row
pub const ATLAS_CELL_W: u32 = 16;
pub const ATLAS_CELL_H: u32 = 32;
pub const ATLAS_FONT: &str = "28px 'DM Mono', monospace";

// Pixels of wheel delta that count as one zoom notch
pub const WHEEL_NOTCH_PX: f32 = 100.0;

