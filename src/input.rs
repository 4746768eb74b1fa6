use glam::Vec2;
use web_sys as web;

/// Which orbit gesture a pointer drag performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragMode {
    Rotate,
    Pan,
}

#[derive(Default, Clone, Copy, Debug)]
pub struct DragState {
    pub active: bool,
    pub pointer_id: i32,
    pub last: Vec2,
    pub mode: Option<DragMode>,
}

impl DragState {
    pub fn begin(&mut self, pointer_id: i32, pos: Vec2, mode: DragMode) {
        self.active = true;
        self.pointer_id = pointer_id;
        self.last = pos;
        self.mode = Some(mode);
    }

    /// Movement since the last event for the tracked pointer.
    pub fn step(&mut self, pointer_id: i32, pos: Vec2) -> Option<(DragMode, Vec2)> {
        if !self.active || pointer_id != self.pointer_id {
            return None;
        }
        let delta = pos - self.last;
        self.last = pos;
        self.mode.map(|m| (m, delta))
    }

    pub fn end(&mut self, pointer_id: i32) {
        if pointer_id == self.pointer_id {
            *self = DragState::default();
        }
    }
}

/// Primary button orbits; secondary or a held modifier pans. The middle
/// button is left alone (zoom is on the wheel).
#[inline]
pub fn drag_mode_for(button: i16, modifier: bool) -> Option<DragMode> {
    match button {
        0 if modifier => Some(DragMode::Pan),
        0 => Some(DragMode::Rotate),
        2 => Some(DragMode::Pan),
        _ => None,
    }
}

/// Wheel delta in pixels to zoom notches; positive zooms out.
#[inline]
pub fn wheel_notches(delta_y: f64, notch_px: f32) -> f32 {
    if notch_px <= 0.0 {
        return 0.0;
    }
    (delta_y as f32 / notch_px).clamp(-5.0, 5.0)
}

#[inline]
pub fn pointer_css_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

#[inline]
pub fn format_resolution(v: f32) -> String {
    format!("{:.3}", v)
}

#[inline]
pub fn format_scale(v: f32) -> String {
    format!("{:.2}", v)
}

/// Parse a slider value, rejecting anything that is not a finite number.
#[inline]
pub fn parse_slider(raw: &str) -> Option<f32> {
    raw.trim().parse::<f32>().ok().filter(|v| v.is_finite())
}
