//! Orbit-camera gestures on the canvas: drag to rotate, secondary drag or
//! shift-drag to pan, wheel to zoom.

use crate::constants::WHEEL_NOTCH_PX;
use crate::dom;
use crate::input::{self, DragMode, DragState};
use ascii_scene_core::OrbitCamera;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub orbit: Rc<RefCell<OrbitCamera>>,
    pub drag_state: Rc<RefCell<DragState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
    // secondary-button drags pan; keep the browser menu out of the way
    dom::add_listener(&w.canvas, "contextmenu", |ev: web::MouseEvent| {
        ev.prevent_default();
    });
}

fn wire_pointerdown(w: &InputWiring) {
    let w2 = w.clone();
    dom::add_listener(&w.canvas, "pointerdown", move |ev: web::PointerEvent| {
        let modifier = ev.shift_key() || ev.ctrl_key() || ev.meta_key();
        let Some(mode) = input::drag_mode_for(ev.button(), modifier) else {
            return;
        };
        let pos = input::pointer_css_px(&ev, &w2.canvas);
        w2.drag_state.borrow_mut().begin(ev.pointer_id(), pos, mode);
        _ = w2.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    });
}

fn wire_pointermove(w: &InputWiring) {
    let w2 = w.clone();
    dom::add_listener(&w.canvas, "pointermove", move |ev: web::PointerEvent| {
        let pos = input::pointer_css_px(&ev, &w2.canvas);
        let Some((mode, delta)) = w2.drag_state.borrow_mut().step(ev.pointer_id(), pos) else {
            return;
        };
        let (_, css_h) = dom::canvas_css_size(&w2.canvas);
        let mut orbit = w2.orbit.borrow_mut();
        match mode {
            DragMode::Rotate => orbit.rotate_by_pixels(delta.x, delta.y, css_h),
            DragMode::Pan => orbit.pan_by_pixels(delta.x, delta.y, css_h),
        }
    });
}

fn wire_pointerup(w: &InputWiring) {
    for event in ["pointerup", "pointercancel"] {
        let w2 = w.clone();
        dom::add_listener(&w.canvas, event, move |ev: web::PointerEvent| {
            w2.drag_state.borrow_mut().end(ev.pointer_id());
            _ = w2.canvas.release_pointer_capture(ev.pointer_id());
        });
    }
}

fn wire_wheel(w: &InputWiring) {
    let w2 = w.clone();
    dom::add_listener(&w.canvas, "wheel", move |ev: web::WheelEvent| {
        let notches = input::wheel_notches(ev.delta_y(), WHEEL_NOTCH_PX);
        if notches != 0.0 {
            w2.orbit.borrow_mut().zoom(notches);
        }
        ev.prevent_default();
    });
}
