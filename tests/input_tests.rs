// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn primary_button_rotates_and_others_pan() {
    assert_eq!(drag_mode_for(0, false), Some(DragMode::Rotate));
    assert_eq!(drag_mode_for(0, true), Some(DragMode::Pan));
    assert_eq!(drag_mode_for(1, false), None);
    assert_eq!(drag_mode_for(1, true), None);
    assert_eq!(drag_mode_for(2, false), Some(DragMode::Pan));
    assert_eq!(drag_mode_for(3, false), None);
}

#[test]
fn drag_reports_deltas_for_the_captured_pointer_only() {
    let mut d = DragState::default();
    assert_eq!(d.step(1, Vec2::new(5.0, 5.0)), None);

    d.begin(7, Vec2::new(10.0, 20.0), DragMode::Rotate);
    assert_eq!(d.step(8, Vec2::new(50.0, 50.0)), None);
    assert_eq!(
        d.step(7, Vec2::new(13.0, 18.0)),
        Some((DragMode::Rotate, Vec2::new(3.0, -2.0)))
    );
    // deltas are relative to the previous event, not the drag start
    assert_eq!(
        d.step(7, Vec2::new(14.0, 18.0)),
        Some((DragMode::Rotate, Vec2::new(1.0, 0.0)))
    );
}

#[test]
fn ending_a_different_pointer_keeps_the_drag() {
    let mut d = DragState::default();
    d.begin(3, Vec2::ZERO, DragMode::Pan);
    d.end(4);
    assert!(d.active);
    d.end(3);
    assert!(!d.active);
    assert_eq!(d.mode, None);
}

#[test]
fn wheel_deltas_become_clamped_notches() {
    assert_eq!(wheel_notches(100.0, 100.0), 1.0);
    assert_eq!(wheel_notches(-50.0, 100.0), -0.5);
    assert_eq!(wheel_notches(10_000.0, 100.0), 5.0);
    assert_eq!(wheel_notches(100.0, 0.0), 0.0);
}

#[test]
fn readouts_use_fixed_decimals() {
    assert_eq!(format_resolution(0.4), "0.400");
    assert_eq!(format_resolution(0.05), "0.050");
    assert_eq!(format_scale(1.0), "1.00");
    assert_eq!(format_scale(2.346), "2.35");
}

#[test]
fn slider_values_must_be_finite_numbers() {
    assert_eq!(parse_slider("0.25"), Some(0.25));
    assert_eq!(parse_slider(" 1.5 "), Some(1.5));
    assert_eq!(parse_slider(""), None);
    assert_eq!(parse_slider("abc"), None);
    assert_eq!(parse_slider("NaN"), None);
    assert_eq!(parse_slider("inf"), None);
}
