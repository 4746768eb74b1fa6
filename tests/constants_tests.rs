// Host-side tests for front-end constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use ascii_scene_core::{RESOLUTION_MAX, RESOLUTION_MIN, USER_SCALE_MAX, USER_SCALE_MIN};
use constants::*;

#[test]
fn dom_ids_are_unique_and_non_empty() {
    let ids = [
        CANVAS_ID,
        MODEL_LIST_ID,
        CONTROLS_ID,
        PRESETS_ID,
        RESOLUTION_INPUT_ID,
        RESOLUTION_READOUT_ID,
        SCALE_INPUT_ID,
        SCALE_READOUT_ID,
        INVERT_INPUT_ID,
        RESET_BUTTON_ID,
        CREDITS_OPEN_ID,
        CREDITS_DIALOG_ID,
        CREDITS_CLOSE_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        assert!(!a.contains(' '), "{a} is not a valid id");
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn index_html_carries_every_wired_id() {
    let html = include_str!("../index.html");
    for id in [
        CANVAS_ID,
        MODEL_LIST_ID,
        CONTROLS_ID,
        PRESETS_ID,
        RESOLUTION_INPUT_ID,
        SCALE_INPUT_ID,
        INVERT_INPUT_ID,
        RESET_BUTTON_ID,
        CREDITS_OPEN_ID,
        CREDITS_DIALOG_ID,
        CREDITS_CLOSE_ID,
    ] {
        assert!(html.contains(&format!("id=\"{id}\"")), "missing #{id}");
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn slider_steps_divide_their_ranges_sensibly() {
    assert!(RESOLUTION_STEP > 0.0 && RESOLUTION_STEP < RESOLUTION_MAX - RESOLUTION_MIN);
    assert!(SCALE_STEP > 0.0 && SCALE_STEP < USER_SCALE_MAX - USER_SCALE_MIN);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn atlas_cells_are_taller_than_wide() {
    assert!(ATLAS_CELL_W > 0);
    assert_eq!(ATLAS_CELL_H, 2 * ATLAS_CELL_W);
    assert!(WHEEL_NOTCH_PX > 0.0);
}
