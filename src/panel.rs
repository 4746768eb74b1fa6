//! Left-hand model list and the (hidden) ASCII control panel.
//!
//! The control panel carries the `hidden` class in the page, so it is not
//! user-facing, but every control is wired and reflects controller state.

use crate::constants::*;
use crate::dom;
use crate::input::{format_resolution, format_scale, parse_slider};
use ascii_scene_core::{
    AsciiUpdate, MeshCache, SceneController, MODELS, RAMP_PRESETS, RESOLUTION_MAX,
    RESOLUTION_MIN, USER_SCALE_MAX, USER_SCALE_MIN,
};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct PanelWiring {
    pub document: web::Document,
    pub controller: Rc<RefCell<SceneController>>,
    pub cache: Rc<RefCell<MeshCache>>,
}

pub fn wire(w: PanelWiring) -> anyhow::Result<()> {
    build_model_list(&w)?;
    build_presets(&w)?;
    wire_sliders(&w);
    wire_invert(&w);
    wire_reset(&w);
    sync_controls(&w.document, &w.controller.borrow());
    if let Some(panel) = w.document.get_element_by_id(CONTROLS_ID) {
        log::debug!(
            "[panel] controls wired (hidden: {})",
            panel.class_list().contains(HIDDEN_CLASS)
        );
    }
    Ok(())
}

fn create_button(document: &web::Document, label: &str) -> anyhow::Result<web::Element> {
    let el = document
        .create_element("button")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    _ = el.set_attribute("type", "button");
    el.set_text_content(Some(label));
    Ok(el)
}

fn build_model_list(w: &PanelWiring) -> anyhow::Result<()> {
    let list = w
        .document
        .get_element_by_id(MODEL_LIST_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", MODEL_LIST_ID))?;
    for model in MODELS {
        let id = model.id;
        let button = create_button(&w.document, model.name)?;
        _ = button.set_attribute("data-model-id", id);
        list.append_child(&button)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let w = w.clone();
        dom::add_listener(&button, "click", move |_: web::MouseEvent| {
            {
                let mut cache = w.cache.borrow_mut();
                w.controller.borrow_mut().select_model(id, &mut *cache);
            }
            sync_model_list(&w.document, &w.controller.borrow());
        });
    }
    sync_model_list(&w.document, &w.controller.borrow());
    Ok(())
}

/// Highlight the selected model's label.
pub fn sync_model_list(document: &web::Document, controller: &SceneController) {
    let Some(list) = document.get_element_by_id(MODEL_LIST_ID) else {
        return;
    };
    let buttons = list.children();
    for i in 0..buttons.length() {
        if let Some(el) = buttons.item(i) {
            let selected = el.get_attribute("data-model-id").as_deref() == Some(controller.selected_id());
            dom::set_class(&el, ACTIVE_CLASS, selected);
        }
    }
}

fn build_presets(w: &PanelWiring) -> anyhow::Result<()> {
    let Some(container) = w.document.get_element_by_id(PRESETS_ID) else {
        log::warn!("missing #{}", PRESETS_ID);
        return Ok(());
    };
    for preset in RAMP_PRESETS {
        let button = create_button(&w.document, preset.label)?;
        container
            .append_child(&button)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let w = w.clone();
        let characters = preset.characters;
        dom::add_listener(&button, "click", move |_: web::MouseEvent| {
            apply_update(&w, AsciiUpdate::Characters(characters.to_string()));
        });
    }
    Ok(())
}

fn apply_update(w: &PanelWiring, update: AsciiUpdate) {
    if let Err(e) = w.controller.borrow_mut().update_ascii_setting(update) {
        log::warn!("rejected ASCII setting: {}", e);
    }
    sync_controls(&w.document, &w.controller.borrow());
}

fn wire_sliders(w: &PanelWiring) {
    if let Some(input) = dom::input_by_id(&w.document, RESOLUTION_INPUT_ID) {
        input.set_min(&RESOLUTION_MIN.to_string());
        input.set_max(&RESOLUTION_MAX.to_string());
        input.set_step(&RESOLUTION_STEP.to_string());
        let (w, el) = (w.clone(), input.clone());
        dom::add_listener(&input, "input", move |_: web::Event| {
            if let Some(v) = parse_slider(&el.value()) {
                apply_update(&w, AsciiUpdate::Resolution(v));
            }
        });
    }
    if let Some(input) = dom::input_by_id(&w.document, SCALE_INPUT_ID) {
        input.set_min(&USER_SCALE_MIN.to_string());
        input.set_max(&USER_SCALE_MAX.to_string());
        input.set_step(&SCALE_STEP.to_string());
        let (w, el) = (w.clone(), input.clone());
        dom::add_listener(&input, "input", move |_: web::Event| {
            if let Some(v) = parse_slider(&el.value()) {
                w.controller.borrow_mut().set_user_scale(v);
                sync_controls(&w.document, &w.controller.borrow());
            }
        });
    }
}

fn wire_invert(w: &PanelWiring) {
    if let Some(input) = dom::input_by_id(&w.document, INVERT_INPUT_ID) {
        let (w, el) = (w.clone(), input.clone());
        dom::add_listener(&input, "change", move |_: web::Event| {
            apply_update(&w, AsciiUpdate::Invert(el.checked()));
        });
    }
}

fn wire_reset(w: &PanelWiring) {
    let w2 = w.clone();
    dom::add_click_listener(&w.document, RESET_BUTTON_ID, move || {
        w2.controller.borrow_mut().reset_settings();
        sync_controls(&w2.document, &w2.controller.borrow());
    });
}

/// Push controller state into the panel inputs and readouts.
pub fn sync_controls(document: &web::Document, controller: &SceneController) {
    let ascii = controller.ascii();
    if let Some(input) = dom::input_by_id(document, RESOLUTION_INPUT_ID) {
        input.set_value(&ascii.resolution.to_string());
    }
    dom::set_text(document, RESOLUTION_READOUT_ID, &format_resolution(ascii.resolution));
    if let Some(input) = dom::input_by_id(document, SCALE_INPUT_ID) {
        input.set_value(&controller.user_scale().to_string());
    }
    dom::set_text(document, SCALE_READOUT_ID, &format_scale(controller.user_scale()));
    if let Some(input) = dom::input_by_id(document, INVERT_INPUT_ID) {
        input.set_checked(ascii.invert);
    }
}
