//! Credits dialog. Visibility lives in the controller; the DOM follows it.

use crate::constants::{CREDITS_CLOSE_ID, CREDITS_DIALOG_ID, CREDITS_OPEN_ID, HIDDEN_CLASS};
use crate::dom;
use ascii_scene_core::SceneController;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(CREDITS_DIALOG_ID) {
        _ = el.class_list().remove_1(HIDDEN_CLASS);
        _ = el.set_attribute("aria-hidden", "false");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(CREDITS_DIALOG_ID) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
        _ = el.set_attribute("aria-hidden", "true");
    }
}

/// Apply the controller's dialog flag to the DOM.
pub fn sync(document: &web::Document, controller: &SceneController) {
    if controller.credits_open() {
        show(document);
    } else {
        hide(document);
    }
}

fn set_open(document: &web::Document, controller: &Rc<RefCell<SceneController>>, open: bool) {
    controller.borrow_mut().set_credits_open(open);
    sync(document, &controller.borrow());
}

/// Trigger opens; close button, backdrop click and Escape dismiss.
pub fn wire(document: &web::Document, controller: Rc<RefCell<SceneController>>) {
    let (doc, ctl) = (document.clone(), controller.clone());
    dom::add_click_listener(document, CREDITS_OPEN_ID, move || set_open(&doc, &ctl, true));

    let (doc, ctl) = (document.clone(), controller.clone());
    dom::add_click_listener(document, CREDITS_CLOSE_ID, move || set_open(&doc, &ctl, false));

    if let Some(backdrop) = document.get_element_by_id(CREDITS_DIALOG_ID) {
        let (doc, ctl) = (document.clone(), controller.clone());
        let backdrop_el = backdrop.clone();
        dom::add_listener(&backdrop, "click", move |ev: web::MouseEvent| {
            // only clicks on the backdrop itself, not on the dialog content
            let on_backdrop = ev
                .target()
                .and_then(|t| t.dyn_into::<web::Element>().ok())
                .is_some_and(|t| t == backdrop_el);
            if on_backdrop {
                set_open(&doc, &ctl, false);
            }
        });
    }

    if let Some(window) = web::window() {
        let (doc, ctl) = (document.clone(), controller.clone());
        dom::add_listener(&window, "keydown", move |ev: web::KeyboardEvent| {
            if ev.key() == "Escape" && ctl.borrow().credits_open() {
                set_open(&doc, &ctl, false);
                ev.prevent_default();
            }
        });
    }

    sync(document, &controller.borrow());
}
