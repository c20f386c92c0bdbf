use super::InputWiring;
use crate::dom::Listeners;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

pub(super) fn wire(w: &InputWiring, listeners: &mut Listeners) {
    wire_mousemove(w, listeners);
    wire_mouseenter(w, listeners);
    wire_click(w, listeners);
}

#[inline]
fn client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

fn wire_mousemove(w: &InputWiring, listeners: &mut Listeners) {
    let w2 = w.clone();
    listeners.add(&w.document, "mousemove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let layout = w2.layout();
        w2.scene.borrow_mut().pointer_move(client_pos(ev), &layout);
    });
}

fn wire_mouseenter(w: &InputWiring, listeners: &mut Listeners) {
    let w2 = w.clone();
    listeners.add(&w.emblem, "mouseenter", move |_ev| {
        w2.scene.borrow_mut().pointer_enter_emblem();
    });
}

fn wire_click(w: &InputWiring, listeners: &mut Listeners) {
    let w2 = w.clone();
    listeners.add(&w.emblem, "click", move |_ev| {
        let layout = w2.layout();
        w2.scene.borrow_mut().click_emblem(&layout);
        log::debug!("[mouse] click");
    });
}
