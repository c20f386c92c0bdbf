use super::InputWiring;
use crate::dom::Listeners;
use banner_core::TouchMode;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

pub(super) fn wire(w: &InputWiring, listeners: &mut Listeners) {
    wire_touchstart(w, listeners);
    wire_touchmove(w, listeners);
    wire_touchend(w, listeners);
}

/// First touch of the active list, or of the changed list for `touchend`
/// where the lifted finger is no longer active.
fn touch_pos(ev: &web::TouchEvent, changed: bool) -> Option<Vec2> {
    let list = if changed {
        ev.changed_touches()
    } else {
        ev.touches()
    };
    let touch = list.item(0)?;
    Some(Vec2::new(touch.client_x() as f32, touch.client_y() as f32))
}

fn wire_touchstart(w: &InputWiring, listeners: &mut Listeners) {
    let w2 = w.clone();
    listeners.add_active(&w.area, "touchstart", move |ev| {
        let Some(tev) = ev.dyn_ref::<web::TouchEvent>() else {
            return;
        };
        let mut scene = w2.scene.borrow_mut();
        // Page scrolling only has to be suppressed when the finger drags
        if scene.config().drag.touch == TouchMode::Drag {
            tev.prevent_default();
        }
        let Some(p) = touch_pos(tev, false) else {
            return;
        };
        let layout = w2.layout();
        scene.touch_start(p, &layout, js_sys::Date::now());
    });
}

fn wire_touchmove(w: &InputWiring, listeners: &mut Listeners) {
    let w2 = w.clone();
    listeners.add_active(&w.area, "touchmove", move |ev| {
        let Some(tev) = ev.dyn_ref::<web::TouchEvent>() else {
            return;
        };
        tev.prevent_default();
        let Some(p) = touch_pos(tev, false) else {
            return;
        };
        let layout = w2.layout();
        w2.scene.borrow_mut().touch_move(p, &layout);
    });
}

fn wire_touchend(w: &InputWiring, listeners: &mut Listeners) {
    let w2 = w.clone();
    listeners.add(&w.area, "touchend", move |ev| {
        let Some(tev) = ev.dyn_ref::<web::TouchEvent>() else {
            return;
        };
        let Some(p) = touch_pos(tev, true) else {
            return;
        };
        let layout = w2.layout();
        let now_ms = js_sys::Date::now();
        w2.scene.borrow_mut().touch_end(p, &layout, now_ms);
    });
}
