use banner_core::{Layout, Rect, Viewport};
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Look up a required anchor, failing setup with the element id when absent.
pub fn require_element<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{} has unexpected type: {:?}", id, e))
}

pub fn viewport(window: &web::Window) -> Viewport {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(w as f32, h as f32)
}

/// Snapshot the active area's box and the emblem's rendered size.
pub fn read_layout(area: &web::Element, emblem: &web::HtmlElement) -> Layout {
    let rect = area.get_bounding_client_rect();
    Layout {
        area: Rect::new(
            rect.left() as f32,
            rect.top() as f32,
            rect.width() as f32,
            rect.height() as f32,
        ),
        emblem_size: Vec2::new(emblem.offset_width() as f32, emblem.offset_height() as f32),
    }
}

pub fn is_touch_device(window: &web::Window) -> bool {
    js_sys::Reflect::has(window, &"ontouchstart".into()).unwrap_or(false)
        || window.navigator().max_touch_points() > 0
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

struct Registered {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

/// Event listeners that can be removed again on teardown.
#[derive(Default)]
pub struct Listeners {
    entries: Vec<Registered>,
}

impl Listeners {
    pub fn add(
        &mut self,
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        self.entries.push(Registered {
            target: target.clone(),
            event,
            closure,
        });
    }

    /// Same as [`Listeners::add`] but non-passive, so the handler may call
    /// `prevent_default` on touch events.
    pub fn add_active(
        &mut self,
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(false);
        _ = target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &opts,
        );
        self.entries.push(Registered {
            target: target.clone(),
            event,
            closure,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn remove_all(&mut self) {
        for r in self.entries.drain(..) {
            _ = r
                .target
                .remove_event_listener_with_callback(r.event, r.closure.as_ref().unchecked_ref());
        }
    }
}
