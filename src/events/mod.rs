mod pointer;
mod touch;

use crate::dom::{self, Listeners};
use crate::surfaces::Surfaces;
use banner_core::{Layout, Scene};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub window: web::Window,
    pub document: web::Document,
    pub area: web::Element,
    pub emblem: web::HtmlElement,
    pub scene: Rc<RefCell<Scene>>,
    pub surfaces: Rc<Surfaces>,
}

impl InputWiring {
    /// Layout is read fresh for every event; the area may have moved.
    #[inline]
    fn layout(&self) -> Layout {
        dom::read_layout(&self.area, &self.emblem)
    }
}

pub fn wire_input_handlers(w: &InputWiring, listeners: &mut Listeners) {
    pointer::wire(w, listeners);
    touch::wire(w, listeners);
    wire_resize(w, listeners);
}

fn wire_resize(w: &InputWiring, listeners: &mut Listeners) {
    let w2 = w.clone();
    listeners.add(&w.window, "resize", move |_ev| {
        let viewport = dom::viewport(&w2.window);
        w2.surfaces.resize(viewport);
        w2.scene.borrow_mut().resize(viewport);
    });
}
