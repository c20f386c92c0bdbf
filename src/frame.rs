use crate::dom::set_style;
use crate::render;
use crate::style;
use crate::surfaces::Surfaces;
use crate::tooltip;
use banner_core::{FrameDriver, LoopControl, Scene, StopHandle};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub surfaces: Rc<Surfaces>,
    pub emblem: web::HtmlElement,
    pub tooltip: web::HtmlElement,
    pub driver: FrameDriver,
    pub last_instant: Instant,
    /// Last tooltip visibility written to the DOM.
    pub tooltip_shown: Option<bool>,
}

impl FrameContext {
    pub fn frame(&mut self) -> LoopControl {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let mut scene = self.scene.borrow_mut();
        if self.driver.advance(&mut scene, dt) == LoopControl::Stop {
            return LoopControl::Stop;
        }

        render::draw_scene(&self.surfaces, &scene);

        let pos = scene.emblem().pos;
        set_style(&self.emblem, "left", &style::px(pos.x));
        set_style(&self.emblem, "top", &style::px(pos.y));

        let visible = scene.tooltip_visible();
        if self.tooltip_shown != Some(visible) {
            tooltip::set_visible(&self.tooltip, visible);
            self.tooltip_shown = Some(visible);
        }
        LoopControl::Continue
    }
}

/// Owns the animation-frame closure so the loop can be cancelled.
pub struct LoopHandle {
    stop: StopHandle,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl LoopHandle {
    /// Stop rescheduling, cancel the pending frame and release the closure.
    /// Must not be called from inside the frame callback itself.
    pub fn stop(&self) {
        self.stop.stop();
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>, raf_id: &Cell<Option<i32>>) {
    let id = match (web::window(), tick.borrow().as_ref()) {
        (Some(w), Some(cb)) => w.request_animation_frame(cb.as_ref().unchecked_ref()).ok(),
        _ => None,
    };
    raf_id.set(id);
}

pub fn start_loop(frame_ctx: FrameContext) -> LoopHandle {
    let stop = frame_ctx.driver.stop_handle();
    let frame_ctx = Rc::new(RefCell::new(frame_ctx));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let raf_clone = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_clone.set(None);
        match frame_ctx.borrow_mut().frame() {
            LoopControl::Continue => request_frame(&tick_clone, &raf_clone),
            LoopControl::Stop => log::info!("[frame] loop stopped"),
        }
    }) as Box<dyn FnMut()>));
    request_frame(&tick, &raf_id);

    LoopHandle { stop, raf_id, tick }
}
