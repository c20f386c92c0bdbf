#![cfg(target_arch = "wasm32")]
use banner_core::{BoundsMode, FrameDriver, FxConfig, Preset, Scene};
use instant::Instant;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod render;
mod style;
mod surfaces;
mod tooltip;

use constants::*;

/// Everything `teardown` has to undo.
struct App {
    frame: frame::LoopHandle,
    listeners: dom::Listeners,
    surfaces: Rc<surfaces::Surfaces>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("banner-web starting");

    match init() {
        Ok(app) => {
            APP.with(|slot| {
                if let Some(old) = slot.borrow_mut().replace(app) {
                    old.shutdown();
                }
            });
            Ok(())
        }
        Err(e) => {
            log::error!("init error: {:?}", e);
            Err(JsValue::from_str(&format!("{:#}", e)))
        }
    }
}

/// Stop the animation, remove listeners and created canvases.
#[wasm_bindgen]
pub fn teardown() {
    APP.with(|slot| {
        if let Some(app) = slot.borrow_mut().take() {
            app.shutdown();
        }
    });
}

impl App {
    fn shutdown(mut self) {
        self.frame.stop();
        let n = self.listeners.len();
        self.listeners.remove_all();
        self.surfaces.detach();
        log::info!("[teardown] removed {} listeners", n);
    }
}

/// Preset, bounds and seed can be overridden from data attributes on the
/// active area. Unknown values fail setup rather than silently falling back.
fn read_config(area: &web::Element) -> anyhow::Result<(FxConfig, u64)> {
    let preset: Preset = area
        .get_attribute(PRESET_ATTR)
        .as_deref()
        .unwrap_or_default()
        .parse()?;
    let mut config = FxConfig::preset(preset);
    if let Some(bounds) = area.get_attribute(BOUNDS_ATTR) {
        config.drag.bounds = bounds.parse::<BoundsMode>()?;
    }
    let seed = match area.get_attribute(SEED_ATTR) {
        Some(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|e| anyhow::anyhow!("bad {}: {}", SEED_ATTR, e))?,
        None => StdRng::from_entropy().gen(),
    };
    log::info!("[config] preset={:?} bounds={:?}", preset, config.drag.bounds);
    Ok((config, seed))
}

fn init() -> anyhow::Result<App> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let emblem: web::HtmlElement = dom::require_element(&document, EMBLEM_ID)?;
    let area: web::Element = dom::require_element(&document, ACTIVE_AREA_ID)?;
    let tooltip_el: web::HtmlElement = dom::require_element(&document, TOOLTIP_ID)?;

    // Emblem above every canvas
    dom::set_style(&emblem, "position", "absolute");
    dom::set_style(&emblem, "z-index", &EMBLEM_Z_INDEX.to_string());

    let (config, seed) = read_config(&area)?;
    if let Some(copy) = &config.tooltip {
        tooltip::set_text_for_device(&tooltip_el, copy, dom::is_touch_device(&window));
    }

    let viewport = dom::viewport(&window);
    let surfaces = Rc::new(surfaces::Surfaces::attach(&document, viewport)?);
    let layout = dom::read_layout(&area, &emblem);
    let scene = Rc::new(RefCell::new(Scene::new(config, viewport, &layout, seed)?));

    let mut listeners = dom::Listeners::default();
    events::wire_input_handlers(
        &events::InputWiring {
            window: window.clone(),
            document: document.clone(),
            area: area.clone(),
            emblem: emblem.clone(),
            scene: scene.clone(),
            surfaces: surfaces.clone(),
        },
        &mut listeners,
    );

    let frame = frame::start_loop(frame::FrameContext {
        scene,
        surfaces: surfaces.clone(),
        emblem,
        tooltip: tooltip_el,
        driver: FrameDriver::new(),
        last_instant: Instant::now(),
        tooltip_shown: None,
    });

    Ok(App {
        frame,
        listeners,
        surfaces,
    })
}
