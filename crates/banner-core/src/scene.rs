//! The single owned state object behind the banner.
//!
//! Input handlers and the per-frame update both go through `&mut Scene`, so
//! there is exactly one writer at a time: the browser runs each event handler
//! to completion before the next animation frame.

use crate::ambient::Ambient;
use crate::config::{BoundsMode, ConfigError, EmissionConfig, FxConfig, TouchMode};
use crate::constants::EMBLEM_START_OFFSET_Y;
use crate::emblem::{Emblem, FallStep};
use crate::geometry::{Layout, Viewport};
use crate::particles::ParticleSystem;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Which emission flavour a trail batch used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emission {
    Trail,
    Idle,
}

pub struct Scene {
    config: FxConfig,
    rng: StdRng,
    viewport: Viewport,
    emblem: Emblem,
    particles: ParticleSystem,
    ambient: Ambient,
    pointer: Vec2,
    last_emit_pointer: Vec2,
    in_area: bool,
    tooltip_visible: bool,
    last_tap_ms: Option<f64>,
    frames: u64,
}

impl Scene {
    /// The emblem starts horizontally centred in the viewport, just below the
    /// active area's top edge.
    pub fn new(
        config: FxConfig,
        viewport: Viewport,
        layout: &Layout,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let ambient = Ambient::new(&config.ambient, &config.palette, viewport, &mut rng);
        let start = Vec2::new(
            viewport.width * 0.5,
            layout.area.top + EMBLEM_START_OFFSET_Y,
        );
        log::info!(
            "[scene] {}x{} glows={} stars={} seed={}",
            viewport.width,
            viewport.height,
            ambient.glows().len(),
            ambient.stars().len(),
            seed
        );
        Ok(Self {
            config,
            rng,
            viewport,
            emblem: Emblem::new(start, layout.emblem_size),
            particles: ParticleSystem::new(),
            ambient,
            pointer: start,
            last_emit_pointer: start,
            in_area: false,
            tooltip_visible: true,
            last_tap_ms: None,
            frames: 0,
        })
    }

    pub fn config(&self) -> &FxConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn emblem(&self) -> &Emblem {
        &self.emblem
    }

    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    pub fn ambient(&self) -> &Ambient {
        &self.ambient
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn in_active_area(&self) -> bool {
        self.in_area
    }

    pub fn tooltip_visible(&self) -> bool {
        self.tooltip_visible
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    // ---------------- Mouse ----------------

    pub fn pointer_move(&mut self, p: Vec2, layout: &Layout) {
        self.pointer = p;
        self.in_area = match self.config.drag.bounds {
            BoundsMode::Vertical => layout.area.contains_y(p.y),
            BoundsMode::Both => layout.area.contains(p),
        };
        if !self.in_area && self.emblem.is_dragging() {
            self.start_fall(layout);
        }
    }

    pub fn pointer_enter_emblem(&mut self) {
        if self.emblem.begin_drag() {
            self.tooltip_visible = false;
            log::debug!("[emblem] drag start");
        }
    }

    pub fn click_emblem(&mut self, layout: &Layout) {
        self.start_fall(layout);
    }

    // ---------------- Touch ----------------

    /// `now_ms` is any monotonic millisecond clock; only differences are used.
    pub fn touch_start(&mut self, p: Vec2, layout: &Layout, now_ms: f64) {
        match self.config.drag.touch {
            TouchMode::Drag => self.grab_by_touch(p, layout),
            TouchMode::DoubleTapOnly => {
                if self.is_double_tap(now_ms) {
                    self.drop_at_tap(p, layout, false);
                }
                self.last_tap_ms = Some(now_ms);
            }
        }
    }

    fn grab_by_touch(&mut self, p: Vec2, layout: &Layout) {
        if !layout.area.contains(p) || self.emblem.is_falling() {
            return;
        }
        self.pointer = p;
        self.in_area = true;
        self.emblem.size = layout.emblem_size;
        self.emblem.place_centered(p);
        self.emblem.begin_drag();
        self.tooltip_visible = false;
    }

    pub fn touch_move(&mut self, p: Vec2, layout: &Layout) {
        if !self.emblem.is_dragging() {
            return;
        }
        self.pointer = p;
        self.in_area = layout.area.contains(p);
        if !self.in_area {
            self.start_fall(layout);
        }
    }

    /// Only meaningful in [`TouchMode::Drag`]; with double-tap-only touch
    /// there is never a drag to end.
    pub fn touch_end(&mut self, p: Vec2, layout: &Layout, now_ms: f64) {
        if self.config.drag.touch != TouchMode::Drag {
            return;
        }
        let inside = layout.area.contains(p);
        if self.emblem.is_dragging() {
            self.pointer = p;
            if inside {
                self.emblem.release();
                self.emblem.size = layout.emblem_size;
                self.emit_trail();
            } else {
                self.start_fall(layout);
            }
        } else if self.is_double_tap(now_ms) {
            self.drop_at_tap(p, layout, true);
        }
        self.last_tap_ms = Some(now_ms);
    }

    /// Centre the emblem on a double tap inside the area and let it fall.
    fn drop_at_tap(&mut self, p: Vec2, layout: &Layout, emit: bool) {
        if !layout.area.contains(p) || self.emblem.is_falling() {
            return;
        }
        self.pointer = p;
        self.emblem.size = layout.emblem_size;
        self.emblem.place_centered(p);
        if emit {
            self.last_emit_pointer = p;
            self.emit_trail();
        }
        self.start_fall(layout);
    }

    fn is_double_tap(&self, now_ms: f64) -> bool {
        self.last_tap_ms
            .is_some_and(|last| now_ms - last < self.config.drag.double_tap_window_ms)
    }

    // ---------------- Viewport ----------------

    pub fn resize(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        self.ambient.rescale(self.viewport, viewport);
        self.emblem.clamp_into(viewport);
        self.viewport = viewport;
    }

    // ---------------- Frame ----------------

    pub fn tick(&mut self, dt: Duration) {
        self.frames += 1;
        self.ambient.step(dt, self.viewport, &mut self.rng);

        if self.emblem.is_dragging() && self.in_area {
            let target = self.emblem.centered_on(self.pointer);
            let delta = self.emblem.ease_toward(target, self.config.drag.smoothing);
            let threshold = self.config.drag.move_threshold_px;
            let moving = delta.x.abs() > threshold || delta.y.abs() > threshold;
            if moving || self.rng.gen::<f32>() < self.config.drag.idle_emit_chance {
                self.emit_trail();
            }
        }

        match self.emblem.step_fall() {
            FallStep::Moving { burst: true } => {
                let center = self.emblem.center();
                let n = self.particles.emit(
                    center,
                    &self.config.burst,
                    &self.config.palette,
                    &mut self.rng,
                );
                log::debug!("[emblem] rebound burst of {}", n);
            }
            FallStep::Landed => {
                self.tooltip_visible = true;
            }
            FallStep::Moving { burst: false } | FallStep::NotFalling => {}
        }

        self.particles.step();
    }

    /// Emit one trail batch from the emblem centre, picking the idle flavour
    /// when the pointer has barely moved since the previous batch.
    pub fn emit_trail(&mut self) -> Emission {
        let moved = self.pointer - self.last_emit_pointer;
        let still = self.config.drag.idle_pointer_px;
        let kind = if moved.x.abs() < still && moved.y.abs() < still {
            Emission::Idle
        } else {
            Emission::Trail
        };
        let cfg: &EmissionConfig = match kind {
            Emission::Idle => &self.config.idle,
            Emission::Trail => &self.config.trail,
        };
        self.particles.emit(
            self.emblem.center(),
            cfg,
            &self.config.palette,
            &mut self.rng,
        );
        self.last_emit_pointer = self.pointer;
        kind
    }

    fn start_fall(&mut self, layout: &Layout) {
        let started = self.emblem.start_fall(
            self.pointer,
            layout,
            self.config.drag.bounds,
            &self.config.bounce,
        );
        if started {
            self.tooltip_visible = false;
        }
    }
}
