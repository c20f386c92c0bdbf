//! Background-only layers: drifting glow blobs, twinkling stars and the
//! occasional shooting star. Nothing here reacts to the emblem.

use crate::config::{AmbientConfig, GlowColor};
use crate::constants::*;
use crate::geometry::Viewport;
use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct GlowBlob {
    pub pos: Vec2,
    pub radius: f32,
    pub color: GlowColor,
    pub alpha: f32,
    pub speed: f32,
}

impl GlowBlob {
    fn random<R: Rng + ?Sized>(viewport: Viewport, palette: &[GlowColor], rng: &mut R) -> Self {
        Self {
            pos: Vec2::new(
                rng.gen::<f32>() * viewport.width,
                rng.gen::<f32>() * viewport.height,
            ),
            radius: GLOW_RADIUS_MIN + rng.gen::<f32>() * GLOW_RADIUS_SPAN,
            color: palette.choose(rng).copied().unwrap_or(GlowColor::Violet),
            alpha: GLOW_ALPHA_MIN + rng.gen::<f32>() * GLOW_ALPHA_SPAN,
            speed: GLOW_SPEED_MIN + rng.gen::<f32>() * GLOW_SPEED_SPAN,
        }
    }

    /// Sink by `speed`; once fully below the viewport, re-enter from the top
    /// at a fresh horizontal position.
    pub fn step<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) {
        self.pos.y += self.speed;
        if self.pos.y - self.radius > viewport.height {
            self.pos.y = -self.radius;
            self.pos.x = rng.gen::<f32>() * viewport.width;
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub radius: f32,
    pub alpha: f32,
    pub twinkle: f32,
}

impl Star {
    /// Twinkle by `twinkle`, reversing at the bounds. The alpha is clamped onto
    /// the bound it crossed so it never leaves `[min, max]`.
    pub fn step(&mut self, min: f32, max: f32) {
        self.alpha += self.twinkle;
        if self.alpha <= min {
            self.alpha = min;
            self.twinkle = self.twinkle.abs();
        } else if self.alpha >= max {
            self.alpha = max;
            self.twinkle = -self.twinkle.abs();
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShootingStar {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub alpha: f32,
    pub decay: f32,
}

impl ShootingStar {
    /// Enters from the top edge heading down at 45°..135°.
    pub fn random<R: Rng + ?Sized>(viewport: Viewport, decay: f32, rng: &mut R) -> Self {
        let angle = FRAC_PI_4 + rng.gen::<f32>() * FRAC_PI_2;
        let speed = SHOOTING_STAR_SPEED_MIN + rng.gen::<f32>() * SHOOTING_STAR_SPEED_SPAN;
        Self {
            pos: Vec2::new(rng.gen::<f32>() * viewport.width, 0.0),
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            radius: SHOOTING_STAR_RADIUS_MIN + rng.gen::<f32>() * SHOOTING_STAR_RADIUS_SPAN,
            alpha: 1.0,
            decay,
        }
    }

    /// Returns false once faded out.
    pub fn step(&mut self) -> bool {
        self.pos += self.vel;
        self.alpha -= self.decay;
        self.alpha > ALPHA_EPSILON
    }

    /// Far end of the fading tail.
    pub fn tail_end(&self) -> Vec2 {
        self.pos - self.vel * SHOOTING_STAR_TAIL
    }
}

#[derive(Clone, Debug)]
pub struct Ambient {
    cfg: AmbientConfig,
    glows: Vec<GlowBlob>,
    stars: Vec<Star>,
    shooting: Option<ShootingStar>,
    since_spawn: Duration,
}

impl Ambient {
    pub fn new<R: Rng + ?Sized>(
        cfg: &AmbientConfig,
        palette: &[GlowColor],
        viewport: Viewport,
        rng: &mut R,
    ) -> Self {
        let glows = (0..cfg.glow_count)
            .map(|_| GlowBlob::random(viewport, palette, rng))
            .collect();
        let stars = (0..cfg.star_count)
            .map(|_| Star {
                pos: Vec2::new(
                    rng.gen::<f32>() * viewport.width,
                    rng.gen::<f32>() * viewport.height,
                ),
                radius: STAR_RADIUS_MIN + rng.gen::<f32>() * STAR_RADIUS_SPAN,
                alpha: rng.gen_range(cfg.star_alpha_min..=cfg.star_alpha_max),
                twinkle: rng.gen_range(-cfg.star_twinkle_max..=cfg.star_twinkle_max),
            })
            .collect();
        Self {
            cfg: cfg.clone(),
            glows,
            stars,
            shooting: None,
            since_spawn: Duration::ZERO,
        }
    }

    pub fn glows(&self) -> &[GlowBlob] {
        &self.glows
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn shooting_star(&self) -> Option<&ShootingStar> {
        self.shooting.as_ref()
    }

    /// Replace any current shooting star with a fresh one.
    pub fn spawn_shooting_star<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) {
        self.shooting = Some(ShootingStar::random(
            viewport,
            self.cfg.shooting_star_decay,
            rng,
        ));
    }

    pub fn step<R: Rng + ?Sized>(&mut self, dt: Duration, viewport: Viewport, rng: &mut R) {
        for glow in &mut self.glows {
            glow.step(viewport, rng);
        }
        let (min, max) = (self.cfg.star_alpha_min, self.cfg.star_alpha_max);
        for star in &mut self.stars {
            star.step(min, max);
        }

        if let Some(interval) = self.cfg.shooting_star_interval {
            self.since_spawn += dt;
            if self.since_spawn >= interval {
                // One star at a time, so a long stall does not queue spawns.
                self.since_spawn = Duration::ZERO;
                self.spawn_shooting_star(viewport, rng);
                log::debug!("[sky] shooting star");
            }
        }
        if let Some(star) = self.shooting.as_mut() {
            if !star.step() {
                self.shooting = None;
            }
        }
    }

    /// Map positions from one viewport onto another. A no-op for equal sizes.
    pub fn rescale(&mut self, from: Viewport, to: Viewport) {
        if from == to {
            return;
        }
        let s = from.scale_to(to);
        for glow in &mut self.glows {
            glow.pos *= s;
        }
        for star in &mut self.stars {
            star.pos *= s;
        }
        if let Some(star) = self.shooting.as_mut() {
            star.pos *= s;
        }
    }
}
